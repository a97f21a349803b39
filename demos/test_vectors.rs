use serde::Serialize;
use suchoi::{int_to_octets, suchoi};

const TEST_VECTORS_INPUT: [&str; 8] = [
    "",
    "a",
    "abc",
    "hallo welt",
    "hbllo welt",
    "0123456789abcdef",
    "0123456789abcdefg",
    "The quick brown fox jumps over the lazy dog",
];
const TEST_VECTOR_OUTPUT_FILE: &str = "test_vectors/suchoi_test_vectors.json";

#[derive(Serialize)]
struct TestVector {
    input: String,
    digest: String,
    octets: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating test vectors...");
    let test_vectors = TEST_VECTORS_INPUT
        .iter()
        .map(|input| {
            let digest = suchoi(input.as_bytes());
            TestVector {
                input: hex::encode(input.as_bytes()),
                digest: format!("{:08x}", digest),
                octets: hex::encode(int_to_octets(digest)),
            }
        })
        .collect::<Vec<_>>();
    let test_vectors_json = serde_json::to_string_pretty(&test_vectors)?;
    println!("{}", test_vectors_json);
    std::fs::create_dir_all("test_vectors")?;
    std::fs::write(TEST_VECTOR_OUTPUT_FILE, test_vectors_json + "\n")?;
    println!("Test vectors written to {}", TEST_VECTOR_OUTPUT_FILE);
    Ok(())
}
