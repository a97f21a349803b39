use rand::{rngs::StdRng, Rng, SeedableRng};
use sha256::digest as sha256_digest;
use suchoi::bits::{bit_diff, bit_distance};
use suchoi::{octets_to_int, suchoi};

// First four digest bytes of a wide hash, read as a little-endian word
fn truncate32(bytes: &[u8]) -> u32 {
    octets_to_int([bytes[0], bytes[1], bytes[2], bytes[3]])
}

// --- Avalanche Effect Comparison Test ---
#[test]
fn test_avalanche_comparison() {
    // Use a reasonably sized input, e.g., 64 bytes
    let input_data = [0x5Au8; 64]; // Arbitrary pattern
    let num_bytes_to_flip = 16; // Limit flips to first 16 bytes (128 bits) for speed
    let num_bits_to_flip = num_bytes_to_flip * 8;

    // Calculate baseline hashes
    let baseline_suchoi = suchoi(&input_data);
    let baseline_sha256 = hex::decode(sha256_digest(input_data.as_slice()))
        .expect("SHA256 hex decode failed");
    let baseline_sha256 = truncate32(&baseline_sha256);
    let baseline_blake3 = truncate32(blake3::hash(&input_data).as_bytes());

    // Accumulators for total Hamming distance
    let mut total_dist_suchoi: u64 = 0;
    let mut total_dist_sha256: u64 = 0;
    let mut total_dist_blake3: u64 = 0;

    for byte_index in 0..num_bytes_to_flip {
        for bit_index in 0..8 {
            let mut modified_input = input_data;
            modified_input[byte_index] ^= 1 << bit_index; // Flip the bit

            let modified_suchoi = suchoi(&modified_input);
            let modified_sha256 = hex::decode(sha256_digest(modified_input.as_slice()))
                .expect("SHA256 hex decode failed");
            let modified_sha256 = truncate32(&modified_sha256);
            let modified_blake3 = truncate32(blake3::hash(&modified_input).as_bytes());

            total_dist_suchoi += bit_distance(baseline_suchoi, modified_suchoi) as u64;
            total_dist_sha256 += bit_distance(baseline_sha256, modified_sha256) as u64;
            total_dist_blake3 += bit_distance(baseline_blake3, modified_blake3) as u64;
        }
    }

    let avg_dist_suchoi = total_dist_suchoi as f64 / num_bits_to_flip as f64;
    let avg_dist_sha256 = total_dist_sha256 as f64 / num_bits_to_flip as f64;
    let avg_dist_blake3 = total_dist_blake3 as f64 / num_bits_to_flip as f64;

    println!(
        "\n--- Avalanche Test Results (Average Hamming Distance over {} bit flips) ---",
        num_bits_to_flip
    );
    println!("SUCHOI:         {:.2}", avg_dist_suchoi);
    println!("SHA-256 (32b):  {:.2}", avg_dist_sha256);
    println!("BLAKE3 (32b):   {:.2}", avg_dist_blake3);
    println!("Ideal (32-bit output): 16.00");

    assert!(
        avg_dist_suchoi > 13.0 && avg_dist_suchoi < 19.0,
        "SUCHOI average Hamming distance ({:.2}) is outside the acceptable range (13.0 - 19.0)",
        avg_dist_suchoi
    );
    assert!(
        avg_dist_suchoi > avg_dist_sha256 - 2.0,
        "SUCHOI avg dist significantly lower than truncated SHA256"
    );
    assert!(
        avg_dist_suchoi > avg_dist_blake3 - 2.0,
        "SUCHOI avg dist significantly lower than truncated BLAKE3"
    );
}

// --- Avalanche over random inputs ---
#[test]
fn test_avalanche_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5C_4011);
    let trials = 1000;
    let mut total_distance = 0u64;
    let mut total_similarity = 0u64;

    for _ in 0..trials {
        let len = rng.gen_range(1..=64);
        let mut input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let before = suchoi(&input);
        let bit = rng.gen_range(0..len * 8);
        input[bit / 8] ^= 1 << (bit % 8);
        let after = suchoi(&input);

        total_distance += bit_distance(before, after) as u64;
        total_similarity += bit_diff(before, after) as u64;
    }

    let mean = total_distance as f64 / trials as f64;
    println!("mean flipped bits over {trials} random inputs: {mean:.2}");
    assert_eq!(total_distance + total_similarity, 32 * trials as u64);
    assert!(
        (14.5..=17.5).contains(&mean),
        "mean bit distance {mean:.2} too far from 16"
    );
}

#[test]
fn test_literal_fixtures_differ_substantially() {
    let t1 = suchoi(b"hallo welt");
    let t2 = suchoi(b"hbllo welt");
    println!("t1:{:x}", t1);
    println!("t2:{:x}", t2);
    assert_eq!(t1, 0x85a1_2475);
    assert_eq!(t2, 0x50b8_fe68);
    assert!(bit_distance(t1, t2) >= 8);

    let l1: &[u8] = b"Historically, poor choices had led to ineffective implementations of LCGs. A particularly illustrative example of this is RANDU, which was widely used in the early 1970s and led to many results which are currently being questioned because of the use of this poor LCG.[4]";
    let mut l2 = l1.to_vec();
    l2[11] = b'z';
    assert_eq!(suchoi(l1), 0x620a_2ab3);
    assert_eq!(suchoi(&l2), 0x5358_9c48);
}

#[test]
fn test_repeated_octets_do_not_cancel() {
    let mut input = vec![b'a'; 300];
    let hv1 = suchoi(&input);
    input[0] ^= 1; // change one bit
    let hv2 = suchoi(&input);
    input[1] ^= 1; // change one bit
    let hv3 = suchoi(&input);

    assert_eq!([hv1, hv2, hv3], [0x5ffa_d075, 0x673e_6736, 0xaa60_4383]);
    assert_ne!(hv1, hv2);
    assert_ne!(hv2, hv3);
    assert_ne!(hv1, hv3);
}
