use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use suchoi::adler32::adler32;
use suchoi::distribution::{random_keys, BucketHistogram};
use suchoi::suchoi;

const NUM_TESTS: usize = 200_000;
const TABLE_SIZE: usize = NUM_TESTS * 2;
const MAX_KEY_LEN: usize = 300;
const SHOWN_LENGTHS: usize = 20;

fn run(name: &str, hash: fn(&[u8]) -> u32, keys: &[Vec<u8>]) {
    let start = Instant::now();
    let histogram = BucketHistogram::build(hash, keys, TABLE_SIZE);
    let elapsed = start.elapsed();

    println!("{}:", name);
    println!("histogramm of bin list lengths:");
    for len in 0..SHOWN_LENGTHS {
        println!("list length {}: {}", len, histogram.count(len));
    }
    println!(
        "collisions: {} (uniform: {:.0})",
        histogram.collisions(),
        histogram.expected_collisions()
    );
    println!("runtime: {} us", elapsed.as_micros());
}

fn main() {
    // random strings, random length
    let mut rng = StdRng::seed_from_u64(76273);
    let keys = random_keys(&mut rng, NUM_TESTS, MAX_KEY_LEN);

    run("suchoi", suchoi, &keys);
    run("adler32", adler32, &keys);
}
