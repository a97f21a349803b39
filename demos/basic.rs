use suchoi::bits::bit_distance;
use suchoi::{int_to_octets, octets_to_int, suchoi};

fn main() {
    let octets = int_to_octets(0xABCD_0123);
    println!("Octets of 0xabcd0123: {}", hex::encode(octets));
    println!("Back again: {:#x}", octets_to_int(octets));

    let input = "hallo welt";
    let hash = suchoi(input.as_bytes());
    println!("Input: {}", input);
    println!("Input hex: {}", hex::encode(input.as_bytes()));
    println!("Hash: {:08x}", hash);

    let input2 = "hbllo welt";
    let hash2 = suchoi(input2.as_bytes());
    println!("Input 2: {}", input2);
    println!("Input 2 hex: {}", hex::encode(input2.as_bytes()));
    println!("Hash 2: {:08x}", hash2);
    println!("Differing bits: {}", bit_distance(hash, hash2));

    let mut long = vec![b'a'; 300];
    let hv1 = suchoi(&long);
    long[0] ^= 1;
    let hv2 = suchoi(&long);
    long[1] ^= 1;
    let hv3 = suchoi(&long);
    println!("300 x 'a', one bit flipped: diff {}", bit_distance(hv1, hv2));
    println!("300 x 'a', two bits flipped: diff {}", bit_distance(hv1, hv3));
    println!("between the flipped variants: diff {}", bit_distance(hv2, hv3));
}
