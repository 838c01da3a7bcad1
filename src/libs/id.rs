//! Compact random identifier generation.
//!
//! Label records need stable identifiers but the application has no
//! database handing out keys, so ids are generated client-side: 21
//! characters drawn uniformly from a 62-character alphanumeric alphabet.
//! At that length collisions are not a practical concern for a personal
//! label collection.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 21;

/// Generates a new random identifier of the default length.
pub fn generate() -> String {
    generate_sized(ID_LENGTH)
}

/// Generates a new random identifier of `size` characters.
pub fn generate_sized(size: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char).collect()
}
