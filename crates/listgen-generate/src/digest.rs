use sha2::{Digest, Sha256};

/// SHA-256 of `input`, lowercase hex encoded.
pub fn digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
