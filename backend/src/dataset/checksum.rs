//! Checksum calculation for the launch data source file.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of the raw source file content.
///
/// Logged at startup and reported (prefixed) by the health endpoint, so
/// that a running server can be matched to the exact file it loaded.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
