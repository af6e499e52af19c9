// Rust guideline compliant 2026-10-16

//! Hash-based identifier generation for publications and datasets.
//!
//! Identifiers have the form `<prefix>-<10 hex chars>`, derived from a SHA-256
//! digest of the record's seed text, a timestamp, and a nonce. Callers bump the
//! nonce until the identifier is unused in their store.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix for publication identifiers.
pub const PUBLICATION_PREFIX: &str = "pub";

/// Prefix for dataset identifiers.
pub const DATASET_PREFIX: &str = "ds";

/// Number of hex characters kept from the digest.
const HASH_LEN: usize = 10;

/// Generates an identifier from seed text, a timestamp, and a nonce.
///
/// # Arguments
///
/// * `prefix` - Identifier prefix (e.g. `pub`)
/// * `seed` - Record text the hash is derived from
/// * `timestamp` - Creation time in microseconds
/// * `nonce` - Collision counter
///
/// # Returns
///
/// An identifier of the form `<prefix>-<10 hex chars>`.
pub fn generate_id(prefix: &str, seed: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}-{}", prefix, &hex[..HASH_LEN])
}

/// Generates an identifier not yet accepted by `is_taken`.
///
/// The nonce starts at zero and increments on every collision.
pub fn generate_unique_id<F>(prefix: &str, seed: &str, timestamp: i64, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(prefix, seed, timestamp, nonce);
        if !is_taken(&id) {
            return id;
        }
        nonce = nonce.saturating_add(1);
    }
}

/// Validates that an identifier is usable as a store key.
///
/// Store keys must be non-empty and contain no whitespace or control
/// characters. Citation graph identifiers are never passed through here.
///
/// # Errors
///
/// Returns `Error::InvalidId` if the identifier is empty or contains
/// whitespace or control characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidId("ID cannot be empty".to_string()));
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::InvalidId(format!(
            "ID must not contain whitespace: {:?}",
            id
        )));
    }

    Ok(())
}
