//! Daily puzzle seeds.
//!
//! `daily_seed` is 64-bit FNV-1a over the UTF-8 bytes of the ISO date
//! (`YYYY-MM-DD`), so any client can rebuild the same seed from the date
//! alone.

use chrono::NaiveDate;
use tracing::{debug, instrument};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Malformed date string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid ISO date {:?}: expected YYYY-MM-DD", input)]
pub struct SeedError {
    /// The rejected input.
    pub input: String,
}

/// 64-bit FNV-1a hash.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Seed for the puzzle of the given calendar day.
#[instrument]
pub fn daily_seed(date: NaiveDate) -> u64 {
    let iso = date.format("%Y-%m-%d").to_string();
    let seed = fnv1a_64(iso.as_bytes());
    debug!(%iso, seed, "Derived daily seed");
    seed
}

/// Seed for an ISO `YYYY-MM-DD` date string.
#[instrument]
pub fn daily_seed_from_iso(iso: &str) -> Result<u64, SeedError> {
    let trimmed = iso.trim();
    // chrono accepts unpadded fields; require the canonical 10-byte form
    if trimmed.len() != 10 {
        return Err(SeedError {
            input: iso.to_string(),
        });
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| SeedError {
        input: iso.to_string(),
    })?;
    Ok(daily_seed(date))
}
