//! Strongly-typed ID wrapper for ledger entries
//!
//! Entry ids are compact lowercase base-36 strings: the creation time in
//! milliseconds followed by a 5-character random suffix. They sort by
//! creation time and stay readable inside the stored JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;
const SUFFIX_SPACE: u128 = 36u128.pow(SUFFIX_LEN as u32);

/// Identifier for a ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh id from the current time and a random suffix
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u128;
        let entropy = Uuid::new_v4().as_u128() % SUFFIX_SPACE;
        Self(format!(
            "{}{}",
            to_base36(millis),
            to_base36_padded(entropy, SUFFIX_LEN)
        ))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

fn to_base36_padded(value: u128, width: usize) -> String {
    let raw = to_base36(value);
    if raw.len() >= width {
        raw
    } else {
        format!("{}{}", "0".repeat(width - raw.len()), raw)
    }
}
