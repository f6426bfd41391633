//! Input fingerprint value object
//!
//! A SHA-256 digest over the canonical JSON serialization of a rate
//! input model. The recalculation scheduler compares fingerprints to
//! skip recomputing an input that has not actually changed (e.g. a
//! value re-entered unchanged in the UI).

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::CompaResult;

/// Fingerprint of a rate input model, `sha256:`-prefixed hex.
///
/// The canonical form is the serde JSON serialization: struct fields
/// serialize in declaration order and grade maps are BTree-ordered, so
/// equal inputs always produce equal fingerprints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputFingerprint(String);

impl InputFingerprint {
    /// Prefix for SHA-256 fingerprints
    pub const PREFIX: &'static str = "sha256:";

    /// Compute the fingerprint of any serializable input state.
    pub fn of<T: Serialize>(value: &T) -> CompaResult<Self> {
        let canonical = serde_json::to_vec(value)?;
        let digest = Sha256::digest(&canonical);
        Ok(Self(format!("{}{:x}", Self::PREFIX, digest)))
    }

    /// The full fingerprint string with prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this fingerprint matches another.
    pub fn matches(&self, other: &InputFingerprint) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for InputFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for InputFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
