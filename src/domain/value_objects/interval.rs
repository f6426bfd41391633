//! Horizontal interval value objects
//!
//! The four percentage spreads between adjacent band points within one
//! grade. A single interval set is shared by every grade; there is no
//! per-grade horizontal configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed horizontal spreads, named by the pair of band points
/// they connect, from the bottom of the band upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalKey {
    /// Lower decile → lower quartile
    #[serde(rename = "LD_to_LQ")]
    LdToLq,
    /// Lower quartile → median
    #[serde(rename = "LQ_to_M")]
    LqToM,
    /// Median → upper quartile
    #[serde(rename = "M_to_UQ")]
    MToUq,
    /// Upper quartile → upper decile
    #[serde(rename = "UQ_to_UD")]
    UqToUd,
}

impl IntervalKey {
    /// All keys, bottom of the band first.
    pub const ALL: [IntervalKey; 4] = [
        IntervalKey::LdToLq,
        IntervalKey::LqToM,
        IntervalKey::MToUq,
        IntervalKey::UqToUd,
    ];

    /// The wire/config name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalKey::LdToLq => "LD_to_LQ",
            IntervalKey::LqToM => "LQ_to_M",
            IntervalKey::MToUq => "M_to_UQ",
            IntervalKey::UqToUd => "UQ_to_UD",
        }
    }

    /// Parse a key name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        IntervalKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for IntervalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shared horizontal interval set: one optional percentage per key.
///
/// An unset interval means "not entered yet" and counts as 0% when
/// bands are computed. Range validation lives on the rate input model;
/// this type is plain storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalSet {
    #[serde(rename = "LD_to_LQ", skip_serializing_if = "Option::is_none", default)]
    ld_to_lq: Option<f64>,
    #[serde(rename = "LQ_to_M", skip_serializing_if = "Option::is_none", default)]
    lq_to_m: Option<f64>,
    #[serde(rename = "M_to_UQ", skip_serializing_if = "Option::is_none", default)]
    m_to_uq: Option<f64>,
    #[serde(rename = "UQ_to_UD", skip_serializing_if = "Option::is_none", default)]
    uq_to_ud: Option<f64>,
}

impl IntervalSet {
    /// Create an interval set with nothing entered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entered rate for `key`, if any.
    pub fn get(&self, key: IntervalKey) -> Option<f64> {
        match key {
            IntervalKey::LdToLq => self.ld_to_lq,
            IntervalKey::LqToM => self.lq_to_m,
            IntervalKey::MToUq => self.m_to_uq,
            IntervalKey::UqToUd => self.uq_to_ud,
        }
    }

    /// Store a rate for `key` (`None` clears it).
    pub fn set(&mut self, key: IntervalKey, rate: Option<f64>) {
        let slot = match key {
            IntervalKey::LdToLq => &mut self.ld_to_lq,
            IntervalKey::LqToM => &mut self.lq_to_m,
            IntervalKey::MToUq => &mut self.m_to_uq,
            IntervalKey::UqToUd => &mut self.uq_to_ud,
        };
        *slot = rate;
    }

    /// The rate used for calculation: unset means 0%.
    pub fn effective(&self, key: IntervalKey) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Whether any interval carries a non-zero rate.
    pub fn has_any_nonzero(&self) -> bool {
        IntervalKey::ALL.into_iter().any(|k| self.effective(k) != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wire_names() {
        assert_eq!(IntervalKey::parse("LD_to_LQ"), Some(IntervalKey::LdToLq));
        assert_eq!(IntervalKey::parse("UQ_to_UD"), Some(IntervalKey::UqToUd));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(IntervalKey::parse("lq_to_m"), Some(IntervalKey::LqToM));
        assert_eq!(IntervalKey::parse("M_TO_UQ"), Some(IntervalKey::MToUq));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(IntervalKey::parse("M_to_LD"), None);
        assert_eq!(IntervalKey::parse(""), None);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(IntervalKey::LdToLq.to_string(), "LD_to_LQ");
    }

    #[test]
    fn unset_interval_is_zero_for_calculation() {
        let set = IntervalSet::new();
        assert_eq!(set.get(IntervalKey::MToUq), None);
        assert_eq!(set.effective(IntervalKey::MToUq), 0.0);
    }

    #[test]
    fn set_and_clear_roundtrip() {
        let mut set = IntervalSet::new();
        set.set(IntervalKey::LqToM, Some(12.5));
        assert_eq!(set.get(IntervalKey::LqToM), Some(12.5));
        set.set(IntervalKey::LqToM, None);
        assert_eq!(set.get(IntervalKey::LqToM), None);
    }

    #[test]
    fn has_any_nonzero_ignores_explicit_zeros() {
        let mut set = IntervalSet::new();
        set.set(IntervalKey::LdToLq, Some(0.0));
        assert!(!set.has_any_nonzero());
        set.set(IntervalKey::UqToUd, Some(5.0));
        assert!(set.has_any_nonzero());
    }

    #[test]
    fn serde_uses_wire_names_and_skips_unset() {
        let mut set = IntervalSet::new();
        set.set(IntervalKey::MToUq, Some(10.0));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"M_to_UQ":10.0}"#);
    }
}
