//! Salary band entities
//!
//! A `Band` is the five-point range for one grade; a `BandTable` maps
//! every grade to its band. Values stay unrounded while the vertical
//! chain is computed and are rounded to currency precision once, at the
//! output boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Decimal places used for displayed currency values.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Five-point salary range for one grade.
///
/// Invariant: `LD ≤ LQ ≤ M ≤ UQ ≤ UD`. The calculator produces only
/// monotone bands; the invariant is asserted in tests rather than
/// re-checked on every construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower decile
    #[serde(rename = "LD")]
    ld: f64,
    /// Lower quartile
    #[serde(rename = "LQ")]
    lq: f64,
    /// Median
    #[serde(rename = "M")]
    m: f64,
    /// Upper quartile
    #[serde(rename = "UQ")]
    uq: f64,
    /// Upper decile
    #[serde(rename = "UD")]
    ud: f64,
}

impl Band {
    /// Create a band from its five points, bottom up.
    pub fn new(ld: f64, lq: f64, m: f64, uq: f64, ud: f64) -> Self {
        Self { ld, lq, m, uq, ud }
    }

    /// Lower decile
    pub fn ld(&self) -> f64 {
        self.ld
    }

    /// Lower quartile
    pub fn lq(&self) -> f64 {
        self.lq
    }

    /// Median
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Upper quartile
    pub fn uq(&self) -> f64 {
        self.uq
    }

    /// Upper decile
    pub fn ud(&self) -> f64 {
        self.ud
    }

    /// This band with every point rounded to currency precision.
    pub fn rounded(&self) -> Band {
        Band {
            ld: round_currency(self.ld),
            lq: round_currency(self.lq),
            m: round_currency(self.m),
            uq: round_currency(self.uq),
            ud: round_currency(self.ud),
        }
    }

    /// Whether the five points are monotonically non-decreasing.
    pub fn is_monotone(&self) -> bool {
        self.ld <= self.lq && self.lq <= self.m && self.m <= self.uq && self.uq <= self.ud
    }
}

/// Round to currency precision, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    let factor = 10f64.powi(CURRENCY_DECIMALS as i32);
    (value * factor).round() / factor
}

/// Computed bands for every grade, keyed by grade name.
///
/// BTree-keyed so serialization order is deterministic; display order
/// follows the grade order, not the map order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandTable(BTreeMap<String, Band>);

impl BandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the band for a grade.
    pub fn insert(&mut self, grade: impl Into<String>, band: Band) {
        self.0.insert(grade.into(), band);
    }

    /// The band for `grade`, if present.
    pub fn get(&self, grade: &str) -> Option<&Band> {
        self.0.get(grade)
    }

    /// Whether the table holds no bands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of grades with a band.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All `(grade, band)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Band)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// This table with every band rounded to currency precision.
    pub fn rounded(&self) -> BandTable {
        BandTable(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.rounded()))
                .collect(),
        )
    }
}
