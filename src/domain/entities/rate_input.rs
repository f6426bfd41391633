//! Rate input model entity
//!
//! The mutable working state a scenario is built from: one base value,
//! one vertical step-up rate per grade, and the single horizontal
//! interval set shared by every grade. Setters validate ranges and
//! reject bad values without touching the stored state, so a failed
//! edit never corrupts the working model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GradeOrder, IntervalKey, IntervalSet};
use crate::error::{CompaError, CompaResult};

/// Inclusive percentage range accepted for vertical and horizontal rates.
pub const RATE_RANGE: (f64, f64) = (0.0, 100.0);

/// Working input state for one scenario under construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInputModel {
    /// Grade names, highest first; the last one is the base grade
    grade_order: GradeOrder,
    /// Median compensation anchoring the base grade
    #[serde(skip_serializing_if = "Option::is_none", default)]
    base_value: Option<f64>,
    /// Per-grade step-up from the grade below; absent means not entered
    #[serde(default)]
    vertical_rates: BTreeMap<String, f64>,
    /// Spread percentages shared by all grades
    #[serde(default)]
    horizontal_intervals: IntervalSet,
}

impl RateInputModel {
    /// Create an empty working model over the given grade order.
    pub fn new(grade_order: GradeOrder) -> Self {
        Self {
            grade_order,
            base_value: None,
            vertical_rates: BTreeMap::new(),
            horizontal_intervals: IntervalSet::new(),
        }
    }

    /// The grade order this model is defined over.
    pub fn grade_order(&self) -> &GradeOrder {
        &self.grade_order
    }

    /// The base grade's anchoring median, if entered.
    pub fn base_value(&self) -> Option<f64> {
        self.base_value
    }

    /// The vertical step-up rate entered for `grade`, if any.
    pub fn vertical_rate(&self, grade: &str) -> Option<f64> {
        self.vertical_rates.get(grade).copied()
    }

    /// The shared horizontal interval set.
    pub fn intervals(&self) -> &IntervalSet {
        &self.horizontal_intervals
    }

    /// Set or clear the base value.
    ///
    /// A present value must be finite and strictly positive.
    pub fn set_base_value(&mut self, value: Option<f64>) -> CompaResult<()> {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(CompaError::validation(format!(
                    "base value must be greater than 0, got {}",
                    v
                )));
            }
        }
        self.base_value = value;
        Ok(())
    }

    /// Set or clear the vertical rate for `grade`.
    ///
    /// The grade must exist in the order; a present rate must lie in
    /// `[0, 100]`.
    pub fn set_vertical_rate(&mut self, grade: &str, rate: Option<f64>) -> CompaResult<()> {
        if !self.grade_order.contains(grade) {
            return Err(CompaError::GradeNotFound {
                grade: grade.to_string(),
            });
        }
        if let Some(r) = rate {
            check_rate_range("vertical rate", r)?;
        }
        match rate {
            Some(r) => {
                self.vertical_rates.insert(grade.to_string(), r);
            }
            None => {
                self.vertical_rates.remove(grade);
            }
        }
        Ok(())
    }

    /// Set or clear one of the four horizontal intervals.
    ///
    /// A present rate must lie in `[0, 100]`; an empty rate counts as
    /// 0% at calculation time.
    pub fn set_horizontal_interval(
        &mut self,
        key: IntervalKey,
        rate: Option<f64>,
    ) -> CompaResult<()> {
        if let Some(r) = rate {
            check_rate_range("horizontal interval", r)?;
        }
        self.horizontal_intervals.set(key, rate);
        Ok(())
    }

    /// Replace the whole model atomically from a stored snapshot.
    ///
    /// Used when applying a scenario (the working model is reset to
    /// mirror the new current one) and when initializing from the
    /// current scenario on load.
    pub fn reset(&mut self, snapshot: &RateInputModel) {
        *self = snapshot.clone();
    }

    /// Whether any rate, vertical or horizontal, is entered non-zero.
    ///
    /// With no non-zero rate anywhere, computing would yield a table of
    /// identical all-equal bands that looks valid but carries no
    /// information; the calculator treats that as not computable.
    pub fn has_any_nonzero_rate(&self) -> bool {
        self.vertical_rates.values().any(|r| *r != 0.0)
            || self.horizontal_intervals.has_any_nonzero()
    }
}

fn check_rate_range(label: &str, rate: f64) -> CompaResult<()> {
    let (lo, hi) = RATE_RANGE;
    if !rate.is_finite() || rate < lo || rate > hi {
        return Err(CompaError::validation(format!(
            "{} must be between {} and {}, got {}",
            label, lo, hi, rate
        )));
    }
    Ok(())
}
