//! Band calculation service
//!
//! Pure function from a rate input model to the per-grade band table.
//! No side effects, no I/O: the same model always yields the same
//! table, which is what makes debounced recomputation and pending-work
//! cancellation safe.

use crate::domain::entities::{Band, BandTable, RateInputModel};
use crate::domain::value_objects::IntervalKey;

/// Outcome of a band computation.
///
/// A model that is not yet computable produces an explicit
/// `NotComputable` outcome instead of a silently-zero table.
#[derive(Debug, Clone, PartialEq)]
pub enum Computation {
    /// Bands for every grade, rounded to currency precision
    Ready(BandTable),
    /// Inputs are insufficient; nothing was computed
    NotComputable(NotComputable),
}

impl Computation {
    /// The computed table, if ready.
    pub fn bands(&self) -> Option<&BandTable> {
        match self {
            Computation::Ready(table) => Some(table),
            Computation::NotComputable(_) => None,
        }
    }

    /// Whether bands were produced.
    pub fn is_ready(&self) -> bool {
        matches!(self, Computation::Ready(_))
    }
}

/// Why a model could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotComputable {
    /// No base value entered yet
    MissingBaseValue,
    /// A snapshot restored from storage carried a non-positive base
    /// value (unreachable through the validated setters)
    NonPositiveBaseValue,
    /// Neither a vertical nor a horizontal rate is entered anywhere
    NoRatesSet,
}

impl std::fmt::Display for NotComputable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotComputable::MissingBaseValue => write!(f, "base value is not set"),
            NotComputable::NonPositiveBaseValue => {
                write!(f, "base value must be greater than 0")
            }
            NotComputable::NoRatesSet => {
                write!(f, "no vertical or horizontal rate is set")
            }
        }
    }
}

/// Pure calculator: rate input model → per-grade band table.
pub struct BandCalculator;

impl BandCalculator {
    /// Compute the band table for `model`.
    ///
    /// The vertical chain walks the grade order from the base grade
    /// upward; an unset vertical rate carries the median forward
    /// unchanged so a partially-entered scenario still previews.
    /// Horizontal points derive from each grade's own median using the
    /// shared interval set. Rounding happens once on the final table,
    /// never inside the chain.
    pub fn compute(model: &RateInputModel) -> Computation {
        let base = match model.base_value() {
            Some(v) => v,
            None => return Computation::NotComputable(NotComputable::MissingBaseValue),
        };
        if !(base > 0.0) {
            return Computation::NotComputable(NotComputable::NonPositiveBaseValue);
        }
        if !model.has_any_nonzero_rate() {
            return Computation::NotComputable(NotComputable::NoRatesSet);
        }

        let intervals = model.intervals();
        let lq_step = 1.0 + intervals.effective(IntervalKey::LqToM) / 100.0;
        let ld_step = 1.0 + intervals.effective(IntervalKey::LdToLq) / 100.0;
        let uq_step = 1.0 + intervals.effective(IntervalKey::MToUq) / 100.0;
        let ud_step = 1.0 + intervals.effective(IntervalKey::UqToUd) / 100.0;

        let mut table = BandTable::new();
        let mut median = base;
        for (position, grade) in model.grade_order().walk_up().enumerate() {
            if position > 0 {
                let step = model.vertical_rate(grade).unwrap_or(0.0);
                median *= 1.0 + step / 100.0;
            }

            let uq = median * uq_step;
            let ud = uq * ud_step;
            let lq = median / lq_step;
            let ld = lq / ld_step;
            table.insert(grade, Band::new(ld, lq, median, uq, ud));
        }

        Computation::Ready(table.rounded())
    }
}
