//! Property tests for the band calculator.

use proptest::prelude::*;

use compa::{
    BandCalculator, Computation, GradeOrder, InputFingerprint, IntervalKey, RateInputModel,
};

fn grade_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("G{}", i)).collect()
}

/// Fully-entered models: positive base, optional rates everywhere.
fn arb_model() -> impl Strategy<Value = RateInputModel> {
    (1usize..=5).prop_flat_map(|n| {
        let names = grade_names(n);
        (
            // keep LD comfortably above zero even after currency
            // rounding with both lower intervals at 100%
            1.0f64..1_000_000.0,
            proptest::collection::vec(proptest::option::of(0f64..=100.0), n),
            proptest::collection::vec(proptest::option::of(0f64..=100.0), 4),
        )
            .prop_map(move |(base, verticals, horizontals)| {
                let order = GradeOrder::new(names.clone()).expect("distinct names");
                let mut model = RateInputModel::new(order);
                model.set_base_value(Some(base)).expect("positive base");
                for (name, rate) in names.iter().zip(verticals) {
                    model.set_vertical_rate(name, rate).expect("known grade");
                }
                for (key, rate) in IntervalKey::ALL.into_iter().zip(horizontals) {
                    model
                        .set_horizontal_interval(key, rate)
                        .expect("rate in range");
                }
                model
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every computed band is monotone (LD ≤ LQ ≤ M ≤ UQ ≤ UD)
    /// and strictly positive.
    #[test]
    fn property_bands_are_monotone_and_positive(model in arb_model()) {
        match BandCalculator::compute(&model) {
            Computation::Ready(table) => {
                prop_assert_eq!(table.len(), model.grade_order().len());
                for (grade, band) in table.iter() {
                    prop_assert!(band.is_monotone(), "non-monotone band for {}: {:?}", grade, band);
                    prop_assert!(band.ld() > 0.0, "non-positive LD for {}: {:?}", grade, band);
                }
            }
            Computation::NotComputable(_) => {
                // only possible when no non-zero rate was generated
                prop_assert!(!model.has_any_nonzero_rate());
            }
        }
    }

    /// PROPERTY: computing twice on an unchanged model yields identical
    /// output (no hidden mutable state).
    #[test]
    fn property_compute_is_idempotent(model in arb_model()) {
        let first = BandCalculator::compute(&model);
        let second = BandCalculator::compute(&model);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: with all vertical rates at zero, every grade's median
    /// equals the base value.
    #[test]
    fn property_zero_verticals_keep_medians_at_base(
        n in 1usize..=5,
        base in 0.01f64..1_000_000.0,
        spread in 0.01f64..=100.0,
    ) {
        let names = grade_names(n);
        let order = GradeOrder::new(names.clone()).expect("distinct names");
        let mut model = RateInputModel::new(order);
        model.set_base_value(Some(base)).expect("positive base");
        for name in &names {
            model.set_vertical_rate(name, Some(0.0)).expect("known grade");
        }
        model
            .set_horizontal_interval(IntervalKey::MToUq, Some(spread))
            .expect("rate in range");

        match BandCalculator::compute(&model) {
            Computation::Ready(table) => {
                let expected = compa::domain::entities::round_currency(base);
                for (grade, band) in table.iter() {
                    prop_assert_eq!(band.m(), expected, "median moved for {}", grade);
                }
            }
            other => prop_assert!(false, "expected bands, got {:?}", other),
        }
    }

    /// PROPERTY: equal models fingerprint equal; a base-value change
    /// fingerprints different (the scheduler's dedupe foundation).
    #[test]
    fn property_fingerprint_tracks_model_identity(model in arb_model()) {
        let same = InputFingerprint::of(&model).unwrap();
        let again = InputFingerprint::of(&model.clone()).unwrap();
        prop_assert!(same.matches(&again));

        let mut changed = model.clone();
        let bumped = model.base_value().unwrap_or(1.0) + 1.0;
        changed.set_base_value(Some(bumped)).expect("positive base");
        let different = InputFingerprint::of(&changed).unwrap();
        prop_assert!(!same.matches(&different));
    }
}
