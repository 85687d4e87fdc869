//! Property-based tests for evaluation over arbitrary domains and parameters.
//!
//! For any family, any sampleable domain and any finite parameter values,
//! evaluation must succeed, emit only finite pairs, and repeat exactly.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use graphlab::{Domain, Kind, Params, registry};
use proptest::prelude::*;

/// A domain that passes validation: finite, non-degenerate, small enough to be quick.
fn domain() -> impl Strategy<Value = (f64, f64, usize)> {
    (-50.0f64..50.0, 0.01f64..60.0, 1usize..400).prop_map(|(start, width, n)| (start, start + width, n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Any finite parameter values give paired, finite output.
    #[test]
    fn output_is_always_finite(
        id in 1u32..=31,
        (start, stop, n) in domain(),
        values in prop::collection::vec(-20.0f64..20.0, 5),
    ) {
        let fam = registry().lookup(id).expect("built-in id");
        let params: Params = fam
            .parameter_names()
            .iter()
            .zip(&values)
            .map(|(name, v)| (*name, *v))
            .collect();
        let d = Domain::new(fam.kind, start, stop, n);
        let s = fam.evaluate(&d, &params).expect("valid inputs evaluate");
        prop_assert_eq!(s.xs.len(), s.ys.len());
        prop_assert!(s.len() <= n.max(12 * 2));
        prop_assert!(s.points().all(|(x, y)| x.is_finite() && y.is_finite()));
    }

    /// Repeated evaluation is bit-for-bit identical.
    #[test]
    fn evaluation_repeats_exactly(id in 1u32..=31, (start, stop, n) in domain()) {
        let d = Domain::new(Kind::Cartesian, start, stop, n);
        let a = registry().evaluate(id, Some(d), None).expect("first");
        let b = registry().evaluate(id, Some(d), None).expect("second");
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&a.xs), bits(&b.xs));
        prop_assert_eq!(bits(&a.ys), bits(&b.ys));
    }

    /// Template batches are prefixes of longer batches, except where a
    /// generator spreads its presets across the batch size.
    #[test]
    fn templates_are_pure_functions_of_count(id in 2u32..=31, count in 1usize..40) {
        let short = registry().templates_for(id, count).expect("short");
        let long = registry().templates_for(id, count + 5).expect("long");
        prop_assert_eq!(&short[..], &long[..count]);
    }

    /// Cartesian x values never leave the requested interval.
    #[test]
    fn cartesian_xs_stay_in_domain(id in 1u32..=16, (start, stop, n) in domain()) {
        let d = Domain::new(Kind::Cartesian, start, stop, n);
        let s = registry().evaluate(id, Some(d), None).expect("eval");
        prop_assert!(s.xs.iter().all(|x| *x >= start && *x <= stop));
        prop_assert!(s.xs.windows(2).all(|w| w[0] < w[1]));
    }
}
