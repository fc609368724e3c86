//! Property tests for tool invariants.
//!
//! Uses proptest to verify:
//! 1. Case transforms — upper∘lower idempotence, reverse is an involution
//! 2. Encodings — base64 and URL round-trips are lossless
//! 3. JSON — pretty/minify preserve structure
//! 4. Passwords — length and pool membership
//! 5. Units — conversions round-trip within floating tolerance
//! 6. Calculator — addition/multiplication of literals matches f64 math

use proptest::prelude::*;
use toolbelt_core::calc;
use toolbelt_core::encode;
use toolbelt_core::json;
use toolbelt_core::password::{self, PasswordSpec};
use toolbelt_core::stats::TextStats;
use toolbelt_core::text::{transform, CaseAction};
use toolbelt_core::units::{convert, LengthUnit};

fn arb_unit() -> impl Strategy<Value = LengthUnit> {
    prop::sample::select(LengthUnit::ALL.to_vec())
}

proptest! {
    /// upper(lower(x)) == upper(x) over printable ASCII, where case mapping
    /// is a bijection.
    #[test]
    fn upper_after_lower_is_upper(s in "[ -~]{0,64}") {
        let lowered = transform(&s, CaseAction::Lower);
        prop_assert_eq!(
            transform(&lowered, CaseAction::Upper),
            transform(&s, CaseAction::Upper)
        );
    }

    /// Reversing twice returns the original for any text.
    #[test]
    fn reverse_is_involution(s in ".*") {
        let twice = transform(&transform(&s, CaseAction::Reverse), CaseAction::Reverse);
        prop_assert_eq!(twice, s);
    }

    /// Word count never exceeds character count; lines are always >= 1.
    #[test]
    fn stats_are_internally_consistent(s in ".*") {
        let stats = TextStats::of(&s);
        prop_assert!(stats.words <= stats.chars.max(1));
        prop_assert!(stats.lines >= 1);
    }

    /// Base64 round-trips any text, including non-ASCII.
    #[test]
    fn base64_round_trip(s in ".*") {
        let decoded = encode::base64_decode(&encode::base64_encode(&s)).unwrap();
        prop_assert_eq!(decoded, s);
    }

    /// URL percent-encoding round-trips any text.
    #[test]
    fn url_round_trip(s in ".*") {
        let decoded = encode::url_decode(&encode::url_encode(&s)).unwrap();
        prop_assert_eq!(decoded, s);
    }

    /// parse(pretty(j)) == parse(j) and pretty output is itself valid JSON.
    #[test]
    fn json_pretty_preserves_structure(
        entries in prop::collection::vec(("[a-z]{1,8}", -1000i64..1000), 0..8)
    ) {
        let mut map = serde_json::Map::new();
        for (k, v) in entries {
            map.insert(k, serde_json::Value::from(v));
        }
        let doc = serde_json::Value::Object(map);
        let text = doc.to_string();

        let pretty = json::pretty(&text).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        prop_assert_eq!(&reparsed, &doc);

        let minified = json::minify(&pretty).unwrap();
        let reparsed_min: serde_json::Value = serde_json::from_str(&minified).unwrap();
        prop_assert_eq!(&reparsed_min, &doc);
    }

    /// Generated passwords have the requested length and stay in the pool.
    #[test]
    fn password_length_and_membership(
        length in 1usize..64,
        uppercase in any::<bool>(),
        lowercase in any::<bool>(),
        digits in any::<bool>(),
        seed in any::<u64>(),
    ) {
        // Keep at least one class on so generation is well-defined.
        let spec = PasswordSpec { length, uppercase, lowercase, digits, symbols: true };
        let mut rng = {
            use rand::SeedableRng;
            rand::rngs::StdRng::seed_from_u64(seed)
        };
        let generated = password::generate(&spec, &mut rng).unwrap();
        prop_assert_eq!(generated.chars().count(), length);
        let pool = spec.charset();
        prop_assert!(generated.chars().all(|c| pool.contains(c)));
    }

    /// convert(convert(x, a, b), b, a) ≈ x.
    #[test]
    fn unit_conversion_round_trips(
        x in -1.0e6f64..1.0e6,
        from in arb_unit(),
        to in arb_unit(),
    ) {
        let back = convert(convert(x, from, to), to, from);
        prop_assert!((back - x).abs() <= 1e-6 * x.abs().max(1.0));
    }

    /// The evaluator agrees with f64 arithmetic on simple literal forms.
    #[test]
    fn calc_matches_f64_math(a in -1000i32..1000, b in -1000i32..1000) {
        let sum = calc::eval(&format!("{a}+{b}")).unwrap();
        prop_assert_eq!(sum, f64::from(a) + f64::from(b));

        let product = calc::eval(&format!("{a}*{b}")).unwrap();
        prop_assert_eq!(product, f64::from(a) * f64::from(b));
    }
}
