//! Cross-module integration: each tool exercised end to end on realistic
//! inputs, the way the TUI panels drive them.

use toolbelt_core::calc::CalculatorState;
use toolbelt_core::color::{Hsl, Rgb};
use toolbelt_core::encode;
use toolbelt_core::json;
use toolbelt_core::stats::TextStats;
use toolbelt_core::text::{transform, CaseAction};
use toolbelt_core::units::{format_conversion, LengthUnit};

#[test]
fn text_panel_flow() {
    let input = "the quick brown fox\njumps over the lazy dog";

    assert_eq!(
        transform(input, CaseAction::Title),
        "The Quick Brown Fox\nJumps Over The Lazy Dog"
    );

    let stats = TextStats::of(input);
    assert_eq!(stats.words, 9);
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.chars, input.chars().count());
}

#[test]
fn json_panel_flow() {
    let raw = r#"{"users":[{"name":"ada","admin":true},{"name":"bob","admin":false}],"total":2}"#;

    let pretty = json::pretty(raw).unwrap();
    assert!(pretty.contains("  \"users\""));
    assert_eq!(json::minify(&pretty).unwrap(), raw);

    let report = json::analyze(raw).unwrap();
    assert_eq!(report.top_level, "object");
    assert_eq!(report.top_level_len, Some(2));
    assert_eq!(report.counts.objects, 3);
    assert_eq!(report.counts.strings, 2);
    assert_eq!(report.counts.bools, 2);
    assert_eq!(report.counts.numbers, 1);
    assert_eq!(report.counts.arrays, 1);
}

#[test]
fn encode_panel_flow() {
    let secret = "user=admin&pass=hunter2 日本";
    let b64 = encode::base64_encode(secret);
    let url = encode::url_encode(secret);

    assert_eq!(encode::base64_decode(&b64).unwrap(), secret);
    assert_eq!(encode::url_decode(&url).unwrap(), secret);
    // Percent-encoding leaves no raw spaces or ampersands behind.
    assert!(!url.contains(' ') && !url.contains('&'));
}

#[test]
fn color_panel_flow() {
    let rgb = Rgb::from_hex("#3498DB").unwrap();
    assert_eq!(rgb.to_string(), "rgb(52, 152, 219)");
    assert_eq!(rgb.to_hex(), "#3498DB");
    assert_eq!(Hsl::from(rgb).to_string(), "hsl(204, 70%, 53%)");
}

#[test]
fn calculator_panel_flow() {
    let mut calc = CalculatorState::new();
    for c in "(2+3)*4".chars() {
        calc.push(c);
    }
    assert_eq!(calc.evaluate().unwrap(), "20");

    // Chain an operator off the result, then start fresh with a digit.
    calc.push('/');
    calc.push('5');
    assert_eq!(calc.evaluate().unwrap(), "4");

    calc.push('9');
    assert_eq!(calc.expression(), "9");
}

#[test]
fn units_panel_flow() {
    assert_eq!(
        format_conversion(100.0, LengthUnit::Meter, LengthUnit::Foot),
        "100 m = 328.083990 ft"
    );
    assert_eq!(
        format_conversion(2.5, LengthUnit::Kilometer, LengthUnit::Meter),
        "2.5 km = 2500.000000 m"
    );
    assert_eq!(
        format_conversion(12.0, LengthUnit::Inch, LengthUnit::Foot),
        "12 in = 1.000000 ft"
    );
}
