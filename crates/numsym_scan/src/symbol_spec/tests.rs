use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

// Construction and validation

#[test]
fn constructors_set_position() {
    assert_eq!(
        SymbolSpec::leading("-").unwrap().position(),
        SymbolPosition::Before
    );
    assert_eq!(
        SymbolSpec::trailing("-").unwrap().position(),
        SymbolPosition::After
    );
    let paired = SymbolSpec::leading_and_trailing("(", ")").unwrap();
    assert_eq!(paired.position(), SymbolPosition::BeforeAndAfter);
    assert_eq!(paired.leading_symbols(), &['(']);
    assert_eq!(paired.trailing_symbols(), &[')']);
}

#[test]
fn constructors_reject_empty_or_zero_symbols() {
    assert!(SymbolSpec::leading("").unwrap_err().is_configuration());
    assert!(SymbolSpec::new_trailing(&['\0']).is_err());
    let err = SymbolSpec::leading_and_trailing("(", "").unwrap_err();
    assert!(err.to_string().contains("`trailing_symbols`"));
}

#[test]
fn before_with_trailing_symbols_is_invalid() {
    let spec = SymbolSpec::from_parts(SymbolPosition::Before, &['-'], &['-']);
    let err = spec.validate().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("`trailing_symbols`"));
}

#[test]
fn after_with_leading_symbols_is_invalid() {
    let spec = SymbolSpec::from_parts(SymbolPosition::After, &['+'], &['-']);
    assert!(spec.validate().unwrap_err().to_string().contains("`leading_symbols`"));
}

#[test]
fn position_none_is_invalid() {
    let spec = SymbolSpec::from_parts(SymbolPosition::None, &['-'], &[]);
    assert!(!spec.is_valid());
    assert!(spec.validate().unwrap_err().to_string().contains("`position`"));
}

#[test]
fn validate_leaves_spec_untouched() {
    let mut spec = SymbolSpec::leading("-").unwrap();
    spec.match_leading_at(&chars("-1"), 0);
    let before = spec.clone();
    spec.validate().unwrap();
    assert_eq!(spec, before);

    let broken = SymbolSpec::from_parts(SymbolPosition::BeforeAndAfter, &['('], &[]);
    let snapshot = broken.clone();
    assert!(broken.validate().is_err());
    assert_eq!(broken, snapshot);
}

// Leading matches

#[test]
fn leading_minus_matches_at_start() {
    let mut spec = SymbolSpec::leading("-").unwrap();
    let hit = spec.match_leading_at(&chars("-123"), 0);
    assert_eq!(hit, SymbolMatch::hit(0));
    assert_eq!(spec.found_leading_index(), Some(0));
    assert!(spec.found_symbols());
}

#[test]
fn multi_char_leading_reports_last_index() {
    let mut spec = SymbolSpec::leading("--").unwrap();
    assert_eq!(spec.match_leading_at(&chars(" --5"), 1), SymbolMatch::hit(2));
}

#[test]
fn mismatch_leaves_state_unchanged() {
    let mut spec = SymbolSpec::leading("-").unwrap();
    let miss = spec.match_leading_at(&chars("(123)"), 0);
    assert_eq!(miss, SymbolMatch::miss(0));
    assert_eq!(spec.state(), ScanState::default());
}

#[test]
fn partial_match_at_end_is_a_miss() {
    let mut spec = SymbolSpec::leading("CR").unwrap();
    assert!(!spec.match_leading_at(&chars("C"), 0).matched);
    assert!(!spec.found_leading());
}

#[test]
fn closed_gate_refuses_leading() {
    let mut spec = SymbolSpec::leading("-").unwrap();
    spec.set_found_first_numeric_digit(true);
    assert_eq!(spec.match_leading_at(&chars("-"), 0), SymbolMatch::miss(0));
}

#[test]
fn gate_does_not_reopen() {
    let mut spec = SymbolSpec::leading("-").unwrap();
    spec.set_found_first_numeric_digit(true);
    spec.set_found_first_numeric_digit(false);
    assert!(spec.found_first_numeric_digit());
    spec.reset_processing_state();
    assert!(!spec.found_first_numeric_digit());
}

#[test]
fn latched_leading_is_served_from_cache() {
    let mut spec = SymbolSpec::leading("-").unwrap();
    let first = spec.match_leading_at(&chars("-1"), 0);
    let again = spec.match_leading_at(&chars("xx"), 1);
    assert_eq!(again.last_index, first.last_index);
    assert!(again.matched);
    assert!(again.from_latch);
}

// Trailing matches

#[test]
fn trailing_ignores_gate() {
    let mut spec = SymbolSpec::trailing("-").unwrap();
    spec.set_found_first_numeric_digit(true);
    assert_eq!(spec.match_trailing_at(&chars("123-"), 3), SymbolMatch::hit(3));
    assert!(spec.found_symbols());
}

#[test]
fn paired_needs_both_latches() {
    let mut spec = SymbolSpec::leading_and_trailing("(", ")").unwrap();
    let buffer = chars("(1)");
    spec.match_leading_at(&buffer, 0);
    assert!(!spec.found_symbols());
    spec.set_found_first_numeric_digit(true);
    spec.match_trailing_at(&buffer, 2);
    assert!(spec.found_symbols());
    assert_eq!(spec.found_trailing_index(), Some(2));
}

#[test]
fn reset_clears_latches() {
    let mut spec = SymbolSpec::trailing("-").unwrap();
    spec.match_trailing_at(&chars("1-"), 1);
    spec.reset_processing_state();
    assert!(!spec.found_trailing());
    assert_eq!(spec.state(), ScanState::default());
}

#[test]
fn display_lists_configuration_and_state() {
    let mut spec = SymbolSpec::leading_and_trailing("(", ")").unwrap();
    spec.match_leading_at(&chars("(5)"), 0);
    let listing = spec.to_string();
    assert!(listing.contains("position:            BeforeAndAfter"));
    assert!(listing.contains("leading_symbols:     \"(\""));
    assert!(listing.contains("found_leading_index: 0"));
    assert!(listing.contains("found_trailing_index: none"));
}

proptest! {
    #[test]
    fn gate_blocks_every_leading_match(text in "[-(0-9]{0,10}", index in 0usize..12) {
        let mut spec = SymbolSpec::leading("-").unwrap();
        spec.set_found_first_numeric_digit(true);
        let result = spec.match_leading_at(&chars(&text), index);
        prop_assert!(!result.matched);
        prop_assert!(!spec.found_leading());
    }

    #[test]
    fn repeated_leading_calls_are_idempotent(prefix in "[0-9 ]{0,5}", calls in 1usize..5) {
        let text = format!("{prefix}-9");
        let buffer = chars(&text);
        let index = prefix.chars().count();
        let mut spec = SymbolSpec::leading("-").unwrap();
        let first = spec.match_leading_at(&buffer, index);
        prop_assert!(first.matched);
        for _ in 0..calls {
            let again = spec.match_leading_at(&buffer, 0);
            prop_assert_eq!(again.last_index, first.last_index);
            prop_assert!(again.from_latch);
        }
    }
}
