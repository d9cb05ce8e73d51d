use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_sequence_is_rejected() {
    let err = validate_symbols("leading_symbols", &[]).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("`leading_symbols`"));
}

#[test]
fn zero_value_character_is_rejected() {
    let err = validate_symbols("trailing_symbols", &['-', '\0']).unwrap_err();
    assert!(err.to_string().contains("index 1"));
    assert_eq!(validate_symbols("trailing_symbols", &['-']), Ok(()));
}

#[test]
fn match_reports_last_index() {
    let buffer: Vec<char> = "12 CR".chars().collect();
    assert_eq!(match_symbols_at(&[' ', 'C', 'R'], &buffer, 2), Some(4));
    assert_eq!(match_symbols_at(&['C', 'R'], &buffer, 2), None);
}

#[test]
fn match_never_reads_past_end() {
    let buffer: Vec<char> = "1-".chars().collect();
    assert_eq!(match_symbols_at(&['-', '-'], &buffer, 1), None);
    assert_eq!(match_symbols_at(&['-'], &buffer, 2), None);
    assert_eq!(match_symbols_at(&['-'], &buffer, 9), None);
    assert_eq!(match_symbols_at(&[], &buffer, 0), None);
}

#[test]
fn quoted_renders_debug_string() {
    assert_eq!(quoted(&['(', ')']), "\"()\"");
}
