use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_maps_to_code() {
    assert_eq!(
        SymbolErrorKind::configuration("chars", "empty").code(),
        ErrorCode::E0001
    );
    assert_eq!(SymbolErrorKind::EmptyCollection.code(), ErrorCode::E0002);
    assert_eq!(
        SymbolErrorKind::MissingReference { what: "buffer" }.code(),
        ErrorCode::E1001
    );
    assert_eq!(
        SymbolErrorKind::NegativeIndex { index: -1 }.code(),
        ErrorCode::E2001
    );
    assert_eq!(
        SymbolErrorKind::InvalidDigit { ch: 'x' }.code(),
        ErrorCode::E3001
    );
    assert_eq!(
        SymbolErrorKind::InconsistentState { invariant: "x" }.code(),
        ErrorCode::E4001
    );
}

#[test]
fn display_includes_code_and_kind() {
    let err = SymbolError::configuration("leading_symbols", "sequence is empty");
    assert_eq!(
        err.to_string(),
        "[E0001] invalid configuration for `leading_symbols`: sequence is empty"
    );
}

#[test]
fn display_renders_trail_and_member() {
    let err = SymbolError::new(SymbolErrorKind::NegativeIndex { index: -3 })
        .at_member(2)
        .with_label("search")
        .with_label("parse");
    assert_eq!(
        err.to_string(),
        "[E2001] parse -> search: member 2: start index -3 is negative"
    );
}

#[test]
fn at_member_keeps_innermost_index() {
    let err = SymbolError::new(SymbolErrorKind::EmptyCollection)
        .at_member(4)
        .at_member(0);
    assert_eq!(err.member, Some(4));
}

#[test]
fn context_only_touches_errors() {
    let ok: Result<u8> = Ok(7);
    assert_eq!(ok.context("unused"), Ok(7));

    let failed: Result<u8> = Err(SymbolErrorKind::InvalidDigit { ch: 'a' }.into());
    let err = failed.context("kernel").unwrap_err();
    assert_eq!(err.trail.labels(), &["kernel".to_string()]);
    assert_eq!(err.kind, SymbolErrorKind::InvalidDigit { ch: 'a' });
}

#[test]
fn source_is_the_kind() {
    use std::error::Error;

    let err = SymbolError::new(SymbolErrorKind::EmptyCollection);
    let source = err.source().map(ToString::to_string);
    assert_eq!(
        source.as_deref(),
        Some("the collection is empty and holds no sign specifications")
    );
}
