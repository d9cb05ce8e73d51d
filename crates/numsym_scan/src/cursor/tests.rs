use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn walks_characters_then_stops() {
    let buf = chars("-12");
    let mut cursor = ScanCursor::new(&buf);
    assert_eq!(cursor.current(), Some('-'));
    assert!(!cursor.is_digit());
    cursor.advance();
    assert!(cursor.is_digit());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.position(), 3);
    assert_eq!(cursor.current(), None);
    cursor.advance();
    assert_eq!(cursor.position(), 3);
}

#[test]
fn snapshot_restores_by_copy() {
    let buf = chars("(123)");
    let mut cursor = ScanCursor::new(&buf);
    let snapshot = cursor;
    cursor.set_position(2);
    assert_eq!(cursor.index(), 2);
    cursor = snapshot;
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.remaining(), 5);
}

#[test]
fn set_position_accepts_end() {
    let buf = chars("12");
    let mut cursor = ScanCursor::new(&buf);
    cursor.set_position(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn set_position_clamps_past_end() {
    let buf = chars("12");
    let mut cursor = ScanCursor::new(&buf);
    cursor.set_position(7);
    assert_eq!(cursor.position(), 2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

proptest! {
    #[test]
    fn position_never_passes_end(text in "[-0-9().,]{0,12}", steps in 0usize..20) {
        let buf = chars(&text);
        let mut cursor = ScanCursor::new(&buf);
        for _ in 0..steps {
            cursor.advance();
        }
        prop_assert!(cursor.position() <= buf.len());
        prop_assert_eq!(cursor.position() + cursor.remaining(), buf.len());
    }
}
