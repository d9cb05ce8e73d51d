use super::*;
use pretty_assertions::assert_eq;

#[test]
fn end_of_buffer_is_not_a_match() {
    let result = ScanResult::end_of_buffer(4);
    assert!(result.hit_end_of_buffer);
    assert!(!result.matched);
    assert_eq!(result.consumed_index, None);
    assert_eq!(result.next_index(), 4);
}

#[test]
fn fresh_match_resumes_after_symbols() {
    let result = ScanResult::from_match(
        2,
        SymbolMatch::hit(4),
        SymbolLocation::After,
    );
    assert_eq!(result.consumed_index, Some(4));
    assert_eq!(result.location, Some(SymbolLocation::After));
    assert_eq!(result.next_index(), 5);
}

#[test]
fn latched_match_does_not_move_cursor() {
    let result = ScanResult::from_match(
        3,
        SymbolMatch::latched(0),
        SymbolLocation::Before,
    );
    assert!(result.matched);
    assert!(result.from_latch);
    assert_eq!(result.next_index(), 3);
}

#[test]
fn miss_carries_no_location() {
    let result = ScanResult::from_match(1, SymbolMatch::miss(1), SymbolLocation::Before);
    assert_eq!(result, ScanResult::no_match(1));
    assert_eq!(result.with_member(2).member, Some(2));
}
