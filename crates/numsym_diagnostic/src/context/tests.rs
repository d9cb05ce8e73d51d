use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_trail_renders_nothing() {
    let ctx = DiagContext::new();
    assert!(ctx.is_empty());
    assert_eq!(ctx.to_string(), "");
}

#[test]
fn child_appends_inner_labels() {
    let ctx = DiagContext::from_label("parse_us_number")
        .child("sign search")
        .child("spec[1]");
    assert_eq!(ctx.to_string(), "parse_us_number -> sign search -> spec[1]");
}

#[test]
fn prepend_records_outer_labels() {
    let mut ctx = DiagContext::from_label("validate");
    ctx.prepend("collection");
    ctx.prepend("locale us");
    assert_eq!(
        ctx.labels(),
        &["locale us".to_string(), "collection".into(), "validate".into()]
    );
}
