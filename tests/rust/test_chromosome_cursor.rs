use super::*;

#[test]
fn test_current_at_end() {
    assert_eq!(Cursor::new("").current(), None);
    assert_eq!(Cursor::new("a").current(), Some('a'));
}

#[test]
fn test_skip_ws_includes_newlines() {
    let mut c = Cursor::new(" \t\r\n  (");
    c.skip_ws();
    assert_eq!(c.pos, 6);
    assert_eq!(c.current(), Some('('));
}

#[test]
fn test_consume_skips_leading_ws() {
    let mut c = Cursor::new("   ,rest");
    assert!(c.consume(','));
    assert_eq!(c.pos, 4);
    assert!(!c.consume(','));
}

#[test]
fn test_consume_any() {
    let mut c = Cursor::new(" {");
    assert_eq!(c.consume_any(&['{', '(']), Some('{'));
    let mut c = Cursor::new("[");
    assert_eq!(c.consume_any(&['{', '(']), None);
    assert_eq!(c.pos, 0);
}

#[test]
fn test_match_uint() {
    let mut c = Cursor::new("  42, 7");
    assert_eq!(c.match_uint(), Some(42));
    assert_eq!(c.pos, 4);
    assert!(c.consume(','));
    assert_eq!(c.match_uint(), Some(7));
    assert_eq!(c.current(), None);
}

#[test]
fn test_match_uint_rejects_non_digits() {
    let mut c = Cursor::new("x1");
    assert_eq!(c.match_uint(), None);
    assert_eq!(c.pos, 0);
    let mut c = Cursor::new("-1");
    assert_eq!(c.match_uint(), None);
}

#[test]
fn test_match_uint_overflow() {
    let mut c = Cursor::new("99999999999");
    assert_eq!(c.match_uint(), None);
    assert_eq!(c.pos, 0);
}

#[test]
fn test_describe_current() {
    let c = Cursor::new("a");
    assert_eq!(c.describe_current(), "'a'");
    let c = Cursor::new("");
    assert_eq!(c.describe_current(), "end of input");
}
