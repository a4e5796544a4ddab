use pattern_seeker::{AnchorSet, Cursor, MoveMode, SeekError};

#[test]
fn test_take_u64() {
    let mut c = Cursor::new("12345 remainder");
    assert_eq!(c.take_u64(), Some(12345));
    assert_eq!(c, " remainder");

    let mut bad = Cursor::new("not_a_number");
    assert_eq!(bad.take_u64(), None);
    assert_eq!(bad, "not_a_number");
}

#[test]
fn test_take_i64() {
    let mut c = Cursor::new("-12345 remainder");
    assert_eq!(c.take_i64(), Some(-12345));
    assert_eq!(c, " remainder");

    let mut bad = Cursor::new("not_a_number");
    assert_eq!(bad.take_i64(), None);
    assert_eq!(bad.offset(), 0);
}

#[test]
fn test_numeric_prefix_stops_at_letters() {
    let mut c = Cursor::new("123abc");
    assert_eq!(c.take_u64(), Some(123));
    assert_eq!(c, "abc");

    let mut c = Cursor::new("abc");
    assert_eq!(c.take_u64(), None);
    assert_eq!(c, "abc");
}

#[test]
fn test_numeric_leading_whitespace_and_sign() {
    let mut c = Cursor::new("  +7,  -8");
    assert_eq!(c.take_u64(), Some(7));
    assert!(c.expect(","));
    assert_eq!(c.take_i64(), Some(-8));
    assert!(c.is_empty());

    // nothing consumed when no digits follow the whitespace
    let mut c = Cursor::new("   x");
    assert!(matches!(c.try_take_i64(), Err(SeekError::NoDigits)));
    assert_eq!(c.offset(), 0);

    let mut c = Cursor::new("-5");
    assert_eq!(c.take_u64(), None);
    assert_eq!(c.offset(), 0);
}

#[test]
fn test_unsigned_rejects_minus_without_wrapping() {
    let mut c = Cursor::new("-5x");
    assert!(matches!(c.try_take_u64(), Err(SeekError::NoDigits)));
    assert_eq!(c, "-5x");
    assert_eq!(c.take_i64(), Some(-5));
    assert_eq!(c, "x");
}

#[test]
fn test_numeric_overflow_consumes_digits() {
    let mut c = Cursor::new("18446744073709551616 next");
    assert!(matches!(c.try_take_u64(), Err(SeekError::Overflow)));
    assert_eq!(c, " next");

    let mut c = Cursor::new("18446744073709551615");
    assert_eq!(c.take_u64(), Some(u64::MAX));

    let mut c = Cursor::new("-9223372036854775808|-9223372036854775809|");
    assert_eq!(c.take_i64(), Some(i64::MIN));
    assert!(c.expect("|"));
    assert_eq!(c.take_i64(), None);
    assert_eq!(c, "|");
}

#[test]
fn test_numeric_defaults() {
    let mut c = Cursor::new("x");
    assert_eq!(c.take_u64_or(9), 9);
    assert_eq!(c.take_i64_or(-9), -9);
    let mut c = Cursor::new("4");
    assert_eq!(c.take_i64_or(-9), 4);
}

#[test]
fn test_json() {
    let c = Cursor::new(
        r#"{"name": "John", "age": 30, "array": [1,2,3], "obj": {"nested": "value"}}"#,
    );
    assert_eq!(c.json_property("name"), "John");
    assert_eq!(c.json_property("age"), "30");
    assert_eq!(c.json_property("array"), "[1,2,3]");
    assert_eq!(c.json_property("obj"), r#"{"nested": "value"}"#);
    assert_eq!(c.offset(), 0);
}

#[test]
fn test_json_property_dispatch() {
    let c = Cursor::new(r#"{"a": "x", "b": [1,2], "c": {"d":1}, "e": 5}"#);
    assert_eq!(c.json_property("a"), "x");
    assert_eq!(c.json_property("b"), "[1,2]");
    assert_eq!(c.json_property("c"), r#"{"d":1}"#);
    assert_eq!(c.json_property("e"), "5");
    assert_eq!(c.json_property("d"), "1");
}

#[test]
fn test_json_property_failures() {
    let c = Cursor::new(r#"{"a": 1, "label": "b", "b" 2, "c": [1, 2"#);
    assert!(c.json_property("missing").is_empty());
    assert!(matches!(
        c.try_json_property("missing"),
        Err(SeekError::NotFound)
    ));
    // key without a colon
    assert!(matches!(
        c.try_json_property("b"),
        Err(SeekError::Expected(':'))
    ));
    assert!(matches!(
        c.try_json_property("c"),
        Err(SeekError::Unbalanced { open: '[', .. })
    ));
    assert_eq!(c.offset(), 0);
}

#[test]
fn test_json_bare_values() {
    let c = Cursor::new("{\"t\": true,\n \"n\": null\r\n, \"f\":-1.5e3]");
    assert_eq!(c.json_property("t"), "true");
    assert_eq!(c.json_property("n"), "null");
    assert_eq!(c.json_property("f"), "-1.5e3");
}

#[test]
fn test_json_path() {
    let c = Cursor::new(r#"{"user": {"id": 7, "address": {"city": "Oslo"}}, "city": "Rome"}"#);
    assert_eq!(c.json_path(&["user", "address", "city"]), "Oslo");
    assert_eq!(c.json_path(&["user", "id"]), "7");
    assert!(c.json_path(&["user", "zip"]).is_empty());
    assert_eq!(c.json_path(&[]).offset(), 0);
}

#[test]
fn test_xml() {
    let mut c = Cursor::new("<root><name>John</name><age>30</age></root>");
    assert_eq!(c.xml_tag_body("name", MoveMode::None), "John");
    assert_eq!(c.xml_tag("name", MoveMode::None), "<name>John</name>");
    assert_eq!(c.xml_tag_body("root", MoveMode::None), "<name>John</name><age>30</age>");
    assert_eq!(c.offset(), 0);
}

#[test]
fn test_xml_round_trip() {
    let mut c = Cursor::new(r#"<t id="1">body</t>"#);
    let body = c.xml_tag_body("t", MoveMode::None);
    assert_eq!(body, "body");
    assert_eq!(body.offset(), 10);
    assert_eq!(c.xml_tag("t", MoveMode::None), r#"<t id="1">body</t>"#);
    assert_eq!(c.xml_attr("id"), "1");
}

#[test]
fn test_xml_modes() {
    let mut c = Cursor::new("pre <a>1</a> mid <b>2</b> post");
    assert_eq!(c.xml_tag_body("a", MoveMode::MoveAfter), "1");
    assert_eq!(c, " mid <b>2</b> post");
    assert_eq!(c.xml_tag("b", MoveMode::MoveBefore), "<b>2</b>");
    assert_eq!(c, "<b>2</b> post");
}

#[test]
fn test_xml_failures_leave_view() {
    let mut c = Cursor::new("<a>open only");
    assert!(c.xml_tag("a", MoveMode::MoveAfter).is_empty());
    assert!(c.xml_tag("zzz", MoveMode::MoveAfter).is_empty());
    assert_eq!(c.offset(), 0);

    let mut odd = Cursor::new("<t</t> trailing");
    assert!(matches!(
        odd.try_xml_tag_body("t", MoveMode::MoveAfter),
        Err(SeekError::Malformed)
    ));
    assert_eq!(odd.offset(), 0);
}

#[test]
fn test_xml_attributes() {
    let c = Cursor::new(r#"<tag id="123" class = "example">content</tag>"#);
    assert_eq!(c.xml_attr("id"), "123");
    assert_eq!(c.xml_attr("class"), "example");
    assert!(c.xml_attr("style").is_empty());
    assert_eq!(c.offset(), 0);
}

#[test]
fn test_seek_any_with_json_keys() {
    let anchors = AnchorSet::new(["\"b\"", "\"a\""]).unwrap();
    assert_eq!(anchors.len(), 2);

    let mut c = Cursor::new(r#"{"a": 1, "b": 2}"#);
    let hit = c.seek_any(&anchors, MoveMode::MoveAfter);
    assert_eq!(hit, Some(1));
    c.skip_whitespace();
    assert!(c.expect(":"));
    assert_eq!(c.take_i64(), Some(1));

    assert_eq!(c.seek_any(&anchors, MoveMode::MoveAfter), Some(0));
    assert_eq!(c, ": 2}");
    assert_eq!(c.seek_any(&anchors, MoveMode::MoveAfter), None);
    assert_eq!(c, ": 2}");
}
