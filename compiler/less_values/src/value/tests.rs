use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_type_names() {
    assert_eq!(Value::number(1.0).type_name(), "Dimension");
    assert_eq!(Value::rgb(0.0, 0.0, 0.0).type_name(), "Color");
    assert_eq!(Value::keyword("bold").type_name(), "Keyword");
    assert_eq!(Value::quoted("x").type_name(), "Quoted");
    assert_eq!(Value::anonymous("x").type_name(), "Anonymous");
    assert_eq!(Value::url(Value::anonymous("a.png")).type_name(), "Url");
}

#[test]
fn test_boolean_is_keyword() {
    assert_eq!(Value::boolean(true), Value::keyword("true"));
    assert_eq!(Value::boolean(false), Value::keyword("false"));
    assert!(Value::boolean(true).is_true());
    assert!(!Value::boolean(false).is_true());
    assert!(!Value::quoted("true").is_true());
}

#[test]
fn test_quoted_keeps_raw_text() {
    let q = Quoted::new("'a b'", "a b");
    assert_eq!(Value::Quoted(q.clone()).to_css(&CssOptions::default()), "'a b'");
    assert_eq!(Value::Quoted(q).raw_value(), "a b");
    assert_eq!(Quoted::double("c").raw, "\"c\"");
}

#[test]
fn test_dimension_css() {
    assert_eq!(Value::dimension(10.0, "px").to_string(), "10px");
    assert_eq!(Value::percentage(12.5).to_string(), "12.5%");
    assert_eq!(Value::number(1.0 / 3.0).to_string(), "0.33333333");
    assert_eq!(Value::number(-0.0).to_string(), "0");
    assert_eq!(Value::dimension(10.0, "px").raw_value(), "10");
}

#[test]
fn test_dimension_units_compare_exactly() {
    let d = Dimension::new(5.0, "PX");
    assert!(!d.is_unit("px"));
    assert!(d.is_unit("PX"));
    assert!(Dimension::new(5.0, "%").is_percentage());
}

#[test]
fn test_url_css() {
    let url = Value::url(Value::quoted("img.png"));
    assert_eq!(url.to_string(), "url(\"img.png\")");
    assert_eq!(url.raw_value(), "img.png");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(127.5), "127.5");
    assert_eq!(format_number(255.0), "255");
    assert_eq!(format_number(0.1 + 0.2), "0.3");
    assert_eq!(format_number(-3.25), "-3.25");
    assert_eq!(format_number(1e-10), "0");
}
