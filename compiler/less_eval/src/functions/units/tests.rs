use super::*;
use pretty_assertions::assert_eq;

fn close(value: &Value, expected: f64, unit: &str) {
    let Value::Dimension(d) = value else {
        panic!("expected a dimension, got {value:?}");
    };
    assert!((d.value - expected).abs() < 1e-9, "{} != {expected}", d.value);
    assert_eq!(d.unit, unit);
}

#[test]
fn unify_moves_to_base_units() {
    assert_eq!(unify(&Dimension::new(1.0, "in")).unit, "px");
    assert!((unify(&Dimension::new(1.0, "in")).value - 96.0).abs() < 1e-9);
    assert_eq!(unify(&Dimension::new(250.0, "ms")), Dimension::new(0.25, "s"));
    let right = unify(&Dimension::new(90.0, "deg"));
    assert_eq!(right.unit, "rad");
    assert!((right.value - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn unify_leaves_unknown_units() {
    assert_eq!(unify(&Dimension::new(2.0, "em")), Dimension::new(2.0, "em"));
    assert_eq!(unify(&Dimension::unitless(2.0)), Dimension::unitless(2.0));
}

#[test]
fn unit_replaces_or_strips() {
    let options = CssOptions::default();
    let dim = Dimension::new(5.0, "em");
    assert_eq!(
        unit(&dim, Some(&Value::keyword("px")), &options),
        Value::dimension(5.0, "px")
    );
    assert_eq!(unit(&dim, None, &options), Value::number(5.0));
}

#[test]
fn convert_between_compatible_units() {
    close(&convert(&Dimension::new(1.0, "s"), &Value::keyword("ms")), 1000.0, "ms");
    close(&convert(&Dimension::new(2.54, "cm"), &Value::quoted("in")), 1.0, "in");
    close(&convert(&Dimension::new(0.5, "turn"), &Value::keyword("deg")), 180.0, "deg");
}

#[test]
fn convert_incompatible_is_identity() {
    let dim = Dimension::new(3.0, "px");
    assert_eq!(convert(&dim, &Value::keyword("s")), Value::dimension(3.0, "px"));
    assert_eq!(convert(&dim, &Value::keyword("em")), Value::dimension(3.0, "px"));
}

#[test]
fn percentage_scales_by_100() {
    assert_eq!(percentage(&Dimension::unitless(0.5)), Value::percentage(50.0));
}

#[test]
fn color_parses_hex_strings() {
    assert_eq!(
        color(&Value::quoted("#ff8000")).ok(),
        Some(Color::new([255.0, 128.0, 0.0], 1.0))
    );
    assert_eq!(
        color(&Value::quoted("#abc")).ok(),
        Some(Color::new([170.0, 187.0, 204.0], 1.0))
    );
}

#[test]
fn color_errors() {
    assert_eq!(
        color(&Value::keyword("red")).err().map(|e| e.message),
        Some("Argument must be a string".to_string())
    );
    assert_eq!(
        color(&Value::quoted("#zz")).err().map(|e| e.message),
        Some("color: invalid hex color `#zz`".to_string())
    );
}
