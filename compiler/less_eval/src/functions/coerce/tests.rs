use super::*;
use less_values::EvalErrorKind;

#[test]
fn dimension_as_number() {
    assert_eq!(Value::number(0.25).as_number(), Ok(0.25));
    assert_eq!(Value::dimension(12.0, "px").as_number(), Ok(12.0));
    assert_eq!(Value::percentage(50.0).as_number(), Ok(0.5));
}

#[test]
fn bare_number_passes_through() {
    assert_eq!(1.5_f64.as_number(), Ok(1.5));
    assert_eq!(1.5_f64.as_scaled(256.0), Ok(1.5));
}

#[test]
fn non_numbers_are_type_mismatches() {
    for value in [
        Value::keyword("red"),
        Value::quoted("1"),
        Value::rgb(1.0, 2.0, 3.0),
        Value::anonymous("1"),
        Value::url(Value::anonymous("a")),
    ] {
        let err = value.as_number().err();
        assert_eq!(
            err.map(|e| e.kind),
            Some(EvalErrorKind::TypeMismatch {
                message: "color functions take numbers as parameters".to_string()
            })
        );
    }
}

#[test]
fn scaled_percentages() {
    assert_eq!(Value::percentage(50.0).as_scaled(256.0), Ok(128.0));
    assert_eq!(Value::percentage(100.0).as_scaled(256.0), Ok(256.0));
    assert_eq!(Value::number(200.0).as_scaled(256.0), Ok(200.0));
    assert!(Value::keyword("x").as_scaled(256.0).is_err());
}

#[test]
fn clamp_bounds() {
    assert_eq!(clamp(-0.5), 0.0);
    assert_eq!(clamp(0.3), 0.3);
    assert_eq!(clamp(1.7), 1.0);
    assert_eq!(clamp(clamp(1.7)), 1.0);
}
