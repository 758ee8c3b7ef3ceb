use super::*;
use pretty_assertions::assert_eq;

fn samples() -> Vec<Value> {
    vec![
        Value::rgb(1.0, 2.0, 3.0),
        Value::dimension(4.0, "px"),
        Value::quoted("s"),
        Value::keyword("k"),
        Value::url(Value::anonymous("a.png")),
        Value::anonymous("raw"),
    ]
}

/// Which sample each variant predicate accepts.
#[test]
fn variant_predicates() {
    let table: [(fn(&Value) -> Value, usize); 5] = [
        (iscolor, 0),
        (isnumber, 1),
        (isstring, 2),
        (iskeyword, 3),
        (isurl, 4),
    ];
    for (predicate, accepted) in table {
        for (i, value) in samples().iter().enumerate() {
            assert_eq!(predicate(value), Value::boolean(i == accepted), "{value:?}");
        }
    }
}

#[test]
fn results_are_keywords() {
    assert_eq!(iscolor(&Value::keyword("red")), Value::keyword("false"));
    assert_eq!(iskeyword(&Value::keyword("red")), Value::keyword("true"));
}

#[test]
fn unit_predicates_need_exact_unit() {
    assert_eq!(ispixel(&Value::dimension(1.0, "px")), Value::boolean(true));
    assert_eq!(ispixel(&Value::dimension(1.0, "PX")), Value::boolean(false));
    assert_eq!(ispixel(&Value::number(1.0)), Value::boolean(false));
    assert_eq!(ispercentage(&Value::percentage(5.0)), Value::boolean(true));
    assert_eq!(isem(&Value::dimension(1.0, "em")), Value::boolean(true));
    assert_eq!(isem(&Value::dimension(1.0, "rem")), Value::boolean(false));
}

#[test]
fn unit_predicates_reject_other_variants() {
    assert_eq!(ispixel(&Value::keyword("px")), Value::boolean(false));
    assert_eq!(ispercentage(&Value::quoted("50%")), Value::boolean(false));
}
