use super::*;
use pretty_assertions::assert_eq;

fn fmt(template: &str, args: &[Value]) -> Value {
    format(&Value::quoted(template), args, &CssOptions::default())
}

// format

#[test]
fn s_takes_raw_value_and_d_takes_css() {
    let out = fmt("%s-%d", &[Value::quoted("a b"), Value::quoted("c")]);
    assert_eq!(out, Value::quoted("a b-\"c\""));
}

#[test]
fn arguments_fill_tokens_left_to_right() {
    let out = fmt(
        "repeat %d of %a",
        &[Value::number(1.0), Value::dimension(3.5, "px")],
    );
    assert_eq!(out, Value::quoted("repeat 1 of 3.5px"));
}

#[test]
fn uppercase_tokens_url_encode() {
    let out = fmt("url=%S", &[Value::quoted("a b&c")]);
    assert_eq!(out, Value::quoted("url=a+b%26c"));
    let out = fmt("%D", &[Value::rgb(255.0, 0.0, 0.0)]);
    assert_eq!(out, Value::quoted("%23ff0000"));
}

#[test]
fn double_percent_collapses_after_substitution() {
    let out = fmt("%d%%", &[Value::number(50.0)]);
    assert_eq!(out, Value::quoted("50%"));
}

#[test]
fn extra_arguments_are_ignored_and_missing_ones_leave_tokens() {
    assert_eq!(
        fmt("%s", &[Value::keyword("a"), Value::keyword("b")]),
        Value::quoted("a")
    );
    assert_eq!(fmt("%s and %s", &[Value::keyword("a")]), Value::quoted("a and %s"));
}

#[test]
fn substituted_text_is_rescanned() {
    // the first argument introduces a token that the second one fills
    let out = fmt("%s!", &[Value::quoted("%d"), Value::number(7.0)]);
    assert_eq!(out, Value::quoted("7!"));
}

#[test]
fn result_is_double_quoted() {
    let Value::Quoted(q) = fmt("x", &[]) else {
        panic!("expected a quoted string");
    };
    assert_eq!(q.raw, "\"x\"");
    assert_eq!(q.value, "x");
}

// e / escape

#[test]
fn e_unquotes() {
    assert_eq!(e(&Value::quoted("-ms-filter")), Value::anonymous("-ms-filter"));
    assert_eq!(e(&Value::number(2.0)), Value::anonymous("2"));
}

#[test]
fn escape_form_encodes() {
    assert_eq!(
        escape(&Value::quoted("a=1 b")),
        Value::anonymous("a%3D1+b")
    );
}

// encoders

#[test]
fn encoders_differ_on_space_and_tilde() {
    assert_eq!(url_encode("a b~"), "a+b%7E");
    assert_eq!(raw_url_encode(b"a b~"), "a%20b~");
}

#[test]
fn encoders_handle_multibyte() {
    assert_eq!(url_encode("é"), "%C3%A9");
    assert_eq!(raw_url_encode("é".as_bytes()), "%C3%A9");
}
