//! Type tests. Results are the keywords `true` and `false`.

use less_values::Value;

pub fn iscolor(value: &Value) -> Value {
    Value::boolean(matches!(value, Value::Color(_)))
}

pub fn isnumber(value: &Value) -> Value {
    Value::boolean(matches!(value, Value::Dimension(_)))
}

pub fn isstring(value: &Value) -> Value {
    Value::boolean(matches!(value, Value::Quoted(_)))
}

pub fn iskeyword(value: &Value) -> Value {
    Value::boolean(matches!(value, Value::Keyword(_)))
}

pub fn isurl(value: &Value) -> Value {
    Value::boolean(matches!(value, Value::Url(_)))
}

/// A dimension carrying exactly `unit`.
fn has_unit(value: &Value, unit: &str) -> Value {
    Value::boolean(matches!(value, Value::Dimension(d) if d.is_unit(unit)))
}

pub fn ispixel(value: &Value) -> Value {
    has_unit(value, "px")
}

pub fn ispercentage(value: &Value) -> Value {
    has_unit(value, "%")
}

pub fn isem(value: &Value) -> Value {
    has_unit(value, "em")
}

#[cfg(test)]
mod tests;
