//! Loose accessors over upstream JSON, which mixes strings and numbers freely.

use serde_json::Value;

pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn str_at(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(as_string)
}

pub fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| str_at(value, key))
}

pub fn u32_at(value: &Value, key: &str) -> Option<u32> {
    let v = value.get(key)?;
    if let Some(n) = v.as_u64() {
        return u32::try_from(n).ok();
    }
    if let Some(f) = v.as_f64() {
        return (f >= 0.0 && f <= f64::from(u32::MAX)).then_some(f as u32);
    }
    v.as_str()?.trim().parse().ok()
}

/// `value[key]["$ref"]`: the link form used by the core API.
pub fn ref_at<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)?
        .get("$ref")?
        .as_str()
        .and_then(non_empty)
}

pub fn array_at<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// `href` of every element that carries one.
pub fn hrefs(items: &[Value]) -> Vec<String> {
    items.iter().filter_map(|item| str_at(item, "href")).collect()
}

/// Score fields arrive as a string, a number, or `{ value, displayValue }`.
pub fn score(value: Option<&Value>) -> Option<String> {
    let value = value?;
    match value {
        Value::Object(_) => {
            str_at(value, "displayValue").or_else(|| value.get("value").and_then(as_string))
        }
        other => as_string(other),
    }
}

pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
