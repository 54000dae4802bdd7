use serde_json::Value;

/// Short name of the JSON kind of `value`, used in error messages and logs.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a JSON value as a single line of text, trimming it to `max_chars`.
pub fn preview(value: &Value, max_chars: usize) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let sanitized: String = raw.chars().filter(|c| !c.is_control()).collect();
    if sanitized.chars().count() <= max_chars {
        return sanitized;
    }
    let mut trimmed: String = sanitized.chars().take(max_chars).collect();
    trimmed.push_str("...");
    trimmed
}
