use serde::Serialize;
use serde_json::Value;

fn is_account_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k == "account_number" || k.contains("account_no")
}

fn mask(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > 4 {
        "*".repeat(chars.len() - 4) + &chars[chars.len() - 4..].iter().collect::<String>()
    } else {
        s.to_string()
    }
}

/// Serializes `v` for logging with bank account numbers masked.
pub fn secure_serializable(v: impl Serialize) -> Value {
    match serde_json::to_value(v) {
        Ok(value) => secure_value(&value),
        Err(e) => Value::String(format!("<unserializable: {e}>")),
    }
}

pub fn secure_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, val)| {
                    let masked = match val {
                        Value::String(s) if is_account_key(k) => Value::String(mask(s)),
                        Value::Number(n) if is_account_key(k) => Value::String(mask(&n.to_string())),
                        _ => secure_value(val),
                    };
                    (k.clone(), masked)
                })
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}
