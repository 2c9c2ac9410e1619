//! Plain-text dump of every top-level field in the raw payload.

use models::Response;

use serde_json::Value;

/// Render `response.raw` one key per block, keys sorted.
///
/// Scalars print as `Key: value`. Arrays and objects print the key on its
/// own line followed by one tab-indented line per element or member.
pub fn show_all(response: &Response) -> String {
    let mut keys: Vec<&String> = response.raw.keys().collect();
    keys.sort();

    let mut out = String::new();
    for key in keys {
        let Some(value) = response.raw.get(key) else {
            continue;
        };

        match value {
            Value::Array(items) => {
                out.push_str(key);
                out.push('\n');
                for item in items {
                    out.push('\t');
                    out.push_str(&scalar_text(item));
                    out.push('\n');
                }
            }
            Value::Object(members) => {
                out.push_str(key);
                out.push('\n');
                for (member, item) in members {
                    out.push_str(&format!("\t{member}: {}\n", scalar_text(item)));
                }
            }
            scalar => {
                out.push_str(&format!("{key}: {}\n", scalar_text(scalar)));
            }
        }
    }

    out
}

/// Strings print bare; everything else prints as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
