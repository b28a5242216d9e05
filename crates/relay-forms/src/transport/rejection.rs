// File: src/transport/rejection.rs
// Purpose: Extract user-facing messages from a relay error body

use serde_json::Value;

/// Messages from `{"errors":[{"message":..}]}` or `{"error":".."}`.
/// Each key is read on its own, so a malformed sibling or entry is skipped
/// rather than discarding the rest. Anything else, including non-JSON
/// bodies, yields an empty list.
pub fn parse_rejection(body: &str) -> Vec<String> {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };

    let listed: Vec<String> = parsed
        .get("errors")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.get("message").and_then(Value::as_str))
        .filter(|message| !message.trim().is_empty())
        .map(String::from)
        .collect();

    if !listed.is_empty() {
        return listed;
    }

    parsed
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(String::from)
        .into_iter()
        .collect()
}
