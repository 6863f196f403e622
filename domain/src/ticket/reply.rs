//! Agent reply normalization
//!
//! The agent's body has no enforced schema. The display text is read from the
//! first populated field in [`REPLY_FIELDS`]; failing that, the whole payload
//! is rendered as compact JSON.

use serde_json::Value;

/// Recognized reply fields, in order of preference
pub const REPLY_FIELDS: [&str; 2] = ["reply", "response"];

/// Extract the display text from an agent reply envelope.
///
/// A field is populated when it is present, not `null`, and not an empty
/// string. String values are returned verbatim; other JSON values are
/// rendered as JSON text.
pub fn extract_reply(envelope: &Value) -> String {
    for field in REPLY_FIELDS {
        match envelope.get(field) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) if s.is_empty() => continue,
            Some(Value::String(s)) => return s.clone(),
            Some(other) => return other.to_string(),
        }
    }
    envelope.to_string()
}
