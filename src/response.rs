//! Response payload from `/api/generate` and field extraction.
//!
//! The service versions its response shape through `schema_version` and has
//! already grown past the two fields the documented snippet reads (it also
//! returns `range`, `options`, `stats`, `items`, `markdown`, ...). The
//! response type therefore keeps the decoded `serde_json::Value` whole and
//! exposes typed accessors for the keys this client understands, plus a
//! generic path lookup for everything else.

use serde_json::Value;

use crate::error::ShipNoteError;

/// Look up a dot-separated path (`"sections.what_shipped"`) in a decoded
/// response. Fails with [`ShipNoteError::MissingField`] when any segment is
/// absent, and with [`ShipNoteError::UnexpectedType`] when a path tries to
/// descend through a non-object.
pub fn extract_field<'a>(value: &'a Value, path: &str) -> Result<&'a Value, ShipNoteError> {
    let mut current = value;
    let mut walked = String::new();

    for segment in path.split('.') {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);

        let Some(object) = current.as_object() else {
            // The parent resolved to a scalar or array, so there is nothing
            // to index into.
            return Err(ShipNoteError::UnexpectedType {
                path: walked,
                expected: "object",
            });
        };
        current = object
            .get(segment)
            .ok_or_else(|| ShipNoteError::MissingField {
                path: walked.clone(),
            })?;
    }

    Ok(current)
}

fn extract_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ShipNoteError> {
    extract_field(value, path)?
        .as_str()
        .ok_or_else(|| ShipNoteError::UnexpectedType {
            path: path.to_string(),
            expected: "string",
        })
}

/// A decoded `/api/generate` response.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNoteResponse {
    value: Value,
}

impl ReleaseNoteResponse {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Version tag of the response shape, e.g. `"1.0"`.
    pub fn schema_version(&self) -> Result<&str, ShipNoteError> {
        extract_str(&self.value, "schema_version")
    }

    /// One entry of the `sections` mapping. Sections are string-or-structured
    /// by contract, so this returns the raw value. The name is used as a
    /// literal key, not a path, so names containing `.` work.
    pub fn section(&self, name: &str) -> Result<&Value, ShipNoteError> {
        let sections = extract_field(&self.value, "sections")?;
        let object = sections
            .as_object()
            .ok_or_else(|| ShipNoteError::UnexpectedType {
                path: "sections".to_string(),
                expected: "object",
            })?;
        object.get(name).ok_or_else(|| ShipNoteError::MissingField {
            path: format!("sections.{name}"),
        })
    }

    /// The `sections.what_shipped` text, the field every caller wants.
    pub fn what_shipped(&self) -> Result<&str, ShipNoteError> {
        extract_str(&self.value, "sections.what_shipped")
    }

    /// Full markdown draft, when the service included one.
    pub fn markdown(&self) -> Option<&str> {
        self.value.get("markdown").and_then(Value::as_str)
    }

    /// Generic dot-path lookup into the response.
    pub fn extract(&self, path: &str) -> Result<&Value, ShipNoteError> {
        extract_field(&self.value, path)
    }

    /// The whole decoded body, for callers that want fields this client has
    /// no accessor for.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
