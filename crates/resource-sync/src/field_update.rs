//! Tagged Field Updates
//!
//! An update request must tell the server apart "leave as is", "set to"
//! and "clear". Each field is one of those three, and clearing follows a
//! per-field convention on the wire.

use serde::Serialize;
use serde_json::{Map, Value};

/// Update intent for a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T = String> {
    Unchanged,
    SetTo(T),
    Clear,
}

impl FieldUpdate<String> {
    /// Map raw form input: blank input clears, anything else is trimmed
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            FieldUpdate::Clear
        } else {
            FieldUpdate::SetTo(trimmed.to_string())
        }
    }
}

/// How a cleared field is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearing {
    /// Name-like: label value plus `_delete<Field>` flag
    Placeholder(&'static str),
    /// Free text: empty string plus `_delete<Field>` flag
    Empty,
    /// Date / number: empty string, no flag
    Blank,
}

/// Wire description of one editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub wire: &'static str,
    pub clearing: Clearing,
}

impl FieldSpec {
    pub const fn new(wire: &'static str, clearing: Clearing) -> Self {
        Self { wire, clearing }
    }

    /// `remainingWork` -> `_deleteRemainingWork`
    pub fn delete_flag(&self) -> String {
        let mut chars = self.wire.chars();
        match chars.next() {
            Some(first) => format!("_delete{}{}", first.to_uppercase(), chars.as_str()),
            None => "_delete".to_string(),
        }
    }
}

/// JSON body of a `PATCH` request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UpdateBody(Map<String, Value>);

impl UpdateBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain value outside the tagged scheme (e.g. the parent id)
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn field<T: Into<Value>>(mut self, spec: FieldSpec, update: FieldUpdate<T>) -> Self {
        match update {
            FieldUpdate::Unchanged => {}
            FieldUpdate::SetTo(value) => {
                self.0.insert(spec.wire.to_string(), value.into());
            }
            FieldUpdate::Clear => {
                let cleared = match spec.clearing {
                    Clearing::Placeholder(label) => label,
                    Clearing::Empty | Clearing::Blank => "",
                };
                self.0.insert(spec.wire.to_string(), Value::from(cleared));
                if spec.clearing != Clearing::Blank {
                    self.0.insert(spec.delete_flag(), Value::Bool(true));
                }
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec::new("name", Clearing::Placeholder("Unspecified"));
    const NOTES: FieldSpec = FieldSpec::new("remainingWork", Clearing::Empty);
    const NUMBER: FieldSpec = FieldSpec::new("number", Clearing::Blank);

    #[test]
    fn test_from_input() {
        assert_eq!(FieldUpdate::from_input("   "), FieldUpdate::Clear);
        assert_eq!(FieldUpdate::from_input(" Ali "), FieldUpdate::SetTo("Ali".to_string()));
    }

    #[test]
    fn test_delete_flag_name() {
        assert_eq!(NAME.delete_flag(), "_deleteName");
        assert_eq!(NOTES.delete_flag(), "_deleteRemainingWork");
    }

    #[test]
    fn test_clearing_conventions() {
        let body = UpdateBody::new()
            .field(NAME, FieldUpdate::<String>::Clear)
            .field(NOTES, FieldUpdate::<String>::Clear)
            .field(NUMBER, FieldUpdate::<i64>::Clear);

        assert_eq!(body.get("name"), Some(&Value::from("Unspecified")));
        assert_eq!(body.get("_deleteName"), Some(&Value::Bool(true)));
        assert_eq!(body.get("remainingWork"), Some(&Value::from("")));
        assert_eq!(body.get("_deleteRemainingWork"), Some(&Value::Bool(true)));
        assert_eq!(body.get("number"), Some(&Value::from("")));
        assert!(body.get("_deleteNumber").is_none());
    }

    #[test]
    fn test_set_and_unchanged() {
        let body = UpdateBody::new()
            .with("submainId", "p1")
            .field(NAME, FieldUpdate::SetTo("Sara".to_string()))
            .field(NUMBER, FieldUpdate::SetTo(4i64))
            .field(NOTES, FieldUpdate::<String>::Unchanged);

        assert_eq!(
            body.into_value(),
            serde_json::json!({ "submainId": "p1", "name": "Sara", "number": 4 })
        );
    }
}
