//! Structured fields attached to log records
//!
//! This module provides:
//! - `FieldValue`: the closed set of value kinds a field can carry
//! - `Field`: a single key/value pair with typed constructors
//! - `FieldSet`: an order-preserving field sequence with overlay semantics

use std::fmt;
use std::time::Duration;

/// Escape line breaks and tabs so a value can never split a record across
/// output lines or forge a second record.
pub(crate) fn sanitize_text(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Value kinds for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Duration(Duration),
    /// Any other value, rendered through `Display` at attachment time
    Rendered(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Duration(d) => write!(f, "{:?}", d),
            FieldValue::Rendered(s) => write!(f, "{}", s),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON rendering
    ///
    /// Durations serialize as fractional seconds.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Duration(d) => serde_json::Number::from_f64(d.as_secs_f64())
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Rendered(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(sanitize_text(&s))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(sanitize_text(s))
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::Duration(d)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Rendered(b.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Rendered(f.to_string())
    }
}

/// A named piece of structured context attached to a log record
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, value.into())
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, value)
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, value)
    }

    /// Attach any `Display`-able value, rendered eagerly.
    pub fn display(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Rendered(sanitize_text(&value.to_string())),
        }
    }
}

/// Shorthand for [`Field::new`]
pub fn field<K, V>(key: K, value: V) -> Field
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    Field::new(key, value)
}

/// An order-preserving sequence of fields
///
/// Overlaying a field whose key is already present replaces the value in
/// place, keeping the position of the first occurrence. New keys append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut set = Self::new();
        set.overlay_all(fields);
        set
    }

    /// Insert or replace a single field.
    pub fn overlay(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.key == field.key) {
            Some(existing) => existing.value = field.value,
            None => self.fields.push(field),
        }
    }

    /// Insert or replace each field in order; later entries win.
    pub fn overlay_all(&mut self, fields: impl IntoIterator<Item = Field>) {
        for field in fields {
            self.overlay(field);
        }
    }

    /// Non-destructive merge: the receiver is cloned and the overrides are
    /// overlaid on top of it.
    #[must_use]
    pub fn merged(&self, overrides: impl IntoIterator<Item = Field>) -> FieldSet {
        let mut merged = self.clone();
        merged.overlay_all(overrides);
        merged
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}={}", f.key, f.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_set_creation() {
        let set = FieldSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_field_set_preserves_order() {
        let set = FieldSet::from_fields([
            field("user_id", 123),
            field("username", "john_doe"),
            field("active", true),
        ]);

        let keys: Vec<&str> = set.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["user_id", "username", "active"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_overlay_replaces_in_place() {
        let mut set = FieldSet::from_fields([field("a", 1), field("b", 2)]);
        set.overlay(field("a", 9));

        let keys: Vec<&str> = set.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(set.get("a"), Some(&FieldValue::Int(9)));
    }

    #[test]
    fn test_merged_is_non_destructive() {
        let base = FieldSet::from_fields([field("a", 1)]);
        let merged = base.merged([field("a", 2), field("b", 3)]);

        assert_eq!(base.get("a"), Some(&FieldValue::Int(1)));
        assert_eq!(base.len(), 1);
        assert_eq!(merged.get("a"), Some(&FieldValue::Int(2)));
        assert_eq!(merged.get("b"), Some(&FieldValue::Int(3)));
    }

    #[test]
    fn test_format_fields() {
        let set = FieldSet::from_fields([field("key1", "value1"), field("key2", 42)]);

        assert_eq!(set.format_fields(), "key1=value1 key2=42");
    }

    #[test]
    fn test_duration_display() {
        let f = Field::duration("elapsed", Duration::from_millis(250));
        assert_eq!(format!("{}", f.value), "250ms");
    }

    #[test]
    fn test_duration_json_is_seconds() {
        let f = Field::duration("elapsed", Duration::from_millis(1500));
        assert_eq!(f.value.to_json_value(), serde_json::json!(1.5));
    }

    #[test]
    fn test_text_values_are_sanitized() {
        let f = field("note", "line one\nline two");
        assert_eq!(format!("{}", f.value), "line one\\nline two");
    }

    #[test]
    fn test_display_constructor() {
        let f = Field::display("addr", std::net::Ipv4Addr::LOCALHOST);
        assert_eq!(f.value, FieldValue::Rendered("127.0.0.1".to_string()));
    }
}
