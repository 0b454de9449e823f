//! Form parsing and validation
//!
//! Submissions arrive as ordered key/value pairs (repeated keys carry
//! multi-selects). Each form captures the raw values so a page can be
//! re-rendered, and `validate` turns them into a typed input or a full set of
//! per-field errors. Nothing here touches the store.

mod artist;
pub mod rules;
mod show;
mod venue;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

use serde::{Deserialize, Serialize};

/// Decoded `application/x-www-form-urlencoded` body
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `key`, in submission order
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Trimmed value, empty when absent
    pub fn text(&self, key: &str) -> String {
        self.first(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Checkbox state; an absent box is unchecked
    pub fn checked(&self, key: &str) -> bool {
        matches!(
            self.first(key).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes" | "on" | "true" | "1")
        )
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Validation errors keyed by field, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.fields.push((field.to_string(), vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// One user-facing notice per field
    pub fn notices(&self) -> Vec<String> {
        self.iter()
            .map(|(field, messages)| format!("Error {}: {}", field, messages.join(" | ")))
            .collect()
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields.iter().map(|(name, _)| name.as_str()).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// `None` for a blank value
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_repeated_keys_are_kept_in_order() {
        let form = data(&[("genres", "Jazz"), ("name", "x"), ("genres", "Blues")]);
        assert_eq!(form.all("genres"), vec!["Jazz", "Blues"]);
        assert_eq!(form.first("genres"), Some("Jazz"));
        assert!(form.all("missing").is_empty());
    }

    #[test]
    fn test_checkbox_values() {
        assert!(data(&[("seeking", "y")]).checked("seeking"));
        assert!(data(&[("seeking", "on")]).checked("seeking"));
        assert!(data(&[("seeking", "True")]).checked("seeking"));
        assert!(!data(&[("seeking", "")]).checked("seeking"));
        assert!(!data(&[]).checked("seeking"));
    }

    #[test]
    fn test_field_errors_collect_per_field() {
        let mut errors = FieldErrors::default();
        errors.add("name", "This field is required.");
        errors.add("phone", "Invalid phone number.");
        errors.add("name", "Field cannot be longer than 120 characters.");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name").map(|m| m.len()), Some(2));
        assert_eq!(
            errors.notices()[0],
            "Error name: This field is required. | Field cannot be longer than 120 characters."
        );
        assert_eq!(errors.to_string(), "name, phone");
    }
}
