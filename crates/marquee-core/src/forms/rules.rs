//! Field rules shared by every form

use super::FieldErrors;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_TEXT: usize = 120;
pub const MAX_IMAGE_LINK: usize = 500;
pub const MAX_GENRE: usize = 130;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_URL: &str = "Invalid URL.";
pub const INVALID_PHONE: &str = "Invalid phone number.";
pub const INVALID_CHOICE: &str = "Not a valid choice.";

pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)https?://[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9-]+)*(?::\d{1,5})?(?:[/?#]\S*)?$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]{7,20}$").unwrap());

pub fn required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
}

pub fn max_len(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("Field cannot be longer than {} characters.", max));
    }
}

/// Blank links are allowed; anything else must be an absolute http(s) URL
pub fn link(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.is_empty() {
        return;
    }
    max_len(errors, field, value, max);
    if !URL_RE.is_match(value) {
        errors.add(field, INVALID_URL);
    }
}

pub fn phone(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_RE.is_match(value) || digits < 7 {
        errors.add(field, INVALID_PHONE);
    }
}

pub fn state(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if !US_STATES.contains(&value) {
        errors.add(field, INVALID_CHOICE);
    }
}

/// Keep known genres as an ordered set (first occurrence wins)
pub fn genres(errors: &mut FieldErrors, field: &str, values: &[&str]) -> Vec<String> {
    let mut picked: Vec<String> = Vec::new();
    for raw in values {
        let value = raw.trim();
        if value.is_empty() {
            continue;
        }
        if value.chars().count() > MAX_GENRE || !GENRES.contains(&value) {
            errors.add(field, format!("'{}' is {}", value, INVALID_CHOICE.to_lowercase()));
            continue;
        }
        if !picked.iter().any(|g| g == value) {
            picked.push(value.to_string());
        }
    }
    picked
}
