//! Create and edit forms for every record kind
//!
//! Forms render from the raw `*Form` values so a rejected submission can be
//! shown again exactly as typed.

use marquee_core::forms::rules::{GENRES, US_STATES};
use marquee_core::{ArtistForm, ShowForm, VenueForm};

use super::escape;

/// Where the form posts and what the submit button says
#[derive(Debug, Clone)]
pub struct FormTarget {
    pub action: String,
    pub heading: String,
    pub submit: &'static str,
}

impl FormTarget {
    pub fn create(kind: &str, action: &str) -> Self {
        Self {
            action: action.to_string(),
            heading: format!("List a new {}", kind.to_lowercase()),
            submit: "Create",
        }
    }

    pub fn edit(name: &str, action: String) -> Self {
        Self {
            action,
            heading: format!("Edit {}", name),
            submit: "Save",
        }
    }
}

fn text_field(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" value="{value}"></div>"#,
        name = name,
        label = label,
        value = escape(value),
    )
}

fn state_field(value: &str) -> String {
    let options: String = US_STATES
        .iter()
        .map(|s| {
            let selected = if *s == value { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, s, selected)
        })
        .collect();
    format!(
        r#"<div class="field"><label for="state">State</label><select id="state" name="state"><option value="">Select a state</option>{}</select></div>"#,
        options
    )
}

fn genres_field(selected: &[String]) -> String {
    let options: String = GENRES
        .iter()
        .map(|g| {
            let mark = if selected.iter().any(|s| s == g) { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, escape(g), mark)
        })
        .collect();
    format!(
        r#"<div class="field"><label for="genres">Genres</label><select id="genres" name="genres" multiple size="8">{}</select></div>"#,
        options
    )
}

fn checkbox_field(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<div class="field"><label><input type="checkbox" name="{}" value="y"{}> {}</label></div>"#,
        name,
        if checked { " checked" } else { "" },
        label
    )
}

fn textarea_field(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label><textarea id="{name}" name="{name}" rows="3">{value}</textarea></div>"#,
        name = name,
        label = label,
        value = escape(value),
    )
}

fn wrap(target: &FormTarget, fields: &[String]) -> String {
    format!(
        r#"<h1>{}</h1>
<form method="post" action="{}">
{}
<button type="submit">{}</button>
</form>"#,
        escape(&target.heading),
        escape(&target.action),
        fields.join("\n"),
        target.submit
    )
}

pub fn venue_form(target: &FormTarget, form: &VenueForm) -> String {
    wrap(
        target,
        &[
            text_field("name", "Name", &form.name),
            text_field("city", "City", &form.city),
            state_field(&form.state),
            text_field("address", "Address", &form.address),
            text_field("phone", "Phone", &form.phone),
            genres_field(&form.genres),
            text_field("image_link", "Image link", &form.image_link),
            text_field("facebook_link", "Facebook link", &form.facebook_link),
            text_field("website_link", "Website", &form.website_link),
            checkbox_field("seeking_talent", "Looking for talent", form.seeking_talent),
            textarea_field("seeking_description", "Seeking description", &form.seeking_description),
        ],
    )
}

pub fn artist_form(target: &FormTarget, form: &ArtistForm) -> String {
    wrap(
        target,
        &[
            text_field("name", "Name", &form.name),
            text_field("city", "City", &form.city),
            state_field(&form.state),
            text_field("phone", "Phone", &form.phone),
            genres_field(&form.genres),
            text_field("image_link", "Image link", &form.image_link),
            text_field("facebook_link", "Facebook link", &form.facebook_link),
            text_field("website_link", "Website", &form.website_link),
            checkbox_field("seeking_venue", "Looking for venues", form.seeking_venue),
            textarea_field("seeking_description", "Seeking description", &form.seeking_description),
        ],
    )
}

pub fn show_form(target: &FormTarget, form: &ShowForm) -> String {
    wrap(
        target,
        &[
            text_field("name", "Show name", &form.name),
            text_field("artist_id", "Artist ID", &form.artist_id),
            text_field("venue_id", "Venue ID", &form.venue_id),
            text_field("start_time", "Start time (YYYY-MM-DD HH:MM)", &form.start_time),
        ],
    )
}
