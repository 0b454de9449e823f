//! Server-side HTML rendering
//!
//! Pages are plain `String`s built with `format!`. Every value that came from
//! a user passes through `escape` before it lands in markup.

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod layout;
pub mod shows;
pub mod venues;

use chrono::NaiveDateTime;

pub use layout::Section;

/// How much of a timestamp to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Sat 05, 21, 2019 9:30PM`
    Medium,
    /// `Saturday May, 21, 2019 at 9:30PM`
    Full,
}

pub fn format_datetime(value: NaiveDateTime, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Escape text for use in element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn escape_opt(raw: Option<&str>) -> String {
    raw.map(escape).unwrap_or_default()
}

/// Inline link, or a muted placeholder when absent
pub(crate) fn link_or_dash(href: Option<&str>) -> String {
    match href {
        Some(href) => format!(r#"<a href="{0}" target="_blank" rel="noopener">{0}</a>"#, escape(href)),
        None => r#"<span class="text-muted">No link</span>"#.to_string(),
    }
}

pub(crate) fn genre_badges(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn image(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(r#"<img src="{}" alt="{}" class="thumb">"#, escape(src), escape(alt)),
        None => String::new(),
    }
}
