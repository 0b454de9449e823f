//! Landing page

use marquee_core::HomeFeed;

use super::{escape, format_datetime, DateStyle};

pub fn home(feed: &HomeFeed) -> String {
    let shows: String = feed
        .shows
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> at <a href="/venues/{}">{}</a> <small>{}</small></li>"#,
                s.artist_id,
                escape(&s.artist_name),
                s.venue_id,
                escape(&s.venue_name),
                format_datetime(s.start_time, DateStyle::Medium)
            )
        })
        .collect();
    let artists: String = feed
        .artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape(&a.name)))
        .collect();
    let venues: String = feed
        .venues
        .iter()
        .map(|v| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <small>{}, {}</small></li>"#,
                v.id,
                escape(&v.name),
                escape(&v.city),
                escape(&v.state)
            )
        })
        .collect();

    format!(
        r#"<h1>Marquee</h1>
<p>Find venues, artists and shows near you.</p>
<section><h2>Recently listed shows</h2><ul>{}</ul></section>
<section><h2>Recently listed artists</h2><ul>{}</ul></section>
<section><h2>Recently listed venues</h2><ul>{}</ul></section>"#,
        shows, artists, venues
    )
}
