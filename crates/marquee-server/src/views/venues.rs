//! Venue pages

use marquee_core::{BookedArtist, ListingEntry, LocationGroup, SearchResults, VenueDetail};

use super::{escape, escape_opt, format_datetime, genre_badges, image, link_or_dash, DateStyle};

pub fn listing(groups: &[LocationGroup]) -> String {
    if groups.is_empty() {
        return r#"<h1>Venues</h1><p>No venues listed yet. <a href="/venues/create">List one</a>.</p>"#.to_string();
    }

    let sections: String = groups
        .iter()
        .map(|group| {
            format!(
                r#"<section class="location"><h2>{}, {} <small>{} upcoming</small></h2><ul>{}</ul></section>"#,
                escape(&group.city),
                escape(&group.state),
                group.upcoming_shows_count,
                entries(&group.venues)
            )
        })
        .collect();

    format!(
        r#"<h1>Venues</h1><p><a href="/venues/create">List a new venue</a></p>{}"#,
        sections
    )
}

pub fn search_results(results: &SearchResults<ListingEntry>) -> String {
    format!(
        r#"<h1>Venues</h1><p>Number of search results for "{}": {}</p><ul>{}</ul>"#,
        escape(&results.search_term),
        results.count,
        entries(&results.data)
    )
}

fn entries(venues: &[ListingEntry]) -> String {
    venues
        .iter()
        .map(|v| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming shows</small></li>"#,
                v.id,
                escape(&v.name),
                v.upcoming_shows_count
            )
        })
        .collect()
}

fn booked(shows: &[BookedArtist]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<li>{} <a href="/artists/{}">{}</a> <a href="/shows/{}">{}</a> {}</li>"#,
                image(s.artist_image_link.as_deref(), &s.artist_name),
                s.artist_id,
                escape(&s.artist_name),
                s.show_id,
                escape_opt(s.show_name.as_deref()),
                format_datetime(s.start_time, DateStyle::Full)
            )
        })
        .collect()
}

pub fn detail(detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><strong>Currently seeking talent</strong><p>{}</p></div>"#,
            escape_opt(venue.seeking_description.as_deref())
        )
    } else {
        r#"<p class="text-muted">Not currently seeking talent</p>"#.to_string()
    };

    format!(
        r#"<h1>{name}</h1>
<p class="text-muted">ID: {id}</p>
<p>{genres}</p>
<p>{address}, {city}, {state}</p>
<p>Phone: {phone}</p>
<p>Website: {website}</p>
<p>Facebook: {facebook}</p>
{seeking}
{picture}
<p><a href="/venues/{id}/edit">Edit</a></p>
<form method="post" action="/venues/{id}"><button type="submit">Delete venue</button></form>
<h2>{upcoming_count} Upcoming Shows</h2>
<ul>{upcoming}</ul>
<h2>{past_count} Past Shows</h2>
<ul>{past}</ul>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_badges(&venue.genres),
        address = escape_opt(venue.address.as_deref()),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape_opt(venue.phone.as_deref()),
        website = link_or_dash(venue.website_link.as_deref()),
        facebook = link_or_dash(venue.facebook_link.as_deref()),
        seeking = seeking,
        picture = image(venue.image_link.as_deref(), &venue.name),
        upcoming_count = detail.shows.upcoming_count(),
        upcoming = booked(&detail.shows.upcoming),
        past_count = detail.shows.past_count(),
        past = booked(&detail.shows.past),
    )
}
