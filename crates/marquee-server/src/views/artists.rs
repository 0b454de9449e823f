//! Artist pages

use marquee_core::{ArtistDetail, ArtistSummary, BookedVenue, ListingEntry, SearchResults};

use super::{escape, escape_opt, format_datetime, genre_badges, image, link_or_dash, DateStyle};

pub fn listing(artists: &[ArtistSummary]) -> String {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape(&a.name)))
        .collect();
    format!(
        r#"<h1>Artists</h1><p><a href="/artists/create">List a new artist</a></p><ul>{}</ul>"#,
        items
    )
}

pub fn search_results(results: &SearchResults<ListingEntry>) -> String {
    let items: String = results
        .data
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <small>{} upcoming shows</small></li>"#,
                a.id,
                escape(&a.name),
                a.upcoming_shows_count
            )
        })
        .collect();
    format!(
        r#"<h1>Artists</h1><p>Number of search results for "{}": {}</p><ul>{}</ul>"#,
        escape(&results.search_term),
        results.count,
        items
    )
}

fn booked(shows: &[BookedVenue]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<li>{} <a href="/venues/{}">{}</a> <a href="/shows/{}">{}</a> {}</li>"#,
                image(s.venue_image_link.as_deref(), &s.venue_name),
                s.venue_id,
                escape(&s.venue_name),
                s.show_id,
                escape_opt(s.show_name.as_deref()),
                format_datetime(s.start_time, DateStyle::Full)
            )
        })
        .collect()
}

pub fn detail(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><strong>Currently seeking performance venues</strong><p>{}</p></div>"#,
            escape_opt(artist.seeking_description.as_deref())
        )
    } else {
        r#"<p class="text-muted">Not currently seeking performance venues</p>"#.to_string()
    };

    format!(
        r#"<h1>{name}</h1>
<p class="text-muted">ID: {id}</p>
<p>{genres}</p>
<p>{city}, {state}</p>
<p>Phone: {phone}</p>
<p>Website: {website}</p>
<p>Facebook: {facebook}</p>
{seeking}
{picture}
<p><a href="/artists/{id}/edit">Edit</a></p>
<form method="post" action="/artists/{id}"><button type="submit">Delete artist</button></form>
<h2>{upcoming_count} Upcoming Shows</h2>
<ul>{upcoming}</ul>
<h2>{past_count} Past Shows</h2>
<ul>{past}</ul>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_badges(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = link_or_dash(artist.website_link.as_deref()),
        facebook = link_or_dash(artist.facebook_link.as_deref()),
        seeking = seeking,
        picture = image(artist.image_link.as_deref(), &artist.name),
        upcoming_count = detail.shows.upcoming_count(),
        upcoming = booked(&detail.shows.upcoming),
        past_count = detail.shows.past_count(),
        past = booked(&detail.shows.past),
    )
}
