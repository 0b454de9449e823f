//! Show pages

use marquee_core::{Artist, SearchResults, ShowDetail, ShowListing, Venue};

use super::{escape, escape_opt, format_datetime, genre_badges, image, link_or_dash, DateStyle};

/// Show name, or "artist at venue" for unnamed shows
fn title(show_name: Option<&str>, artist_name: &str, venue_name: &str) -> String {
    match show_name {
        Some(name) => escape(name),
        None => format!("{} at {}", escape(artist_name), escape(venue_name)),
    }
}

fn rows(shows: &[ShowListing]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<li>{picture} <a href="/shows/{id}">{name}</a> <a href="/artists/{artist_id}">{artist}</a> at <a href="/venues/{venue_id}">{venue}</a> <small>{when}</small></li>"#,
                picture = image(s.artist_image_link.as_deref(), &s.artist_name),
                id = s.id,
                name = title(s.show_name.as_deref(), &s.artist_name, &s.venue_name),
                artist_id = s.artist_id,
                artist = escape(&s.artist_name),
                venue_id = s.venue_id,
                venue = escape(&s.venue_name),
                when = format_datetime(s.start_time, DateStyle::Medium),
            )
        })
        .collect()
}

pub fn listing(shows: &[ShowListing]) -> String {
    format!(
        r#"<h1>Shows</h1><p><a href="/shows/create">List a new show</a></p><ul>{}</ul>"#,
        rows(shows)
    )
}

pub fn search_results(results: &SearchResults<ShowListing>) -> String {
    format!(
        r#"<h1>Upcoming shows</h1><p>Number of search results for "{}": {}</p><ul>{}</ul>"#,
        escape(&results.search_term),
        results.count,
        rows(&results.data)
    )
}

fn artist_card(artist: &Artist) -> String {
    format!(
        r#"<section class="artist">
<h2>Artist: <a href="/artists/{id}">{name}</a></h2>
{picture}
<p>{genres}</p>
<p>{city}, {state}</p>
<p>Phone: {phone}</p>
<p>Website: {website}</p>
<p>Facebook: {facebook}</p>
</section>"#,
        id = artist.id,
        name = escape(&artist.name),
        picture = image(artist.image_link.as_deref(), &artist.name),
        genres = genre_badges(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = link_or_dash(artist.website_link.as_deref()),
        facebook = link_or_dash(artist.facebook_link.as_deref()),
    )
}

fn venue_card(venue: &Venue) -> String {
    format!(
        r#"<section class="venue">
<h2>Venue: <a href="/venues/{id}">{name}</a></h2>
{picture}
<p>{genres}</p>
<p>{city}, {state}</p>
<p>Phone: {phone}</p>
<p>Website: {website}</p>
<p>Facebook: {facebook}</p>
</section>"#,
        id = venue.id,
        name = escape(&venue.name),
        picture = image(venue.image_link.as_deref(), &venue.name),
        genres = genre_badges(&venue.genres),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape_opt(venue.phone.as_deref()),
        website = link_or_dash(venue.website_link.as_deref()),
        facebook = link_or_dash(venue.facebook_link.as_deref()),
    )
}

pub fn detail(detail: &ShowDetail) -> String {
    let show = &detail.show;

    format!(
        r#"<h1>{title}</h1>
<p class="text-muted">ID: {id}</p>
<p>{when}</p>
{artist}
{venue}
<p><a href="/shows/{id}/edit">Edit</a></p>
<form method="post" action="/shows/{id}"><button type="submit">Delete show</button></form>"#,
        title = title(show.name.as_deref(), &detail.artist.name, &detail.venue.name),
        id = show.id,
        when = format_datetime(show.start_time, DateStyle::Full),
        artist = artist_card(&detail.artist),
        venue = venue_card(&detail.venue),
    )
}
