//! Router-level tests: routing, redirects, flash notices and error pages

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use common::{artist, at, setup, show, venue};
use marquee_core::{ArtistStore, ShowStore, VenueStore};
use marquee_server::build_router;
use marquee_server::storage::Database;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot` method

async fn setup_app() -> (Arc<Database>, Router) {
    let (db, state) = setup().await;
    (db, build_router(state, Duration::from_secs(5)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` part of the flash cookie set by a redirect
fn flash_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("marquee_flash="))
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string())
}

async fn follow(app: &Router, redirect: &Response) -> String {
    let mut request = get(location(redirect));
    if let Some(cookie) = flash_cookie(redirect) {
        request
            .headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
    }
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_db, app) = setup_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_home_lists_recent_records() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    let band = db.create_artist(&artist("Guns N Petals")).await.unwrap();
    db.create_show(&show(band, hop, at(2024, 7, 1, 20, 0))).await.unwrap();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("The Musical Hop"));
    assert!(html.contains("Guns N Petals"));
    assert!(html.contains("Mon 07, 01, 2024 8:00PM"));
}

#[tokio::test]
async fn test_venue_listing_groups_by_city() {
    let (db, app) = setup_app().await;
    db.create_venue(&venue("Stubb's", "Austin", "TX")).await.unwrap();
    db.create_venue(&venue("Mohawk", "Austin", "TX")).await.unwrap();

    let html = body_text(app.oneshot(get("/venues")).await.unwrap()).await;
    assert_eq!(html.matches("Austin, TX").count(), 1);
    assert!(html.contains("Stubb&#x27;s"));
    assert!(html.contains("Mohawk"));
}

#[tokio::test]
async fn test_venue_search_is_case_insensitive() {
    let (db, app) = setup_app().await;
    db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    db.create_venue(&venue("Park Square", "San Francisco", "CA")).await.unwrap();

    let html = body_text(app.clone().oneshot(post_form("/venues/search", "search_term=HOP")).await.unwrap()).await;
    assert!(html.contains(r#"search results for "HOP": 1"#));
    assert!(html.contains("The Musical Hop"));
    assert!(!html.contains("Park Square"));

    let html = body_text(app.oneshot(post_form("/venues/search", "search_term=")).await.unwrap()).await;
    assert!(html.contains(r#"search results for "": 2"#));
}

#[tokio::test]
async fn test_create_venue_with_blank_name_is_rejected() {
    let (db, app) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", "name=&city=Austin&state=TX"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/venues/create");
    assert_eq!(db.count_venues().await.unwrap(), 0);

    let html = follow(&app, &response).await;
    assert!(html.contains("Error name: This field is required."));
}

#[tokio::test]
async fn test_create_venue_then_flash_is_shown_once() {
    let (db, app) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/venues/create",
            "name=The+Dakota&city=New+York&state=NY&genres=Jazz&genres=Blues&seeking_talent=y",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/venues");
    assert_eq!(db.count_venues().await.unwrap(), 1);

    let venues = db.list_venues().await.unwrap();
    assert_eq!(venues[0].genres, vec!["Jazz".to_string(), "Blues".to_string()]);
    assert!(venues[0].seeking_talent);

    let mut request = get("/venues");
    let cookie = flash_cookie(&response).expect("Should set flash cookie");
    request.headers_mut().insert(header::COOKIE, cookie.parse().unwrap());
    let page = app.clone().oneshot(request).await.unwrap();

    let cleared = page
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("marquee_flash=;") && v.contains("Max-Age=0"));
    assert!(cleared);
    assert!(body_text(page).await.contains("Venue The Dakota was successfully listed!"));

    let html = body_text(app.oneshot(get("/venues")).await.unwrap()).await;
    assert!(!html.contains("successfully listed"));
}

#[tokio::test]
async fn test_edit_venue_prefills_and_updates() {
    let (db, app) = setup_app().await;
    let id = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();

    let html = body_text(app.clone().oneshot(get(&format!("/venues/{}/edit", id))).await.unwrap()).await;
    assert!(html.contains(r#"value="The Musical Hop""#));

    let response = app
        .clone()
        .oneshot(post_form(&format!("/venues/{}/edit", id), "name=The+Hop&city=Oakland&state=CA"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/venues/{}", id));

    let html = follow(&app, &response).await;
    assert!(html.contains("Venue The Hop was successfully updated!"));
    assert_eq!(db.get_venue(id).await.unwrap().unwrap().city, "Oakland");
}

#[tokio::test]
async fn test_edit_missing_venue_is_not_found() {
    let (_db, app) = setup_app().await;
    let response = app
        .oneshot(post_form("/venues/99/edit", "name=Ghost&city=Austin&state=TX"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_removes_its_shows() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    let band = db.create_artist(&artist("Guns N Petals")).await.unwrap();
    db.create_show(&show(band, hop, at(2024, 7, 1, 20, 0))).await.unwrap();

    let response = app.clone().oneshot(post_form(&format!("/venues/{}", hop), "")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(db.count_venues().await.unwrap(), 0);
    assert_eq!(db.count_shows().await.unwrap(), 0);
    assert_eq!(db.count_artists().await.unwrap(), 1);

    let html = follow(&app, &response).await;
    assert!(html.contains("The Musical Hop is deleted successfully"));
}

#[tokio::test]
async fn test_unknown_pages_render_not_found() {
    let (_db, app) = setup_app().await;
    for uri in ["/venues/404", "/artists/404", "/shows/404", "/shows/404/edit", "/nowhere"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
        assert!(body_text(response).await.contains("404"));
    }
}

#[tokio::test]
async fn test_show_search_excludes_past_shows() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    let band = db.create_artist(&artist("Guns N Petals")).await.unwrap();
    let mut old = show(band, hop, at(2019, 5, 21, 21, 30));
    old.name = Some("Reunion Past".to_string());
    db.create_show(&old).await.unwrap();
    let mut upcoming = show(band, hop, at(2024, 7, 1, 20, 0));
    upcoming.name = Some("Reunion Tour".to_string());
    db.create_show(&upcoming).await.unwrap();

    let html = body_text(app.oneshot(post_form("/shows/search", "search_term=reunion")).await.unwrap()).await;
    assert!(html.contains(r#"search results for "reunion": 1"#));
    assert!(html.contains("Reunion Tour"));
    assert!(!html.contains("Reunion Past"));
}

#[tokio::test]
async fn test_create_show_for_missing_artist_fails_softly() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();

    let body = format!("artist_id=77&venue_id={}&start_time=2024-07-01+20%3A00", hop);
    let response = app.clone().oneshot(post_form("/shows/create", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(db.count_shows().await.unwrap(), 0);

    let html = follow(&app, &response).await;
    assert!(html.contains("An error occurred. Show could not be listed."));
}

#[tokio::test]
async fn test_create_show_and_view_detail() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    let band = db.create_artist(&artist("Guns N Petals")).await.unwrap();

    let body = format!("artist_id={}&venue_id={}&start_time=2024-07-01T20%3A00", band, hop);
    let response = app.clone().oneshot(post_form("/shows/create", &body)).await.unwrap();
    assert_eq!(location(&response), "/");
    assert_eq!(db.count_shows().await.unwrap(), 1);

    let id = db.list_shows().await.unwrap()[0].id;
    let html = body_text(app.oneshot(get(&format!("/shows/{}", id))).await.unwrap()).await;
    assert!(html.contains("Guns N Petals at The Musical Hop"));
    assert!(html.contains("Monday July, 1, 2024 at 8:00PM"));
}

#[tokio::test]
async fn test_delete_artist_and_show_routes() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    let band = db.create_artist(&artist("Guns N Petals")).await.unwrap();
    let keep = db.create_artist(&artist("Matt Quevedo")).await.unwrap();
    db.create_show(&show(band, hop, at(2024, 7, 1, 20, 0))).await.unwrap();
    let other = db.create_show(&show(keep, hop, at(2024, 8, 1, 20, 0))).await.unwrap();

    let response = app.clone().oneshot(post_form(&format!("/shows/{}", other), "")).await.unwrap();
    assert_eq!(location(&response), "/shows");
    assert_eq!(db.count_shows().await.unwrap(), 1);

    let response = app.clone().oneshot(post_form(&format!("/artists/{}", band), "")).await.unwrap();
    assert_eq!(location(&response), "/");
    assert_eq!(db.count_shows().await.unwrap(), 0);
    assert_eq!(db.count_artists().await.unwrap(), 1);

    let response = app.oneshot(post_form("/artists/404", "")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_show_detail_lists_artist_and_venue_fields() {
    let (db, app) = setup_app().await;
    let mut hop = venue("The Musical Hop", "San Francisco", "CA");
    hop.phone = Some("123-123-1234".to_string());
    hop.website_link = Some("https://www.themusicalhop.com".to_string());
    hop.image_link = Some("https://images.example.com/hop.jpg".to_string());
    let venue_id = db.create_venue(&hop).await.unwrap();

    let mut petals = artist("Guns N Petals");
    petals.facebook_link = Some("https://www.facebook.com/GunsNPetals".to_string());
    let artist_id = db.create_artist(&petals).await.unwrap();
    let id = db.create_show(&show(artist_id, venue_id, at(2024, 7, 1, 20, 0))).await.unwrap();

    let response = app.oneshot(get(&format!("/shows/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    for expected in [
        "123-123-1234",
        "https://www.themusicalhop.com",
        "https://images.example.com/hop.jpg",
        "Jazz",
        "326-123-5000",
        "https://www.facebook.com/GunsNPetals",
        "Rock n Roll",
        "San Francisco, CA",
    ] {
        assert!(html.contains(expected), "show page is missing {}", expected);
    }
}

#[tokio::test]
async fn test_unnamed_shows_are_linked_in_listing() {
    let (db, app) = setup_app().await;
    let hop = db.create_venue(&venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    let band = db.create_artist(&artist("Guns N Petals")).await.unwrap();
    let id = db.create_show(&show(band, hop, at(2024, 7, 1, 20, 0))).await.unwrap();

    let html = body_text(app.oneshot(get("/shows")).await.unwrap()).await;
    assert!(html.contains(&format!(r#"<a href="/shows/{}">Guns N Petals at The Musical Hop</a>"#, id)));
    assert!(!html.contains(&format!(r#"<a href="/shows/{}"></a>"#, id)));
}

#[tokio::test]
async fn test_rename_artist_to_taken_name_fails_softly() {
    let (db, app) = setup_app().await;
    db.create_artist(&artist("Alice")).await.unwrap();
    let bob_id = db.create_artist(&artist("Bob")).await.unwrap();
    let before = db.get_artist(bob_id).await.unwrap().unwrap();

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("/artists/{}/edit", bob_id),
            "name=Alice&city=Austin&state=TX&phone=555-0100",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/artists/{}", bob_id));
    assert_eq!(db.get_artist(bob_id).await.unwrap().unwrap(), before);

    let html = follow(&app, &response).await;
    assert!(html.contains("An error occurred. Artist Alice could not be updated."));
    assert!(!html.contains("successfully updated"));
}
