//! Error pages

pub fn not_found() -> String {
    r#"<h1>404</h1><p>Sorry, we couldn't find that page.</p><p><a href="/">Back home</a></p>"#.to_string()
}

pub fn server_error() -> String {
    r#"<h1>500</h1><p>Something went wrong on our end. Please try again.</p><p><a href="/">Back home</a></p>"#
        .to_string()
}
