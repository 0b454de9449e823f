//! Page chrome shared by every view

use super::escape;

/// Navigation section a page belongs to; picks the navbar search target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Venues,
    Artists,
    Shows,
}

impl Section {
    fn search_action(self) -> Option<(&'static str, &'static str)> {
        match self {
            Section::Home => None,
            Section::Venues => Some(("/venues/search", "Find a venue")),
            Section::Artists => Some(("/artists/search", "Find an artist")),
            Section::Shows => Some(("/shows/search", "Find an upcoming show")),
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;color:#222}\
nav{background:#1d1f21;padding:12px 24px}nav a{color:#eee;margin-right:16px;text-decoration:none}\
nav form{display:inline;float:right}main{padding:24px;max-width:960px;margin:auto}\
.notice{background:#fff4d6;border:1px solid #e8c66a;padding:8px 12px;margin-bottom:8px}\
.genre{background:#eef;border-radius:4px;padding:2px 6px;font-size:0.85em}\
.thumb{max-width:80px;max-height:80px}.text-muted{color:#888}\
.field{margin-bottom:12px}.field label{display:block;font-weight:bold}";

/// Wrap a rendered body in the site layout
pub fn page(title: &str, section: Section, notices: &[String], body: &str) -> String {
    let search = match section.search_action() {
        Some((action, placeholder)) => format!(
            r#"<form method="post" action="{}"><input type="search" name="search_term" placeholder="{}"><button type="submit">Search</button></form>"#,
            action, placeholder
        ),
        None => String::new(),
    };

    let notices: String = notices
        .iter()
        .map(|n| format!(r#"<div class="notice" role="status">{}</div>"#, escape(n)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Marquee</title>
<style>{style}</style>
</head>
<body>
<nav>
<a href="/">Marquee</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
{search}
</nav>
<main>
{notices}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        search = search,
        notices = notices,
        body = body,
    )
}
