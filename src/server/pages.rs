//! Placeholder HTML for the page routes.

use axum::http::Uri;
use axum::response::Html;

/// Page routes behind the route guard, with their titles.
pub const GUARDED_PAGES: [(&str, &str); 5] = [
    ("/dashboard", "Dashboard"),
    ("/marketing", "Marketing"),
    ("/library", "Library"),
    ("/pre-homepage", "Welcome"),
    ("/usermanagement", "User Management"),
];

fn title_for(path: &str) -> &'static str {
    GUARDED_PAGES
        .iter()
        .find(|(prefix, _)| path == *prefix || path.starts_with(&format!("{}/", prefix)))
        .map(|(_, title)| *title)
        .unwrap_or("Marklee")
}

/// Only static titles reach the markup; the request path never does.
fn render(title: &'static str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{title} | Marklee</title></head>\
         <body><h1>{title}</h1></body></html>\n"
    ))
}

pub async fn home() -> Html<String> {
    render("Marklee")
}

pub async fn page(uri: Uri) -> Html<String> {
    render(title_for(uri.path()))
}
