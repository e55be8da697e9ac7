//! Offline `pages` and `guard` commands.

use crate::domain::pagination::{compute_visible_pages, format_page_window};
use crate::domain::route_guard::{classify, decide, RouteClass};

/// Render the page window, e.g. `1 ... 3 4 5 6 7 ... 10`.
pub fn render_pages(current: u32, total: u32, max_visible: u32) -> String {
    format_page_window(&compute_visible_pages(current, total, max_visible))
}

/// Render the guard decision with the route class.
pub fn render_guard(path: &str, claim: Option<&str>) -> String {
    let class = match classify(path) {
        RouteClass::UserRoute => "user route",
        RouteClass::AdminRoute => "admin route",
        RouteClass::Unclassified => "unclassified",
    };
    format!("{} ({}): {}", path, class, decide(path, claim))
}
