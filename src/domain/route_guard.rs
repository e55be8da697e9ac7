//! Role-based route guard.
//!
//! A single decision table shared by the HTTP middleware in front of the
//! page routes and by client-side access checks. The guard is fail-closed:
//! a missing or unreadable role claim always redirects to `/`.

use serde::Deserialize;

use super::role::Role;

/// Route prefixes reserved for regular users.
pub const USER_ROUTES: [&str; 4] = ["/dashboard", "/marketing", "/library", "/pre-homepage"];

/// Route prefixes reserved for administrators.
pub const ADMIN_ROUTES: [&str; 1] = ["/usermanagement"];

/// Landing page for unauthenticated visitors.
pub const HOME_PATH: &str = "/";

/// Landing page for regular users.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Landing page for administrators.
pub const USER_MANAGEMENT_PATH: &str = "/usermanagement";

/// Name of the cookie carrying the JSON role claim.
pub const USER_COOKIE: &str = "user";

/// Which route group a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Dashboard, marketing, library and pre-homepage pages
    UserRoute,
    /// User management console
    AdminRoute,
    /// Anything else (home page, static assets, ...)
    Unclassified,
}

/// Outcome of a guard decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through
    Allow,
    /// Redirect to the given path
    RedirectTo(String),
}

impl GuardDecision {
    /// Check if the request is allowed through.
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Get the redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectTo(target) => Some(target),
        }
    }
}

impl std::fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardDecision::Allow => write!(f, "allow"),
            GuardDecision::RedirectTo(target) => write!(f, "redirect {}", target),
        }
    }
}

/// Role claim carried in the `user` cookie.
///
/// Any other fields in the cookie payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleClaim {
    pub role: Role,
}

impl RoleClaim {
    /// Parse a claim from its JSON form.
    ///
    /// Returns `None` for anything that is not a JSON object with a string
    /// `role` field.
    pub fn parse(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

/// Check whether `path` is `prefix` or lies beneath it.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Classify a request path into a route group.
///
/// Matching is segment-aware so `/dashboards` is not a dashboard route.
/// When several prefixes match, the longest one wins.
pub fn classify(path: &str) -> RouteClass {
    let best_user = USER_ROUTES
        .iter()
        .filter(|prefix| matches_prefix(path, prefix))
        .map(|prefix| prefix.len())
        .max();
    let best_admin = ADMIN_ROUTES
        .iter()
        .filter(|prefix| matches_prefix(path, prefix))
        .map(|prefix| prefix.len())
        .max();

    match (best_user, best_admin) {
        (None, None) => RouteClass::Unclassified,
        (Some(_), None) => RouteClass::UserRoute,
        (None, Some(_)) => RouteClass::AdminRoute,
        (Some(user), Some(admin)) => {
            if admin >= user {
                RouteClass::AdminRoute
            } else {
                RouteClass::UserRoute
            }
        }
    }
}

/// Decide whether a request for `path` may proceed.
///
/// `role_claim_json` is the raw JSON from the `user` cookie. Absent or
/// malformed claims redirect to the home page.
pub fn decide(path: &str, role_claim_json: Option<&str>) -> GuardDecision {
    let Some(claim) = role_claim_json.and_then(RoleClaim::parse) else {
        return GuardDecision::RedirectTo(HOME_PATH.to_string());
    };
    decide_for_role(path, claim.role)
}

/// Decide for an already-decoded role.
pub fn decide_for_role(path: &str, role: Role) -> GuardDecision {
    match (classify(path), role) {
        (RouteClass::UserRoute, Role::Admin) => {
            GuardDecision::RedirectTo(USER_MANAGEMENT_PATH.to_string())
        }
        (RouteClass::AdminRoute, Role::User) => {
            GuardDecision::RedirectTo(DASHBOARD_PATH.to_string())
        }
        (RouteClass::UserRoute, Role::User)
        | (RouteClass::AdminRoute, Role::Admin)
        | (RouteClass::Unclassified, _) => GuardDecision::Allow,
    }
}

/// Landing page for a role after sign-in.
pub fn home_for_role(role: Role) -> &'static str {
    match role {
        Role::Admin => USER_MANAGEMENT_PATH,
        Role::User => DASHBOARD_PATH,
    }
}
