//! Route guard middleware for the page routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::domain::route_guard::{decide, GuardDecision, USER_COOKIE};

/// Read the role claim from the `user` cookie.
///
/// Browsers store the JSON percent-encoded; undecodable values count as
/// missing.
pub fn role_claim(jar: &CookieJar) -> Option<String> {
    let raw = jar.get(USER_COOKIE)?.value().to_string();
    urlencoding::decode(&raw).ok().map(|v| v.into_owned())
}

/// Redirect requests the caller's role may not see.
pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let claim = role_claim(&jar);
    let decision = decide(&path, claim.as_deref());
    tracing::debug!(%path, %decision, has_claim = claim.is_some(), "Route guard");

    match decision {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectTo(target) => Redirect::temporary(&target).into_response(),
    }
}
