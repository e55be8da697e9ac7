//! Scripted [`HttpClient`] for unit tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One call seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    /// Only set for POST.
    pub body: Option<String>,
}

/// What a scripted route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status, including 4xx/5xx.
    Success(Response),
    Error(HttpError),
}

#[derive(Debug, Default)]
struct Script {
    routes: Vec<(String, String, MockResponse)>,
    fallback: Option<MockResponse>,
    log: Vec<RecordedRequest>,
}

impl Script {
    /// Exact URL first, then the longest matching URL prefix, then the fallback.
    fn lookup(&self, method: &str, url: &str) -> Option<MockResponse> {
        let candidates = self
            .routes
            .iter()
            .filter(|(m, pattern, _)| m == method && url.starts_with(pattern.as_str()));

        let mut best: Option<&(String, String, MockResponse)> = None;
        for route in candidates {
            if route.1 == url {
                return Some(route.2.clone());
            }
            if best.map_or(true, |b| route.1.len() > b.1.len()) {
                best = Some(route);
            }
        }

        best.map(|(_, _, response)| response.clone())
            .or_else(|| self.fallback.clone())
    }
}

/// Answers requests from a script and keeps a log of what was sent.
///
/// Clones share the same script, so a test can keep a handle after moving
/// the client into an `AdminClient`.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response("GET", "http://api/health", MockResponse::Success(Response::new(200, "{}".into())));
/// http.get("http://api/health", &Headers::new()).await?;
/// assert_eq!(http.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        // A panicking test poisons the lock; the script itself is still usable.
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer `method` requests whose URL equals or starts with `url`.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut script = self.script();
        script
            .routes
            .retain(|(m, pattern, _)| !(m == method && pattern == url));
        script
            .routes
            .push((method.to_string(), url.to_string(), response));
    }

    /// Answer for anything no route matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script().log.clone()
    }

    pub fn clear_requests(&self) {
        self.script().log.clear();
    }

    fn handle(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<&str>,
    ) -> Result<Response, HttpError> {
        let mut script = self.script();
        script.log.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });

        match script.lookup(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("unscripted request: {} {}", method, url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, headers, Some(body))
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("DELETE", url, headers, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_exact_match_and_recording() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://api/users",
            MockResponse::Success(Response::new(200, Bytes::from("ok"))),
        );

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer t".to_string());
        let response = client.get("http://api/users", &headers).await.unwrap();
        assert_eq!(response.text(), "ok");

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer t")
        );
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response(
            "GET",
            "http://api/",
            MockResponse::Success(Response::new(500, Bytes::new())),
        );
        client.set_response(
            "GET",
            "http://api/admin/",
            MockResponse::Success(Response::new(204, Bytes::new())),
        );

        let response = client.get("http://api/admin/users?page=2", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_method_is_part_of_key() {
        let client = MockHttpClient::new();
        client.set_response(
            "DELETE",
            "http://api/q/",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );
        assert!(client.get("http://api/q/1", &Headers::new()).await.is_err());
        assert!(client.delete("http://api/q/1", &Headers::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_error_and_default() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::Timeout("5s".to_string())));
        let err = client.post("http://x", "{}", &Headers::new()).await.unwrap_err();
        assert_eq!(err, HttpError::Timeout("5s".to_string()));
        assert_eq!(client.get_requests()[0].body.as_deref(), Some("{}"));

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
