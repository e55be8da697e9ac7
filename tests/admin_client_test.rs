//! AdminClient tests against wiremock and against a live server.

mod common;

use common::{TestServer, ADMIN_EMAIL, ADMIN_PASSWORD};
use marklee::adapters::ReqwestHttpClient;
use marklee::auth::{Session, SessionContext};
use marklee::client::{AdminClient, ClientError, UserManagementPage};
use marklee::domain::{PageItem, Role};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signed_in(token: &str) -> SessionContext {
    SessionContext::with_session(Session {
        token: Some(token.to_string()),
        user: None,
    })
}

#[tokio::test]
async fn test_list_users_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "2"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "users": [{
                    "id": "6f1b7c1e-8f5a-4a55-9d4f-0c1c5d2b9e11",
                    "username": "maria",
                    "email": "maria@example.com",
                    "role": "user",
                    "createdAt": "2024-05-01T10:00:00Z"
                }],
                "totalPages": 4
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(
        ReqwestHttpClient::new(),
        mock_server.uri(),
        signed_in("test-token"),
    );
    let page = client.list_users(10, 2).await.expect("list_users failed");
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.users[0].role, Role::User);
}

#[tokio::test]
async fn test_missing_token_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(
        ReqwestHttpClient::new(),
        mock_server.uri(),
        SessionContext::new(),
    );
    assert_eq!(
        client.list_brief_questions().await.unwrap_err(),
        ClientError::NotAuthenticated
    );
}

#[tokio::test]
async fn test_non_success_envelope_surfaces_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/brief-question"))
        .and(body_json(json!({"question": "Duplicate?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Question already exists"
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(
        ReqwestHttpClient::new(),
        mock_server.uri(),
        signed_in("test-token"),
    );
    let err = client.create_brief_question("Duplicate?").await.unwrap_err();
    assert_eq!(err.ui_message(), "Question already exists");
}

#[tokio::test]
async fn test_forbidden_status_surfaces_server_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "message": "Admin access required"
        })))
        .mount(&mock_server)
        .await;

    let client = AdminClient::new(
        ReqwestHttpClient::new(),
        mock_server.uri(),
        signed_in("user-token"),
    );
    let err = client
        .delete_user(uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 403, .. }));
    assert_eq!(err.ui_message(), "Admin access required");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = AdminClient::new(
        ReqwestHttpClient::new(),
        "http://127.0.0.1:1",
        signed_in("test-token"),
    );
    let err = client.list_users(10, 1).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!err.ui_message().is_empty());
}

#[tokio::test]
async fn test_client_against_live_server() {
    let server = TestServer::start().await;
    let base = format!("http://{}", server.addr);

    let session = SessionContext::new();
    let client = AdminClient::new(ReqwestHttpClient::new(), base, session.clone());

    for i in 0..14 {
        client
            .register(&format!("user{}", i), &format!("user{}@example.com", i), "secret1")
            .await
            .expect("register failed");
    }

    let admin = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert!(session.is_admin());
    assert_eq!(session.role_claim_json().as_deref(), Some(r#"{"role":"admin"}"#));

    // 15 accounts, 5 per page
    let mut page = UserManagementPage::new(5);
    assert!(page.refresh(&client).await);
    assert_eq!(page.total_pages(), 3);
    assert!(page.go_to(&client, 3).await);
    assert_eq!(page.users().len(), 5);
    assert_eq!(
        page.page_items(),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );

    let question = client
        .create_brief_question("What tone should the copy use?")
        .await
        .unwrap();
    assert_eq!(client.list_brief_questions().await.unwrap(), vec![question.clone()]);
    client.delete_brief_question(question.id).await.unwrap();
    assert!(client.list_brief_questions().await.unwrap().is_empty());

    client.logout().await.unwrap();
    assert!(!session.is_authenticated());
}
