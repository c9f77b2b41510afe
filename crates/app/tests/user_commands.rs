//! Integration tests for the UI-facing user commands
//!
//! Drives the full stack (commands → directory service → REST gateway) against
//! a WireMock server and checks the behaviour the UI depends on: refresh
//! populates the list, create/update leave it stale, delete trims it, and
//! every failure surfaces as an `Err` string rather than a panic.

use roster_app::{
    create_user, delete_user, list_users, refresh_users, update_user, AppContext,
};
use roster_domain::config::RemoteConfig;
use roster_domain::{Config, UserDraft};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server: &MockServer) -> AppContext {
    let config = Config {
        remote: RemoteConfig {
            base_url: server.uri(),
            timeout_seconds: Some(5),
            user_agent: Some("roster-tests".into()),
        },
    };
    AppContext::new(config).expect("context")
}

fn listing() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light"},
            "phone": "1-770-736-8031"
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "email": "Shanna@melissa.tv",
            "address": {"street": "Victor Plains"},
            "phone": "010-692-6593"
        }
    ])
}

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn refresh_then_list_shows_the_remote_collection() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let ctx = context(&server);
    assert!(list_users(&ctx).is_empty());

    refresh_users(&ctx).await.expect("refresh");

    let users = list_users(&ctx);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].first_name, "Leanne");
    assert_eq!(users[1].last_name, "Howell");
}

#[tokio::test]
async fn create_returns_draft_with_id_and_requires_refresh_to_list() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
        .mount(&server)
        .await;

    let ctx = context(&server);
    refresh_users(&ctx).await.expect("refresh");

    let draft = UserDraft {
        id: None,
        first_name: "Mia".into(),
        middle_name: String::new(),
        last_name: "Nguyen".into(),
        email: "mia@example.com".into(),
        address: String::new(),
        contact_number: String::new(),
    };
    let created = create_user(&ctx, draft).await.expect("create");

    assert_eq!(created.id, Some(11));
    // The list is stale until the UI refreshes again.
    assert_eq!(list_users(&ctx).len(), 2);
}

#[tokio::test]
async fn update_keeps_the_list_stale_until_refresh() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);
    refresh_users(&ctx).await.expect("refresh");

    let mut record = list_users(&ctx)[0].clone();
    record.contact_number = "555-0199".into();
    update_user(&ctx, record).await.expect("update");

    assert_eq!(list_users(&ctx)[0].contact_number, "1-770-736-8031");
}

#[tokio::test]
async fn delete_trims_the_list_in_place() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&server);
    refresh_users(&ctx).await.expect("refresh");

    delete_user(&ctx, 2).await.expect("delete");

    let users = list_users(&ctx);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
}

#[tokio::test]
async fn failures_surface_as_error_strings_without_panicking() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let ctx = context(&server);

    let err = refresh_users(&ctx).await.expect_err("refresh fails");
    assert!(err.contains("502"));
    assert!(list_users(&ctx).is_empty());

    let draft = UserDraft {
        id: None,
        first_name: "Mia".into(),
        middle_name: String::new(),
        last_name: "Nguyen".into(),
        email: "mia@example.com".into(),
        address: String::new(),
        contact_number: String::new(),
    };
    assert!(create_user(&ctx, draft).await.is_err());

    let record = roster_domain::UserRecord {
        id: 1,
        first_name: "Jane".into(),
        middle_name: String::new(),
        last_name: "Doe".into(),
        email: "jane@example.com".into(),
        address: String::new(),
        contact_number: String::new(),
    };
    assert!(update_user(&ctx, record).await.is_err());
    assert!(delete_user(&ctx, 1).await.is_err());

    // The directory reference is unchanged across all four failures.
    assert!(list_users(&ctx).is_empty());
}
