//! Integration tests for the owner-facing link management endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_link_returns_token_and_zero_views() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Team wiki",
                "destination_url": "https://wiki.example.com/home",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["name"], "Team wiki");
    assert_eq!(data["view_count"], 0);
    let share_token = data["token"].as_str().expect("token missing");
    assert_eq!(share_token.len(), 16);
    // The secret must never appear in any response.
    assert!(data.get("secret").is_none());
}

#[tokio::test]
async fn test_create_link_rejects_invalid_destination() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Broken",
                "destination_url": "not-a-url",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_link_requires_bearer_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_links_is_scoped_to_caller() {
    let app = helpers::TestApp::new();
    let alice = app.issue_token(Uuid::new_v4());
    let bob = app.issue_token(Uuid::new_v4());

    for name in ["first", "second"] {
        app.request(
            "POST",
            "/api/links",
            Some(json!({
                "name": name,
                "destination_url": "https://example.com",
            })),
            Some(&alice),
        )
        .await;
    }
    app.request(
        "POST",
        "/api/links",
        Some(json!({
            "name": "other",
            "destination_url": "https://example.org",
        })),
        Some(&bob),
    )
    .await;

    let response = app.request("GET", "/api/links", None, Some(&alice)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["total_items"], 2);
    // Newest first.
    assert_eq!(data["items"][0]["name"], "second");
    assert_eq!(data["items"][1]["name"], "first");
}

#[tokio::test]
async fn test_list_links_paginates() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    for i in 0..3 {
        app.request(
            "POST",
            "/api/links",
            Some(json!({
                "name": format!("link-{i}"),
                "destination_url": "https://example.com",
            })),
            Some(&token),
        )
        .await;
    }

    let response = app
        .request("GET", "/api/links?page=2&per_page=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["total_items"], 3);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_update_link_patches_only_sent_fields() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
                "secret": "hunter2",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/links/{id}"),
            Some(json!({ "name": "Docs v2" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["name"], "Docs v2");
    assert_eq!(data["destination_url"], "https://example.com");
    // The untouched secret still gates resolution.
    let link_token = data["token"].as_str().unwrap();
    let resolved = app
        .request("GET", &format!("/api/l/{link_token}"), None, None)
        .await;
    assert_eq!(resolved.body["data"]["requires_secret"], true);
}

#[tokio::test]
async fn test_update_with_null_secret_ungates_the_link() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
                "secret": "hunter2",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let link_token = created.body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/links/{id}"),
            Some(json!({ "secret": null })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let resolved = app
        .request("GET", &format!("/api/l/{link_token}"), None, None)
        .await;
    assert_eq!(resolved.body["data"]["requires_secret"], false);
    assert_eq!(resolved.body["data"]["destination_url"], "https://example.com");
}

#[tokio::test]
async fn test_update_with_empty_secret_does_not_gate() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let link_token = created.body["data"]["token"].as_str().unwrap().to_string();

    // The form submits an empty string for an untouched secret input.
    let response = app
        .request(
            "PUT",
            &format!("/api/links/{id}"),
            Some(json!({ "secret": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let resolved = app
        .request("GET", &format!("/api/l/{link_token}"), None, None)
        .await;
    assert_eq!(resolved.body["data"]["requires_secret"], false);
    assert_eq!(resolved.body["data"]["destination_url"], "https://example.com");
}

#[tokio::test]
async fn test_update_with_empty_thumbnail_clears_it() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
                "thumbnail_url": "https://example.com/t.png",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/links/{id}"),
            Some(json!({ "thumbnail_url": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["thumbnail_url"].is_null());
}

#[tokio::test]
async fn test_update_foreign_link_is_forbidden() {
    let app = helpers::TestApp::new();
    let alice = app.issue_token(Uuid::new_v4());
    let bob = app.issue_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
            })),
            Some(&alice),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/links/{id}"),
            Some(json!({ "name": "hijacked" })),
            Some(&bob),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_link_removes_resolution() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let created = app
        .request(
            "POST",
            "/api/links",
            Some(json!({
                "name": "Docs",
                "destination_url": "https://example.com",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let link_token = created.body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .request("DELETE", &format!("/api/links/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The token now resolves like it never existed.
    let resolved = app
        .request("GET", &format!("/api/l/{link_token}"), None, None)
        .await;
    assert_eq!(resolved.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_link_is_not_found() {
    let app = helpers::TestApp::new();
    let token = app.issue_token(Uuid::new_v4());

    let response = app
        .request(
            "DELETE",
            &format!("/api/links/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
