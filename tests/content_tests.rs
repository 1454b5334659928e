
use std::time::Duration;

use futures_util::future::join_all;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use test_utils::TestApp;

fn project_body(title: &str, slug: &str) -> Value {
    json!({
        "slug": slug,
        "title": title,
        "description": format!("{} description", title),
        "full_description": "Longer write-up",
        "image": "/images/cover.png",
        "images": ["/images/a.png", "/images/b.png"],
        "tech_stack": ["Rust", "PostgreSQL"],
        "live_link": "https://example.com/live",
        "github_link": "https://github.com/example/repo",
        "purpose": "Learning",
        "featured": true
    })
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn created_project_reads_back_with_same_fields() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let body = project_body("Realtime Chat", "realtime-chat");
    let response = app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(body.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["success"], true);
    assert_eq!(outcome["stale_views"], json!(["/work", "/work/realtime-chat", "/admin/dashboard"]));

    let project = app.get_json("/api/v1/projects/realtime-chat").await;
    for field in ["slug", "title", "description", "full_description", "image", "images",
                  "tech_stack", "live_link", "github_link", "purpose", "featured"] {
        assert_eq!(project[field], body[field], "field {} differs", field);
    }
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn duplicate_slug_is_rejected_with_conflict() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let body = project_body("Realtime Chat", "realtime-chat");
    app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(body.clone())).await;
    let response = app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(body)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome, json!({"success": false, "error": "Slug already exists"}));
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn partial_update_keeps_untouched_fields() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(project_body("Chat", "chat"))).await;
    let id = app.get_json("/api/v1/projects/chat").await["id"].as_i64().unwrap();

    let response = app.admin_send(
        Method::PUT,
        &format!("/api/v1/admin/projects/{}", id),
        &token,
        Some(json!({"title": "Chat v2", "featured": false})),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    let project = app.get_json("/api/v1/projects/chat").await;
    assert_eq!(project["title"], "Chat v2");
    assert_eq!(project["featured"], false);
    assert_eq!(project["tech_stack"], json!(["Rust", "PostgreSQL"]));
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn update_can_clear_optional_links() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(project_body("Chat", "chat"))).await;
    let id = app.get_json("/api/v1/projects/chat").await["id"].as_i64().unwrap();

    let response = app.admin_send(
        Method::PUT,
        &format!("/api/v1/admin/projects/{}", id),
        &token,
        Some(json!({"live_link": null, "github_link": ""})),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    let project = app.get_json("/api/v1/projects/chat").await;
    assert_eq!(project["live_link"], Value::Null);
    assert_eq!(project["github_link"], Value::Null);
    assert_eq!(project["purpose"], "Learning");
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn padded_contact_email_is_accepted() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app.client
        .post(app.url("/api/v1/messages"))
        .json(&json!({"name": " Grace ", "email": " Grace@Example.com ", "message": "Hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let messages: Value = app.admin_send(Method::GET, "/api/v1/admin/messages", &token, None).await.json().await.unwrap();
    assert_eq!(messages[0]["email"], "grace@example.com");
    assert_eq!(messages[0]["name"], "Grace");
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn deleted_project_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(project_body("Chat", "chat"))).await;
    let id = app.get_json("/api/v1/projects/chat").await["id"].as_i64().unwrap();

    let path = format!("/api/v1/admin/projects/{}", id);
    let response = app.admin_send(Method::DELETE, &path, &token, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(app.get_json("/api/v1/projects/chat").await, Value::Null);

    let again = app.admin_send(Method::DELETE, &path, &token, None).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn marking_message_read_is_idempotent() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let response = app.client
        .post(app.url("/api/v1/messages"))
        .json(&json!({"name": "Grace", "email": "grace@example.com", "message": "Hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let messages: Value = app.admin_send(Method::GET, "/api/v1/admin/messages", &token, None).await.json().await.unwrap();
    let id = messages[0]["id"].as_i64().unwrap();
    assert_eq!(messages[0]["read"], false);

    let path = format!("/api/v1/admin/messages/{}/read", id);
    for _ in 0..2 {
        let response = app.admin_send(Method::PATCH, &path, &token, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let messages: Value = app.admin_send(Method::GET, "/api/v1/admin/messages", &token, None).await.json().await.unwrap();
    assert_eq!(messages.as_array().unwrap().len(), 1);
    assert_eq!(messages[0]["read"], true);
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn messages_are_newest_first_and_projects_oldest_first() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    for name in ["first", "second", "third"] {
        app.client
            .post(app.url("/api/v1/messages"))
            .json(&json!({"name": name, "email": "someone@example.com", "message": name}))
            .send()
            .await
            .unwrap();
        app.admin_send(Method::POST, "/api/v1/admin/projects", &token, Some(project_body(name, name))).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let messages: Value = app.admin_send(Method::GET, "/api/v1/admin/messages", &token, None).await.json().await.unwrap();
    let message_names: Vec<&str> = messages.as_array().unwrap().iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(message_names, vec!["third", "second", "first"]);

    let projects = app.get_json("/api/v1/projects").await;
    let project_slugs: Vec<&str> = projects.as_array().unwrap().iter().map(|p| p["slug"].as_str().unwrap()).collect();
    assert_eq!(project_slugs, vec!["first", "second", "third"]);
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn saving_about_twice_leaves_one_row_with_latest_fields() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    assert_eq!(app.get_json("/api/v1/about").await, Value::Null);

    for bio in ["First bio", "Second bio"] {
        let response = app.admin_send(
            Method::PUT,
            "/api/v1/admin/about",
            &token,
            Some(json!({"bio": bio, "skills": ["Rust"]})),
        ).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM about")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(app.get_json("/api/v1/about").await["bio"], "Second bio");
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn concurrent_about_saves_leave_one_row() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let saves = (0..8).map(|i| {
        app.admin_send(
            Method::PUT,
            "/api/v1/admin/about",
            &token,
            Some(json!({"bio": format!("Bio {}", i)})),
        )
    });
    for response in join_all(saves).await {
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM about")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[actix_rt::test]
#[ignore = "needs APP_TEST_DATABASE_URL"]
async fn resume_and_contact_read_back_after_save() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let resume = json!({
        "full_name": "Ada Lovelace",
        "title": "Engineer",
        "summary": "Notes on the engine",
        "experiences": [{"title": "Analyst", "company": "Analytical Engines", "start_date": "1842"}],
        "education": [{"institution": "University of London"}],
        "skills": ["Mathematics"]
    });
    let response = app.admin_send(Method::PUT, "/api/v1/admin/resume", &token, Some(resume)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let contact = json!({"email": "ada@example.com", "github": "https://github.com/ada"});
    let response = app.admin_send(Method::PUT, "/api/v1/admin/contact", &token, Some(contact)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let saved = app.get_json("/api/v1/resume").await;
    assert_eq!(saved["experiences"][0]["company"], "Analytical Engines");
    assert_eq!(saved["education"][0]["institution"], "University of London");

    let saved = app.get_json("/api/v1/contact").await;
    assert_eq!(saved["email"], "ada@example.com");

    let views = app.get_json("/api/v1/views").await;
    let paths: Vec<&str> = views.as_array().unwrap().iter().map(|v| v["path"].as_str().unwrap()).collect();
    assert_eq!(paths, vec!["/admin/dashboard", "/contact", "/resume"]);
}
