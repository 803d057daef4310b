mod common;

use axum::http::StatusCode;
use common::{body_json, tick, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_and_get_tag() {
    let app = TestApp::new().await;

    let created = app.create_tag("work").await;
    assert_eq!(created["name"], "work");
    assert_eq!(created["created_at"], created["updated_at"]);

    let resp = app.get("/tag/work").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn duplicate_tag_is_conflict() {
    let app = TestApp::new().await;
    app.create_tag("work").await;

    let resp = app
        .send_json("POST", "/tag/", json!({ "name": "work" }))
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn blank_tag_name_is_unprocessable() {
    let app = TestApp::new().await;
    let resp = app.send_json("POST", "/tag/", json!({ "name": " " })).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_missing_tag_is_not_found() {
    let app = TestApp::new().await;
    let resp = app.get("/tag/nothing").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rename_tag() {
    let app = TestApp::new().await;
    let created = app.create_tag("wrok").await;
    tick().await;

    let resp = app
        .send_json("PUT", "/tag/wrok", json!({ "new_name": "work" }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let renamed = body_json(resp).await;
    assert_eq!(renamed["name"], "work");
    assert_eq!(renamed["created_at"], created["created_at"]);
    assert!(renamed["updated_at"].as_str().unwrap() > created["updated_at"].as_str().unwrap());

    assert_eq!(app.get("/tag/wrok").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/tag/work").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn rename_onto_taken_name_is_conflict() {
    let app = TestApp::new().await;
    let work = app.create_tag("work").await;
    let home = app.create_tag("home").await;

    let resp = app
        .send_json("PUT", "/tag/home", json!({ "new_name": "work" }))
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    assert_eq!(body_json(app.get("/tag/work").await).await, work);
    assert_eq!(body_json(app.get("/tag/home").await).await, home);
}

#[tokio::test]
async fn rename_missing_tag_is_not_found() {
    let app = TestApp::new().await;
    let resp = app
        .send_json("PUT", "/tag/ghost", json!({ "new_name": "spirit" }))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_tag() {
    let app = TestApp::new().await;
    app.create_tag("temp").await;

    let resp = app.send("DELETE", "/tag/temp").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get("/tag/temp").await.status(), StatusCode::NOT_FOUND);

    let resp = app.send("DELETE", "/tag/temp").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_tags_in_update_order() {
    let app = TestApp::new().await;
    for name in ["b", "a", "c"] {
        app.create_tag(name).await;
        tick().await;
    }

    let tags = body_json(app.get("/tags?limit=2").await).await;
    let names: Vec<&str> = tags
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["b", "a"]);

    let tags = body_json(app.get("/tags?offset=1").await).await;
    assert_eq!(tags.as_array().unwrap().len(), 2);
}
