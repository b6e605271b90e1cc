// ABOUTME: HTTP integration tests for idea routes
// ABOUTME: Covers listing and creating ideas through both legacy and typed endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use brainstorm_server::{
    database::repositories::SharedSessionRepository,
    models::{BrainstormSession, IdeaDto},
};
use common::{repository_with_test_session, test_router, FailingRepository};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// GET /api/ideas/forsession/:session_id
// ============================================================================

#[tokio::test]
async fn test_for_session_lists_ideas_in_order() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::get(&format!("/api/ideas/forsession/{id}"))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 200);
    let ideas: Vec<IdeaDto> = response.json();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].id, 1);
    assert_eq!(ideas[0].name, "One");
    assert_eq!(ideas[0].description, "One description");
}

#[tokio::test]
async fn test_for_session_uses_camel_case_fields() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::get(&format!("/api/ideas/forsession/{id}"))
        .send(test_router(&repository))
        .await;

    let body: Value = response.json();
    assert_eq!(body[0]["dateCreated"], "2016-07-02T00:00:00Z");
}

#[tokio::test]
async fn test_for_session_unknown_session_returns_id() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::get("/api/ideas/forsession/999")
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body, json!(999));
}

#[tokio::test]
async fn test_for_session_is_repeatable() {
    let (repository, id) = repository_with_test_session().await.unwrap();
    let uri = format!("/api/ideas/forsession/{id}");

    let first: Value = AxumTestRequest::get(&uri)
        .send(test_router(&repository))
        .await
        .json();
    let second: Value = AxumTestRequest::get(&uri)
        .send(test_router(&repository))
        .await
        .json();

    assert_eq!(first, second);
}

// ============================================================================
// GET /api/ideas/forsessionactionresult/:session_id
// ============================================================================

#[tokio::test]
async fn test_for_session_action_result_lists_ideas() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::get(&format!("/api/ideas/forsessionactionresult/{id}"))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 200);
    let ideas: Vec<IdeaDto> = response.json();
    assert_eq!(ideas[0].name, "One");
}

#[tokio::test]
async fn test_for_session_action_result_unknown_session() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::get("/api/ideas/forsessionactionresult/999")
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.json::<Value>(), json!(999));
}

// ============================================================================
// POST /api/ideas/create
// ============================================================================

#[tokio::test]
async fn test_create_appends_idea_and_returns_session() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/create")
        .json(&json!({
            "sessionId": id,
            "name": "test name",
            "description": "test description"
        }))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 200);
    let session: BrainstormSession = response.json();
    assert_eq!(session.id, id);
    assert_eq!(session.idea_count(), 2);
    assert_eq!(session.ideas()[1].name, "test name");
    assert_eq!(session.ideas()[1].description, "test description");

    let stored = repository.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.idea_count(), 2);
}

#[tokio::test]
async fn test_create_missing_fields_is_bad_request() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/create")
        .json(&json!({ "sessionId": id }))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert!(body["errors"]["name"].is_array());
    assert!(body["errors"]["description"].is_array());

    let stored = repository.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.idea_count(), 1);
}

#[tokio::test]
async fn test_create_null_body_is_bad_request() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/create")
        .raw_json("null")
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert!(body["errors"]["model"].is_array());
}

#[tokio::test]
async fn test_create_malformed_body_is_bad_request() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/create")
        .raw_json("{\"sessionId\": ")
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert!(body["errors"]["body"].is_array());
}

#[tokio::test]
async fn test_create_unknown_session_returns_id() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/create")
        .json(&json!({ "sessionId": 999, "name": "n", "description": "d" }))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.json::<Value>(), json!(999));
}

// ============================================================================
// POST /api/ideas/createactionresult
// ============================================================================

#[tokio::test]
async fn test_create_action_result_returns_created_with_location() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/createactionresult")
        .json(&json!({
            "sessionId": id,
            "name": "test name",
            "description": "test description"
        }))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 201);
    assert_eq!(
        response.header("location").as_deref(),
        Some(format!("/api/ideas/forsessionactionresult/{id}").as_str())
    );
    let session: BrainstormSession = response.json();
    assert_eq!(session.idea_count(), 2);
}

#[tokio::test]
async fn test_create_action_result_location_resolves() {
    let (repository, id) = repository_with_test_session().await.unwrap();

    let created = AxumTestRequest::post("/api/ideas/createactionresult")
        .json(&json!({ "sessionId": id, "name": "Two", "description": "second" }))
        .send(test_router(&repository))
        .await;
    let location = created.header("location").unwrap();

    let ideas: Vec<IdeaDto> = AxumTestRequest::get(&location)
        .send(test_router(&repository))
        .await
        .json();

    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[1].id, 2);
    assert_eq!(ideas[1].name, "Two");
}

#[tokio::test]
async fn test_create_action_result_invalid_model() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/createactionresult")
        .json(&json!({ "name": "   " }))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert!(body["errors"]["sessionId"].is_array());
    assert!(body["errors"]["name"].is_array());
}

#[tokio::test]
async fn test_create_action_result_unknown_session() {
    let (repository, _) = repository_with_test_session().await.unwrap();

    let response = AxumTestRequest::post("/api/ideas/createactionresult")
        .json(&json!({ "sessionId": 999, "name": "n", "description": "d" }))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 404);
    assert!(response.header("location").is_none());
}

// ============================================================================
// Storage failures
// ============================================================================

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let repository: SharedSessionRepository = Arc::new(FailingRepository);

    let response = AxumTestRequest::get("/api/ideas/forsession/1")
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_invalid_create_does_not_reach_failing_storage() {
    let repository: SharedSessionRepository = Arc::new(FailingRepository);

    let response = AxumTestRequest::post("/api/ideas/create")
        .json(&json!({}))
        .send(test_router(&repository))
        .await;

    assert_eq!(response.status(), 400);
}
