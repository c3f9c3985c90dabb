//! HTTP-level tests for bulk export, import and clearing of the store.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_empty, post_json, register};
use serde_json::json;
use sqlx::PgPool;

fn sorted_by_id(mut items: Vec<serde_json::Value>) -> Vec<serde_json::Value> {
    items.sort_by(|a, b| a["id"].as_str().cmp(&b["id"].as_str()));
    items
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_clear_import_round_trip(pool: PgPool) {
    let first = register(
        &pool,
        json!({
            "description": "Costume",
            "owner": "Durand",
            "price": 25.0,
            "date_promised": "2024-06-10T12:00:00Z",
            "items": [{"type": "costume", "qty": 1}]
        }),
    )
    .await;
    register(
        &pool,
        json!({"description": "Chemise", "owner": "Petit", "price": 6.0}),
    )
    .await;
    let id = first["id"].as_str().unwrap();
    post_empty(
        build_test_app(pool.clone()),
        &format!("/api/v1/items/{id}/clean"),
    )
    .await;

    let response = get(build_test_app(pool.clone()), "/api/v1/items/export").await;
    let exported = body_json(response).await["data"].clone();
    assert_eq!(exported.as_array().unwrap().len(), 2);

    let response = delete(build_test_app(pool.clone()), "/api/v1/items").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(build_test_app(pool.clone()), "/api/v1/items/export").await;
    let empty = body_json(response).await;
    assert!(empty["data"].as_array().unwrap().is_empty());

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items/import",
        exported.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let summary = body_json(response).await;
    assert_eq!(summary["data"]["removed"], 0);
    assert_eq!(summary["data"]["imported"], 2);

    let response = get(build_test_app(pool), "/api/v1/items/export").await;
    let reexported = body_json(response).await["data"].clone();
    assert_eq!(
        sorted_by_id(reexported.as_array().unwrap().clone()),
        sorted_by_id(exported.as_array().unwrap().clone()),
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_import_replaces_existing_items(pool: PgPool) {
    register(&pool, json!({"description": "Old", "owner": "a", "price": 1.0})).await;

    let payload = json!([
        {
            "owner": "b",
            "price": 3.0,
            "status": "delivered",
            "date_received": "2024-01-02T08:00:00Z",
            "date_delivered": "2024-01-05T17:30:00Z"
        },
        {"id": "3d9e1f2a-5b6c-4d7e-8f90-a1b2c3d4e5f6", "owner": "c", "price": 4.0}
    ]);
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items/import",
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["removed"], 1);

    let response = get(build_test_app(pool.clone()), "/api/v1/items").await;
    let items = body_json(response).await["data"].clone();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["description"] != "Old"));

    let kept = get(
        build_test_app(pool),
        "/api/v1/items/3d9e1f2a-5b6c-4d7e-8f90-a1b2c3d4e5f6",
    )
    .await;
    assert_eq!(kept.status(), StatusCode::OK);
    let kept = body_json(kept).await;
    assert_eq!(kept["data"]["owner"], "C");
    assert_eq!(kept["data"]["status"], "received");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_import_rejects_non_array_payload(pool: PgPool) {
    register(&pool, json!({"description": "Keep", "owner": "a", "price": 1.0})).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items/import",
        json!({"items": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let items = body_json(get(build_test_app(pool), "/api/v1/items").await).await;
    assert_eq!(items["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_import_with_invalid_record_leaves_store_untouched(pool: PgPool) {
    register(&pool, json!({"description": "Keep", "owner": "a", "price": 1.0})).await;

    let payload = json!([
        {"owner": "b", "price": 3.0},
        {"owner": "c", "price": 3.0, "status": "archived"}
    ]);
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items/import",
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("index 1"));

    let items = body_json(get(build_test_app(pool), "/api/v1/items").await).await;
    let items = items["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], "Keep");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_import_rejects_duplicate_ids(pool: PgPool) {
    let payload = json!([
        {"id": "3d9e1f2a-5b6c-4d7e-8f90-a1b2c3d4e5f6", "owner": "a", "price": 1.0},
        {"id": "3d9e1f2a-5b6c-4d7e-8f90-a1b2c3d4e5f6", "owner": "b", "price": 2.0}
    ]);
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items/import",
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let items = body_json(get(build_test_app(pool), "/api/v1/items").await).await;
    assert!(items["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clear_on_empty_store_succeeds(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/v1/items").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_import_rejects_status_without_matching_dates(pool: PgPool) {
    register(
        &pool,
        json!({"description": "Keep", "owner": "a", "price": 1.0}),
    )
    .await;

    let payloads = [
        json!([{"owner": "a", "price": 3.0, "status": "delivered"}]),
        json!([{"owner": "a", "price": 3.0, "status": "cleaned"}]),
        json!([{
            "owner": "a",
            "price": 3.0,
            "status": "received",
            "date_cleaned": "2024-01-03T10:00:00Z"
        }]),
        json!([{
            "owner": "a",
            "price": 3.0,
            "status": "cleaned",
            "date_cleaned": "2024-01-03T10:00:00Z",
            "date_delivered": "2024-01-04T10:00:00Z"
        }]),
    ];

    for payload in payloads {
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/items/import",
            payload.clone(),
        )
        .await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload {payload}"
        );
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let items = body_json(get(build_test_app(pool), "/api/v1/items").await).await;
    let items = items["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], "Keep");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_import_accepts_delivery_without_clean_date(pool: PgPool) {
    let payload = json!([{
        "owner": "a",
        "price": 3.0,
        "status": "delivered",
        "date_delivered": "2024-01-04T10:00:00Z"
    }]);
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/items/import",
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["imported"], 1);
}
