use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<IndexMap<u64, Product>>)> {
    let products = state.catalog.read().await.snapshot()?;

    info!(count = products.len(), "Listed products");

    Ok((StatusCode::OK, Json(products)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn add_product(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<Value>)> {
    state.catalog.write().await.add(&payload)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product added successfully" })),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// The body is parsed only once the id is known to exist, so a request for a
/// missing product is a 404 whatever it carries.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    let mut catalog = state.catalog.write().await;
    catalog.get(id)?;

    let payload: Map<String, Value> = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Request body must be a JSON object: {}", e)))?;
    catalog.patch(id, &payload)?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product updated successfully" })),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn remove_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<(StatusCode, Json<Value>)> {
    state.catalog.write().await.delete(id)?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Product removed successfully" })),
    ))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{build_router, catalog::Catalog, store::MemoryStore};

    fn app() -> Router {
        build_router(AppState::new(Catalog::new(MemoryStore::new())))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn pen() -> Value {
        json!({ "name": "Pen", "price": 1.5, "category": "Stationery" })
    }

    #[tokio::test]
    async fn add_then_list() {
        let app = app();
        let (status, body) = call(&app, Method::POST, "/add-product", Some(pen())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "message": "Product added successfully" }));

        let (status, body) = call(&app, Method::GET, "/list-product", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "1": { "id": 1, "name": "Pen", "price": 1.5, "category": "Stationery" } })
        );
    }

    #[tokio::test]
    async fn empty_list_is_ok() {
        let (status, body) = call(&app(), Method::GET, "/list-product", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn add_rejects_invalid_record() {
        let app = app();
        let (status, body) = call(
            &app,
            Method::POST,
            "/add-product",
            Some(json!({ "name": "Pen", "category": "Stationery" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "Price is required and must be a non-negative number." })
        );

        let (_, body) = call(&app, Method::GET, "/list-product", None).await;
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn update_missing_product_is_404() {
        let (status, body) = call(
            &app(),
            Method::PUT,
            "/update-product/99",
            Some(json!({ "name": "Pencil" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Product not found" }));
    }

    #[tokio::test]
    async fn update_missing_product_without_body_is_404() {
        let (status, body) = call(&app(), Method::PUT, "/update-product/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Product not found" }));
    }

    #[tokio::test]
    async fn update_existing_product_needs_json_object() {
        let app = app();
        call(&app, Method::POST, "/add-product", Some(pen())).await;

        let (status, _) = call(&app, Method::PUT, "/update-product/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(&app, Method::PUT, "/update-product/1", Some(json!([1, 2]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call(&app, Method::GET, "/list-product", None).await;
        assert_eq!(body["1"]["name"], json!("Pen"));
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let app = app();
        call(&app, Method::POST, "/add-product", Some(pen())).await;

        let (status, body) = call(
            &app,
            Method::PUT,
            "/update-product/1",
            Some(json!({ "price": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Product updated successfully" }));

        let (_, body) = call(&app, Method::GET, "/list-product", None).await;
        assert_eq!(body["1"]["name"], json!("Pen"));
        assert_eq!(body["1"]["price"], json!(2.0));
    }

    #[tokio::test]
    async fn remove_product_then_404() {
        let app = app();
        call(&app, Method::POST, "/add-product", Some(pen())).await;

        let (status, body) = call(&app, Method::DELETE, "/remove-product/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Product removed successfully" }));

        let (status, body) = call(&app, Method::DELETE, "/remove-product/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Product not found" }));
    }

    #[tokio::test]
    async fn ids_keep_increasing_after_removal() {
        let app = app();
        call(&app, Method::POST, "/add-product", Some(pen())).await;
        call(&app, Method::POST, "/add-product", Some(pen())).await;
        call(&app, Method::DELETE, "/remove-product/1", None).await;
        call(&app, Method::POST, "/add-product", Some(pen())).await;

        let (_, body) = call(&app, Method::GET, "/list-product", None).await;
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(body.get("2").is_some());
        assert!(body.get("3").is_some());
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = call(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
    }
}
