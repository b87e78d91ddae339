use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};
use serde_json::Value;

use storefront_core::DomainError;
use storefront_products::Product;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/:id", put(update_product).delete(delete_product))
}

/// Parses a positional id (`-?[0-9]+`). Integers that cannot address a
/// record (negative, or past `usize::MAX`) come back as `None`; `-0` is `0`.
fn parse_index(id: &str) -> Result<Option<usize>, axum::response::Response> {
    let (negative, digits) = match id.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, id),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            "product id must be an integer",
        ));
    }
    Ok(digits
        .parse::<usize>()
        .ok()
        .filter(|&n| !negative || n == 0))
}

fn validate_body(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Product, axum::response::Response> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_body",
                rejection.body_text(),
            ))
        }
    };
    Product::from_json(&body).map_err(|e| {
        tracing::debug!(error = %e, "product body rejected");
        errors::domain_error_to_response(e)
    })
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let product = match validate_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let ack = services.products.create(product);
    (StatusCode::CREATED, ack.to_string()).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.products.list_all())).into_response()
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let index = match parse_index(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let product = match validate_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let result = match index {
        Some(i) => services.products.update_at(i, product),
        None => Err(DomainError::not_found()),
    };
    match result {
        Ok(ack) => (StatusCode::OK, ack.to_string()).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let index = match parse_index(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let result = match index {
        Some(i) => services.products.delete_at(i),
        None => Err(DomainError::not_found()),
    };
    match result {
        Ok(ack) => (StatusCode::OK, ack.to_string()).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
