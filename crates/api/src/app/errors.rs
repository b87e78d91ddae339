use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;

/// Plain-text body for positional lookups that miss.
pub const NOT_FOUND_MESSAGE: &str = "Product not found!";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(issues) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "validation_error",
                "message": issues.to_string(),
                "issues": issues,
            })),
        )
            .into_response(),
        DomainError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::FieldIssue;

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), 4096).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_plain_text_404() {
        let resp = domain_error_to_response(DomainError::NotFound);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(resp).await, NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn validation_lists_field_issues() {
        let resp = domain_error_to_response(DomainError::validation(FieldIssue::new(
            "cpf",
            "CPF Invalid",
        )));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["issues"][0]["field"], "cpf");
        assert_eq!(body["issues"][0]["message"], "CPF Invalid");
    }

    #[test]
    fn json_error_keeps_status() {
        let resp = json_error(StatusCode::BAD_REQUEST, "invalid_id", "bad id");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
