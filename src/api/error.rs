//! HTTP mapping of list failures

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::dto::ApiResponse;
use crate::shared::PaginationError;

/// Handler-side error: logged here, once, then rendered as the JSON error
/// envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        match &err {
            PaginationError::QueryExecution(db_err) => {
                error!(error = %db_err, "List query failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
            PaginationError::MalformedCountResult(detail) => {
                error!(detail = %detail, "List count query is inconsistent");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.message);
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pagination_errors_are_500() {
        let errors = [
            PaginationError::QueryExecution(sea_orm::DbErr::Custom("gone".into())),
            PaginationError::MalformedCountResult("no rows".into()),
        ];

        for err in errors {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["success"], false);
            // Driver details stay in the logs
            assert!(!body["error"].as_str().unwrap().contains("gone"));
        }
    }
}
