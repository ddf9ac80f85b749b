//! List response envelopes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::shared::{PageLink, PageResult};

/// `{"list": [...], "pagination": [...]}` as list clients expect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse {
    pub list: Vec<JsonValue>,
    pub pagination: Vec<PageLink>,
}

impl From<PageResult> for ListResponse {
    fn from(result: PageResult) -> Self {
        let (list, pagination) = result.into_parts();
        Self { list, pagination }
    }
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// The group screen: joined groups and groups open for signup, each paged
/// on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupListsResponse {
    pub registered: ListResponse,
    pub unregistered: ListResponse,
}

impl IntoResponse for GroupListsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
