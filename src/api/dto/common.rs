//! Common API DTOs

use serde::{Deserialize, Serialize};

use crate::application::OrderFilter;
use crate::config::PaginationSettings;
use crate::shared::{parse_page, PageRequest};

/// Error envelope: `{"success": false, "error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// `?page=` of a list endpoint.
///
/// Kept as raw text: clients send anything from `"3"` to `"abc"`, and a bad
/// value means page 1 rather than a 400.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self, settings: &PaginationSettings) -> PageRequest {
        settings.request(parse_page(self.page.as_deref()))
    }
}

/// `?page=&show_only_pending=` of the order list.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub show_only_pending: Option<String>,
}

impl OrderListQuery {
    pub fn page_request(&self, settings: &PaginationSettings) -> PageRequest {
        settings.request(parse_page(self.page.as_deref()))
    }

    pub fn filter(&self) -> OrderFilter {
        OrderFilter::from_flag(self.show_only_pending.as_deref())
    }
}

/// The group screen pages its two lists independently:
/// `?page_r=` for joined groups, `?page_ur=` for open ones.
#[derive(Debug, Default, Deserialize)]
pub struct GroupListQuery {
    #[serde(default)]
    pub page_r: Option<String>,
    #[serde(default)]
    pub page_ur: Option<String>,
}

impl GroupListQuery {
    pub fn registered_request(&self, settings: &PaginationSettings) -> PageRequest {
        settings.request(parse_page(self.page_r.as_deref()))
    }

    pub fn unregistered_request(&self, settings: &PaginationSettings) -> PageRequest {
        settings.request(parse_page(self.page_ur.as_deref()))
    }
}
