//! HTTP-facing pieces of the list endpoints
//!
//! Query-string extraction, the JSON envelopes and error rendering. Route
//! wiring stays with the hosting service.

pub mod dto;
pub mod error;

pub use dto::{GroupListQuery, GroupListsResponse, ListResponse, OrderListQuery, PageQuery};
pub use error::ApiError;
