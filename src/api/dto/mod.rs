pub mod common;
pub mod list;

pub use common::{ApiResponse, GroupListQuery, OrderListQuery, PageQuery};
pub use list::{GroupListsResponse, ListResponse};
