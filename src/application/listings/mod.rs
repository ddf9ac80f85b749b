//! List endpoints of the ordering backend, expressed as engine queries.
//!
//! The statements use `?` placeholders and backtick identifiers (MySQL,
//! also accepted by SQLite).

pub mod groups;
pub mod members;
pub mod orders;

pub use orders::OrderFilter;

use sea_orm::ConnectionTrait;

use crate::domain::{paginate, QuerySpec};
use crate::infrastructure::SqlExecutor;
use crate::shared::{PageRequest, PageResult, PaginationError};

/// Every paginated list the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Groups the user has joined
    JoinedGroups { user_id: i64 },
    /// Groups the user could still sign up for
    OpenGroups { user_id: i64 },
    GroupOrders { group_id: i64, filter: OrderFilter },
    GroupMembers { group_id: i64 },
}

impl Listing {
    pub fn spec(&self) -> QuerySpec {
        match *self {
            Self::JoinedGroups { user_id } => groups::joined_by(user_id),
            Self::OpenGroups { user_id } => groups::open_for_signup(user_id),
            Self::GroupOrders { group_id, filter } => orders::of_group(group_id, filter),
            Self::GroupMembers { group_id } => members::of_group(group_id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinedGroups { .. } => "joined_groups",
            Self::OpenGroups { .. } => "open_groups",
            Self::GroupOrders { .. } => "group_orders",
            Self::GroupMembers { .. } => "group_members",
        }
    }

    /// Run this listing on `conn` (pool or transaction).
    pub async fn fetch<C>(
        &self,
        conn: &C,
        request: &PageRequest,
    ) -> Result<PageResult, PaginationError>
    where
        C: ConnectionTrait,
    {
        let executor = SqlExecutor::new(conn);
        paginate(&executor, &self.spec(), request).await
    }
}
