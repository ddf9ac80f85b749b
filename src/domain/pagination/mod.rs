//! Paginated list engine
//!
//! Shared by every list endpoint (groups, orders, members): the caller
//! supplies the fetch/count/order fragments, the engine picks the page,
//! appends the row window and builds the « 1 2 3 4 » navigation.

pub mod engine;
pub mod executor;
pub mod query;
pub mod window;


pub use engine::paginate;
pub use executor::QueryExecutor;
pub use query::QuerySpec;
pub use window::PageWindow;
