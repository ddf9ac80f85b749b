pub mod pagination;

// Re-export commonly used types
pub use pagination::{paginate, PageWindow, QueryExecutor, QuerySpec};
