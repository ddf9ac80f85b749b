//! # OMS list pagination
//!
//! Paginated list engine of the group ordering backend (groups, orders,
//! members), with page-window navigation.
//!
//! ## Architecture
//!
//! - **domain**: the page window arithmetic and the `paginate` engine
//! - **application**: the concrete list queries of the backend
//! - **infrastructure**: database pool and the SeaORM query executor
//! - **api**: query-string DTOs, JSON envelopes and error rendering
//! - **shared**: request/result types, errors and input coercion

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use domain::{paginate, PageWindow, QueryExecutor, QuerySpec};
pub use shared::{PageLabel, PageLink, PageRequest, PageResult, PaginationError};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SqlExecutor};

pub use application::{Listing, OrderFilter};
pub use logging::init_tracing;
