use thiserror::Error;

/// Failures of a single `paginate` call.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The data store rejected the count or fetch statement.
    #[error(transparent)]
    QueryExecution(#[from] sea_orm::DbErr),

    /// The count statement did not yield one non-negative integer.
    #[error("Malformed count result: {0}")]
    MalformedCountResult(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
