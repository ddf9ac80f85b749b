use async_trait::async_trait;
use sea_orm::{DbErr, Value};
use serde_json::Value as JsonValue;

/// Runs the two read statements of a page.
///
/// Implementations borrow a connection the caller already holds; they
/// must not acquire, release or retry anything on their own.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Execute `sql` with positional `params`, returning each row as a JSON
    /// object keyed by column name, in result order.
    async fn fetch_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<JsonValue>, DbErr>;

    /// Execute a count statement and return the first column of its first
    /// row, or `None` when it produced no rows.
    ///
    /// A row with several columns comes back whole so the caller can
    /// reject it.
    async fn fetch_count(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<JsonValue>, DbErr> {
        let rows = self.fetch_rows(sql, params).await?;
        Ok(rows.into_iter().next().map(single_column))
    }

    /// Row window clause appended after the order clause.
    fn limit_clause(&self, offset: u64, limit: u64) -> String {
        format!("LIMIT {}, {}", offset, limit)
    }
}

fn single_column(row: JsonValue) -> JsonValue {
    match row {
        JsonValue::Object(fields) if fields.len() == 1 => fields
            .into_iter()
            .next()
            .map_or(JsonValue::Null, |(_, value)| value),
        other => other,
    }
}
