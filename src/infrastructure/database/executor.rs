//! SeaORM-backed query executor
//!
//! Runs the engine's raw statements on whatever SeaORM handle the request
//! layer holds: the pool itself or an open transaction.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DbBackend, DbErr, FromQueryResult, QueryResult, Statement, Value,
};
use serde_json::Value as JsonValue;

use crate::domain::QueryExecutor;

pub struct SqlExecutor<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> SqlExecutor<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    pub fn backend(&self) -> DbBackend {
        self.conn.get_database_backend()
    }

    fn statement(&self, sql: &str, params: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.backend(), sql, params)
    }
}

#[async_trait]
impl<'c, C> QueryExecutor for SqlExecutor<'c, C>
where
    C: ConnectionTrait,
{
    async fn fetch_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<JsonValue>, DbErr> {
        JsonValue::find_by_statement(self.statement(sql, params))
            .all(self.conn)
            .await
    }

    async fn fetch_count(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<JsonValue>, DbErr> {
        let row = self.conn.query_one(self.statement(sql, params)).await?;
        Ok(row.map(|row| first_column(&row)))
    }

    fn limit_clause(&self, offset: u64, limit: u64) -> String {
        match self.backend() {
            DbBackend::Postgres => format!("LIMIT {} OFFSET {}", limit, offset),
            _ => format!("LIMIT {}, {}", offset, limit),
        }
    }
}

/// Read column 0 by position. Expression columns such as `COUNT(*)` carry
/// no declared type on SQLite, so try the shapes drivers actually return.
///
/// A row with more than one column comes back whole, as an object, which the
/// engine rejects as a count.
fn first_column(row: &QueryResult) -> JsonValue {
    if row.column_names().len() != 1 {
        return JsonValue::from_query_result(row, "").unwrap_or(JsonValue::Null);
    }
    if let Ok(Some(n)) = row.try_get_by_index::<Option<i64>>(0) {
        return JsonValue::from(n);
    }
    if let Ok(Some(s)) = row.try_get_by_index::<Option<String>>(0) {
        return JsonValue::from(s);
    }
    if let Ok(Some(f)) = row.try_get_by_index::<Option<f64>>(0) {
        return JsonValue::from(f);
    }
    JsonValue::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use sea_orm::DatabaseConnection;
    use serde_json::json;

    async fn memory_db() -> DatabaseConnection {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..DatabaseConfig::default()
        };
        let db = init_database(&config).await.unwrap();
        db.execute_unprepared(
            "CREATE TABLE `items` (`id` INTEGER PRIMARY KEY, `name` TEXT NOT NULL);
             INSERT INTO `items` (`id`, `name`) VALUES (1, 'kimbap'), (2, 'ramyeon'), (3, 'tteokbokki');",
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn fetches_rows_as_objects() {
        let db = memory_db().await;
        let exec = SqlExecutor::new(&db);

        let rows = exec
            .fetch_rows(
                "SELECT `id`, `name` FROM `items` WHERE `id` > ? ORDER BY `id`",
                vec![1i64.into()],
            )
            .await
            .unwrap();

        assert_eq!(
            rows,
            vec![
                json!({"id": 2, "name": "ramyeon"}),
                json!({"id": 3, "name": "tteokbokki"}),
            ]
        );
    }

    #[tokio::test]
    async fn reads_count_column() {
        let db = memory_db().await;
        let exec = SqlExecutor::new(&db);

        let count = exec
            .fetch_count("SELECT COUNT(`id`) AS `cnt` FROM `items`", vec![])
            .await
            .unwrap();
        assert_eq!(count, Some(json!(3)));

        let none = exec
            .fetch_count("SELECT COUNT(`id`) FROM `items` GROUP BY `id` HAVING 0", vec![])
            .await
            .unwrap();
        assert_eq!(none, None);
    }

    #[tokio::test]
    async fn extra_count_columns_are_not_a_number() {
        let db = memory_db().await;
        let exec = SqlExecutor::new(&db);

        let count = exec
            .fetch_count(
                "SELECT COUNT(`id`) AS `cnt`, 99 AS `other` FROM `items`",
                vec![],
            )
            .await
            .unwrap();
        assert!(!matches!(count, Some(JsonValue::Number(_))));
    }

    #[tokio::test]
    async fn statement_errors_surface() {
        let db = memory_db().await;
        let exec = SqlExecutor::new(&db);
        assert!(exec.fetch_rows("SELECT * FROM `missing`", vec![]).await.is_err());
    }

    #[tokio::test]
    async fn limit_clause_follows_backend() {
        let db = memory_db().await;
        let exec = SqlExecutor::new(&db);
        assert_eq!(exec.backend(), DbBackend::Sqlite);
        assert_eq!(exec.limit_clause(20, 10), "LIMIT 20, 10");
    }
}
