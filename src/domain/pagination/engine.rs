//! The paginate operation
//!
//! Two sequential reads against a borrowed executor: the count, then the
//! page itself. Nothing is cached between calls and nothing is written.

use serde_json::Value as JsonValue;
use tracing::debug;

use super::{PageWindow, QueryExecutor, QuerySpec};
use crate::shared::{PageRequest, PageResult, PaginationError};

/// Fetch one page of `spec` and build its navigation.
///
/// Out-of-range pages are clamped silently. Either both statements succeed
/// and a full [`PageResult`] comes back, or the first failure is returned
/// as-is.
pub async fn paginate<E>(
    executor: &E,
    spec: &QuerySpec,
    request: &PageRequest,
) -> Result<PageResult, PaginationError>
where
    E: QueryExecutor + ?Sized,
{
    let count = executor
        .fetch_count(&spec.count_query, spec.count_params.clone())
        .await?;
    let total_count = total_from_count(count)?;

    let window = PageWindow::compute(total_count, request);
    debug!(
        total_count,
        requested_page = request.current_page,
        current_page = window.current_page,
        total_pages = window.total_pages,
        offset = window.offset,
        expected_rows = window.expected_rows(),
        "Page window computed"
    );

    let limit = executor.limit_clause(window.offset, window.page_size);
    let sql = spec.page_sql(&limit);
    let items = executor
        .fetch_rows(&sql, spec.fetch_params.clone())
        .await?;

    Ok(PageResult {
        items,
        paging: window.links(),
        window,
    })
}

/// Validate the count statement's result.
fn total_from_count(count: Option<JsonValue>) -> Result<u64, PaginationError> {
    let count = count.ok_or_else(|| {
        PaginationError::MalformedCountResult("count query returned no rows".to_string())
    })?;

    coerce_count(&count).ok_or_else(|| {
        PaginationError::MalformedCountResult(format!(
            "count is not a non-negative integer: {}",
            count
        ))
    })
}

/// Drivers differ in how `COUNT(*)` comes back (integer, decimal string,
/// float); accept any of them as long as the value is a whole number ≥ 0.
fn coerce_count(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_f64)),
        JsonValue::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_f64))
        }
        _ => None,
    }
}

fn whole_f64(n: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64).then(|| n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sea_orm::{DbErr, Value};
    use serde_json::json;
    use std::sync::Mutex;

    /// Answers the count statement with `count` and every other statement
    /// with rows synthesised from the LIMIT clause it receives.
    struct ScriptedExecutor {
        count: JsonValue,
        total: u64,
        statements: Mutex<Vec<(String, Vec<Value>)>>,
    }

    impl ScriptedExecutor {
        fn new(total: u64) -> Self {
            Self::with_count(json!([{ "cnt": total }]), total)
        }

        fn with_count(count: JsonValue, total: u64) -> Self {
            Self {
                count,
                total,
                statements: Mutex::new(Vec::new()),
            }
        }

        fn statements(&self) -> Vec<(String, Vec<Value>)> {
            self.statements.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueryExecutor for ScriptedExecutor {
        async fn fetch_rows(
            &self,
            sql: &str,
            params: Vec<Value>,
        ) -> Result<Vec<JsonValue>, DbErr> {
            self.statements
                .lock()
                .unwrap()
                .push((sql.to_string(), params));

            if sql.starts_with("COUNT") {
                return Ok(self.count.as_array().cloned().unwrap_or_default());
            }

            // "... LIMIT offset, limit"
            let tail = sql.rsplit("LIMIT ").next().unwrap();
            let (offset, limit) = tail.split_once(", ").unwrap();
            let offset: u64 = offset.parse().unwrap();
            let limit: u64 = limit.parse().unwrap();
            let end = (offset + limit).min(self.total);
            Ok((offset..end).map(|id| json!({ "id": id })).collect())
        }
    }

    struct FailingExecutor;

    #[async_trait]
    impl QueryExecutor for FailingExecutor {
        async fn fetch_rows(&self, _: &str, _: Vec<Value>) -> Result<Vec<JsonValue>, DbErr> {
            Err(DbErr::Custom("connection reset".into()))
        }
    }

    fn spec() -> QuerySpec {
        QuerySpec::new("SELECT id FROM t WHERE g = ?", "COUNT", "ORDER BY id")
            .bind_fetch([1i64])
            .bind_count([2i64])
    }

    #[tokio::test]
    async fn runs_count_then_fetch() {
        let exec = ScriptedExecutor::new(100);
        let result = paginate(&exec, &spec(), &PageRequest::new(7)).await.unwrap();

        assert_eq!(result.items.len(), 10);
        assert_eq!(result.items[0], json!({ "id": 60 }));
        assert_eq!(result.paging.len(), 6);

        let statements = exec.statements();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].0, "COUNT");
        assert_eq!(statements[0].1, vec![Value::BigInt(Some(2))]);
        assert_eq!(
            statements[1].0,
            "SELECT id FROM t WHERE g = ? ORDER BY id LIMIT 60, 10"
        );
        assert_eq!(statements[1].1, vec![Value::BigInt(Some(1))]);
    }

    #[tokio::test]
    async fn far_page_fetches_last_page() {
        let exec = ScriptedExecutor::new(15);
        let result = paginate(&exec, &spec(), &PageRequest::new(999)).await.unwrap();

        assert_eq!(result.window.current_page, 2);
        assert_eq!(result.items.len(), 5);
        assert!(exec.statements()[1].0.ends_with("LIMIT 10, 10"));
    }

    #[tokio::test]
    async fn count_accepts_driver_variants() {
        for count in [json!([{ "c": "42" }]), json!([{ "c": 42.0 }]), json!([42])] {
            let exec = ScriptedExecutor::with_count(count, 42);
            let result = paginate(&exec, &spec(), &PageRequest::new(5)).await.unwrap();
            assert_eq!(result.window.total_count, 42);
            assert_eq!(result.items.len(), 2);
        }
    }

    #[tokio::test]
    async fn malformed_counts_are_rejected() {
        let bad = [
            json!([]),
            json!([{ "cnt": null }]),
            json!([{ "cnt": "many" }]),
            json!([{ "cnt": -1 }]),
            json!([{ "cnt": 2.5 }]),
            json!([{ "a": 1, "b": 2 }]),
        ];

        for count in bad {
            let exec = ScriptedExecutor::with_count(count.clone(), 0);
            let err = paginate(&exec, &spec(), &PageRequest::default())
                .await
                .unwrap_err();
            assert!(
                matches!(err, PaginationError::MalformedCountResult(_)),
                "{count} should be rejected"
            );
            // No fetch after a bad count
            assert_eq!(exec.statements().len(), 1);
        }
    }

    #[tokio::test]
    async fn query_errors_pass_through() {
        let err = paginate(&FailingExecutor, &spec(), &PageRequest::default())
            .await
            .unwrap_err();

        match err {
            PaginationError::QueryExecution(DbErr::Custom(msg)) => {
                assert_eq!(msg, "connection reset")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
