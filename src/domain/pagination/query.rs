use sea_orm::Value;

/// The SQL fragments a list handler hands to the engine.
///
/// `fetch_query` is a bare `SELECT` (no `ORDER BY`, no `LIMIT`);
/// `count_query` must apply the same filter and return a single count
/// column. Fragments are trusted SQL written by the caller; only the bind
/// values may carry client input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    pub fetch_query: String,
    pub count_query: String,
    pub order_clause: String,
    pub fetch_params: Vec<Value>,
    pub count_params: Vec<Value>,
}

impl QuerySpec {
    pub fn new(
        fetch_query: impl Into<String>,
        count_query: impl Into<String>,
        order_clause: impl Into<String>,
    ) -> Self {
        Self {
            fetch_query: fetch_query.into(),
            count_query: count_query.into(),
            order_clause: order_clause.into(),
            ..Self::default()
        }
    }

    /// Bind the same values to both statements, the common case where the
    /// count repeats the fetch's `WHERE` clause.
    pub fn bind_both<I, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let params: Vec<Value> = params.into_iter().map(Into::into).collect();
        self.count_params = params.clone();
        self.fetch_params = params;
        self
    }

    pub fn bind_fetch<I, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.fetch_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn bind_count<I, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.count_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// The full fetch statement for one page: fetch, order, then `limit`.
    pub fn page_sql(&self, limit_clause: &str) -> String {
        [
            self.fetch_query.trim(),
            self.order_clause.trim(),
            limit_clause.trim(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}
