//! The query a caller hands to the store facade: which series and
//! columns to read, the time range, and an optional post-filter applied
//! to assembled rows after the scanner emits them.

use std::sync::Arc;

use crate::model::RowPoint;

/// A predicate evaluated against each assembled row after the merge scan
/// produces it. The scanner itself never sees this -- it has no notion
/// of predicate pushdown.
pub type PostFilter = Arc<dyn Fn(&RowPoint) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct Query {
    pub database: String,
    pub series: String,
    pub columns: Vec<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub post_filter: Option<PostFilter>,
}

impl Query {
    pub fn new(
        database: impl Into<String>,
        series: impl Into<String>,
        columns: Vec<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            database: database.into(),
            series: series.into(),
            columns,
            start_time,
            end_time,
            post_filter: None,
        }
    }

    pub fn with_post_filter(mut self, filter: PostFilter) -> Self {
        self.post_filter = Some(filter);
        self
    }
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("database", &self.database)
            .field("series", &self.series)
            .field("columns", &self.columns)
            .field("start_time", &self.start_time)
            .field("end_time", &self.end_time)
            .field("post_filter", &self.post_filter.is_some())
            .finish()
    }
}
