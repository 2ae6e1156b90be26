use crate::charts::build_charts;
use crate::models::{DashboardView, Dataset, StatusFilter, SummaryCounts};
use crate::stats::{breakdown, summarize};
use std::sync::Arc;

/// Read-only dashboard context. The summary is computed once here and
/// served as-is for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub summary: SummaryCounts,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let summary = summarize(&dataset);
        Self {
            dataset: Arc::new(dataset),
            summary,
        }
    }

    pub fn select(&self, filter: StatusFilter) -> DashboardView {
        let breakdown = breakdown(&self.dataset, filter);
        let charts = build_charts(filter, &breakdown);
        DashboardView {
            filter,
            summary: self.summary,
            breakdown,
            charts,
        }
    }
}
