use crate::errors::AppError;
use crate::models::{DashboardView, DropdownOption, StatusFilter, StatusQuery, SummaryCounts};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::debug;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Html<String>, AppError> {
    let filter = parse_filter(query.status.as_deref())?;
    let view = state.select(filter);
    let view_json = serde_json::to_string(&view).map_err(AppError::internal)?;
    Ok(Html(render_index(&view, &view_json)))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryCounts> {
    Json(state.summary)
}

pub async fn get_breakdown(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let filter = parse_filter(query.status.as_deref())?;
    let view = state.select(filter);
    debug!(%filter, regions = view.breakdown.len(), "rebuilt breakdown");
    Ok(Json(view))
}

pub async fn get_options() -> Json<Vec<DropdownOption>> {
    let options = StatusFilter::ALL
        .iter()
        .map(|filter| DropdownOption {
            label: filter.to_string(),
            value: filter.to_string(),
        })
        .collect();
    Json(options)
}

fn parse_filter(raw: Option<&str>) -> Result<StatusFilter, AppError> {
    match raw {
        None => Ok(StatusFilter::default()),
        Some(value) => value
            .trim()
            .parse::<StatusFilter>()
            .map_err(|err| AppError::bad_request(err.to_string())),
    }
}
