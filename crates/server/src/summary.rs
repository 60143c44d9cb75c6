//! Summary API endpoint.

use api_types::summary::SummaryView;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the category-totaled spend summary.
pub async fn get_summary(
    State(state): State<ServerState>,
) -> Result<Json<SummaryView>, ServerError> {
    let summary = state.engine.summary().await?;

    Ok(Json(SummaryView {
        total: summary.total,
        by_category: summary.by_category,
    }))
}
