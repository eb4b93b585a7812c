// src/routes/chart.rs

use axum::{
    extract::State,
    http::{header, StatusCode},
};
use crate::{chart, db, AppState};
use super::internal_error;

/// Runs the survey query and assembles the bar chart, returning its JSON.
pub async fn bar_chart_json(state: &AppState) -> Result<String, (StatusCode, String)> {
    let counts = db::favourite_code_editors(&state.config.database_url)
        .await
        .map_err(internal_error)?;
    chart::render_bar_chart(&counts).map_err(internal_error)
}

pub async fn get_chart(
    State(state): State<AppState>,
) -> Result<([(header::HeaderName, &'static str); 1], String), (StatusCode, String)> {
    let json = bar_chart_json(&state).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json))
}
