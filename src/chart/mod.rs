// src/chart/mod.rs

use thiserror::Error;
use tracing::error;

use crate::models::{CategoryCounts, ChartData, ChartJs, ChartOptions, Dataset};

pub const BAR_CHART_TYPE: &str = "bar";
pub const VOTES_LABEL: &str = "Number of votes";

#[derive(Debug, Error)]
pub enum ChartAssemblyError {
    #[error("failed to serialize the bar chart: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Builds the bar chart configuration for the given vote counts.
///
/// Labels and values are collected in the same pass, so `labels[i]` and
/// `datasets[0].data[i]` always describe the same category.
pub fn bar_chart(counts: &CategoryCounts) -> ChartJs {
    let mut labels = Vec::with_capacity(counts.len());
    let mut data = Vec::with_capacity(counts.len());
    for (category, count) in counts.iter() {
        labels.push(category.to_owned());
        data.push(count as f64);
    }

    ChartJs {
        chart_type: BAR_CHART_TYPE.into(),
        options: ChartOptions { responsive: true, ..Default::default() },
        data: ChartData {
            labels,
            datasets: vec![Dataset { label: VOTES_LABEL.into(), data, ..Default::default() }],
        },
    }
}

pub fn to_json(chart: &ChartJs) -> Result<String, ChartAssemblyError> {
    serde_json::to_string(chart).map_err(|e| {
        error!(error = %e, "error initialising the bar chart");
        ChartAssemblyError::from(e)
    })
}

pub fn render_bar_chart(counts: &CategoryCounts) -> Result<String, ChartAssemblyError> {
    to_json(&bar_chart(counts))
}
