// src/routes/index.rs

use axum::{extract::State, http::StatusCode};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::AppState;
use super::chart::bar_chart_json;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// GET / — the survey results page.
pub async fn index(State(state): State<AppState>) -> Result<Markup, (StatusCode, String)> {
    let json = bar_chart_json(&state).await?;
    Ok(page(&json))
}

pub fn page(chart_json: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Favourite code editors" }
                script src=(CHART_JS_CDN) {}
            }
            body {
                h1 { "Favourite code editors" }
                div {
                    canvas id="barChart" {}
                }
                script {
                    (PreEscaped(format!(
                        "new Chart(document.getElementById('barChart'), {});",
                        script_safe(chart_json)
                    )))
                }
            }
        }
    }
}

/// JSON stays valid when `</` is written as `<\/`, and a label can then
/// never terminate the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
