//! Print Labels API handler
//!
//! The endpoint always answers 200 with one message per submitted item
//! code, in input order. Per-item failures live in the array, never in the
//! HTTP status.

use axum::{Form, Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::labels::LabelVariant;

/// Form payload of the operator page
#[derive(Debug, Deserialize)]
pub struct PrintLabelsRequest {
    /// Newline- or comma-separated item codes
    #[serde(default)]
    pub item_codes: String,
    /// Label variant selector; absent means `large`
    #[serde(default)]
    pub label_type: LabelVariant,
}

/// POST /print_labels
///
/// Normalizes the submitted code list, runs the batch pipeline, and
/// returns the per-item messages.
pub async fn print_labels(
    State(state): State<ServerState>,
    Form(request): Form<PrintLabelsRequest>,
) -> Json<Vec<String>> {
    let codes = normalize_item_codes(&request.item_codes);
    tracing::info!(
        count = codes.len(),
        variant = %request.label_type,
        "Print batch received"
    );

    let outcomes = state
        .pipeline
        .process_batch(&codes, request.label_type)
        .await;

    Json(outcomes.iter().map(ToString::to_string).collect())
}

/// Split the raw form value into candidate codes
///
/// Newlines count as separators like commas; entries are trimmed and
/// empties dropped, so the response carries one message per actual code.
fn normalize_item_codes(raw: &str) -> Vec<String> {
    raw.replace('\n', ",")
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect()
}
