use std::sync::Arc;

use axum::{extract::State, Json};
use bbcars_common::leads::{LeadReceipt, LeadRequest};
use chrono::Utc;
use governor::RateLimiter;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(lead): Json<LeadRequest>,
) -> Result<Json<LeadReceipt>, ApiError> {
    let kind = lead.kind();
    let lead = lead.validate(&state.catalog).map_err(|err| {
        tracing::debug!("Rejected {} lead, invalid field: {}", kind, err.field());
        ApiError::from(err)
    })?;

    let quota = state.lead_quota;
    let limiter_key = lead.contact_key();
    let entry = state.lead_limiter
        .entry(kind)
        .or_insert_with(|| RateLimiter::keyed(quota));
    if entry.value().check_key(&limiter_key).is_err() {
        tracing::warn!("Rate limit exceeded for {} lead from [redacted]", kind);
        return Err(ApiError::too_many_requests());
    }
    drop(entry);

    let reference = Uuid::new_v4().to_string();
    tracing::info!(
        reference = %reference,
        kind,
        car_id = lead.car_id().unwrap_or("-"),
        received_at = %Utc::now().to_rfc3339(),
        "Lead received"
    );
    Ok(Json(LeadReceipt { reference }))
}
