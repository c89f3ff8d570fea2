use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use tracing::{error, info, warn};

use crate::handlers::lead_dtos::{
    HealthResponse, LeadRequest, SubmitResponse, FORWARDED_MESSAGE, PROCESSING_ERROR,
    RECEIVED_MESSAGE,
};
use crate::utils::lead_message::format_lead_message;
use crate::AppState;

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<SubmitResponse>)>;

/// Accepts a lead from the landing page and forwards it to the Telegram chat.
///
/// Forwarding problems are logged but never surfaced: once the lead passes
/// validation the visitor is told it was received.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadRequest>, JsonRejection>,
) -> HandlerResult<SubmitResponse> {
    let Json(request) = payload.map_err(|rejection| {
        error!("Failed to read lead payload: {}", rejection.body_text());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SubmitResponse::rejected(PROCESSING_ERROR)),
        )
    })?;

    let lead = request.into_lead().map_err(|rejection| {
        info!("Rejected lead: {:?}", rejection);
        (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::rejected(rejection.message())),
        )
    })?;

    if !state.config.bot_configured() {
        warn!("Telegram bot is not configured, lead was not forwarded");
        return Ok(Json(SubmitResponse::accepted(RECEIVED_MESSAGE)));
    }

    let message = format_lead_message(&lead.name, &lead.phone, &Local::now());

    match state.telegram.send_message(&message).await {
        Ok(response) if response.ok => {
            info!("Lead forwarded to Telegram chat {}", state.telegram.chat_id());
            Ok(Json(SubmitResponse::accepted(FORWARDED_MESSAGE)))
        }
        Ok(response) => {
            error!(
                "Telegram rejected lead notification: code={:?} description={:?}",
                response.error_code, response.description
            );
            Ok(Json(SubmitResponse::accepted(RECEIVED_MESSAGE)))
        }
        Err(e) => {
            error!("Failed to send lead notification to Telegram: {}", e);
            Ok(Json(SubmitResponse::accepted(RECEIVED_MESSAGE)))
        }
    }
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        bot_configured: state.config.bot_configured(),
    })
}
