//! # REST API for Pet Interactions
//!
//! `POST /api/Pets/{id}/Playtimes`, `/Feedings` and `/Scoldings` record an
//! interaction; `GET /api/Pets/{id}/Interactions` lists them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, info};

use crate::domain::commands::interactions::RecordInteractionCommand;
use crate::domain::models::InteractionKind;
use crate::io::rest::mappers::interaction_mapper::InteractionMapper;
use crate::AppState;
use shared::InteractionPayload;

/// Play with a pet
pub async fn play(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    payload: Option<Json<InteractionPayload>>,
) -> Response {
    info!("POST /api/Pets/{}/Playtimes", pet_id);
    record(state, pet_id, InteractionKind::Play, payload).await
}

/// Feed a pet
pub async fn feed(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    payload: Option<Json<InteractionPayload>>,
) -> Response {
    info!("POST /api/Pets/{}/Feedings", pet_id);
    record(state, pet_id, InteractionKind::Feeding, payload).await
}

/// Scold a pet
pub async fn scold(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    payload: Option<Json<InteractionPayload>>,
) -> Response {
    info!("POST /api/Pets/{}/Scoldings", pet_id);
    record(state, pet_id, InteractionKind::Scolding, payload).await
}

/// List the interaction history of a pet
pub async fn list_interactions(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/Pets/{}/Interactions", pet_id);

    match state.interaction_service.list_interactions(pet_id).await {
        Ok(records) => {
            (StatusCode::OK, Json(InteractionMapper::to_dto_list(records))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn record(
    state: AppState,
    pet_id: i64,
    kind: InteractionKind,
    payload: Option<Json<InteractionPayload>>,
) -> Response {
    if let Some(Json(payload)) = payload {
        // Server-assigned fields win over anything the client sent
        debug!("Ignoring client-supplied interaction fields: {:?}", payload);
    }

    let command = RecordInteractionCommand { pet_id, kind };
    match state.interaction_service.record_interaction(command).await {
        Ok(record) => (StatusCode::OK, Json(InteractionMapper::to_dto(record))).into_response(),
        Err(e) => e.into_response(),
    }
}
