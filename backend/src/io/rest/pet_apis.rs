//! # REST API for Pet Management
//!
//! Endpoints for listing, creating, retrieving, replacing and deleting pets.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::domain::PetError;
use crate::io::rest::mappers::pet_mapper::PetMapper;
use crate::AppState;
use shared::{CreatePetRequest, UpdatePetRequest};

/// List all pets ordered by id
pub async fn list_pets(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/Pets");

    match state.pet_service.list_pets().await {
        Ok(pets) => (StatusCode::OK, Json(PetMapper::to_dto_list(pets))).into_response(),
        Err(e) => {
            error!("Failed to list pets: {}", e);
            e.into_response()
        }
    }
}

/// Get a pet by ID
pub async fn get_pet(State(state): State<AppState>, Path(pet_id): Path<i64>) -> impl IntoResponse {
    info!("GET /api/Pets/{}", pet_id);

    match state.pet_service.get_pet(pet_id).await {
        Ok(pet) => (StatusCode::OK, Json(PetMapper::to_dto(pet))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new pet
pub async fn create_pet(
    State(state): State<AppState>,
    Json(request): Json<CreatePetRequest>,
) -> impl IntoResponse {
    info!("POST /api/Pets - request: {:?}", request);

    let command = match PetMapper::to_create_command(request) {
        Ok(command) => command,
        Err(e) => return PetError::from(e).into_response(),
    };

    match state.pet_service.create_pet(command).await {
        Ok(pet) => {
            let location = format!("/api/Pets/{}", pet.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(PetMapper::to_dto(pet)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create pet: {}", e);
            e.into_response()
        }
    }
}

/// Replace a pet
pub async fn replace_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    Json(request): Json<UpdatePetRequest>,
) -> impl IntoResponse {
    info!("PUT /api/Pets/{} - request: {:?}", pet_id, request);

    let command = PetMapper::to_replace_command(request);
    match state.pet_service.replace_pet(pet_id, command).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to replace pet {}: {}", pet_id, e);
            e.into_response()
        }
    }
}

/// Delete a pet and its interaction history
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/Pets/{}", pet_id);

    match state.pet_service.delete_pet(pet_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
