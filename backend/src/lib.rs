//! # Pet Lifecycle Backend
//!
//! A virtual-pet service: pets with hunger and happiness levels, and a log of
//! play, feeding and scolding interactions that move those levels.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (axum REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (attribute policy, pet and interaction services)
//!     ↓
//! Storage Layer (SQLite repository with version-guarded writes)
//! ```
//!
//! The connection pool is created once at startup and handed to every handler
//! through [`AppState`]; there is no global database handle.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{InteractionService, PetService};
use crate::io::rest::{interaction_apis, pet_apis};
use crate::storage::{DbConnection, PetRepository, PetStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub pet_service: PetService,
    pub interaction_service: InteractionService,
}

impl AppState {
    /// Wire the services on top of an open database connection
    pub fn new(db: DbConnection) -> Self {
        let storage: Arc<dyn PetStorage> = Arc::new(PetRepository::new(db));
        Self {
            pet_service: PetService::new(storage.clone()),
            interaction_service: InteractionService::new(storage),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url, config.max_connections).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/Pets", get(pet_apis::list_pets).post(pet_apis::create_pet))
        .route(
            "/Pets/:id",
            get(pet_apis::get_pet)
                .put(pet_apis::replace_pet)
                .delete(pet_apis::delete_pet),
        )
        .route("/Pets/:id/Playtimes", post(interaction_apis::play))
        .route("/Pets/:id/Feedings", post(interaction_apis::feed))
        .route("/Pets/:id/Scoldings", post(interaction_apis::scold))
        .route("/Pets/:id/Interactions", get(interaction_apis::list_interactions))
}
