//! # REST API Interface Layer
//!
//! HTTP endpoints for the pet service. Handlers translate DTOs from the
//! `shared` crate into domain commands, call the services held in
//! [`AppState`](crate::AppState), and map domain errors to status codes:
//!
//! - not found → 404
//! - validation failure → 400
//! - id already taken on create → 409
//! - unresolved concurrency conflict or storage failure → 500

pub mod error;
pub mod interaction_apis;
pub mod mappers;
pub mod pet_apis;
