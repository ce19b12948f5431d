//! # Domain Module
//!
//! Business rules of the pet service, independent of HTTP and of the storage
//! engine.
//!
//! ## Module Organization
//!
//! - **attribute_policy**: how play, feeding and scolding move hunger and happiness
//! - **interaction_service**: records interactions and applies the policy
//! - **pet_service**: create, read, replace and delete pets
//! - **existence**: the shared "does this pet exist" lookup and conflict resolution
//! - **commands**: internal input types mapped from the public DTOs
//! - **errors**: the typed errors the REST layer turns into status codes
//!
//! ## Business Rules
//!
//! - Hunger and happiness never drop below zero and have no upper bound
//! - Interaction timestamps and pet ids come from the server, never the client
//! - A pet update and its interaction record are written together or not at all
//! - A write based on a stale read is rejected, never silently applied

pub mod attribute_policy;
pub mod commands;
pub mod errors;
pub mod existence;
pub mod interaction_service;
pub mod models;
pub mod pet_service;

pub use errors::{PetError, PetResult, PetValidationError};
pub use interaction_service::InteractionService;
pub use pet_service::PetService;
