//! # Storage Traits
//!
//! The storage abstraction the domain layer is written against. Implementations
//! own all persisted pet state and must honour the version guard on every pet
//! write.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{InteractionRecord, NewInteraction, NewPet, Pet};

/// Outcome of a write that can lose a race with another writer.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome<T> {
    /// The write was applied; carries the stored result
    Applied(T),
    /// Nothing was written: the version guard failed or the identifier is taken
    Conflict,
}

/// Trait defining the interface for pet and interaction storage operations
#[async_trait]
pub trait PetStorage: Send + Sync {
    /// List all pets ordered by id ascending
    async fn list_pets(&self) -> Result<Vec<Pet>>;

    /// Retrieve a pet by id
    async fn get_pet(&self, pet_id: i64) -> Result<Option<Pet>>;

    /// Lightweight existence check
    async fn pet_exists(&self, pet_id: i64) -> Result<bool>;

    /// Insert a new pet at version 0.
    /// Returns `Conflict` if the requested id is already taken.
    async fn insert_pet(&self, pet: &NewPet) -> Result<WriteOutcome<Pet>>;

    /// Overwrite name, hunger and happiness of `pet.id` if its stored version still
    /// equals `expected_version`. Birthday is never written.
    async fn update_pet(&self, pet: &Pet, expected_version: i64) -> Result<WriteOutcome<Pet>>;

    /// Delete a pet and all of its interaction records in one transaction.
    /// Returns true if the pet was found and deleted.
    async fn delete_pet(&self, pet_id: i64) -> Result<bool>;

    /// Atomically write `updated`'s attributes (guarded by `expected_version`) and
    /// insert `interaction`. Either both land or neither does.
    async fn record_interaction(
        &self,
        updated: &Pet,
        expected_version: i64,
        interaction: &NewInteraction,
    ) -> Result<WriteOutcome<InteractionRecord>>;

    /// List the interaction records of one pet ordered by id ascending
    async fn list_interactions(&self, pet_id: i64) -> Result<Vec<InteractionRecord>>;
}
