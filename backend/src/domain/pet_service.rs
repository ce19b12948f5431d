use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::pets::{CreatePetCommand, ReplacePetCommand};
use crate::domain::errors::{PetError, PetResult, PetValidationError};
use crate::domain::existence::{require_pet, resolve_conflict};
use crate::domain::models::{NewPet, Pet};
use crate::storage::{PetStorage, WriteOutcome};

/// Largest id a caller may request on create. Ids beyond it would push the
/// AUTOINCREMENT sequence to its limit and break server-assigned ids.
pub const MAX_EXPLICIT_PET_ID: i64 = i32::MAX as i64;

/// Service for creating, reading, replacing and deleting pets
#[derive(Clone)]
pub struct PetService {
    storage: Arc<dyn PetStorage>,
}

impl PetService {
    pub fn new(storage: Arc<dyn PetStorage>) -> Self {
        Self { storage }
    }

    /// List all pets ordered by id
    pub async fn list_pets(&self) -> PetResult<Vec<Pet>> {
        info!("Listing all pets");
        let pets = self.storage.list_pets().await?;
        info!("Found {} pets", pets.len());
        Ok(pets)
    }

    /// Get a pet by id
    pub async fn get_pet(&self, pet_id: i64) -> PetResult<Pet> {
        info!("Getting pet: {}", pet_id);
        require_pet(self.storage.as_ref(), pet_id).await
    }

    pub async fn pet_exists(&self, pet_id: i64) -> PetResult<bool> {
        Ok(self.storage.pet_exists(pet_id).await?)
    }

    /// Create a new pet
    pub async fn create_pet(&self, command: CreatePetCommand) -> PetResult<Pet> {
        info!("Creating pet: name={:?}", command.name);

        validate_attributes(command.hunger_level, command.happiness_level)?;

        // 0 is what clients send when they leave the id for us to pick
        let requested_id = match command.id {
            None | Some(0) => None,
            Some(id) if !(1..=MAX_EXPLICIT_PET_ID).contains(&id) => {
                return Err(PetValidationError::InvalidId(id).into())
            }
            Some(id) => Some(id),
        };

        let new_pet = NewPet {
            id: requested_id,
            name: command.name,
            birthday: command.birthday.unwrap_or_else(Utc::now),
            hunger_level: command.hunger_level,
            happiness_level: command.happiness_level,
        };

        match self.storage.insert_pet(&new_pet).await? {
            WriteOutcome::Applied(pet) => {
                info!("Created pet with ID: {}", pet.id);
                Ok(pet)
            }
            WriteOutcome::Conflict => {
                let id = requested_id.unwrap_or_default();
                warn!("Refusing to create pet with taken id {}", id);
                Err(PetError::IdentifierConflict(id))
            }
        }
    }

    /// Replace the mutable fields of an existing pet.
    ///
    /// The write is guarded by the version the caller supplied, or by the version
    /// read here when it supplied none.
    pub async fn replace_pet(&self, pet_id: i64, command: ReplacePetCommand) -> PetResult<Pet> {
        info!("Replacing pet: {}", pet_id);

        if command.id != pet_id {
            return Err(PetValidationError::IdMismatch {
                path_id: pet_id,
                body_id: command.id,
            }
            .into());
        }
        validate_attributes(command.hunger_level, command.happiness_level)?;

        let current = require_pet(self.storage.as_ref(), pet_id).await?;
        let expected_version = command.expected_version.unwrap_or(current.version);

        let replacement = Pet {
            name: command.name,
            hunger_level: command.hunger_level,
            happiness_level: command.happiness_level,
            ..current
        };

        match self.storage.update_pet(&replacement, expected_version).await? {
            WriteOutcome::Applied(pet) => {
                info!("Replaced pet {} (now version {})", pet.id, pet.version);
                Ok(pet)
            }
            WriteOutcome::Conflict => Err(resolve_conflict(self.storage.as_ref(), pet_id).await),
        }
    }

    /// Delete a pet together with its interaction records
    pub async fn delete_pet(&self, pet_id: i64) -> PetResult<()> {
        info!("Deleting pet: {}", pet_id);

        if !self.storage.delete_pet(pet_id).await? {
            warn!("Pet not found: {}", pet_id);
            return Err(PetError::NotFound(pet_id));
        }

        info!("Deleted pet: {}", pet_id);
        Ok(())
    }
}

fn validate_attributes(hunger_level: i64, happiness_level: i64) -> Result<(), PetValidationError> {
    if hunger_level < 0 {
        return Err(PetValidationError::NegativeHunger(hunger_level));
    }
    if happiness_level < 0 {
        return Err(PetValidationError::NegativeHappiness(happiness_level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, PetRepository};

    async fn setup_test() -> PetService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        PetService::new(Arc::new(PetRepository::new(db)))
    }

    fn named(name: &str) -> CreatePetCommand {
        CreatePetCommand {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn replacement(pet: &Pet, hunger_level: i64) -> ReplacePetCommand {
        ReplacePetCommand {
            id: pet.id,
            name: pet.name.clone(),
            hunger_level,
            happiness_level: pet.happiness_level,
            expected_version: Some(pet.version),
        }
    }

    #[tokio::test]
    async fn test_create_pet() {
        let service = setup_test().await;

        let pet = service.create_pet(named("Mochi")).await.expect("Failed to create pet");

        assert!(pet.id > 0);
        assert_eq!(pet.name.as_deref(), Some("Mochi"));
        assert_eq!((pet.hunger_level, pet.happiness_level, pet.version), (0, 0, 0));
        assert_eq!(service.get_pet(pet.id).await.unwrap(), pet);
    }

    #[tokio::test]
    async fn test_create_pet_rejects_negative_attributes() {
        let service = setup_test().await;

        let command = CreatePetCommand { hunger_level: -1, ..named("Grumpy") };
        let result = service.create_pet(command).await;
        assert!(matches!(
            result,
            Err(PetError::Validation(PetValidationError::NegativeHunger(-1)))
        ));

        let command = CreatePetCommand { happiness_level: -4, ..named("Grumpy") };
        let result = service.create_pet(command).await;
        assert!(matches!(
            result,
            Err(PetError::Validation(PetValidationError::NegativeHappiness(-4)))
        ));

        assert!(service.list_pets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_pet_with_taken_id_is_rejected() {
        let service = setup_test().await;

        let first = service
            .create_pet(CreatePetCommand { id: Some(3), ..named("First") })
            .await
            .expect("Failed to create pet");
        assert_eq!(first.id, 3);

        let result = service.create_pet(CreatePetCommand { id: Some(3), ..named("Second") }).await;
        assert!(matches!(result, Err(PetError::IdentifierConflict(3))));
    }

    #[tokio::test]
    async fn test_create_pet_zero_id_means_assign() {
        let service = setup_test().await;

        let pet = service
            .create_pet(CreatePetCommand { id: Some(0), ..named("Zero") })
            .await
            .expect("Failed to create pet");
        assert!(pet.id > 0);

        let result = service.create_pet(CreatePetCommand { id: Some(-2), ..named("Neg") }).await;
        assert!(matches!(
            result,
            Err(PetError::Validation(PetValidationError::InvalidId(-2)))
        ));
    }

    #[tokio::test]
    async fn test_create_pet_rejects_oversized_id() {
        let service = setup_test().await;

        let result = service
            .create_pet(CreatePetCommand { id: Some(i64::MAX), ..named("Huge") })
            .await;
        assert!(matches!(
            result,
            Err(PetError::Validation(PetValidationError::InvalidId(i64::MAX)))
        ));

        // The largest allowed id still leaves room for server-assigned ids
        let top = service
            .create_pet(CreatePetCommand { id: Some(MAX_EXPLICIT_PET_ID), ..named("Top") })
            .await
            .expect("Failed to create pet at the id cap");
        assert_eq!(top.id, MAX_EXPLICIT_PET_ID);

        let auto = service.create_pet(named("Auto")).await.expect("Server-assigned create failed");
        assert!(auto.id > MAX_EXPLICIT_PET_ID);
    }

    #[tokio::test]
    async fn test_list_pets_sorted_by_id() {
        let service = setup_test().await;

        for id in [9, 4, 6] {
            service
                .create_pet(CreatePetCommand { id: Some(id), ..named("Pet") })
                .await
                .unwrap();
        }

        let ids: Vec<i64> = service.list_pets().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 6, 9]);
    }

    #[tokio::test]
    async fn test_get_nonexistent_pet() {
        let service = setup_test().await;

        assert!(matches!(service.get_pet(404).await, Err(PetError::NotFound(404))));
        assert!(!service.pet_exists(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_replace_pet() {
        let service = setup_test().await;
        let pet = service.create_pet(named("Original")).await.unwrap();

        let command = ReplacePetCommand {
            id: pet.id,
            name: Some("Renamed".to_string()),
            hunger_level: 7,
            happiness_level: 2,
            expected_version: None,
        };
        let replaced = service.replace_pet(pet.id, command).await.expect("Replace failed");

        assert_eq!(replaced.name.as_deref(), Some("Renamed"));
        assert_eq!((replaced.hunger_level, replaced.happiness_level), (7, 2));
        assert_eq!(replaced.version, 1);
        assert_eq!(replaced.birthday, pet.birthday);
        assert_eq!(service.get_pet(pet.id).await.unwrap(), replaced);
    }

    #[tokio::test]
    async fn test_replace_with_mismatched_id_is_rejected() {
        let service = setup_test().await;
        let pet = service.create_pet(named("Mochi")).await.unwrap();

        let mut command = replacement(&pet, 9);
        command.id = pet.id + 1;
        let result = service.replace_pet(pet.id, command).await;

        assert!(matches!(
            result,
            Err(PetError::Validation(PetValidationError::IdMismatch { .. }))
        ));
        assert_eq!(service.get_pet(pet.id).await.unwrap().version, 0);
    }

    #[tokio::test]
    async fn test_replace_missing_pet_is_not_found() {
        let service = setup_test().await;

        let command = ReplacePetCommand {
            id: 12,
            name: None,
            hunger_level: 0,
            happiness_level: 0,
            expected_version: Some(0),
        };
        assert!(matches!(service.replace_pet(12, command).await, Err(PetError::NotFound(12))));
    }

    #[tokio::test]
    async fn test_replace_from_same_read_conflicts() {
        let service = setup_test().await;
        let pet = service.create_pet(named("Mochi")).await.unwrap();

        // Both callers read version 0
        let first = service.replace_pet(pet.id, replacement(&pet, 1)).await;
        let second = service.replace_pet(pet.id, replacement(&pet, 2)).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(PetError::ConcurrencyConflict(id)) if id == pet.id));
        assert_eq!(service.get_pet(pet.id).await.unwrap().hunger_level, 1);
    }

    #[tokio::test]
    async fn test_concurrent_replace_exactly_one_wins() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite:{}", dir.path().join("pets.db").display());
        let db = DbConnection::new(&url, 4).await.expect("Failed to open database");
        let service = PetService::new(Arc::new(PetRepository::new(db)));

        let pet = service.create_pet(named("Mochi")).await.unwrap();

        let (a, b) = tokio::join!(
            service.replace_pet(pet.id, replacement(&pet, 10)),
            service.replace_pet(pet.id, replacement(&pet, 20)),
        );

        let outcomes = [a, b];
        let wins = outcomes.iter().filter(|r| r.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|r| matches!(r, Err(PetError::ConcurrencyConflict(_))))
            .count();
        assert_eq!((wins, conflicts), (1, 1));

        let stored = service.get_pet(pet.id).await.unwrap();
        assert_eq!(stored.version, 1);
        assert!(stored.hunger_level == 10 || stored.hunger_level == 20);
    }

    #[tokio::test]
    async fn test_delete_pet() {
        let service = setup_test().await;
        let pet = service.create_pet(named("Mochi")).await.unwrap();

        service.delete_pet(pet.id).await.expect("Delete failed");

        assert!(matches!(service.get_pet(pet.id).await, Err(PetError::NotFound(_))));
        assert!(matches!(service.delete_pet(pet.id).await, Err(PetError::NotFound(_))));
    }
}
