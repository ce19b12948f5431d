//! Existence checks shared by the pet and interaction services, so that every
//! path reports a missing pet the same way.

use tracing::warn;

use crate::domain::errors::{PetError, PetResult};
use crate::domain::models::Pet;
use crate::storage::PetStorage;

/// Load a pet or fail with `NotFound`.
pub async fn require_pet(storage: &dyn PetStorage, pet_id: i64) -> PetResult<Pet> {
    match storage.get_pet(pet_id).await? {
        Some(pet) => Ok(pet),
        None => {
            warn!("Pet not found: {}", pet_id);
            Err(PetError::NotFound(pet_id))
        }
    }
}

/// Turn a failed version guard into the error the caller should see: `NotFound`
/// if the pet was deleted underneath us, otherwise `ConcurrencyConflict`.
pub async fn resolve_conflict(storage: &dyn PetStorage, pet_id: i64) -> PetError {
    match storage.pet_exists(pet_id).await {
        Ok(false) => {
            warn!("Pet {} was deleted during a write", pet_id);
            PetError::NotFound(pet_id)
        }
        Ok(true) => {
            warn!("Concurrent modification detected on pet {}", pet_id);
            PetError::ConcurrencyConflict(pet_id)
        }
        Err(e) => PetError::Storage(e),
    }
}
