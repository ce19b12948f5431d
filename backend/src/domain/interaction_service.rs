//! # Interaction Recorder
//!
//! Records play, feeding and scolding events. Each recording loads the pet,
//! runs the attribute policy, stamps the record with the server clock and hands
//! the pet update and the new record to storage as a single atomic write guarded
//! by the version that was read.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::attribute_policy::apply_interaction;
use crate::domain::commands::interactions::RecordInteractionCommand;
use crate::domain::errors::PetResult;
use crate::domain::existence::{require_pet, resolve_conflict};
use crate::domain::models::{InteractionRecord, NewInteraction};
use crate::storage::{PetStorage, WriteOutcome};

#[derive(Clone)]
pub struct InteractionService {
    storage: Arc<dyn PetStorage>,
}

impl InteractionService {
    pub fn new(storage: Arc<dyn PetStorage>) -> Self {
        Self { storage }
    }

    /// Record one interaction and apply its effect to the pet.
    pub async fn record_interaction(
        &self,
        command: RecordInteractionCommand,
    ) -> PetResult<InteractionRecord> {
        info!("Recording {} for pet {}", command.kind, command.pet_id);

        let pet = require_pet(self.storage.as_ref(), command.pet_id).await?;

        let (hunger_level, happiness_level) =
            apply_interaction(command.kind, pet.hunger_level, pet.happiness_level);
        let updated = pet.with_attributes(hunger_level, happiness_level);

        let interaction = NewInteraction {
            kind: command.kind,
            pet_id: pet.id,
            occurred_at: Utc::now(),
        };

        match self
            .storage
            .record_interaction(&updated, pet.version, &interaction)
            .await?
        {
            WriteOutcome::Applied(record) => {
                info!(
                    "Recorded {} #{} for pet {}: hunger {} -> {}, happiness {} -> {}",
                    record.kind,
                    record.id,
                    pet.id,
                    pet.hunger_level,
                    hunger_level,
                    pet.happiness_level,
                    happiness_level
                );
                Ok(record)
            }
            WriteOutcome::Conflict => Err(resolve_conflict(self.storage.as_ref(), pet.id).await),
        }
    }

    /// List the interaction history of one pet
    pub async fn list_interactions(&self, pet_id: i64) -> PetResult<Vec<InteractionRecord>> {
        info!("Listing interactions for pet {}", pet_id);
        require_pet(self.storage.as_ref(), pet_id).await?;
        Ok(self.storage.list_interactions(pet_id).await?)
    }
}
