//! backend/src/io/rest/mappers/interaction_mapper.rs

use shared::{InteractionKind as SharedKind, InteractionRecord as SharedRecord};

use crate::domain::models::{InteractionKind, InteractionRecord};

/// Mapper to convert domain interaction records to shared DTOs.
pub struct InteractionMapper;

impl InteractionMapper {
    pub fn to_dto(domain: InteractionRecord) -> SharedRecord {
        SharedRecord {
            id: domain.id,
            kind: Self::kind_to_dto(domain.kind),
            pet_id: domain.pet_id,
            occurred_at: domain.occurred_at.to_rfc3339(),
        }
    }

    pub fn to_dto_list(records: Vec<InteractionRecord>) -> Vec<SharedRecord> {
        records.into_iter().map(Self::to_dto).collect()
    }

    pub fn kind_to_dto(kind: InteractionKind) -> SharedKind {
        match kind {
            InteractionKind::Play => SharedKind::Play,
            InteractionKind::Feeding => SharedKind::Feeding,
            InteractionKind::Scolding => SharedKind::Scolding,
        }
    }
}
