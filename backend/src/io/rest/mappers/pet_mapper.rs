//! backend/src/io/rest/mappers/pet_mapper.rs

use chrono::{DateTime, Utc};
use shared::{CreatePetRequest, Pet as SharedPet, UpdatePetRequest};

use crate::domain::commands::pets::{CreatePetCommand, ReplacePetCommand};
use crate::domain::models::Pet as DomainPet;
use crate::domain::PetValidationError;

/// Mapper to convert between shared Pet DTOs and domain Pet models.
pub struct PetMapper;

impl PetMapper {
    /// Converts a domain Pet model to a shared Pet DTO.
    pub fn to_dto(domain: DomainPet) -> SharedPet {
        SharedPet {
            id: domain.id,
            name: domain.name,
            birthday: domain.birthday.to_rfc3339(),
            hunger_level: domain.hunger_level,
            happiness_level: domain.happiness_level,
            version: domain.version,
        }
    }

    pub fn to_dto_list(domain_pets: Vec<DomainPet>) -> Vec<SharedPet> {
        domain_pets.into_iter().map(Self::to_dto).collect()
    }

    /// Converts a create request to a domain command, parsing the optional birthday.
    pub fn to_create_command(
        request: CreatePetRequest,
    ) -> Result<CreatePetCommand, PetValidationError> {
        let birthday = request.birthday.as_deref().map(parse_birthday).transpose()?;

        Ok(CreatePetCommand {
            id: request.id,
            name: request.name,
            birthday,
            hunger_level: request.hunger_level,
            happiness_level: request.happiness_level,
        })
    }

    /// Converts an update request to a domain command. The birthday in the body is
    /// dropped because it can't change after creation.
    pub fn to_replace_command(request: UpdatePetRequest) -> ReplacePetCommand {
        ReplacePetCommand {
            id: request.id,
            name: request.name,
            hunger_level: request.hunger_level,
            happiness_level: request.happiness_level,
            expected_version: request.version,
        }
    }
}

fn parse_birthday(value: &str) -> Result<DateTime<Utc>, PetValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PetValidationError::InvalidBirthday(value.to_string()))
}
