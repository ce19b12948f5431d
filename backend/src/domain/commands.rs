//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs defined in the
//! `shared` crate to these internal types.

pub mod pets {
    use chrono::{DateTime, Utc};

    /// Input for creating a new pet.
    #[derive(Debug, Clone, Default)]
    pub struct CreatePetCommand {
        pub id: Option<i64>,
        pub name: Option<String>,
        pub birthday: Option<DateTime<Utc>>,
        pub hunger_level: i64,
        pub happiness_level: i64,
    }

    /// Input for replacing a pet's mutable fields.
    #[derive(Debug, Clone)]
    pub struct ReplacePetCommand {
        /// Identifier carried in the body; must equal the path identifier
        pub id: i64,
        pub name: Option<String>,
        pub hunger_level: i64,
        pub happiness_level: i64,
        /// Version the caller based its change on, if it knows one
        pub expected_version: Option<i64>,
    }
}

pub mod interactions {
    use crate::domain::models::InteractionKind;

    /// Input for recording an interaction.
    #[derive(Debug, Clone)]
    pub struct RecordInteractionCommand {
        pub pet_id: i64,
        pub kind: InteractionKind,
    }
}
