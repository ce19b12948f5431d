//! Domain model for a pet.
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: Option<String>,
    pub birthday: DateTime<Utc>,
    pub hunger_level: i64,
    pub happiness_level: i64,
    pub version: i64, // bumped by every successful write
}

/// A pet that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    /// Explicit identifier requested by the caller; `None` lets the store assign one
    pub id: Option<i64>,
    pub name: Option<String>,
    pub birthday: DateTime<Utc>,
    pub hunger_level: i64,
    pub happiness_level: i64,
}

impl Pet {
    /// Copy of this pet carrying new attribute values, keeping identity and version.
    pub fn with_attributes(&self, hunger_level: i64, happiness_level: i64) -> Self {
        Self {
            hunger_level,
            happiness_level,
            ..self.clone()
        }
    }
}
