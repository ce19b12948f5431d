//! Domain model for interaction records.
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Play,
    Feeding,
    Scolding,
}

impl InteractionKind {
    /// Storage representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Play => "play",
            InteractionKind::Feeding => "feeding",
            InteractionKind::Scolding => "scolding",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(InteractionKind::Play),
            "feeding" => Ok(InteractionKind::Feeding),
            "scolding" => Ok(InteractionKind::Scolding),
            other => Err(anyhow::anyhow!("Unknown interaction kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    pub id: i64,
    pub kind: InteractionKind,
    pub pet_id: i64,
    pub occurred_at: DateTime<Utc>,
}

/// An interaction about to be written alongside its pet update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInteraction {
    pub kind: InteractionKind,
    pub pet_id: i64,
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_storage_names_parse_back() {
        for kind in [InteractionKind::Play, InteractionKind::Feeding, InteractionKind::Scolding] {
            assert_eq!(kind.as_str().parse::<InteractionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!("tickling".parse::<InteractionKind>().is_err());
    }
}
