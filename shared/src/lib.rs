use serde::{Deserialize, Serialize};

/// A pet as exchanged over the wire.
///
/// Field names are camelCase to match the JSON contract of the `/api/Pets` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: Option<String>,
    /// Birth timestamp (RFC 3339)
    pub birthday: String,
    pub hunger_level: i64,
    pub happiness_level: i64,
    /// Row-version marker; send it back on PUT to guard against lost updates
    pub version: i64,
}

/// Body of `POST /api/Pets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    /// Leave empty (or 0) to let the server assign an identifier
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Optional birth timestamp (RFC 3339); defaults to the creation time
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub hunger_level: i64,
    #[serde(default)]
    pub happiness_level: i64,
}

/// Body of `PUT /api/Pets/{id}`: a full replacement of the pet's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    /// Must match the id in the request path
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Accepted for payload symmetry with `Pet`; birthdays are immutable and this is ignored
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub hunger_level: i64,
    #[serde(default)]
    pub happiness_level: i64,
    /// Version the client last read. When absent the server guards the write with the
    /// version it reads itself.
    #[serde(default)]
    pub version: Option<i64>,
}

/// The kind of interaction a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    Play,
    Feeding,
    Scolding,
}

/// An immutable log entry of one interaction with a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub id: i64,
    pub kind: InteractionKind,
    pub pet_id: i64,
    /// Server-assigned timestamp (RFC 3339)
    pub occurred_at: String,
}

/// Optional body of the interaction endpoints.
///
/// Every field is overwritten by the server; the type exists so that clients sending
/// a record-shaped payload are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InteractionPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "when")]
    pub occurred_at: Option<String>,
    #[serde(default)]
    pub pet_id: Option<i64>,
}

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
