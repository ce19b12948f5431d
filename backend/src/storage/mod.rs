//! # Storage Module
//!
//! Handles all data persistence for the pet service.
//!
//! The domain layer only sees the [`PetStorage`] trait; the SQLite repository is
//! the sole writer of persisted state. Every pet row carries a `version` column
//! and every write to a pet compares it, so two requests that read the same row
//! cannot both write back.
//!
//! - **connection.rs** - pool setup and schema creation
//! - **traits.rs** - storage abstraction used by the domain services
//! - **sqlite/** - SQLite repository implementation

pub mod connection;
pub mod sqlite;
pub mod traits;

pub use connection::DbConnection;
pub use sqlite::PetRepository;
pub use traits::{PetStorage, WriteOutcome};
