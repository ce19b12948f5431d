//! # SQLite Storage
//!
//! SQLite implementations of the storage traits.

pub mod pet_repository;

pub use pet_repository::PetRepository;
