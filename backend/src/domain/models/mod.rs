pub mod interaction;
pub mod pet;

pub use interaction::{InteractionKind, InteractionRecord, NewInteraction};
pub use pet::{NewPet, Pet};
