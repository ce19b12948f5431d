pub mod interaction_mapper;
pub mod pet_mapper;
