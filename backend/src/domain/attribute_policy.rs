//! # Attribute Policy
//!
//! Pure rules for how each interaction moves a pet's hunger and happiness.
//!
//! Both attributes have a floor of zero and no ceiling. Increases saturate at
//! `i64::MAX` instead of wrapping.

use crate::domain::models::InteractionKind;

pub const PLAY_HAPPINESS_GAIN: i64 = 5;
pub const PLAY_HUNGER_GAIN: i64 = 3;
pub const FEEDING_HAPPINESS_GAIN: i64 = 3;
pub const FEEDING_HUNGER_RELIEF: i64 = 5;
pub const SCOLDING_HAPPINESS_LOSS: i64 = 5;

/// Lowest value either attribute may take.
pub const ATTRIBUTE_FLOOR: i64 = 0;

/// Apply one interaction to a (hunger, happiness) pair, returning the new pair.
pub fn apply_interaction(kind: InteractionKind, hunger: i64, happiness: i64) -> (i64, i64) {
    match kind {
        InteractionKind::Play => (
            hunger.saturating_add(PLAY_HUNGER_GAIN),
            happiness.saturating_add(PLAY_HAPPINESS_GAIN),
        ),
        InteractionKind::Feeding => (
            clamp_to_floor(hunger.saturating_sub(FEEDING_HUNGER_RELIEF)),
            happiness.saturating_add(FEEDING_HAPPINESS_GAIN),
        ),
        InteractionKind::Scolding => (
            hunger,
            clamp_to_floor(happiness.saturating_sub(SCOLDING_HAPPINESS_LOSS)),
        ),
    }
}

fn clamp_to_floor(value: i64) -> i64 {
    value.max(ATTRIBUTE_FLOOR)
}
