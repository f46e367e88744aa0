//! Core types: cards, level math, RNG.
//!
//! These are the building blocks the puzzle and session layers are written
//! against. Nothing here knows about generation policy or play state.

pub mod card;
pub mod level;
pub mod rng;

pub use card::{Card, CardId, CardKind};
pub use level::{max_magnitude, MAX_CARD_MAGNITUDE};
pub use rng::{PuzzleRng, PuzzleRngState};
