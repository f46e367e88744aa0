//! Puzzle generation and solving.
//!
//! ## Key Pieces
//!
//! - [`deck`]: builds the 3-card deck for a level, with the parity-coverage
//!   guarantee (always at least one odd and one even magnitude)
//! - [`solver`]: bounded BFS computing the minimum number of card
//!   applications to reach a target displacement
//! - [`assembly`]: ties the two together into a playable [`Puzzle`], retrying
//!   generation until the optimal solution fits the difficulty bound

pub mod assembly;
pub mod deck;
pub mod solver;

pub use assembly::{Puzzle, symbolic_equation, MAX_ATTEMPTS, OPTIMAL_BOUND};
pub use deck::{generate_deck, Deck, DECK_SIZE};
pub use solver::{calculate_min_moves, MAX_SEARCH_DEPTH, STATE_WINDOW};
