//! # reactor-core
//!
//! Puzzle generation and solving core for the Reactor Core equation game.
//!
//! The game drives a single integer equation `E + b = c` toward `b == 0` by
//! repeatedly applying signed energy cards. This crate owns everything that
//! is not presentation: deck generation, the bounded shortest-path solver
//! that scores difficulty, level assembly, the play-state model, and the
//! save-data format. Rendering, audio, and animation sequencing live in the
//! caller.
//!
//! ## Design Principles
//!
//! 1. **Pure given its draws**: all randomness flows through a seedable
//!    [`PuzzleRng`]; the solver itself is fully deterministic.
//!
//! 2. **Bounded search**: the solver's state window and depth cap are part of
//!    the difficulty contract, not tuning knobs. See [`puzzle::solver`].
//!
//! 3. **Caller-owned persistence**: progress is read and written through the
//!    [`ProgressStore`] trait; the crate defines the keys and the snapshot
//!    format, the caller picks the medium.
//!
//! ## Modules
//!
//! - `core`: cards, level math, RNG
//! - `puzzle`: deck generation, minimum-moves solver, level assembly
//! - `session`: play state for one level attempt (moves, undo, stars)
//! - `progress`: save/load of level progress and settings

pub mod core;
pub mod puzzle;
pub mod session;
pub mod progress;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardKind,
    PuzzleRng, PuzzleRngState,
    max_magnitude, MAX_CARD_MAGNITUDE,
};

pub use crate::puzzle::{
    Deck, DECK_SIZE, generate_deck,
    calculate_min_moves, MAX_SEARCH_DEPTH, STATE_WINDOW,
    Puzzle, symbolic_equation,
};

pub use crate::session::{GameSession, Move};

pub use crate::progress::{
    MemoryStore, Progress, ProgressStore, SaveData, Settings, keys,
};
