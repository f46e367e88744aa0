//! Play state for one level attempt.
//!
//! [`GameSession`] tracks everything the presentation layer needs between
//! card taps: the current equation, the move count and history, the single
//! undo budget, and the end-of-level star rating. Animation and audio
//! sequencing stay in the caller; the session only answers "what happened"
//! and "where does that leave the equation".

pub mod state;

pub use state::{GameSession, Move, UNDO_BUDGET};
