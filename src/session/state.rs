//! Session state: equation tracking, move history, undo, scoring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{CardId, CardKind};
use crate::puzzle::assembly::{symbolic_equation, Puzzle};

/// Undos granted per level attempt.
pub const UNDO_BUDGET: u32 = 1;

/// A move the player made, kept for undo and history display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Which deck card was tapped.
    pub card_id: CardId,
    /// Matter or Antimatter at the time of the tap.
    pub kind: CardKind,
    /// The card's magnitude.
    pub magnitude: u8,
}

impl Move {
    /// Signed delta this move applied.
    #[must_use]
    pub const fn delta(&self) -> i32 {
        match self.kind {
            CardKind::Matter => self.magnitude as i32,
            CardKind::Antimatter => -(self.magnitude as i32),
        }
    }
}

/// One level attempt in progress.
///
/// Applying a card moves both sides of `E + b = c` by the card's delta, so
/// the equation stays true while `b` walks toward zero. Cards are reusable;
/// the deck never shrinks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    puzzle: Puzzle,
    left_constant: i32,
    right_value: i32,
    moves: u32,
    // Solved-in-bound sessions take at most OPTIMAL_BOUND + undo churn;
    // 8 slots keep the common case off the heap.
    history: SmallVec<[Move; 8]>,
    undos_left: u32,
}

impl GameSession {
    /// Start a session on a freshly generated puzzle.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let left_constant = puzzle.left_constant;
        let right_value = puzzle.right_value;
        Self {
            puzzle,
            left_constant,
            right_value,
            moves: 0,
            history: SmallVec::new(),
            undos_left: UNDO_BUDGET,
        }
    }

    /// The puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Current `b` in `E + b = c`. The level is solved when this is 0.
    #[must_use]
    pub fn left_constant(&self) -> i32 {
        self.left_constant
    }

    /// Current `c` in `E + b = c`.
    #[must_use]
    pub fn right_value(&self) -> i32 {
        self.right_value
    }

    /// Card applications so far (undone moves excluded).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Moves in application order.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Undos still available.
    #[must_use]
    pub fn undos_left(&self) -> u32 {
        self.undos_left
    }

    /// Apply a deck card to both sides of the equation.
    ///
    /// Returns the new left constant, or `None` if the id is not in this
    /// session's deck. Applying to an already-solved session is allowed
    /// (and unsolves it) - the caller decides when play stops.
    pub fn apply(&mut self, card_id: CardId) -> Option<i32> {
        let card = self.puzzle.deck.get(card_id)?;
        let record = Move {
            card_id,
            kind: card.kind,
            magnitude: card.magnitude,
        };

        self.left_constant += record.delta();
        self.right_value += record.delta();
        self.moves += 1;
        self.history.push(record);

        Some(self.left_constant)
    }

    /// Reverse the most recent move.
    ///
    /// Fails (returns false) when the history is empty or the undo budget
    /// is spent.
    pub fn undo(&mut self) -> bool {
        if self.undos_left == 0 {
            return false;
        }
        let Some(last) = self.history.pop() else {
            return false;
        };

        self.left_constant -= last.delta();
        self.right_value -= last.delta();
        self.moves -= 1;
        self.undos_left -= 1;
        true
    }

    /// Has the equation reached `E = c`?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.left_constant == 0
    }

    /// Star rating for a solved session, `None` while unsolved.
    ///
    /// 3 stars for matching the solver's optimal count, 2 for one over,
    /// 1 otherwise. When the puzzle's `optimal` came from the solver's
    /// no-path fallback this can under-reward; the rating follows the
    /// stored value regardless.
    #[must_use]
    pub fn star_rating(&self) -> Option<u8> {
        if !self.is_solved() {
            return None;
        }
        Some(if self.moves == self.puzzle.optimal {
            3
        } else if self.moves == self.puzzle.optimal + 1 {
            2
        } else {
            1
        })
    }

    /// Current equation rendered for display.
    #[must_use]
    pub fn equation(&self) -> String {
        symbolic_equation(self.left_constant, self.right_value)
    }
}
