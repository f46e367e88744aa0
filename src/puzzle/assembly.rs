//! Level assembly.
//!
//! Turns a level number into a playable puzzle: draw the starting constant,
//! then generate (deck, target) pairs until the solver reports an optimal
//! solution within the difficulty bound, or the attempt budget runs out.
//! The budget exists because some (deck, target) draws are only solvable in
//! many moves or not at all within the solver's bounds; rather than search
//! exhaustively for a nice pair, the loop accepts whatever the final
//! attempt produced.

use serde::{Deserialize, Serialize};

use crate::core::level::max_magnitude;
use crate::core::rng::PuzzleRng;
use crate::puzzle::deck::{generate_deck, Deck};
use crate::puzzle::solver::calculate_min_moves;

/// Largest acceptable optimal-move count before regenerating.
pub const OPTIMAL_BOUND: u32 = 6;

/// Deck/target draws per puzzle before giving up on the bound.
pub const MAX_ATTEMPTS: u32 = 20;

/// One level's puzzle: the equation `E + b = c`, the deck, and the
/// solver-scored optimal move count.
///
/// Invariant: `left_constant != 0` (a puzzle that starts solved is invalid).
/// The displacement the player must produce is `-left_constant`; both sides
/// of the equation move in lockstep, so `right_value` is cosmetic to
/// solvability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Level this puzzle was generated for.
    pub level: u32,
    /// The 3 card options.
    pub deck: Deck,
    /// `b` in `E + b = c`. Never 0 at generation.
    pub left_constant: i32,
    /// `c` in `E + b = c`.
    pub right_value: i32,
    /// Minimum card applications to solve, per the bounded solver. Subject
    /// to the solver's no-path fallback of 1.
    pub optimal: u32,
}

impl Puzzle {
    /// Generate the puzzle for a level.
    ///
    /// Draws `b` uniformly from `[-max, max]` excluding 0, then repeats
    /// {draw target, generate deck, score} until the optimal move count is
    /// at most [`OPTIMAL_BOUND`] or [`MAX_ATTEMPTS`] draws have been made.
    /// The final attempt is accepted unconditionally, so this always
    /// returns within the budget.
    #[must_use]
    pub fn generate(level: u32, rng: &mut PuzzleRng) -> Self {
        let max = max_magnitude(level) as i32;

        let mut left_constant = 0;
        while left_constant == 0 {
            left_constant = rng.gen_range(-max..max + 1);
        }

        let mut attempts = 0;
        loop {
            let solution = rng.gen_range(-max..max + 1);
            let right_value = solution + left_constant;

            let deck = generate_deck(level, rng);
            let optimal = calculate_min_moves(-left_constant, &deck);

            attempts += 1;
            if optimal <= OPTIMAL_BOUND || attempts >= MAX_ATTEMPTS {
                return Self {
                    level,
                    deck,
                    left_constant,
                    right_value,
                    optimal,
                };
            }
        }
    }

    /// The displacement the player must produce to zero the left side.
    #[must_use]
    pub const fn target(&self) -> i32 {
        -self.left_constant
    }
}

/// Render `E + b = c` for display.
///
/// The constant is shown in parentheses with its sign, the form the game
/// uses everywhere: `E + (3) = 5`, `E (-2) = 1`, or plain `E = 4` once the
/// constant hits zero.
#[must_use]
pub fn symbolic_equation(left_constant: i32, right_value: i32) -> String {
    if left_constant == 0 {
        return format!("E = {right_value}");
    }
    if left_constant > 0 {
        format!("E + ({left_constant}) = {right_value}")
    } else {
        format!("E ({left_constant}) = {right_value}")
    }
}
