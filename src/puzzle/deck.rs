//! Deck generation.
//!
//! Every level attempt gets a fresh deck of exactly [`DECK_SIZE`] cards.
//! Generation is constrained so the deck always contains at least one odd
//! and one even magnitude; without that, targets of the wrong parity can
//! need long detours or become unreachable within the solver's bounds.
//!
//! The constraint is carried entirely by card 2: it takes the opposite kind
//! and the opposite magnitude parity of card 1. Card 3 is a free draw and
//! may duplicate either.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId, CardKind};
use crate::core::level::max_magnitude;
use crate::core::rng::PuzzleRng;

/// Number of cards in every deck.
pub const DECK_SIZE: usize = 3;

/// The fixed set of card options for one level attempt.
///
/// Order is cosmetic (the generator shuffles before returning); solvability
/// depends only on the multiset of deltas. Cards are reusable, so a deck is
/// never "spent".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Build a deck from exactly [`DECK_SIZE`] cards.
    #[must_use]
    pub const fn new(cards: [Card; DECK_SIZE]) -> Self {
        Self { cards }
    }

    /// All cards, in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// True if some card has an even magnitude and some card an odd one.
    #[must_use]
    pub fn has_parity_coverage(&self) -> bool {
        self.cards.iter().any(Card::is_even) && self.cards.iter().any(|c| !c.is_even())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Generate the 3-card deck for a level.
///
/// - Card 1: magnitude uniform in `[1, max_magnitude(level)]`, kind uniform.
/// - Card 2: opposite kind and opposite magnitude parity from card 1.
///   When card 1 is odd and no even magnitude fits the ceiling, falls back
///   to magnitude 2.
/// - Card 3: fully independent draw; duplicates are allowed.
///
/// The returned order is shuffled. Never fails.
#[must_use]
pub fn generate_deck(level: u32, rng: &mut PuzzleRng) -> Deck {
    let max = max_magnitude(level);

    let magnitude1 = rng.gen_range(1..max as i32 + 1) as u8;
    let kind1 = random_kind(rng);
    let card1 = Card::new(CardId::new(0), kind1, magnitude1);

    // Card 2 closes the parity gap left by card 1.
    let wanted_even = magnitude1 % 2 != 0;
    let magnitude2 = opposite_parity_magnitude(max, wanted_even, rng);
    let card2 = Card::new(CardId::new(1), kind1.opposite(), magnitude2);

    let magnitude3 = rng.gen_range(1..max as i32 + 1) as u8;
    let card3 = Card::new(CardId::new(2), random_kind(rng), magnitude3);

    let mut cards = [card1, card2, card3];
    rng.shuffle(&mut cards);
    Deck::new(cards)
}

fn random_kind(rng: &mut PuzzleRng) -> CardKind {
    if rng.gen_bool(0.5) {
        CardKind::Matter
    } else {
        CardKind::Antimatter
    }
}

/// Uniform draw over the even (or odd) magnitudes in `[1, max]`.
///
/// The even pool can be empty when `max < 2`; the original game falls back
/// to magnitude 2 there, stepping outside the ceiling rather than breaking
/// parity coverage. The odd pool always contains 1.
fn opposite_parity_magnitude(max: u8, even: bool, rng: &mut PuzzleRng) -> u8 {
    let start = if even { 2 } else { 1 };
    let pool: Vec<u8> = (start..=max).step_by(2).collect();
    match rng.choose(&pool) {
        Some(&magnitude) => magnitude,
        None => 2,
    }
}
