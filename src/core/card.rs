//! Energy cards - the signed deltas the player applies to the equation.
//!
//! A card is immutable once generated. Applying it adds its delta to *both*
//! sides of `E + b = c`, so the equation stays true while `b` moves toward
//! zero. Cards are options, not consumables: the player may tap the same
//! card any number of times within a level.

use serde::{Deserialize, Serialize};

/// The sign of a card's delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Adds positive energy (`+magnitude`).
    Matter,
    /// Adds negative energy (`-magnitude`).
    Antimatter,
}

impl CardKind {
    /// The other kind.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            CardKind::Matter => CardKind::Antimatter,
            CardKind::Antimatter => CardKind::Matter,
        }
    }

    /// Lowercase name, as used in spoken-form labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::Matter => "matter",
            CardKind::Antimatter => "antimatter",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Matter => write!(f, "Matter"),
            CardKind::Antimatter => write!(f, "Antimatter"),
        }
    }
}

/// Identifier for a card within one deck instance.
///
/// Opaque to callers; ids are unique per deck, not globally. A regenerated
/// deck starts numbering over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// An energy card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the deck that generated it.
    pub id: CardId,
    /// Matter adds, Antimatter subtracts.
    pub kind: CardKind,
    /// Absolute value of the delta, in `[1, max_magnitude(level)]`.
    pub magnitude: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, kind: CardKind, magnitude: u8) -> Self {
        Self { id, kind, magnitude }
    }

    /// Signed delta this card applies to the tracked counter.
    #[must_use]
    pub const fn delta(&self) -> i32 {
        match self.kind {
            CardKind::Matter => self.magnitude as i32,
            CardKind::Antimatter => -(self.magnitude as i32),
        }
    }

    /// Does this card's magnitude have even parity?
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.magnitude % 2 == 0
    }

    /// Display name, e.g. `"3 Matter"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.magnitude, self.kind)
    }

    /// Spoken-form label, e.g. `"1 unit of matter"` / `"3 units of antimatter"`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.magnitude == 1 {
            format!("1 unit of {}", self.kind.as_str())
        } else {
            format!("{} units of {}", self.magnitude, self.kind.as_str())
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.kind)
    }
}
