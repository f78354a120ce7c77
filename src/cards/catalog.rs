//! The static card catalog.
//!
//! Seven identities, three categories. Each identity knows its display
//! name, category, fresh-deck copy count, and rules text. The catalog is
//! purely declarative: effect behavior lives in the resolution engine,
//! dispatched on the identity.

use serde::{Deserialize, Serialize};

/// Card category. Only Spellcasters count toward the win condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Spellcaster,
    Monster,
    Wildcard,
}

/// A card identity: the static card type shared by every copy.
///
/// The Wizard doubles as the interrupt counter card; the Alchemist is the
/// copying Wildcard that morphs into one of its owner's board cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardIdentity {
    Druid,
    Sage,
    Warlock,
    Sorcerer,
    Wizard,
    Alchemist,
    Dragon,
}

impl CardIdentity {
    /// Every identity in the catalog.
    pub const ALL: [CardIdentity; 7] = [
        CardIdentity::Druid,
        CardIdentity::Sage,
        CardIdentity::Warlock,
        CardIdentity::Sorcerer,
        CardIdentity::Wizard,
        CardIdentity::Alchemist,
        CardIdentity::Dragon,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            CardIdentity::Druid => "Druid",
            CardIdentity::Sage => "Sage",
            CardIdentity::Warlock => "Warlock",
            CardIdentity::Sorcerer => "Sorcerer",
            CardIdentity::Wizard => "Wizard",
            CardIdentity::Alchemist => "Alchemist",
            CardIdentity::Dragon => "Dragon",
        }
    }

    /// Card category.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            CardIdentity::Druid
            | CardIdentity::Sage
            | CardIdentity::Warlock
            | CardIdentity::Sorcerer
            | CardIdentity::Wizard => Category::Spellcaster,
            CardIdentity::Alchemist => Category::Wildcard,
            CardIdentity::Dragon => Category::Monster,
        }
    }

    /// Copies of this identity in a fresh deck.
    #[must_use]
    pub const fn copy_count(self) -> usize {
        match self {
            CardIdentity::Druid
            | CardIdentity::Sage
            | CardIdentity::Warlock
            | CardIdentity::Sorcerer
            | CardIdentity::Wizard => 6,
            CardIdentity::Alchemist | CardIdentity::Dragon => 2,
        }
    }

    /// Rules text shown to clients.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CardIdentity::Druid => {
                "Look at your opponent's hand. They discard 1 card of your choice."
            }
            CardIdentity::Sage => "Draw 2 cards, then discard 1 card from your hand.",
            CardIdentity::Warlock => {
                "Return one Spellcaster from your discard pile to your hand. \
                 (Not including Monsters or Wildcards)"
            }
            CardIdentity::Sorcerer => {
                "Choose 1 of your opponent's cards in play. They place it into their discard pile."
            }
            CardIdentity::Wizard => {
                "Draw 1 card OR when your opponent plays a card you wish to stop, you may \
                 discard this card plus a matching copy of their card from your hand. \
                 Their card has no effect and is discarded."
            }
            CardIdentity::Alchemist => {
                "Choose a Spellcaster you have in play and copy its action. The Alchemist \
                 remains in play as an exact copy of that Spellcaster. (Wildcards can count \
                 as any matching card when stopping your opponent's card.)"
            }
            CardIdentity::Dragon => {
                "Choose up to 3 of your opponent's cards in play. \
                 They place them into their discard pile."
            }
        }
    }

    /// Total cards in a fresh deck: the sum of all copy counts.
    #[must_use]
    pub fn deck_total() -> usize {
        Self::ALL.iter().map(|c| c.copy_count()).sum()
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
