//! Domain layer: pure board model, classification and move rules.

pub mod board;
pub mod cards_parsing;
pub mod cards_types;
pub mod classifier;
pub mod drop_target;
pub mod fixtures;
pub mod moves;
pub mod rules;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_rules;
#[cfg(test)]
mod tests_scenarios;

// Re-exports for ergonomics
pub use board::{BoardState, Column, Deck, DeckDraw, Pile, COLUMNS, PILES};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{color_of, rank_of, suit_of, Card, CardSlot, Color, Rank, Suit};
pub use classifier::{classify, classify_card, StackKind};
pub use drop_target::{DragEnd, DropTarget};
pub use moves::{Move, MoveKind};
