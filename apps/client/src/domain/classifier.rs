//! Resolves a drag id or drop target to the container it belongs to.

use super::board::{BoardState, COLUMNS, PILES};
use super::cards_types::Card;
use super::drop_target::DropTarget;

/// Which container a card or placeholder lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    Deck,
    Column(usize),
    Pile(usize),
    /// Not on the board as a reachable card; callers treat it as a no-op.
    Unknown,
}

/// Classify a drop target.
///
/// Placeholders resolve by their encoded index alone; board contents are
/// not consulted. An index past the board edge is `Unknown`.
pub fn classify(target: DropTarget, board: &BoardState) -> StackKind {
    match target {
        DropTarget::EmptyColumn { index } if index < COLUMNS => StackKind::Column(index),
        DropTarget::EmptyPile { index } if index < PILES => StackKind::Pile(index),
        DropTarget::EmptyColumn { .. } | DropTarget::EmptyPile { .. } => StackKind::Unknown,
        DropTarget::Card { id } => classify_card(id, board),
    }
}

/// Search piles, then columns, then the deck for `card`.
///
/// Only the top of the open deck window counts as a deck card. Cards
/// further down the window, or already cycled out of it, resolve to
/// `Unknown` so they can never be dragged.
pub fn classify_card(card: Card, board: &BoardState) -> StackKind {
    if let Some(i) = board.piles.iter().position(|p| p.cards.contains(&card)) {
        return StackKind::Pile(i);
    }
    if let Some(i) = board.columns.iter().position(|c| c.cards.contains(&card)) {
        return StackKind::Column(i);
    }
    if board.deck.top() == Some(card) {
        return StackKind::Deck;
    }
    StackKind::Unknown
}
