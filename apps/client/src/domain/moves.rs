//! Validated moves and their speculative application.

use serde::{Deserialize, Serialize};

use super::board::BoardState;
use super::cards_types::Card;
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// The five drag routes the ledger understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    ColumnToColumn,
    ColumnToPile,
    PileToColumn,
    DeckToColumn,
    DeckToPile,
}

impl MoveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::ColumnToColumn => "column_to_column",
            MoveKind::ColumnToPile => "column_to_pile",
            MoveKind::PileToColumn => "pile_to_column",
            MoveKind::DeckToColumn => "deck_to_column",
            MoveKind::DeckToPile => "deck_to_pile",
        }
    }
}

/// A move that passed local validation against a specific board.
///
/// Indices are container positions (`0..7` columns, `0..4` piles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Move {
    /// `card` is the bottom of the moved segment.
    ColumnToColumn { from: usize, card: Card, to: usize },
    ColumnToPile { column: usize, pile: usize },
    PileToColumn { pile: usize, column: usize },
    DeckToColumn { column: usize },
    DeckToPile { pile: usize },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::ColumnToColumn { .. } => MoveKind::ColumnToColumn,
            Move::ColumnToPile { .. } => MoveKind::ColumnToPile,
            Move::PileToColumn { .. } => MoveKind::PileToColumn,
            Move::DeckToColumn { .. } => MoveKind::DeckToColumn,
            Move::DeckToPile { .. } => MoveKind::DeckToPile,
        }
    }

    /// Column that may expose a hidden card once this move lands.
    pub fn origin_column(&self) -> Option<usize> {
        match self {
            Move::ColumnToColumn { from, .. } => Some(*from),
            Move::ColumnToPile { column, .. } => Some(*column),
            Move::PileToColumn { .. } | Move::DeckToColumn { .. } | Move::DeckToPile { .. } => None,
        }
    }

    /// Produce the board after this move, leaving `board` untouched.
    ///
    /// Hidden cards are never turned over here; only the ledger knows
    /// their ids, so reveals are applied when the response arrives.
    pub fn apply(&self, board: &BoardState) -> Result<BoardState, DomainError> {
        let mut next = board.clone();
        match *self {
            Move::ColumnToColumn { from, card, to } => {
                let source = next.columns.get_mut(from).ok_or_else(|| out_of_range("column", from))?;
                let at = source.position(card).ok_or_else(|| {
                    DomainError::illegal(
                        IllegalMoveKind::EmptySource,
                        format!("{card} is not face-up in column {from}"),
                    )
                })?;
                let segment = source.cards.split_off(at);
                next.columns
                    .get_mut(to)
                    .ok_or_else(|| out_of_range("column", to))?
                    .cards
                    .extend(segment);
            }
            Move::ColumnToPile { column, pile } => {
                let card = next
                    .columns
                    .get_mut(column)
                    .ok_or_else(|| out_of_range("column", column))?
                    .cards
                    .pop()
                    .ok_or_else(|| empty_source("column", column))?;
                next.piles
                    .get_mut(pile)
                    .ok_or_else(|| out_of_range("pile", pile))?
                    .cards
                    .push(card);
            }
            Move::PileToColumn { pile, column } => {
                let card = next
                    .piles
                    .get_mut(pile)
                    .ok_or_else(|| out_of_range("pile", pile))?
                    .cards
                    .pop()
                    .ok_or_else(|| empty_source("pile", pile))?;
                next.columns
                    .get_mut(column)
                    .ok_or_else(|| out_of_range("column", column))?
                    .cards
                    .push(card);
            }
            Move::DeckToColumn { column } => {
                let card = next.deck.take_top().ok_or_else(|| empty_source("deck", 0))?;
                next.columns
                    .get_mut(column)
                    .ok_or_else(|| out_of_range("column", column))?
                    .cards
                    .push(card);
            }
            Move::DeckToPile { pile } => {
                let card = next.deck.take_top().ok_or_else(|| empty_source("deck", 0))?;
                next.piles
                    .get_mut(pile)
                    .ok_or_else(|| out_of_range("pile", pile))?
                    .cards
                    .push(card);
            }
        }
        Ok(next)
    }
}

fn out_of_range(container: &str, index: usize) -> DomainError {
    DomainError::illegal(
        IllegalMoveKind::UnsupportedRoute,
        format!("{container} {index} does not exist"),
    )
}

fn empty_source(container: &str, index: usize) -> DomainError {
    DomainError::illegal(
        IllegalMoveKind::EmptySource,
        format!("{container} {index} has no card to move"),
    )
}
