//! Klondike placement rules mirrored from the ledger.
//!
//! Every check is a pure function of the moved cards and the destination
//! container. `Ok(())` means the ledger will accept the same move.

use super::board::{Column, Pile};
use super::cards_types::{Card, Rank};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Descending by exactly one rank and alternating colour, read bottom to top.
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        let (lower, upper) = (pair[0], pair[1]);
        lower.rank().is_one_above(upper.rank()) && lower.color() != upper.color()
    })
}

/// Can `bottom` (and whatever rides on it) land on `dest`?
fn stack_on_column(bottom: Card, dest: &Column) -> Result<(), DomainError> {
    match dest.top() {
        None if dest.is_empty() => {
            if bottom.rank() == Rank::King {
                Ok(())
            } else {
                Err(DomainError::illegal(
                    IllegalMoveKind::NeedsKing,
                    format!("{bottom} cannot open an empty column"),
                ))
            }
        }
        None => Err(DomainError::illegal(
            IllegalMoveKind::TargetNotEmpty,
            "column top is still face-down",
        )),
        Some(top) => {
            if top.color() == bottom.color() {
                return Err(DomainError::illegal(
                    IllegalMoveKind::ColorMismatch,
                    format!("{bottom} on {top}"),
                ));
            }
            if !top.rank().is_one_above(bottom.rank()) {
                return Err(DomainError::illegal(
                    IllegalMoveKind::RankMismatch,
                    format!("{bottom} on {top}"),
                ));
            }
            Ok(())
        }
    }
}

/// Can `card` extend `dest`? Piles are same-suit, Ace upwards.
fn place_on_pile(card: Card, dest: &Pile) -> Result<(), DomainError> {
    match dest.top() {
        None if card.rank() == Rank::Ace => Ok(()),
        None => Err(DomainError::illegal(
            IllegalMoveKind::NeedsAce,
            format!("{card} cannot start a pile"),
        )),
        Some(top) if top.suit() != card.suit() => Err(DomainError::illegal(
            IllegalMoveKind::SuitMismatch,
            format!("{card} on {top}"),
        )),
        Some(top) if !card.rank().is_one_above(top.rank()) => Err(DomainError::illegal(
            IllegalMoveKind::RankMismatch,
            format!("{card} on {top}"),
        )),
        Some(_) => Ok(()),
    }
}

pub fn check_column_to_column(moved: &[Card], dest: &Column) -> Result<(), DomainError> {
    let Some(&bottom) = moved.first() else {
        return Err(DomainError::illegal(IllegalMoveKind::EmptySource, "nothing to move"));
    };
    if !is_valid_run(moved) {
        return Err(DomainError::illegal(
            IllegalMoveKind::NotARun,
            format!("{} cards starting at {bottom}", moved.len()),
        ));
    }
    stack_on_column(bottom, dest)
}

pub fn check_column_to_pile(moved: &[Card], dest: &Pile) -> Result<(), DomainError> {
    match moved {
        [] => Err(DomainError::illegal(IllegalMoveKind::EmptySource, "nothing to move")),
        [card] => place_on_pile(*card, dest),
        _ => Err(DomainError::illegal(
            IllegalMoveKind::MultiCardToPile,
            format!("{} cards", moved.len()),
        )),
    }
}

pub fn check_pile_to_column(card: Card, dest: &Column) -> Result<(), DomainError> {
    stack_on_column(card, dest)
}

pub fn check_deck_to_column(card: Card, dest: &Column) -> Result<(), DomainError> {
    stack_on_column(card, dest)
}

pub fn check_deck_to_pile(card: Card, dest: &Pile) -> Result<(), DomainError> {
    place_on_pile(card, dest)
}
