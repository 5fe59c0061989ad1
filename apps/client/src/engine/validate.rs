//! Validating phase: classify both ends of a drag and pick the rule.

use tracing::debug;

use crate::domain::classifier::{classify, classify_card, StackKind};
use crate::domain::rules;
use crate::domain::{BoardState, Card, Column, DragEnd, DropTarget, Move, Pile};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Decision for one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Not a move at all; stay idle without complaint.
    Ignore(&'static str),
    Reject(DomainError),
    Accept(Move),
}

impl From<Result<Move, DomainError>> for Verdict {
    fn from(result: Result<Move, DomainError>) -> Self {
        match result {
            Ok(mv) => Verdict::Accept(mv),
            Err(err) => Verdict::Reject(err),
        }
    }
}

/// Map a drag onto a legal [`Move`] for `board`, or explain why not.
pub fn validate_drag(drag: &DragEnd, board: &BoardState) -> Verdict {
    let Some((active, over)) = drag.endpoints() else {
        return Verdict::Ignore("missing or identical endpoints");
    };

    let origin = classify_card(active, board);
    let dest = classify(over, board);
    debug!(card = %active, ?origin, ?dest, "classified drag");

    match (origin, dest) {
        (StackKind::Unknown, _) => Verdict::Ignore("card cannot be dragged"),
        (_, StackKind::Unknown) => Verdict::Ignore("drop target not on the board"),
        (a, b) if a == b => Verdict::Ignore("same container"),
        (StackKind::Column(from), StackKind::Column(to)) => {
            column_to_column(board, active, from, to, over).into()
        }
        (StackKind::Column(column), StackKind::Pile(pile)) => {
            column_to_pile(board, active, column, pile, over).into()
        }
        (StackKind::Pile(pile), StackKind::Column(column)) => {
            pile_to_column(board, active, pile, column, over).into()
        }
        (StackKind::Deck, StackKind::Column(column)) => deck_to_column(board, column, over).into(),
        (StackKind::Deck, StackKind::Pile(pile)) => deck_to_pile(board, pile, over).into(),
        (origin, dest) => Verdict::Reject(DomainError::illegal(
            IllegalMoveKind::UnsupportedRoute,
            format!("{origin:?} to {dest:?}"),
        )),
    }
}

/// A placeholder drop is only honest when its container really is empty.
fn placeholder_must_be_empty(over: DropTarget, occupied: bool) -> Result<(), DomainError> {
    if over.card().is_none() && occupied {
        return Err(DomainError::illegal(
            IllegalMoveKind::TargetNotEmpty,
            format!("{over:?} is occupied"),
        ));
    }
    Ok(())
}

fn column_to_column(
    board: &BoardState,
    card: Card,
    from: usize,
    to: usize,
    over: DropTarget,
) -> Result<Move, DomainError> {
    let source = &board.columns[from];
    let dest = &board.columns[to];
    placeholder_must_be_empty(over, !dest.is_empty())?;
    let at = source.position(card).ok_or_else(|| {
        DomainError::illegal(IllegalMoveKind::EmptySource, format!("{card} not face-up"))
    })?;
    rules::check_column_to_column(&source.cards[at..], dest)?;
    Ok(Move::ColumnToColumn { from, card, to })
}

fn column_to_pile(
    board: &BoardState,
    card: Card,
    column: usize,
    pile: usize,
    over: DropTarget,
) -> Result<Move, DomainError> {
    let source = &board.columns[column];
    let dest = &board.piles[pile];
    placeholder_must_be_empty(over, !dest.cards.is_empty())?;
    let at = source.position(card).ok_or_else(|| {
        DomainError::illegal(IllegalMoveKind::EmptySource, format!("{card} not face-up"))
    })?;
    rules::check_column_to_pile(&source.cards[at..], dest)?;
    Ok(Move::ColumnToPile { column, pile })
}

fn pile_to_column(
    board: &BoardState,
    card: Card,
    pile: usize,
    column: usize,
    over: DropTarget,
) -> Result<Move, DomainError> {
    let dest = &board.columns[column];
    placeholder_must_be_empty(over, !dest.is_empty())?;
    if board.piles[pile].top() != Some(card) {
        return Err(DomainError::illegal(
            IllegalMoveKind::NotTopCard,
            format!("{card} is buried in pile {pile}"),
        ));
    }
    rules::check_pile_to_column(card, dest)?;
    Ok(Move::PileToColumn { pile, column })
}

fn deck_to_column(board: &BoardState, column: usize, over: DropTarget) -> Result<Move, DomainError> {
    let dest = &board.columns[column];
    placeholder_must_be_empty(over, !dest.is_empty())?;
    let card = deck_top(board)?;
    rules::check_deck_to_column(card, dest)?;
    Ok(Move::DeckToColumn { column })
}

fn deck_to_pile(board: &BoardState, pile: usize, over: DropTarget) -> Result<Move, DomainError> {
    let dest = &board.piles[pile];
    placeholder_must_be_empty(over, !dest.cards.is_empty())?;
    let card = deck_top(board)?;
    rules::check_deck_to_pile(card, dest)?;
    Ok(Move::DeckToPile { pile })
}

/// Re-check a move built earlier against the current `board`.
pub fn check_move(mv: Move, board: &BoardState) -> Result<(), DomainError> {
    match mv {
        Move::ColumnToColumn { from, card, to } => {
            if from == to {
                return Err(DomainError::illegal(
                    IllegalMoveKind::UnsupportedRoute,
                    format!("column {from} onto itself"),
                ));
            }
            let source = column_at(board, from)?;
            let at = source.position(card).ok_or_else(|| {
                DomainError::illegal(IllegalMoveKind::EmptySource, format!("{card} not face-up"))
            })?;
            rules::check_column_to_column(&source.cards[at..], column_at(board, to)?)
        }
        Move::ColumnToPile { column, pile } => {
            let source = column_at(board, column)?;
            let moved = source.cards.last().map(std::slice::from_ref).unwrap_or_default();
            rules::check_column_to_pile(moved, pile_at(board, pile)?)
        }
        Move::PileToColumn { pile, column } => {
            let card = pile_at(board, pile)?.top().ok_or_else(|| {
                DomainError::illegal(IllegalMoveKind::EmptySource, format!("pile {pile} is empty"))
            })?;
            rules::check_pile_to_column(card, column_at(board, column)?)
        }
        Move::DeckToColumn { column } => {
            rules::check_deck_to_column(deck_top(board)?, column_at(board, column)?)
        }
        Move::DeckToPile { pile } => rules::check_deck_to_pile(deck_top(board)?, pile_at(board, pile)?),
    }
}

fn column_at(board: &BoardState, index: usize) -> Result<&Column, DomainError> {
    board.column(index).ok_or_else(|| missing("column", index))
}

fn pile_at(board: &BoardState, index: usize) -> Result<&Pile, DomainError> {
    board.pile(index).ok_or_else(|| missing("pile", index))
}

fn missing(container: &str, index: usize) -> DomainError {
    DomainError::illegal(
        IllegalMoveKind::UnsupportedRoute,
        format!("{container} {index} does not exist"),
    )
}

fn deck_top(board: &BoardState) -> Result<Card, DomainError> {
    board
        .deck
        .top()
        .ok_or_else(|| DomainError::illegal(IllegalMoveKind::EmptySource, "no open deck card"))
}
