//! Domain-level error type for the card model and move rules.
//!
//! This error type knows nothing about the ledger or the transport. The
//! engine converts it into `crate::error::ClientError` through the provided
//! `From<DomainError> for ClientError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a proposed move was refused by the local rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    /// Moved segment is not a descending, alternating-colour run.
    NotARun,
    /// Only single cards may go to a pile.
    MultiCardToPile,
    /// Rank is not adjacent to the destination's top card.
    RankMismatch,
    /// Same colour on a column.
    ColorMismatch,
    /// Different suit on a pile.
    SuitMismatch,
    /// Empty column only accepts a King.
    NeedsKing,
    /// Empty pile only accepts an Ace.
    NeedsAce,
    /// Source card is not the top of its container.
    NotTopCard,
    /// No rule exists for this origin/destination pair.
    UnsupportedRoute,
    /// Empty-slot placeholder targeted a container that holds cards.
    TargetNotEmpty,
    /// Deck has no hidden and no open cards.
    NothingToDraw,
    /// Origin container has nothing to move.
    EmptySource,
    /// Finishing requires all four piles to be complete.
    GameNotWon,
}

impl IllegalMoveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IllegalMoveKind::NotARun => "not_a_run",
            IllegalMoveKind::MultiCardToPile => "multi_card_to_pile",
            IllegalMoveKind::RankMismatch => "rank_mismatch",
            IllegalMoveKind::ColorMismatch => "color_mismatch",
            IllegalMoveKind::SuitMismatch => "suit_mismatch",
            IllegalMoveKind::NeedsKing => "needs_king",
            IllegalMoveKind::NeedsAce => "needs_ace",
            IllegalMoveKind::NotTopCard => "not_top_card",
            IllegalMoveKind::UnsupportedRoute => "unsupported_route",
            IllegalMoveKind::TargetNotEmpty => "target_not_empty",
            IllegalMoveKind::NothingToDraw => "nothing_to_draw",
            IllegalMoveKind::EmptySource => "empty_source",
            IllegalMoveKind::GameNotWon => "game_not_won",
        }
    }
}

impl Display for IllegalMoveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Card identifier outside `0..=51`. Always a programmer error.
    InvalidCard(i32),
    /// Rules violation; recovered locally by snapping the card back.
    IllegalMove(IllegalMoveKind, String),
    /// Unparseable short-form card token such as `"1X"`.
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidCard(id) => {
                write!(f, "invalid card id {id}: must be between 0 and 51")
            }
            DomainError::IllegalMove(kind, d) => write!(f, "illegal move {kind}: {d}"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_card(id: i32) -> Self {
        Self::InvalidCard(id)
    }
    pub fn illegal(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove(kind, detail.into())
    }
    pub fn parse_card(token: impl Into<String>) -> Self {
        Self::ParseCard(token.into())
    }

    /// The rejection reason, when this is a rules violation.
    pub fn illegal_kind(&self) -> Option<IllegalMoveKind> {
        match self {
            DomainError::IllegalMove(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
