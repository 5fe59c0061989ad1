//! Encoding of ledger actions as Move calls against the `solitaire` module.

use serde::{Deserialize, Serialize};

use super::{Difficulty, GameId, LedgerAction};
use crate::config::LedgerConfig;
use crate::domain::Move;

/// Shared on-chain clock object.
pub const CLOCK_OBJECT: &str = "0x0000000000000000000000000000000000000000000000000000000000000006";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CallArg {
    Object(String),
    U64(u64),
}

/// A single `moveCall` ready to be placed in a transaction by the signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    pub target: String,
    pub arguments: Vec<CallArg>,
}

fn index(i: usize) -> CallArg {
    CallArg::U64(i as u64)
}

fn clock() -> CallArg {
    CallArg::Object(CLOCK_OBJECT.to_string())
}

impl LedgerAction {
    pub fn function_name(&self) -> &'static str {
        match self {
            LedgerAction::Move(Move::ColumnToColumn { .. }) => "from_column_to_column",
            LedgerAction::Move(Move::ColumnToPile { .. }) => "from_column_to_pile",
            LedgerAction::Move(Move::PileToColumn { .. }) => "from_pile_to_column",
            LedgerAction::Move(Move::DeckToColumn { .. }) => "from_deck_to_column",
            LedgerAction::Move(Move::DeckToPile { .. }) => "from_deck_to_pile",
            LedgerAction::OpenDeckCard => "open_deck_card",
            LedgerAction::RotateOpenDeckCards => "rotate_open_deck_cards",
            LedgerAction::FinishGame => "finish_game",
            LedgerAction::DeleteUnfinishedGame => "delete_unfinished_game",
        }
    }

    pub fn to_call(&self, config: &LedgerConfig, game_id: &GameId) -> MoveCall {
        let game = CallArg::Object(game_id.as_str().to_string());
        let arguments = match *self {
            LedgerAction::Move(Move::ColumnToColumn { from, card, to }) => {
                vec![game, index(from), CallArg::U64(card.into()), index(to), clock()]
            }
            LedgerAction::Move(Move::ColumnToPile { column, pile }) => {
                vec![game, index(column), index(pile), clock()]
            }
            LedgerAction::Move(Move::PileToColumn { pile, column }) => {
                vec![game, index(pile), index(column)]
            }
            LedgerAction::Move(Move::DeckToColumn { column }) => vec![game, index(column)],
            LedgerAction::Move(Move::DeckToPile { pile }) => vec![game, index(pile)],
            LedgerAction::OpenDeckCard | LedgerAction::FinishGame => vec![game, clock()],
            LedgerAction::RotateOpenDeckCards | LedgerAction::DeleteUnfinishedGame => vec![game],
        };
        MoveCall {
            target: config.move_target(self.function_name()),
            arguments,
        }
    }
}

impl Difficulty {
    pub fn function_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "init_easy_game",
            Difficulty::Normal => "init_normal_game",
        }
    }

    pub fn to_call(&self, config: &LedgerConfig) -> MoveCall {
        MoveCall {
            target: config.move_target(self.function_name()),
            arguments: vec![clock()],
        }
    }
}
