#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use solitaire_client::domain::fixtures::CardFixtures;
use solitaire_client::ledger::scripted::ScriptedLedger;
use solitaire_client::{BoardState, Card, DragEnd, DropTarget, GameId, MoveEngine};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}

pub const GAME: &str = "0x5011ta1re";

/// Engine on `GAME` whose ledger starts with the same board.
pub fn engine_on(board: BoardState) -> MoveEngine<ScriptedLedger> {
    let ledger = Arc::new(ScriptedLedger::new(board.clone()));
    MoveEngine::with_game(ledger, GameId::new(GAME), board)
}

pub fn card(token: &str) -> Card {
    CardFixtures::card(token)
}

pub fn drag(active: &str, over: impl Into<DropTarget>) -> DragEnd {
    DragEnd::new(card(active), over)
}

pub fn onto_empty_column(active: &str, index: usize) -> DragEnd {
    drag(active, DropTarget::EmptyColumn { index })
}

pub fn onto_empty_pile(active: &str, index: usize) -> DragEnd {
    drag(active, DropTarget::EmptyPile { index })
}
