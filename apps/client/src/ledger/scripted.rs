//! In-memory ledger driven by a script of receipts.
//!
//! Successful actions are mirrored onto the held authoritative board so a
//! committed engine and a fresh fetch agree. Used by the engine tests and
//! available to hosts that want an offline demo.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::{Difficulty, GameId, Ledger, LedgerAction, LedgerError, SnapshotSource, SubmitReceipt};
use crate::domain::{BoardState, DeckDraw};

#[derive(Debug, Default)]
struct Script {
    authoritative: BoardState,
    receipts: VecDeque<Result<SubmitReceipt, LedgerError>>,
    fetch_failures: VecDeque<LedgerError>,
    submitted: Vec<(GameId, LedgerAction)>,
    fetches: usize,
    games_created: u32,
    gate: Option<Arc<Notify>>,
}

#[derive(Debug, Default)]
pub struct ScriptedLedger {
    script: Mutex<Script>,
}

impl ScriptedLedger {
    pub fn new(authoritative: BoardState) -> Self {
        Self {
            script: Mutex::new(Script {
                authoritative,
                ..Script::default()
            }),
        }
    }

    pub fn set_authoritative(&self, board: BoardState) {
        self.script.lock().authoritative = board;
    }

    pub fn authoritative(&self) -> BoardState {
        self.script.lock().authoritative.clone()
    }

    /// Queue the receipt for the next `submit`. Unscripted submits succeed.
    pub fn push_receipt(&self, receipt: SubmitReceipt) {
        self.script.lock().receipts.push_back(Ok(receipt));
    }

    /// Queue a transport-level failure for the next `submit`.
    pub fn push_error(&self, err: LedgerError) {
        self.script.lock().receipts.push_back(Err(err));
    }

    pub fn fail_next_fetch(&self, err: LedgerError) {
        self.script.lock().fetch_failures.push_back(err);
    }

    /// Hold the next `submit` until the returned handle is notified.
    pub fn pause_next_submit(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.script.lock().gate = Some(Arc::clone(&gate));
        gate
    }

    pub fn submitted(&self) -> Vec<LedgerAction> {
        self.script
            .lock()
            .submitted
            .iter()
            .map(|(_, action)| *action)
            .collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.script.lock().fetches
    }
}

/// Apply a confirmed action to the held board.
fn mirror(board: &BoardState, action: LedgerAction, receipt: &SubmitReceipt) -> BoardState {
    match action {
        LedgerAction::Move(mv) => {
            let Ok(next) = mv.apply(board) else {
                return board.clone();
            };
            match (mv.origin_column(), receipt.revealed_card) {
                (Some(column), Some(card)) => next.with_column_reveal(column, card).unwrap_or(next),
                _ => next,
            }
        }
        LedgerAction::OpenDeckCard => {
            let mut next = board.clone();
            match (next.deck.next_draw(), receipt.revealed_card) {
                (Ok(DeckDraw::Reveal), Some(card)) => next.deck.reveal(card),
                (Ok(DeckDraw::Cycle), _) => next.deck.cycle(),
                _ => {}
            }
            next
        }
        LedgerAction::RotateOpenDeckCards => {
            let mut next = board.clone();
            next.deck.rotate();
            next
        }
        LedgerAction::FinishGame => board.clone(),
        LedgerAction::DeleteUnfinishedGame => BoardState::empty(),
    }
}

#[async_trait]
impl SnapshotSource for ScriptedLedger {
    async fn fetch_authoritative_state(&self, _game_id: &GameId) -> Result<BoardState, LedgerError> {
        let mut script = self.script.lock();
        script.fetches += 1;
        if let Some(err) = script.fetch_failures.pop_front() {
            return Err(err);
        }
        Ok(script.authoritative.clone())
    }
}

#[async_trait]
impl Ledger for ScriptedLedger {
    async fn submit(&self, game_id: &GameId, action: LedgerAction) -> Result<SubmitReceipt, LedgerError> {
        let gate = {
            let mut script = self.script.lock();
            script.submitted.push((game_id.clone(), action));
            script.gate.take()
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut script = self.script.lock();
        let outcome = script
            .receipts
            .pop_front()
            .unwrap_or_else(|| Ok(SubmitReceipt::success()));
        if let Ok(receipt) = &outcome {
            if receipt.is_success() {
                script.authoritative = mirror(&script.authoritative, action, receipt);
            }
        }
        outcome
    }

    async fn create_game(&self, difficulty: Difficulty) -> Result<GameId, LedgerError> {
        let mut script = self.script.lock();
        script.games_created += 1;
        Ok(GameId::new(format!(
            "0x{}{:04x}",
            difficulty.as_str(),
            script.games_created
        )))
    }
}
