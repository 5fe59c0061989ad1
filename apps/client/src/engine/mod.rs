//! Optimistic move engine - bridges the pure domain rules with the remote ledger.
//!
//! Every state-changing operation follows the same path: validate against
//! the current snapshot, publish a speculative snapshot, submit to the
//! ledger, then commit (possibly applying a revealed card) or roll back by
//! replacing the board with a freshly fetched authoritative snapshot.
//!
//! At most one operation is in flight. Calls made while one is pending are
//! refused with [`ClientError::MoveInFlight`] and change nothing.
//!
//! Dropping an operation's future while the ledger call is pending cannot
//! cancel the remote side. The pre-move board is republished and the
//! session is marked stale; the next operation refetches before it
//! validates anything.

mod deck;
mod lifecycle;
mod submit;
pub mod validate;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::warn;

use crate::domain::{BoardState, Card, DragEnd, Move};
use crate::errors::domain::IllegalMoveKind;
use crate::error::ClientError;
use crate::ledger::{GameId, Ledger};

pub use deck::DrawOutcome;
pub use validate::{check_move, validate_drag, Verdict};

/// Result of a drag gesture that did not fail remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Missing endpoints, same container, or a card that cannot be dragged.
    Ignored,
    /// Local rules refused the move; nothing was sent.
    Rejected(IllegalMoveKind),
    /// The ledger accepted the move.
    Committed { revealed: Option<Card> },
}

/// Observable engine flags for the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStatus {
    pub game_id: Option<GameId>,
    pub move_count: u32,
    pub move_in_flight: bool,
}

pub struct MoveEngine<L: Ledger> {
    ledger: Arc<L>,
    game_id: RwLock<Option<GameId>>,
    board_tx: watch::Sender<BoardState>,
    status_tx: watch::Sender<EngineStatus>,
    in_flight: AtomicBool,
    /// Local board may disagree with the ledger; refetch before the next operation.
    stale: AtomicBool,
}

/// Clears the in-flight flag when the operation ends, however it ends.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
    status: &'a watch::Sender<EngineStatus>,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.status.send_modify(|s| s.move_in_flight = false);
    }
}

/// Armed while a speculative board is published and the ledger has not
/// answered. Dropped armed, it restores `before` and marks the session stale.
struct Speculation<'a, L: Ledger> {
    engine: &'a MoveEngine<L>,
    before: Option<BoardState>,
}

impl<'a, L: Ledger> Speculation<'a, L> {
    fn arm(engine: &'a MoveEngine<L>, before: BoardState) -> Self {
        Self {
            engine,
            before: Some(before),
        }
    }

    fn before(&self) -> BoardState {
        self.before.clone().unwrap_or_default()
    }

    fn disarm(mut self) {
        self.before = None;
    }
}

impl<L: Ledger> Drop for Speculation<'_, L> {
    fn drop(&mut self) {
        if let Some(before) = self.before.take() {
            warn!("ledger call abandoned before it answered, restoring pre-move board");
            self.engine.publish(before);
            self.engine.stale.store(true, Ordering::Release);
        }
    }
}

impl<L: Ledger> MoveEngine<L> {
    /// Engine with no active game and an empty board.
    pub fn new(ledger: Arc<L>) -> Self {
        let (board_tx, _) = watch::channel(BoardState::empty());
        let (status_tx, _) = watch::channel(EngineStatus::default());
        Self {
            ledger,
            game_id: RwLock::new(None),
            board_tx,
            status_tx,
            in_flight: AtomicBool::new(false),
            stale: AtomicBool::new(false),
        }
    }

    /// Engine attached to an existing game with a known snapshot.
    pub fn with_game(ledger: Arc<L>, game_id: GameId, board: BoardState) -> Self {
        let engine = Self::new(ledger);
        engine.set_session(Some(game_id), board);
        engine
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.board_tx.subscribe()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<EngineStatus> {
        self.status_tx.subscribe()
    }

    /// Current published snapshot.
    pub fn board(&self) -> BoardState {
        self.board_tx.borrow().clone()
    }

    pub fn game_id(&self) -> Option<GameId> {
        self.game_id.read().clone()
    }

    pub fn move_count(&self) -> u32 {
        self.status_tx.borrow().move_count
    }

    pub fn is_move_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// True after an abandoned ledger call or a failed refetch left the
    /// board unconfirmed. Cleared by the next successful refetch.
    pub fn is_stale(&self) -> bool {
        self.stale.load(Ordering::Acquire)
    }

    /// Classify and validate a drag without submitting it.
    ///
    /// `Ok(None)` means the drag is a no-op; a rules violation is returned
    /// as [`ClientError::IllegalMove`].
    pub fn prepare(&self, drag: DragEnd) -> Result<Option<Move>, ClientError> {
        match validate_drag(&drag, &self.board()) {
            Verdict::Ignore(_) => Ok(None),
            Verdict::Reject(err) => Err(err.into()),
            Verdict::Accept(mv) => Ok(Some(mv)),
        }
    }

    fn begin_flight(&self) -> Result<FlightGuard<'_>, ClientError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClientError::MoveInFlight)?;
        self.status_tx.send_modify(|s| s.move_in_flight = true);
        Ok(FlightGuard {
            flag: &self.in_flight,
            status: &self.status_tx,
        })
    }

    fn require_game(&self) -> Result<GameId, ClientError> {
        self.game_id().ok_or(ClientError::NoActiveGame)
    }

    fn publish(&self, board: BoardState) {
        self.board_tx.send_replace(board);
    }

    fn count_move(&self) {
        self.status_tx.send_modify(|s| s.move_count += 1);
    }

    /// Swap the whole session: game id, board, and a zeroed move counter.
    fn set_session(&self, game_id: Option<GameId>, board: BoardState) {
        self.stale.store(false, Ordering::Release);
        *self.game_id.write() = game_id.clone();
        self.publish(board);
        self.status_tx.send_modify(|s| {
            s.game_id = game_id;
            s.move_count = 0;
        });
    }
}
