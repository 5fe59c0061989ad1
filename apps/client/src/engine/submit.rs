use tracing::{debug, error, info, warn};

use std::sync::atomic::Ordering;

use super::{DragOutcome, MoveEngine, Speculation, Verdict};
use crate::domain::{BoardState, DragEnd, Move};
use crate::error::ClientError;
use crate::ledger::{GameId, Ledger, LedgerAction, SubmitReceipt, TxStatus};

impl<L: Ledger> MoveEngine<L> {
    /// Sole entry point for drag gestures.
    ///
    /// Illegal moves come back as `Ok(Rejected)` with the board untouched.
    /// A remote failure is rolled back before `Err(RemoteSubmission)` is
    /// returned; `Err(Reconciliation)` means the rollback fetch also failed.
    pub async fn handle_drag_end(&self, drag: DragEnd) -> Result<DragOutcome, ClientError> {
        let _flight = self.begin_flight()?;
        self.settle().await?;
        match super::validate_drag(&drag, &self.board()) {
            Verdict::Ignore(reason) => {
                debug!(reason, "drag ignored");
                Ok(DragOutcome::Ignored)
            }
            Verdict::Reject(err) => {
                warn!(error = %err, "illegal move rejected locally");
                match err.illegal_kind() {
                    Some(kind) => Ok(DragOutcome::Rejected(kind)),
                    None => Err(err.into()),
                }
            }
            Verdict::Accept(mv) => self.execute(mv).await,
        }
    }

    /// Submit a move obtained from [`MoveEngine::prepare`].
    ///
    /// The move is re-checked against the current board, so a move prepared
    /// against an older snapshot fails with `IllegalMove` instead of
    /// corrupting state.
    pub async fn submit(&self, mv: Move) -> Result<DragOutcome, ClientError> {
        let _flight = self.begin_flight()?;
        self.settle().await?;
        self.execute(mv).await
    }

    async fn execute(&self, mv: Move) -> Result<DragOutcome, ClientError> {
        let game_id = self.require_game()?;
        let before = self.board();
        super::check_move(mv, &before)?;
        let speculative = mv.apply(&before)?;

        let receipt = self
            .run_optimistic(&game_id, LedgerAction::Move(mv), before, speculative.clone())
            .await?;
        self.count_move();

        let revealed = receipt.revealed_card;
        let committed = match (mv.origin_column(), revealed) {
            (Some(column), Some(card)) => speculative.with_column_reveal(column, card),
            (Some(column), None) if awaits_reveal(&speculative, column) => None,
            (None, Some(_)) => None,
            _ => Some(speculative),
        };
        match committed {
            Some(board) => self.publish(board),
            None => {
                warn!(game_id = %game_id, kind = mv.kind().as_str(), ?revealed, "reveal did not fit local board, resyncing");
                self.resync(&game_id).await?;
            }
        }

        info!(game_id = %game_id, kind = mv.kind().as_str(), ?revealed, "move committed");
        Ok(DragOutcome::Committed { revealed })
    }

    /// Publish `speculative`, submit `action`, and roll back on any failure.
    ///
    /// Returns the receipt only when the ledger reported success. If this
    /// future is dropped before that, `before` is republished and the
    /// session is marked stale.
    pub(super) async fn run_optimistic(
        &self,
        game_id: &GameId,
        action: LedgerAction,
        before: BoardState,
        speculative: BoardState,
    ) -> Result<SubmitReceipt, ClientError> {
        let speculation = Speculation::arm(self, before);
        self.publish(speculative);
        debug!(game_id = %game_id, action = action.function_name(), "submitting");

        let reason = match self.ledger.submit(game_id, action).await {
            Ok(receipt) => match &receipt.status {
                TxStatus::Success => {
                    speculation.disarm();
                    return Ok(receipt);
                }
                TxStatus::Failure(reason) => reason.clone(),
            },
            Err(err) => err.to_string(),
        };

        warn!(game_id = %game_id, action = action.function_name(), reason = %reason, "remote submission failed, rolling back");
        let err = self.rollback(game_id, speculation.before(), reason).await;
        speculation.disarm();
        Err(err)
    }

    /// Refetch first when the last operation left the board unconfirmed.
    pub(super) async fn settle(&self) -> Result<(), ClientError> {
        if !self.is_stale() {
            return Ok(());
        }
        let Some(game_id) = self.game_id() else {
            return Ok(());
        };
        info!(game_id = %game_id, "board is stale, refetching before the next operation");
        self.resync(&game_id).await
    }

    /// Replace the board with the authoritative snapshot.
    ///
    /// When the fetch itself fails the pre-move snapshot is restored and a
    /// reconciliation error is returned: local state may now be stale.
    async fn rollback(&self, game_id: &GameId, before: BoardState, reason: String) -> ClientError {
        match self.ledger.fetch_authoritative_state(game_id).await {
            Ok(board) => {
                self.publish(board);
                ClientError::remote(reason)
            }
            Err(fetch_err) => {
                error!(game_id = %game_id, error = %fetch_err, "rollback fetch failed");
                self.publish(before);
                self.stale.store(true, Ordering::Release);
                ClientError::reconciliation(format!("{reason}; refetch failed: {fetch_err}"))
            }
        }
    }

    /// Fetch and publish the authoritative snapshot after a committed action
    /// whose result could not be reproduced locally.
    pub(super) async fn resync(&self, game_id: &GameId) -> Result<(), ClientError> {
        match self.fetch_snapshot(game_id).await {
            Ok(board) => {
                self.publish(board);
                self.stale.store(false, Ordering::Release);
                Ok(())
            }
            Err(err) => {
                self.stale.store(true, Ordering::Release);
                Err(err)
            }
        }
    }

    /// Authoritative snapshot; a failed fetch is a reconciliation error.
    pub(super) async fn fetch_snapshot(&self, game_id: &GameId) -> Result<BoardState, ClientError> {
        self.ledger
            .fetch_authoritative_state(game_id)
            .await
            .map_err(|err| {
                error!(game_id = %game_id, error = %err, "authoritative fetch failed");
                ClientError::reconciliation(format!("fetching {game_id}: {err}"))
            })
    }
}

/// The column's face-up run is gone but cards remain hidden beneath it.
fn awaits_reveal(board: &BoardState, column: usize) -> bool {
    board
        .column(column)
        .is_some_and(|c| c.cards.is_empty() && c.hidden_count > 0)
}
