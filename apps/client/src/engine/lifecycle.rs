use std::sync::atomic::Ordering;

use tracing::info;

use super::MoveEngine;
use crate::domain::BoardState;
use crate::error::ClientError;
use crate::errors::domain::{DomainError, IllegalMoveKind};
use crate::ledger::{require_success, Difficulty, GameId, Ledger, LedgerAction};

impl<L: Ledger> MoveEngine<L> {
    /// Deal a new game on the ledger and make it the active session.
    ///
    /// The game becomes active as soon as the ledger creates it. If the
    /// first fetch fails the session keeps the new id with a stale empty
    /// board, so the next operation (or `load_game`) picks the deal up.
    pub async fn start_new_game(&self, difficulty: Difficulty) -> Result<GameId, ClientError> {
        let _flight = self.begin_flight()?;
        let game_id = self.ledger.create_game(difficulty).await?;
        self.set_session(Some(game_id.clone()), BoardState::empty());
        self.stale.store(true, Ordering::Release);

        let board = self.fetch_snapshot(&game_id).await?;
        self.set_session(Some(game_id.clone()), board);
        info!(game_id = %game_id, difficulty = difficulty.as_str(), "new game started");
        Ok(game_id)
    }

    /// Resume an existing game from its authoritative snapshot.
    pub async fn load_game(&self, game_id: GameId) -> Result<(), ClientError> {
        let _flight = self.begin_flight()?;
        let board = self.fetch_snapshot(&game_id).await?;
        info!(game_id = %game_id, visible = board.visible_card_count(), "game loaded");
        self.set_session(Some(game_id), board);
        Ok(())
    }

    /// Close out a won game and publish the final snapshot.
    pub async fn finish_game(&self) -> Result<(), ClientError> {
        let _flight = self.begin_flight()?;
        self.settle().await?;
        let game_id = self.require_game()?;
        if !self.board().is_won() {
            return Err(DomainError::illegal(IllegalMoveKind::GameNotWon, "piles are incomplete").into());
        }
        require_success(self.ledger.submit(&game_id, LedgerAction::FinishGame).await?)?;
        self.resync(&game_id).await?;
        info!(game_id = %game_id, moves = self.move_count(), "game finished");
        Ok(())
    }

    /// Delete an unfinished game. The ledger object is gone afterwards, so
    /// the session resets to an empty board with no game id.
    pub async fn abandon_game(&self) -> Result<(), ClientError> {
        let _flight = self.begin_flight()?;
        let game_id = self.require_game()?;
        require_success(
            self.ledger
                .submit(&game_id, LedgerAction::DeleteUnfinishedGame)
                .await?,
        )?;
        self.set_session(None, BoardState::empty());
        info!(game_id = %game_id, "game abandoned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::fixtures::CardFixtures as F;
    use crate::domain::{Card, DragEnd, DropTarget, Rank, Suit};
    use crate::ledger::scripted::ScriptedLedger;
    use crate::error::Severity;
    use crate::ledger::{LedgerError, SubmitReceipt};

    fn won_board() -> BoardState {
        let mut board = BoardState::empty();
        for (pile, suit) in board.piles.iter_mut().zip(Suit::ALL) {
            pile.cards = Rank::ALL.into_iter().map(|r| Card::new(suit, r)).collect();
        }
        board
    }

    #[tokio::test]
    async fn new_game_resets_the_session() {
        let deal = F::board_with_columns(&[(0, &["KS"]), (1, &[])]);
        let ledger = Arc::new(ScriptedLedger::new(deal.clone()));
        let engine = MoveEngine::new(ledger);

        let id = engine.start_new_game(Difficulty::Normal).await.unwrap();
        assert_eq!(engine.game_id(), Some(id.clone()));
        assert_eq!(engine.board(), deal);

        engine
            .handle_drag_end(DragEnd::new(F::card("KS"), DropTarget::EmptyColumn { index: 2 }))
            .await
            .unwrap();
        assert_eq!(engine.move_count(), 1);

        engine.load_game(id).await.unwrap();
        assert_eq!(engine.move_count(), 0);
        let status = engine.subscribe_status();
        assert_eq!(status.borrow().move_count, 0);
    }

    #[tokio::test]
    async fn failed_first_fetch_keeps_the_new_game() {
        let deal = F::board_with_columns(&[(0, &["KS"]), (0, &[])]);
        let ledger = Arc::new(ScriptedLedger::new(deal.clone()));
        ledger.fail_next_fetch(LedgerError::Timeout);
        let engine = MoveEngine::new(ledger);

        let err = engine.start_new_game(Difficulty::Easy).await.unwrap_err();
        assert_eq!(err.code(), "RECONCILIATION");
        assert_eq!(err.severity(), Severity::Severe);

        let id = engine.game_id().expect("created game stays active");
        assert_eq!(id.as_str(), "0xeasy0001");
        assert!(engine.is_stale());

        // The next drag refetches the deal before validating.
        let outcome = engine
            .handle_drag_end(DragEnd::new(F::card("KS"), DropTarget::EmptyColumn { index: 1 }))
            .await
            .unwrap();
        assert_eq!(outcome, crate::engine::DragOutcome::Committed { revealed: None });
        assert_eq!(engine.board().columns[1], F::column(0, &["KS"]));
        assert!(!engine.is_stale());
    }

    #[tokio::test]
    async fn failed_load_leaves_the_session_alone() {
        let board = F::board_with_columns(&[(3, &["9H"])]);
        let ledger = Arc::new(ScriptedLedger::new(board.clone()));
        ledger.fail_next_fetch(LedgerError::NotFound(GameId::new("0xother")));
        let engine = MoveEngine::with_game(ledger, GameId::new("0xgame"), board.clone());

        let err = engine.load_game(GameId::new("0xother")).await.unwrap_err();

        assert!(matches!(err, ClientError::Reconciliation { .. }));
        assert_eq!(engine.game_id(), Some(GameId::new("0xgame")));
        assert_eq!(engine.board(), board);
    }

    #[tokio::test]
    async fn finish_requires_a_won_board() {
        let ledger = Arc::new(ScriptedLedger::new(BoardState::empty()));
        let engine = MoveEngine::with_game(ledger, GameId::new("0xgame"), BoardState::empty());
        let err = engine.finish_game().await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::IllegalMove {
                kind: IllegalMoveKind::GameNotWon,
                ..
            }
        ));
        assert!(engine.ledger().submitted().is_empty());
    }

    #[tokio::test]
    async fn finish_submits_and_refetches() {
        let ledger = Arc::new(ScriptedLedger::new(won_board()));
        let engine = MoveEngine::with_game(ledger, GameId::new("0xgame"), won_board());
        engine.finish_game().await.unwrap();
        assert_eq!(engine.ledger().submitted(), vec![LedgerAction::FinishGame]);
        assert_eq!(engine.ledger().fetch_count(), 1);
    }

    #[tokio::test]
    async fn abandon_clears_the_session() {
        let board = F::board_with_columns(&[(3, &["9H"])]);
        let ledger = Arc::new(ScriptedLedger::new(board.clone()));
        let engine = MoveEngine::with_game(ledger, GameId::new("0xgame"), board);

        engine.abandon_game().await.unwrap();

        assert_eq!(engine.game_id(), None);
        assert_eq!(engine.board(), BoardState::empty());
        assert!(matches!(engine.draw_from_deck().await, Err(ClientError::NoActiveGame)));
    }

    #[tokio::test]
    async fn rejected_abandon_keeps_the_game() {
        let board = F::board_with_columns(&[(3, &["9H"])]);
        let ledger = Arc::new(ScriptedLedger::new(board.clone()));
        ledger.push_receipt(SubmitReceipt::failure("ENotOwner"));
        let engine = MoveEngine::with_game(ledger, GameId::new("0xgame"), board.clone());

        let err = engine.abandon_game().await.unwrap_err();
        assert_eq!(err.code(), "REMOTE_SUBMISSION");
        assert_eq!(engine.board(), board);
        assert!(engine.game_id().is_some());
    }
}
