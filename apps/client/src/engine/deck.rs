use tracing::{info, warn};

use super::MoveEngine;
use crate::domain::{Card, DeckDraw};
use crate::error::ClientError;
use crate::ledger::{Ledger, LedgerAction};

/// What a click on the stock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A hidden card was turned over.
    Revealed(Card),
    /// An already-drawn card moved to the top of the open window.
    Cycled,
    /// The open window was emptied to start a new pass.
    Rotated,
    /// The ledger drew a card but did not say which; the board was refetched.
    Resynced,
}

impl<L: Ledger> MoveEngine<L> {
    /// Draw from the stock, cycle the open window, or rotate it.
    ///
    /// An empty deck yields `IllegalMove(NothingToDraw)` with no remote call.
    pub async fn draw_from_deck(&self) -> Result<DrawOutcome, ClientError> {
        let _flight = self.begin_flight()?;
        self.settle().await?;
        let game_id = self.require_game()?;
        let before = self.board();
        let draw = before.deck.next_draw()?;

        let (action, speculative) = match draw {
            // The card is unknown until the ledger answers.
            DeckDraw::Reveal => (LedgerAction::OpenDeckCard, before.clone()),
            DeckDraw::Cycle => {
                let mut next = before.clone();
                next.deck.cycle();
                (LedgerAction::OpenDeckCard, next)
            }
            DeckDraw::Rotate => {
                let mut next = before.clone();
                next.deck.rotate();
                (LedgerAction::RotateOpenDeckCards, next)
            }
        };

        let receipt = self
            .run_optimistic(&game_id, action, before.clone(), speculative)
            .await?;
        self.count_move();

        let outcome = match (draw, receipt.revealed_card) {
            (DeckDraw::Reveal, Some(card)) => {
                self.publish(before.with_deck_reveal(card));
                DrawOutcome::Revealed(card)
            }
            (DeckDraw::Reveal, None) => {
                warn!(game_id = %game_id, "open_deck_card succeeded without a revealed card");
                self.resync(&game_id).await?;
                DrawOutcome::Resynced
            }
            (DeckDraw::Cycle, _) => DrawOutcome::Cycled,
            (DeckDraw::Rotate, _) => DrawOutcome::Rotated,
        };

        info!(game_id = %game_id, action = action.function_name(), ?outcome, "deck action committed");
        Ok(outcome)
    }
}
