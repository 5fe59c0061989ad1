use super::board::{BoardState, Column, Pile};
use super::cards_types::Card;

/// Helpers for building cards and boards from hardcoded short-form tokens
/// in tests and demo data.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens (e.g. `["AS", "2C", "TH"]`) into cards.
    ///
    /// Only meant for literal tokens that are known to be valid.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    pub fn card(token: &str) -> Card {
        Self::parse_hardcoded(&[token])[0]
    }

    pub fn column(hidden: u32, tokens: &[&str]) -> Column {
        Column::new(hidden, Self::parse_hardcoded(tokens))
    }

    pub fn pile(tokens: &[&str]) -> Pile {
        Pile::new(Self::parse_hardcoded(tokens))
    }

    /// Empty board with the given columns placed from index 0.
    pub fn board_with_columns(columns: &[(u32, &[&str])]) -> BoardState {
        let mut board = BoardState::empty();
        for (slot, (hidden, tokens)) in board.columns.iter_mut().zip(columns) {
            *slot = Self::column(*hidden, tokens);
        }
        board
    }
}
