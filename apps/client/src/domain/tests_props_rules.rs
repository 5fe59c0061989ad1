// Property-based tests for the card model and placement rules.

use proptest::prelude::*;

use crate::domain::board::{Column, Pile};
use crate::domain::rules::{check_column_to_column, check_column_to_pile, is_valid_run};
use crate::domain::{color_of, rank_of, suit_of, test_gens, test_prelude, Card, Rank, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Derivations agree with the 13-id suit bands.
    #[test]
    fn prop_derivations_follow_bands(id in 0i32..52) {
        let band = Suit::ALL[(id / 13) as usize];
        prop_assert_eq!(suit_of(id), Ok(band));
        prop_assert_eq!(rank_of(id).map(Rank::index), Ok((id % 13) as u8));
        prop_assert_eq!(color_of(id), Ok(band.color()));
        prop_assert_eq!(suit_of(id), suit_of(id), "deterministic");
    }

    #[test]
    fn prop_out_of_range_ids_fail(id in test_gens::invalid_id()) {
        prop_assert_eq!(rank_of(id), Err(DomainError::InvalidCard(id)));
        prop_assert_eq!(suit_of(id), Err(DomainError::InvalidCard(id)));
        prop_assert_eq!(color_of(id), Err(DomainError::InvalidCard(id)));
    }

    /// Two or more cards never go to a pile, whatever the pile holds.
    #[test]
    fn prop_pile_rejects_multi_card_segments(
        segment in test_gens::multi_card_segment(),
        pile_top in prop::option::of(test_gens::card()),
    ) {
        let pile = Pile::new(pile_top.into_iter().collect());
        let err = check_column_to_pile(&segment, &pile).unwrap_err();
        prop_assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::MultiCardToPile));
    }

    #[test]
    fn prop_generated_runs_are_valid(run in test_gens::valid_run(13)) {
        prop_assert!(is_valid_run(&run));
    }

    #[test]
    fn prop_constrained_runs_meet_their_bounds(
        multi in test_gens::valid_multi_card_run(5),
        low in test_gens::valid_run_below_king(5),
    ) {
        prop_assert!(multi.len() >= 2 && is_valid_run(&multi));
        prop_assert!(low[0].rank() != Rank::King && is_valid_run(&low));
    }

    /// A run lands on any column whose top is one rank higher and the other colour.
    #[test]
    fn prop_run_lands_on_matching_anchor(
        run in test_gens::valid_run_below_king(6),
        anchor_suit in test_gens::suit(),
    ) {
        let bottom = run[0];
        let anchor_rank = Rank::ALL[usize::from(bottom.rank().index()) + 1];
        let anchor = Card::new(anchor_suit, anchor_rank);
        let dest = Column::new(0, vec![anchor]);
        let result = check_column_to_column(&run, &dest);
        if anchor.color() != bottom.color() {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(
                result.unwrap_err().illegal_kind(),
                Some(IllegalMoveKind::ColorMismatch)
            );
        }
    }

    /// Only King-bottomed segments open an empty column.
    #[test]
    fn prop_empty_column_needs_king(run in test_gens::valid_run(4)) {
        let result = check_column_to_column(&run, &Column::default());
        if run[0].rank() == Rank::King {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result.unwrap_err().illegal_kind(), Some(IllegalMoveKind::NeedsKing));
        }
    }

    /// Breaking the colour alternation anywhere invalidates the run.
    #[test]
    fn prop_same_colour_neighbours_break_runs(
        run in test_gens::valid_multi_card_run(5),
        at in any::<prop::sample::Index>(),
    ) {
        let i = at.index(run.len() - 1) + 1;
        let mut broken = run.clone();
        let wanted = run[i - 1].color();
        let suit = Suit::ALL.into_iter().find(|s| s.color() == wanted).unwrap_or(Suit::Clubs);
        broken[i] = Card::new(suit, run[i].rank());
        prop_assert!(!is_valid_run(&broken));
    }
}
