// Board-level scenarios: rule check followed by speculative application.

use crate::domain::fixtures::CardFixtures as F;
use crate::domain::rules::{check_column_to_column, check_column_to_pile};
use crate::domain::{BoardState, Move};
use crate::errors::domain::IllegalMoveKind;

#[test]
fn king_moves_into_an_empty_column() {
    let board = F::board_with_columns(&[(0, &["KS"]), (0, &[])]);
    check_column_to_column(&board.columns[0].cards, &board.columns[1]).unwrap();

    let next = Move::ColumnToColumn {
        from: 0,
        card: F::card("KS"),
        to: 1,
    }
    .apply(&board)
    .unwrap();

    assert!(next.columns[0].is_empty());
    assert_eq!(next.columns[1], F::column(0, &["KS"]));
}

#[test]
fn pile_builds_by_suit() {
    let mut board = F::board_with_columns(&[(0, &["AC"]), (0, &["2C"]), (0, &["3D"])]);

    for column in 0..2 {
        check_column_to_pile(&board.columns[column].cards, &board.piles[0]).unwrap();
        board = Move::ColumnToPile { column, pile: 0 }.apply(&board).unwrap();
    }
    assert_eq!(board.piles[0], F::pile(&["AC", "2C"]));

    let err = check_column_to_pile(&board.columns[2].cards, &board.piles[0]).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::SuitMismatch));
}

#[test]
fn five_of_clubs_does_not_follow_four_of_diamonds() {
    let mut board = F::board_with_columns(&[(1, &["5C"])]);
    board.piles[3] = F::pile(&["AD", "2D", "3D", "4D"]);
    let err = check_column_to_pile(&board.columns[0].cards, &board.piles[3]).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::SuitMismatch));
}

#[test]
fn exposing_a_hidden_card_waits_for_the_ledger() {
    let board = F::board_with_columns(&[(2, &["QH"]), (0, &["KS"])]);
    let next = Move::ColumnToColumn {
        from: 0,
        card: F::card("QH"),
        to: 1,
    }
    .apply(&board)
    .unwrap();

    assert_eq!(next.columns[0].hidden_count, 2, "nothing turned over locally");
    assert_eq!(next.columns[0].top(), None);

    let revealed = next.with_column_reveal(0, F::card("7D")).unwrap();
    assert_eq!(revealed.columns[0], F::column(1, &["7D"]));
    assert_ne!(revealed, BoardState::empty());
}
