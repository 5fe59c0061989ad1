mod common;

use common::{card, engine_on, onto_empty_pile};
use solitaire_client::domain::board::Deck;
use solitaire_client::{
    BoardState, DragOutcome, DrawOutcome, LedgerAction, Move, SubmitReceipt,
};

fn fresh_deck(hidden: u32) -> BoardState {
    let mut board = BoardState::empty();
    board.deck = Deck::new(hidden, 0, vec![]);
    board
}

#[tokio::test]
async fn a_full_pass_through_the_deck_tracks_the_ledger() {
    let engine = engine_on(fresh_deck(2));
    engine.ledger().push_receipt(SubmitReceipt::revealed(card("AS")));
    engine.ledger().push_receipt(SubmitReceipt::revealed(card("7H")));

    assert_eq!(engine.draw_from_deck().await.unwrap(), DrawOutcome::Revealed(card("AS")));
    assert_eq!(engine.draw_from_deck().await.unwrap(), DrawOutcome::Revealed(card("7H")));
    assert_eq!(engine.board().deck.top(), Some(card("7H")));

    let mut outcomes = Vec::new();
    for _ in 0..4 {
        outcomes.push(engine.draw_from_deck().await.unwrap());
        assert_eq!(engine.board(), engine.ledger().authoritative());
    }
    assert_eq!(
        outcomes,
        vec![
            DrawOutcome::Rotated,
            DrawOutcome::Cycled,
            DrawOutcome::Cycled,
            DrawOutcome::Rotated
        ]
    );

    assert_eq!(
        engine.ledger().submitted(),
        vec![
            LedgerAction::OpenDeckCard,
            LedgerAction::OpenDeckCard,
            LedgerAction::RotateOpenDeckCards,
            LedgerAction::OpenDeckCard,
            LedgerAction::OpenDeckCard,
            LedgerAction::RotateOpenDeckCards,
        ]
    );
    assert_eq!(engine.move_count(), 6);
    assert!(engine.board().deck.open_cards().is_empty());
}

#[tokio::test]
async fn cycled_card_plays_to_a_pile() {
    let mut board = BoardState::empty();
    board.deck = Deck::new(0, 0, vec![card("AS"), card("7H")]);
    let engine = engine_on(board);

    assert_eq!(engine.draw_from_deck().await.unwrap(), DrawOutcome::Cycled);
    assert_eq!(engine.board().deck.top(), Some(card("AS")));

    let outcome = engine.handle_drag_end(onto_empty_pile("AS", 2)).await.unwrap();
    assert_eq!(outcome, DragOutcome::Committed { revealed: None });

    let after = engine.board();
    assert_eq!(after.piles[2].top(), Some(card("AS")));
    assert_eq!(after.deck, Deck::new(0, 0, vec![card("7H")]));
    assert_eq!(after, engine.ledger().authoritative());
    assert_eq!(
        engine.ledger().submitted().last(),
        Some(&LedgerAction::Move(Move::DeckToPile { pile: 2 }))
    );
}
