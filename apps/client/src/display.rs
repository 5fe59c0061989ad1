//! Plain-text rendering of a board for logs and the CLI.
//!
//! Face-down cards print as `XX`, face-up cards as their short code
//! (`AH`, `TD`). Columns are drawn top-justified, one row per depth.

use std::fmt::Write;

use crate::domain::{BoardState, CardSlot, COLUMNS};

const FACE_DOWN: &str = "XX";
const EMPTY: &str = "  ";

fn slot_str(slot: CardSlot) -> String {
    match slot {
        CardSlot::FaceDown => FACE_DOWN.to_string(),
        CardSlot::FaceUp(card) => card.to_string(),
    }
}

/// Deck summary: hidden count, open window oldest first, drawn total.
pub fn render_deck(board: &BoardState) -> String {
    let deck = &board.deck;
    let open: Vec<String> = deck.open_cards().iter().map(ToString::to_string).collect();
    let window = if open.is_empty() {
        "empty".to_string()
    } else {
        open.join(" ")
    };
    format!(
        "Deck: [{} hidden]  Open: [{}]  ({} drawn)",
        deck.hidden_count,
        window,
        deck.cards.len()
    )
}

/// Top card of each pile, `[  ]` when empty.
pub fn render_piles(board: &BoardState) -> String {
    let cells: Vec<String> = board
        .piles
        .iter()
        .map(|p| match p.top() {
            Some(card) => format!("[{card}]"),
            None => format!("[{EMPTY}]"),
        })
        .collect();
    format!("Piles: {}", cells.join(" "))
}

pub fn render_columns(board: &BoardState) -> String {
    let mut out = String::from("Columns:\n");
    for i in 0..COLUMNS {
        let _ = write!(out, " C{} ", i + 1);
    }
    out.push('\n');

    let stacks: Vec<Vec<CardSlot>> = board.columns.iter().map(|c| c.slots().collect()).collect();
    let depth = stacks.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..depth {
        let line: String = stacks
            .iter()
            .map(|stack| match stack.get(row) {
                Some(slot) => format!(" {} ", slot_str(*slot)),
                None => format!(" {EMPTY} "),
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Whole board, deck and piles first.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();
    out.push_str(&render_deck(board));
    out.push('\n');
    out.push_str(&render_piles(board));
    out.push('\n');
    out.push_str(&render_columns(board));
    if board.is_won() {
        out.push_str("All piles complete.\n");
    }
    out
}
