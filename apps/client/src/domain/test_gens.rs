// Proptest generators for domain types.
// Runs are built by construction so no strategy needs prop_assume!.

use proptest::prelude::*;

use crate::domain::{Card, Color, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card::new(suit, rank))
}

/// Raw ids outside the deck, including the face-down sentinel.
pub fn invalid_id() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..0, 52..i32::MAX]
}

fn suit_of_color(color: Color, pick_second: bool) -> Suit {
    let mut of_color = Suit::ALL.into_iter().filter(|s| s.color() == color);
    let first = of_color.next();
    let second = of_color.next();
    match (pick_second, first, second) {
        (true, _, Some(s)) | (false, Some(s), _) => s,
        _ => Suit::Clubs,
    }
}

/// Descending alternating-colour run of `min_len..=max_len` cards whose
/// bottom card is drawn from `bottoms`. Bottoms too low to reach `min_len`
/// are never offered, so callers get exactly what they ask for.
fn run_from(bottoms: &[Rank], min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    let reachable: Vec<Rank> = bottoms
        .iter()
        .copied()
        .filter(|r| usize::from(r.index()) + 1 >= min_len)
        .collect();
    (
        prop::sample::select(reachable),
        any::<bool>(),
        prop::collection::vec(any::<bool>(), max_len),
    )
        .prop_flat_map(move |(bottom, start_black, suit_picks)| {
            let longest = usize::from(bottom.index()) + 1;
            (min_len..=longest.min(max_len)).prop_map(move |len| {
                let mut color = if start_black { Color::Black } else { Color::Red };
                (0..len)
                    .map(|i| {
                        let rank = Rank::ALL[usize::from(bottom.index()) - i];
                        let card = Card::new(suit_of_color(color, suit_picks[i]), rank);
                        color = match color {
                            Color::Black => Color::Red,
                            Color::Red => Color::Black,
                        };
                        card
                    })
                    .collect()
            })
        })
}

/// A valid run of `1..=max_len` cards with any bottom rank.
pub fn valid_run(max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    run_from(&Rank::ALL, 1, max_len)
}

/// A valid run of `2..=max_len` cards.
pub fn valid_multi_card_run(max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    run_from(&Rank::ALL, 2, max_len)
}

/// A valid run whose bottom is below King, so it can sit on another card.
pub fn valid_run_below_king(max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    run_from(&Rank::ALL[..Rank::ALL.len() - 1], 1, max_len)
}

/// Two or more cards; contents are arbitrary.
pub fn multi_card_segment() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), 2..6)
}
