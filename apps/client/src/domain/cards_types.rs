//! Core card-related types: Card, Rank, Suit, Color, CardSlot
//!
//! A card is identified on the ledger by an integer in `0..=51`. Ids are
//! grouped into four contiguous suit bands of 13 (clubs, spades, hearts,
//! diamonds) and `id % 13` is the rank with Ace low.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub const RANKS_PER_SUIT: u8 = 13;
pub const DECK_SIZE: u8 = 52;
/// Raw id the ledger uses for a face-down placeholder.
pub const FACE_DOWN_ID: i32 = -1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// Suits in ledger band order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    fn band(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    Red,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 0 for Ace through 12 for King.
    pub fn index(self) -> u8 {
        self as u8
    }

    fn from_index(i: u8) -> Rank {
        Rank::ALL[usize::from(i % RANKS_PER_SUIT)]
    }

    /// True when `self` sits directly above `other` (e.g. Eight over Seven).
    pub fn is_one_above(self, other: Rank) -> bool {
        self.index() == other.index() + 1
    }
}

/// A face-up card, guaranteed to hold an id in `0..=51`.
///
/// Serializes as the bare ledger id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Card(u8);

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card(suit.band() * RANKS_PER_SUIT + rank.index())
    }

    pub fn from_id(id: i32) -> Result<Self, DomainError> {
        u8::try_from(id)
            .ok()
            .filter(|v| *v < DECK_SIZE)
            .map(Card)
            .ok_or_else(|| DomainError::invalid_card(id))
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> Rank {
        Rank::from_index(self.0 % RANKS_PER_SUIT)
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[usize::from(self.0 / RANKS_PER_SUIT)]
    }

    pub fn color(self) -> Color {
        self.suit().color()
    }

    /// Every card in id order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).map(Card)
    }
}

impl TryFrom<i32> for Card {
    type Error = DomainError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Card::from_id(id)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl From<Card> for u64 {
    fn from(card: Card) -> Self {
        u64::from(card.0)
    }
}

/// Rank of a raw ledger id.
pub fn rank_of(id: i32) -> Result<Rank, DomainError> {
    Card::from_id(id).map(Card::rank)
}

/// Suit of a raw ledger id.
pub fn suit_of(id: i32) -> Result<Suit, DomainError> {
    Card::from_id(id).map(Card::suit)
}

/// Colour of a raw ledger id.
pub fn color_of(id: i32) -> Result<Color, DomainError> {
    Card::from_id(id).map(Card::color)
}

/// One position in a rendered stack. Face-down slots never reach the
/// rank/suit/colour derivations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardSlot {
    FaceDown,
    FaceUp(Card),
}

impl CardSlot {
    pub fn from_raw(id: i32) -> Result<Self, DomainError> {
        if id == FACE_DOWN_ID {
            Ok(CardSlot::FaceDown)
        } else {
            Card::from_id(id).map(CardSlot::FaceUp)
        }
    }

    pub fn card(self) -> Option<Card> {
        match self {
            CardSlot::FaceDown => None,
            CardSlot::FaceUp(card) => Some(card),
        }
    }
}
