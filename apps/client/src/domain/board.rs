use crate::domain::{Card, CardSlot};
use crate::errors::domain::{DomainError, IllegalMoveKind};

pub const COLUMNS: usize = 7;
pub const PILES: usize = 4;

/// One tableau column: a face-down stack with a face-up run on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    /// Face-down cards under the face-up run; their ids are only known remotely.
    pub hidden_count: u32,
    /// Face-up cards, bottom first.
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(hidden_count: u32, cards: Vec<Card>) -> Self {
        Self {
            hidden_count,
            cards,
        }
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// No face-down and no face-up cards: the only state that accepts a King.
    pub fn is_empty(&self) -> bool {
        self.hidden_count == 0 && self.cards.is_empty()
    }

    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    /// Bottom-to-top slots as rendered, face-down placeholders first.
    pub fn slots(&self) -> impl Iterator<Item = CardSlot> + '_ {
        (0..self.hidden_count)
            .map(|_| CardSlot::FaceDown)
            .chain(self.cards.iter().copied().map(CardSlot::FaceUp))
    }
}

/// A foundation pile. Implicitly one suit once non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    pub cards: Vec<Card>,
}

impl Pile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == usize::from(crate::domain::cards_types::RANKS_PER_SUIT)
    }
}

/// What the next click on the stock does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckDraw {
    /// Expose a hidden card; its id arrives with the remote response.
    Reveal,
    /// All hidden cards are drawn; expose the next already-drawn card.
    Cycle,
    /// Every drawn card has been shown; start the cycle over.
    Rotate,
}

/// Stock and waste.
///
/// `cards` holds every drawn card in draw order and the last `open_count`
/// of them are face-up. `open_count <= cards.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub hidden_count: u32,
    pub open_count: u32,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(hidden_count: u32, open_count: u32, cards: Vec<Card>) -> Self {
        Self {
            hidden_count,
            open_count,
            cards,
        }
    }

    /// The face-up window, oldest first.
    pub fn open_cards(&self) -> &[Card] {
        let open = (self.open_count as usize).min(self.cards.len());
        &self.cards[self.cards.len() - open..]
    }

    /// The single draggable deck card.
    pub fn top(&self) -> Option<Card> {
        self.open_cards().last().copied()
    }

    pub fn next_draw(&self) -> Result<DeckDraw, DomainError> {
        let drawn = self.cards.len() as u32;
        if self.hidden_count > 0 {
            Ok(DeckDraw::Reveal)
        } else if self.open_count < drawn {
            Ok(DeckDraw::Cycle)
        } else if drawn > 0 {
            Ok(DeckDraw::Rotate)
        } else {
            Err(DomainError::illegal(
                IllegalMoveKind::NothingToDraw,
                "deck is exhausted",
            ))
        }
    }

    pub(crate) fn reveal(&mut self, card: Card) {
        self.hidden_count = self.hidden_count.saturating_sub(1);
        self.cards.push(card);
        self.open_count += 1;
    }

    pub(crate) fn cycle(&mut self) {
        if !self.cards.is_empty() {
            self.cards.rotate_left(1);
            self.open_count = (self.open_count + 1).min(self.cards.len() as u32);
        }
    }

    pub(crate) fn rotate(&mut self) {
        self.open_count = 0;
    }

    pub(crate) fn take_top(&mut self) -> Option<Card> {
        if self.open_count == 0 {
            return None;
        }
        let card = self.cards.pop()?;
        self.open_count -= 1;
        Some(card)
    }
}

/// Entire board snapshot. Treated as an immutable value: every move
/// produces a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub deck: Deck,
    pub columns: [Column; COLUMNS],
    pub piles: [Pile; PILES],
}

impl BoardState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(deck: Deck, columns: [Column; COLUMNS], piles: [Pile; PILES]) -> Self {
        Self {
            deck,
            columns,
            piles,
        }
    }

    /// All four piles run Ace to King.
    pub fn is_won(&self) -> bool {
        self.piles.iter().all(Pile::is_complete)
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Copy with `card` drawn onto the open window.
    pub fn with_deck_reveal(&self, card: Card) -> Self {
        let mut next = self.clone();
        next.deck.reveal(card);
        next
    }

    /// Copy with a column's next hidden card turned face-up.
    ///
    /// Returns `None` when the column has nothing hidden to turn over.
    pub fn with_column_reveal(&self, column: usize, card: Card) -> Option<Self> {
        let target = self.columns.get(column)?;
        if target.hidden_count == 0 || !target.cards.is_empty() {
            return None;
        }
        let mut next = self.clone();
        next.columns[column].hidden_count -= 1;
        next.columns[column].cards.push(card);
        Some(next)
    }

    /// Number of face-up cards across the whole board.
    pub fn visible_card_count(&self) -> usize {
        self.deck.cards.len()
            + self.columns.iter().map(|c| c.cards.len()).sum::<usize>()
            + self.piles.iter().map(|p| p.cards.len()).sum::<usize>()
    }
}
