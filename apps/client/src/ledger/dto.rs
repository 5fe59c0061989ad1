//! Wire shapes of the solitaire game object and its events.
//!
//! Move `u64` values come back from the fullnode as JSON strings, older
//! nodes emit plain numbers; both are accepted.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::{GameId, LedgerError};
use crate::domain::board::{Column, Deck, Pile, COLUMNS, PILES};
use crate::domain::{BoardState, Card};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFields {
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    pub cards: Vec<i64>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub hidden_cards: u64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckFields {
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    pub cards: Vec<i64>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub hidden_cards: u64,
    /// Absent on package versions that always show every drawn card.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub open_cards: Option<u64>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileFields {
    #[serde_as(as = "Vec<PickFirst<(_, DisplayFromStr)>>")]
    pub cards: Vec<i64>,
}

/// Nested Move struct as rendered by the fullnode: `{ "type": ..., "fields": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapped<T> {
    #[serde(rename = "type", default)]
    pub type_tag: Option<String>,
    pub fields: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidDto {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: UidDto,
    pub columns: Vec<Wrapped<ColumnFields>>,
    pub deck: Wrapped<DeckFields>,
    pub piles: Vec<Wrapped<PileFields>>,
}

/// `content` of a `sui_getObject` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectContent {
    pub data_type: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub fields: GameObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: String,
    #[serde(default)]
    pub content: Option<ObjectContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectError {
    pub code: String,
    #[serde(default)]
    pub object_id: Option<String>,
}

/// `result` of `sui_getObject`: either `data` or `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectResponse {
    #[serde(default)]
    pub data: Option<ObjectData>,
    #[serde(default)]
    pub error: Option<ObjectError>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRevealedEvent {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub card: i64,
}

/// One entry of a transaction's `events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub parsed_json: serde_json::Value,
}

fn to_card(raw: i64) -> Result<Card, LedgerError> {
    let id = i32::try_from(raw).map_err(|_| LedgerError::Decode(format!("card id {raw} out of range")))?;
    Ok(Card::from_id(id)?)
}

fn to_cards(raw: &[i64]) -> Result<Vec<Card>, LedgerError> {
    raw.iter().copied().map(to_card).collect()
}

fn to_count(raw: u64, what: &str) -> Result<u32, LedgerError> {
    u32::try_from(raw).map_err(|_| LedgerError::Decode(format!("{what} count {raw} out of range")))
}

impl GameObject {
    pub fn game_id(&self) -> GameId {
        GameId::new(self.id.id.clone())
    }

    /// Validate every id and build the board.
    pub fn to_board(&self) -> Result<BoardState, LedgerError> {
        if self.columns.len() != COLUMNS || self.piles.len() != PILES {
            return Err(LedgerError::Decode(format!(
                "expected {COLUMNS} columns and {PILES} piles, got {} and {}",
                self.columns.len(),
                self.piles.len()
            )));
        }

        let mut board = BoardState::empty();
        for (slot, column) in board.columns.iter_mut().zip(&self.columns) {
            *slot = Column::new(
                to_count(column.fields.hidden_cards, "hidden column")?,
                to_cards(&column.fields.cards)?,
            );
        }
        for (slot, pile) in board.piles.iter_mut().zip(&self.piles) {
            *slot = Pile::new(to_cards(&pile.fields.cards)?);
        }

        let deck = &self.deck.fields;
        let cards = to_cards(&deck.cards)?;
        let drawn = cards.len() as u64;
        let open = deck.open_cards.unwrap_or(drawn);
        if open > drawn {
            return Err(LedgerError::Decode(format!(
                "deck shows {open} open cards but only {drawn} were drawn"
            )));
        }
        board.deck = Deck::new(
            to_count(deck.hidden_cards, "hidden deck")?,
            to_count(open, "open deck")?,
            cards,
        );
        Ok(board)
    }
}

impl ObjectResponse {
    /// Extract the board, mapping a missing object to [`LedgerError::NotFound`].
    pub fn into_board(self, game_id: &GameId) -> Result<BoardState, LedgerError> {
        if let Some(err) = self.error {
            return Err(match err.code.as_str() {
                "notExists" | "deleted" => LedgerError::NotFound(game_id.clone()),
                other => LedgerError::Decode(format!("object error '{other}'")),
            });
        }
        let content = self
            .data
            .and_then(|d| d.content)
            .ok_or_else(|| LedgerError::Decode("object has no content".to_string()))?;
        if content.data_type != "moveObject" {
            return Err(LedgerError::Decode(format!(
                "expected a moveObject, got '{}'",
                content.data_type
            )));
        }
        content.fields.to_board()
    }
}

/// Card id carried by the first event of type `event_type`, if any.
pub fn revealed_card(events: &[EventDto], event_type: &str) -> Result<Option<Card>, LedgerError> {
    let Some(event) = events.iter().find(|e| e.type_tag == event_type) else {
        return Ok(None);
    };
    let payload: CardRevealedEvent = serde_json::from_value(event.parsed_json.clone())
        .map_err(|e| LedgerError::Decode(format!("CardRevealed payload: {e}")))?;
    to_card(payload.card).map(Some)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::fixtures::CardFixtures as F;

    fn column(cards: serde_json::Value, hidden: serde_json::Value) -> serde_json::Value {
        json!({"type": "0xpkg::solitaire::Column", "fields": {"cards": cards, "hidden_cards": hidden}})
    }

    fn game_json() -> serde_json::Value {
        let mut columns = vec![column(json!(["12"]), json!("0"))];
        for i in 1..7 {
            columns.push(column(json!([]), json!(i.to_string())));
        }
        json!({
            "id": {"id": "0xgame"},
            "columns": columns,
            "deck": {"type": "0xpkg::solitaire::Deck", "fields": {"cards": ["40", 3], "hidden_cards": "20", "open_cards": "1"}},
            "piles": [
                {"fields": {"cards": ["0", "1"]}},
                {"fields": {"cards": []}},
                {"fields": {"cards": []}},
                {"fields": {"cards": []}}
            ]
        })
    }

    #[test]
    fn decodes_game_object_with_string_numbers() {
        let game: GameObject = serde_json::from_value(game_json()).unwrap();
        assert_eq!(game.game_id(), GameId::new("0xgame"));
        let board = game.to_board().unwrap();

        assert_eq!(board.columns[0], F::column(0, &["KC"]));
        assert_eq!(board.columns[6].hidden_count, 6);
        assert_eq!(board.piles[0], F::pile(&["AC", "2C"]));
        assert_eq!(board.deck.hidden_count, 20);
        assert_eq!(board.deck.open_count, 1);
        assert_eq!(board.deck.top(), Some(F::card("4C")));
    }

    #[test]
    fn missing_open_cards_shows_everything_drawn() {
        let mut raw = game_json();
        raw["deck"]["fields"].as_object_mut().unwrap().remove("open_cards");
        let board = serde_json::from_value::<GameObject>(raw).unwrap().to_board().unwrap();
        assert_eq!(board.deck.open_count, 2);
    }

    #[test]
    fn invalid_ids_and_shapes_are_decode_errors() {
        let mut raw = game_json();
        raw["piles"][0]["fields"]["cards"] = json!(["52"]);
        let err = serde_json::from_value::<GameObject>(raw).unwrap().to_board().unwrap_err();
        assert!(matches!(err, LedgerError::Decode(_)));

        let mut raw = game_json();
        raw["columns"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<GameObject>(raw).unwrap().to_board().unwrap_err();
        assert!(err.to_string().contains("7 columns"));
    }

    #[test]
    fn deleted_objects_are_not_found() {
        let resp: ObjectResponse =
            serde_json::from_value(json!({"error": {"code": "deleted", "object_id": "0xgame"}})).unwrap();
        let err = resp.into_board(&GameId::new("0xgame")).unwrap_err();
        assert_eq!(err, LedgerError::NotFound(GameId::new("0xgame")));
    }

    #[test]
    fn finds_card_revealed_event() {
        let events = vec![
            EventDto {
                type_tag: "0xpkg::solitaire::Other".into(),
                parsed_json: json!({}),
            },
            EventDto {
                type_tag: "0xpkg::solitaire::CardRevealed".into(),
                parsed_json: json!({"card": "27"}),
            },
        ];
        let card = revealed_card(&events, "0xpkg::solitaire::CardRevealed").unwrap();
        assert_eq!(card, Some(F::card("2H")));
        assert_eq!(revealed_card(&events[..1], "0xpkg::solitaire::CardRevealed"), Ok(None));
    }
}
