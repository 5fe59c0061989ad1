//! Drag-end payloads coming from the UI layer.
//!
//! Empty containers have no card to anchor a drop on, so the UI reports
//! them as explicit placeholder variants carrying the container index.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DropTarget {
    Card { id: Card },
    EmptyColumn { index: usize },
    EmptyPile { index: usize },
}

impl DropTarget {
    pub fn card(self) -> Option<Card> {
        match self {
            DropTarget::Card { id } => Some(id),
            DropTarget::EmptyColumn { .. } | DropTarget::EmptyPile { .. } => None,
        }
    }
}

impl From<Card> for DropTarget {
    fn from(id: Card) -> Self {
        DropTarget::Card { id }
    }
}

/// End of a drag gesture. Either side may be missing when the pointer was
/// released outside any droppable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub active_id: Option<Card>,
    pub over_id: Option<DropTarget>,
}

impl DragEnd {
    pub fn new(active: Card, over: impl Into<DropTarget>) -> Self {
        Self {
            active_id: Some(active),
            over_id: Some(over.into()),
        }
    }

    /// Both ends present and distinct.
    pub fn endpoints(&self) -> Option<(Card, DropTarget)> {
        let active = self.active_id?;
        let over = self.over_id?;
        if over.card() == Some(active) {
            return None;
        }
        Some((active, over))
    }
}
