//! Remote ledger contract.
//!
//! The ledger owns the authoritative game object and enforces the same
//! rules server-side. The client only ever submits actions and reads
//! snapshots back; signing lives in whatever implements [`Ledger`].

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BoardState, Card, Move};
use crate::error::ClientError;

pub mod calls;
pub mod dto;
pub mod rpc;
pub mod scripted;

pub use calls::{CallArg, MoveCall, CLOCK_OBJECT};

/// Object id of a game on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deal variants offered by the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
        }
    }
}

/// Every state-changing call the client makes against a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LedgerAction {
    Move(Move),
    OpenDeckCard,
    RotateOpenDeckCards,
    FinishGame,
    DeleteUnfinishedGame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Failure(String),
}

/// What came back from one submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: TxStatus,
    /// Card id carried by a `CardRevealed` event, if one was emitted.
    pub revealed_card: Option<Card>,
}

impl SubmitReceipt {
    pub fn success() -> Self {
        Self {
            status: TxStatus::Success,
            revealed_card: None,
        }
    }

    pub fn revealed(card: Card) -> Self {
        Self {
            status: TxStatus::Success,
            revealed_card: Some(card),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            status: TxStatus::Failure(reason.into()),
            revealed_card: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }
}

/// Errors raised by a ledger implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Network or node unreachable
    Transport(String),
    /// Transaction executed and was aborted by the package
    Rejected(String),
    /// No answer within the implementation's deadline
    Timeout,
    /// Response arrived but could not be understood
    Decode(String),
    /// The game object does not exist (or was deleted)
    NotFound(GameId),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Transport(msg) => write!(f, "ledger transport error: {msg}"),
            LedgerError::Rejected(msg) => write!(f, "transaction failed: {msg}"),
            LedgerError::Timeout => write!(f, "ledger request timed out"),
            LedgerError::Decode(msg) => write!(f, "malformed ledger payload: {msg}"),
            LedgerError::NotFound(id) => write!(f, "game {id} not found on ledger"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LedgerError::Timeout
        } else if err.is_decode() {
            LedgerError::Decode(err.to_string())
        } else {
            LedgerError::Transport(err.to_string())
        }
    }
}

impl From<crate::errors::domain::DomainError> for LedgerError {
    fn from(err: crate::errors::domain::DomainError) -> Self {
        LedgerError::Decode(err.to_string())
    }
}

/// Read half of the contract.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Current authoritative board of `game_id`.
    async fn fetch_authoritative_state(&self, game_id: &GameId) -> Result<BoardState, LedgerError>;
}

/// Full contract: snapshots plus at-most-once transaction submission.
///
/// `submit` must report every remote failure, either as `Err` or as a
/// receipt with [`TxStatus::Failure`]. It is never retried by the caller.
#[async_trait]
pub trait Ledger: SnapshotSource {
    async fn submit(&self, game_id: &GameId, action: LedgerAction) -> Result<SubmitReceipt, LedgerError>;

    /// Deal a fresh game and return its object id.
    async fn create_game(&self, difficulty: Difficulty) -> Result<GameId, LedgerError>;
}

/// Turn a receipt into a hard error when the transaction did not succeed.
pub fn require_success(receipt: SubmitReceipt) -> Result<SubmitReceipt, ClientError> {
    match &receipt.status {
        TxStatus::Success => Ok(receipt),
        TxStatus::Failure(reason) => Err(ClientError::remote(reason.clone())),
    }
}
