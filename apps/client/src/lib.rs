#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod display;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod ledger;
pub mod telemetry;

// Re-exports for public API
pub use config::{LedgerConfig, Network};
pub use domain::{BoardState, Card, DragEnd, DropTarget, Move};
pub use engine::{DragOutcome, DrawOutcome, EngineStatus, MoveEngine};
pub use error::{ClientError, Severity};
pub use errors::domain::{DomainError, IllegalMoveKind};
pub use ledger::{Difficulty, GameId, Ledger, LedgerAction, SnapshotSource, SubmitReceipt};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::init_test_logging();
}
