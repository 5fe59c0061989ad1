use thiserror::Error;

use crate::errors::domain::{DomainError, IllegalMoveKind};
use crate::ledger::LedgerError;

/// How loudly the UI should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Snap the card back, no notification.
    Silent,
    /// Short-lived notification; state was re-synchronised.
    Transient,
    /// Local state may be stale; the player must be told.
    Severe,
    /// Programmer error; should never reach a player.
    Bug,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid card: {0}")]
    InvalidCard(i32),
    #[error("Illegal move ({kind}): {detail}")]
    IllegalMove {
        kind: IllegalMoveKind,
        detail: String,
    },
    #[error("Remote submission failed: {detail}")]
    RemoteSubmission { detail: String },
    #[error("Reconciliation failed, local state may be stale: {detail}")]
    Reconciliation { detail: String },
    #[error("A move is already in flight")]
    MoveInFlight,
    #[error("No active game")]
    NoActiveGame,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Protocol error: {detail}")]
    Protocol { detail: String },
}

impl ClientError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::InvalidCard(_) => "INVALID_CARD",
            ClientError::IllegalMove { .. } => "ILLEGAL_MOVE",
            ClientError::RemoteSubmission { .. } => "REMOTE_SUBMISSION",
            ClientError::Reconciliation { .. } => "RECONCILIATION",
            ClientError::MoveInFlight => "MOVE_IN_FLIGHT",
            ClientError::NoActiveGame => "NO_ACTIVE_GAME",
            ClientError::Config { .. } => "CONFIG_ERROR",
            ClientError::Protocol { .. } => "PROTOCOL_ERROR",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ClientError::IllegalMove { .. } | ClientError::MoveInFlight => Severity::Silent,
            ClientError::RemoteSubmission { .. } => Severity::Transient,
            ClientError::Reconciliation { .. } | ClientError::Protocol { .. } => Severity::Severe,
            ClientError::InvalidCard(_)
            | ClientError::NoActiveGame
            | ClientError::Config { .. } => Severity::Bug,
        }
    }

    pub fn remote(detail: impl Into<String>) -> Self {
        Self::RemoteSubmission {
            detail: detail.into(),
        }
    }

    pub fn reconciliation(detail: impl Into<String>) -> Self {
        Self::Reconciliation {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidCard(id) => ClientError::InvalidCard(id),
            DomainError::IllegalMove(kind, detail) => ClientError::IllegalMove { kind, detail },
            DomainError::ParseCard(token) => {
                ClientError::protocol(format!("unparseable card token '{token}'"))
            }
        }
    }
}

impl From<LedgerError> for ClientError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::Decode(detail) => ClientError::protocol(detail),
            other => ClientError::remote(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_taxonomy() {
        let e: ClientError = DomainError::invalid_card(60).into();
        assert!(matches!(e, ClientError::InvalidCard(60)));
        assert_eq!(e.severity(), Severity::Bug);

        let e: ClientError = DomainError::illegal(IllegalMoveKind::NeedsAce, "2S").into();
        assert_eq!(e.code(), "ILLEGAL_MOVE");
        assert_eq!(e.severity(), Severity::Silent);
    }

    #[test]
    fn ledger_errors_are_transient_unless_malformed() {
        let e: ClientError = LedgerError::Timeout.into();
        assert_eq!(e.severity(), Severity::Transient);

        let e: ClientError = LedgerError::Decode("missing fields".into()).into();
        assert_eq!(e.code(), "PROTOCOL_ERROR");
        assert_eq!(e.severity(), Severity::Severe);
    }

    #[test]
    fn reconciliation_is_severe() {
        assert_eq!(
            ClientError::reconciliation("rpc down").severity(),
            Severity::Severe
        );
    }
}
