//! Error handling for the solitaire client.

pub mod domain;

pub use domain::{DomainError, IllegalMoveKind};
