//! Shared test helpers for the solitaire client workspace.
//!
//! Unit tests (through `ctor`) and integration tests both route their
//! tracing setup through [`logging::init`] so output capture behaves the
//! same everywhere.

pub mod logging;

pub use logging::init as init_test_logging;
