pub mod ledger;

pub use ledger::{LedgerConfig, Network};
