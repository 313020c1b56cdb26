//! Score accounting.

pub mod ledger;

pub use ledger::{ScoreLedger, TeamScore};
