//! Dealfolio Core - Ledger entities, valuation rules and portfolio services.
//!
//! This crate contains the valuation logic for investor portfolios of
//! private-market deals. It is store-agnostic and reads ledger data through
//! `LedgerRepositoryTrait`, which callers implement over their own store.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod utils;

// Re-export common types from ledger and portfolio modules
pub use ledger::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
