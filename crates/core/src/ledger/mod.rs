//! Investor ledger: the entities the engine reads and the store contract
//! used to load them.

mod ledger_model;
mod ledger_traits;
mod valuation_index;

pub use ledger_model::*;
pub use ledger_traits::*;
pub use valuation_index::*;
