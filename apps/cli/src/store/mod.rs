//! JSON snapshot store for the investor ledger.

mod model;
mod repository;

pub use model::*;
pub use repository::JsonLedgerRepository;
