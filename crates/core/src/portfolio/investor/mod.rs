//! Investor portfolio service: loads an investor's ledger and serves the
//! portfolio, overview, distribution and investment detail views.

mod investor_model;
mod investor_portfolio_service;
mod investor_traits;

pub use investor_model::*;
pub use investor_portfolio_service::*;
pub use investor_traits::*;

#[cfg(test)]
mod investor_portfolio_service_tests;
