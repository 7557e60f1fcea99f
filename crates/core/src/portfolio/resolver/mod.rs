//! Company resolution for deals across the current and legacy link schemas.

mod company_resolver;
mod resolver_model;

pub use company_resolver::*;
pub use resolver_model::*;
