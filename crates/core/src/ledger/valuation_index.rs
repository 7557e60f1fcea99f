//! Latest-valuation lookup shared by every calculation path.

use std::collections::HashMap;

use super::{CompanyId, Valuation};

/// Point lookup of a company's most recent valuation.
pub trait ValuationLookup {
    fn latest_valuation(&self, company_id: CompanyId) -> Option<&Valuation>;
}

/// Pre-fetched map of the most recent valuation per company.
///
/// Built either from a store's already-reduced map or from raw valuation rows.
/// When reducing rows, a later date always wins and, between rows on the same
/// date, the row seen first is kept.
#[derive(Debug, Clone, Default)]
pub struct LatestValuationIndex {
    by_company: HashMap<CompanyId, Valuation>,
}

impl LatestValuationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Valuation>,
    {
        let mut index = Self::new();
        for row in rows {
            index.offer(row);
        }
        index
    }

    /// Keeps `valuation` if it is strictly newer than the one already held
    /// for its company.
    pub fn offer(&mut self, valuation: Valuation) {
        match self.by_company.get(&valuation.company_id) {
            Some(current) if current.valuation_date >= valuation.valuation_date => {}
            _ => {
                self.by_company.insert(valuation.company_id, valuation);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_company.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_company.is_empty()
    }
}

impl From<HashMap<CompanyId, Valuation>> for LatestValuationIndex {
    fn from(by_company: HashMap<CompanyId, Valuation>) -> Self {
        Self { by_company }
    }
}

impl ValuationLookup for LatestValuationIndex {
    fn latest_valuation(&self, company_id: CompanyId) -> Option<&Valuation> {
        self.by_company.get(&company_id)
    }
}

impl ValuationLookup for HashMap<CompanyId, Valuation> {
    fn latest_valuation(&self, company_id: CompanyId) -> Option<&Valuation> {
        self.get(&company_id)
    }
}
