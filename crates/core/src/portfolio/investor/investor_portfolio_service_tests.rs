//! Unit tests for the investor portfolio service.

use super::*;
use crate::constants::UNKNOWN_SEGMENT;
use crate::errors::{Error, Result};
use crate::ledger::{
    Company, CompanyId, Deal, DealCompanyInvestment, DealId, DealUnderlyingCompany, InvestorId,
    LedgerRepositoryTrait, Transaction, Valuation,
};
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockLedgerRepository {
    transactions: Vec<Transaction>,
    valuations: Vec<Valuation>,
    companies: Vec<Company>,
    unavailable: bool,
    batch_valuation_calls: Mutex<Vec<Vec<CompanyId>>>,
}

impl MockLedgerRepository {
    fn new(transactions: Vec<Transaction>, valuations: Vec<Valuation>) -> Self {
        Self {
            transactions,
            valuations,
            ..Default::default()
        }
    }

    fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies = companies;
        self
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::Repository("ledger store unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn latest_for(&self, company_id: CompanyId) -> Option<Valuation> {
        let mut rows: Vec<&Valuation> = self
            .valuations
            .iter()
            .filter(|v| v.company_id == company_id)
            .collect();
        // Stable sort keeps store order between equal dates.
        rows.sort_by(|a, b| b.valuation_date.cmp(&a.valuation_date));
        rows.first().map(|v| (*v).clone())
    }
}

#[async_trait]
impl LedgerRepositoryTrait for MockLedgerRepository {
    async fn get_transactions_for_investor(
        &self,
        investor_id: InvestorId,
    ) -> Result<Vec<Transaction>> {
        self.check_available()?;
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.investor_id == investor_id)
            .cloned()
            .collect())
    }

    async fn get_transaction_for_deal(
        &self,
        investor_id: InvestorId,
        deal_id: DealId,
    ) -> Result<Option<Transaction>> {
        self.check_available()?;
        Ok(self
            .transactions
            .iter()
            .find(|t| t.investor_id == investor_id && t.deal.id == deal_id)
            .cloned())
    }

    async fn get_latest_valuation(&self, company_id: CompanyId) -> Result<Option<Valuation>> {
        self.check_available()?;
        Ok(self.latest_for(company_id))
    }

    async fn get_latest_valuations(
        &self,
        company_ids: &[CompanyId],
    ) -> Result<HashMap<CompanyId, Valuation>> {
        self.check_available()?;
        self.batch_valuation_calls
            .lock()
            .unwrap()
            .push(company_ids.to_vec());
        Ok(company_ids
            .iter()
            .filter_map(|id| self.latest_for(*id).map(|v| (*id, v)))
            .collect())
    }

    async fn get_company(&self, company_id: CompanyId) -> Result<Option<Company>> {
        self.check_available()?;
        Ok(self.companies.iter().find(|c| c.id == company_id).cloned())
    }

    async fn get_companies(
        &self,
        company_ids: &[CompanyId],
    ) -> Result<HashMap<CompanyId, Company>> {
        self.check_available()?;
        Ok(self
            .companies
            .iter()
            .filter(|c| company_ids.contains(&c.id))
            .map(|c| (c.id, c.clone()))
            .collect())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

const INVESTOR: InvestorId = 2;

fn company(id: CompanyId, name: &str, sector: Option<&str>) -> Company {
    Company {
        id,
        name: Some(name.to_string()),
        sector: sector.map(str::to_string),
        description: Some(format!("{} description", name)),
    }
}

fn deal(id: DealId, name: &str) -> Deal {
    Deal {
        id,
        name: name.to_string(),
        deal_date: NaiveDate::from_ymd_opt(2023, 1, 10),
        deal_type: Some("SPV".to_string()),
        deal_status: Some("ACTIVE".to_string()),
        partner_name: Some("North Partners".to_string()),
        description: Some(format!("{} deal", name)),
        entry_valuation: None,
        underlying_company_id: None,
        company_investments: Vec::new(),
        underlying_companies: Vec::new(),
    }
}

fn investment(company: Company, amount: Decimal, entry: Decimal) -> DealCompanyInvestment {
    DealCompanyInvestment {
        company,
        investment_amount: Some(amount),
        entry_valuation: Some(entry),
    }
}

fn transaction(id: i64, deal: Deal, capital: Decimal, year: i32, month: u32) -> Transaction {
    Transaction {
        id,
        investor_id: INVESTOR,
        deal,
        initial_net_capital: Some(capital),
        transaction_date: Utc.with_ymd_and_hms(year, month, 15, 10, 0, 0).unwrap(),
        management_fee_percent: Some(dec!(2)),
        performance_fee_percent: Some(dec!(20)),
    }
}

fn valuation(company_id: CompanyId, date: &str, post_money: Decimal) -> Valuation {
    Valuation {
        company_id,
        post_money,
        valuation_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

/// Single-company deal with 2x growth, a two-company deal and an unresolved deal.
fn sample_repository() -> MockLedgerRepository {
    let mut single = deal(1, "Acme Seed");
    single.company_investments = vec![investment(
        company(10, "Acme", Some("Fintech")),
        dec!(500000),
        dec!(1000000),
    )];

    let mut multi = deal(2, "Basket II");
    multi.company_investments = vec![
        investment(company(20, "Alpha", Some("Health")), dec!(60000), dec!(2000000)),
        investment(company(21, "Beta", None), dec!(40000), dec!(500000)),
    ];

    let orphan = deal(3, "Orphan");

    MockLedgerRepository::new(
        vec![
            transaction(100, single, dec!(100000), 2023, 2),
            transaction(101, multi, dec!(90000), 2023, 5),
            transaction(102, orphan, dec!(50000), 2023, 5),
        ],
        vec![
            valuation(10, "2023-01-01", dec!(1200000)),
            valuation(10, "2024-06-30", dec!(2000000)),
            valuation(20, "2024-03-31", dec!(3000000)),
        ],
    )
}

fn service(repository: MockLedgerRepository) -> InvestorPortfolioService {
    InvestorPortfolioService::new(Arc::new(repository))
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_portfolio_totals_and_per_deal_metrics() {
    let service = service(sample_repository());

    let result = service.get_portfolio(INVESTOR).await.unwrap();

    assert_eq!(result.investments.len(), 3);

    let single = &result.investments[0];
    assert_eq!(single.current_value, dec!(200000));
    assert_eq!(single.moic, dec!(2));

    let multi = &result.investments[1];
    assert!(multi.is_multiple_company_deal);
    assert_eq!(multi.companies[0].invested_amount, dec!(54000));
    assert_eq!(multi.companies[1].invested_amount, dec!(36000));
    assert_eq!(multi.current_value, dec!(117000));

    let orphan = &result.investments[2];
    assert_eq!(orphan.current_value, dec!(50000));
    assert_eq!(orphan.moic, Decimal::ONE);

    let summary = &result.portfolio;
    assert_eq!(summary.total_invested, dec!(240000));
    assert_eq!(summary.current_value, dec!(367000));
    assert_eq!(summary.capital_earned, dec!(127000));
    assert_eq!(
        summary.first_investment_date,
        Some(Utc.with_ymd_and_hms(2023, 2, 15, 10, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn test_overview_matches_full_portfolio() {
    let service = service(sample_repository());

    let overview = service.get_portfolio_overview(INVESTOR).await.unwrap();
    let full = service.get_portfolio(INVESTOR).await.unwrap();

    assert_eq!(overview, full.portfolio);
}

#[tokio::test]
async fn test_valuations_are_fetched_in_one_batch() {
    let repository = Arc::new(sample_repository());
    let service = InvestorPortfolioService::new(repository.clone());

    service.get_portfolio(INVESTOR).await.unwrap();

    let calls = repository.batch_valuation_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec![10, 20, 21]);
}

#[tokio::test]
async fn test_single_company_scenario_return_percent() {
    let mut single = deal(1, "Acme Seed");
    single.company_investments = vec![investment(
        company(10, "Acme", Some("Fintech")),
        dec!(100000),
        dec!(1000000),
    )];
    let repository = MockLedgerRepository::new(
        vec![transaction(1, single, dec!(100000), 2024, 1)],
        vec![valuation(10, "2024-06-01", dec!(2000000))],
    );

    let overview = service(repository)
        .get_portfolio_overview(INVESTOR)
        .await
        .unwrap();

    assert_eq!(overview.moic, dec!(2));
    assert_eq!(overview.current_value, dec!(200000));
    assert_eq!(overview.total_return_percent, dec!(100));
}

#[tokio::test]
async fn test_empty_ledger_returns_zero_summary() {
    let service = service(MockLedgerRepository::default());

    let result = service.get_portfolio(INVESTOR).await.unwrap();

    assert!(result.investments.is_empty());
    assert_eq!(result.portfolio.moic, Decimal::ZERO);
    assert_eq!(result.portfolio.first_investment_date, None);
    assert!(service
        .get_company_distribution(INVESTOR)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_underlying_company_id_fallback_uses_store_lookup() {
    let mut legacy = deal(4, "Legacy");
    legacy.underlying_company_id = Some(30);
    legacy.entry_valuation = Some(dec!(4000000));
    legacy.underlying_companies = vec![DealUnderlyingCompany {
        company: company(31, "Ignored", None),
    }];
    let repository = MockLedgerRepository::new(
        vec![transaction(1, legacy, dec!(10000), 2022, 8)],
        vec![
            valuation(30, "2024-01-01", dec!(6000000)),
            valuation(31, "2024-01-01", dec!(99000000)),
        ],
    )
    .with_companies(vec![company(30, "Legacy Holdings", Some("Energy"))]);

    let result = service(repository).get_portfolio(INVESTOR).await.unwrap();

    let metrics = &result.investments[0];
    assert_eq!(metrics.company_names, "Legacy Holdings");
    assert_eq!(metrics.companies[0].entry_valuation, dec!(4000000));
    assert_eq!(metrics.current_value, dec!(15000));
}

#[tokio::test]
async fn test_company_and_industry_distributions_reconcile() {
    let service = service(sample_repository());

    let companies = service.get_company_distribution(INVESTOR).await.unwrap();
    let industries = service.get_industry_distribution(INVESTOR).await.unwrap();

    let company_total: Decimal = companies.iter().map(|s| s.amount).sum();
    let industry_total: Decimal = industries.iter().map(|s| s.amount).sum();
    assert_eq!(company_total, dec!(240000));
    assert_eq!(industry_total, dec!(240000));

    let acme = companies.iter().find(|s| s.segment == "Acme").unwrap();
    assert_eq!(acme.amount, dec!(100000));
    let unknown_company = companies
        .iter()
        .find(|s| s.segment == UNKNOWN_SEGMENT)
        .unwrap();
    assert_eq!(unknown_company.amount, dec!(50000));

    let unknown_sector = industries
        .iter()
        .find(|s| s.segment == UNKNOWN_SEGMENT)
        .unwrap();
    assert_eq!(unknown_sector.amount, dec!(86000));

    let pct: Decimal = industries.iter().map(|s| s.percentage).sum();
    assert!((pct - dec!(100)).abs() < dec!(0.000001));
}

#[tokio::test]
async fn test_industry_profit_distribution() {
    let service = service(sample_repository());

    let profits = service
        .get_industry_profit_distribution(INVESTOR)
        .await
        .unwrap();

    // Fintech: 200000 - 100000, Health: 54000 * 1.5 - 54000
    assert_eq!(profits[0].segment, "Fintech");
    assert_eq!(profits[0].profit, dec!(100000));
    assert_eq!(profits[1].segment, "Health");
    assert_eq!(profits[1].profit, dec!(27000));
    let total: Decimal = profits.iter().map(|p| p.profit).sum();
    assert_eq!(total, dec!(127000));
}

#[tokio::test]
async fn test_monthly_returns_bucket_by_transaction_month() {
    let service = service(sample_repository());

    let returns = service.get_monthly_returns(INVESTOR).await.unwrap();

    assert_eq!(returns.len(), 2);
    assert_eq!(returns[0].month, "2023-02");
    assert_eq!(returns[0].invested, dec!(100000));
    assert_eq!(returns[0].return_percent, dec!(100));
    assert_eq!(returns[1].month, "2023-05");
    assert_eq!(returns[1].invested, dec!(140000));
    assert_eq!(returns[1].current_value, dec!(167000));
    // (167000 - 140000) / 140000 * 100
    assert_eq!(
        returns[1].return_percent.round_dp(4),
        dec!(19.2857)
    );
}

#[tokio::test]
async fn test_investment_details_with_fees() {
    let repository = Arc::new(sample_repository());
    let service = InvestorPortfolioService::new(repository.clone());

    let detail = service.get_investment_details(INVESTOR, 2).await.unwrap();

    assert_eq!(detail.investment.current_value, dec!(117000));
    assert_eq!(detail.investment.companies.len(), 2);
    assert_eq!(
        detail.investment.companies[0].description.as_deref(),
        Some("Alpha description")
    );
    assert_eq!(detail.deal.number_of_companies, 2);
    assert!(!detail.deal.is_single_company_deal);
    assert_eq!(detail.deal.fund_vehicle.as_deref(), Some("SPV"));
    assert_eq!(detail.deal.partner.as_deref(), Some("North Partners"));
    assert_eq!(detail.fees.management_fee, dec!(1800));
    assert_eq!(detail.fees.performance_fee, dec!(18000));
    assert_eq!(detail.fees.total_fees, dec!(19800));

    // Point lookups produce the same numbers as the batched portfolio path.
    let portfolio = service.get_portfolio(INVESTOR).await.unwrap();
    assert_eq!(detail.investment, portfolio.investments[1]);
    assert_eq!(repository.batch_valuation_calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_investment_details_not_found() {
    let service = service(sample_repository());

    let err = service.get_investment_details(INVESTOR, 999).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let mut repository = sample_repository();
    repository.unavailable = true;
    let service = service(repository);

    let err = service.get_portfolio(INVESTOR).await.unwrap_err();

    assert!(matches!(err, Error::Repository(_)));
}

#[tokio::test]
async fn test_other_investors_are_ignored() {
    let mut repository = sample_repository();
    let mut foreign = repository.transactions[0].clone();
    foreign.id = 999;
    foreign.investor_id = 7;
    foreign.initial_net_capital = Some(dec!(1000000));
    repository.transactions.push(foreign);

    let overview = service(repository)
        .get_portfolio_overview(INVESTOR)
        .await
        .unwrap();

    assert_eq!(overview.total_invested, dec!(240000));
}
