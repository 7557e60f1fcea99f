use std::sync::Arc;

use anyhow::Context;
use dealfolio_core::ledger::LedgerRepositoryTrait;
use dealfolio_core::portfolio::investor::{
    InvestorPortfolioService, InvestorPortfolioServiceTrait,
};
use serde_json::Value;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, ReportKind};
use crate::store::JsonLedgerRepository;

pub fn init_tracing() {
    let log_format = std::env::var("DF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries the report.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub async fn build_service(
    config: &Config,
) -> anyhow::Result<Arc<dyn InvestorPortfolioServiceTrait>> {
    let repository = JsonLedgerRepository::open(&config.ledger_path)
        .await
        .with_context(|| format!("Failed to load ledger {}", config.ledger_path.display()))?;
    tracing::info!("Ledger loaded from {}", config.ledger_path.display());

    let ledger_repository: Arc<dyn LedgerRepositoryTrait> = Arc::new(repository);
    Ok(Arc::new(InvestorPortfolioService::new(ledger_repository)))
}

/// Computes the configured report and returns it as JSON.
pub async fn run_report(
    service: &dyn InvestorPortfolioServiceTrait,
    config: &Config,
) -> anyhow::Result<Value> {
    let investor_id = config.investor_id;
    tracing::info!(
        "Computing {} report for investor {}",
        config.report.as_str(),
        investor_id
    );

    let report = match config.report {
        ReportKind::Portfolio => serde_json::to_value(service.get_portfolio(investor_id).await?)?,
        ReportKind::Overview => {
            serde_json::to_value(service.get_portfolio_overview(investor_id).await?)?
        }
        ReportKind::Companies => {
            serde_json::to_value(service.get_company_distribution(investor_id).await?)?
        }
        ReportKind::Industries => {
            serde_json::to_value(service.get_industry_distribution(investor_id).await?)?
        }
        ReportKind::IndustryProfits => serde_json::to_value(
            service
                .get_industry_profit_distribution(investor_id)
                .await?,
        )?,
        ReportKind::Monthly => {
            serde_json::to_value(service.get_monthly_returns(investor_id).await?)?
        }
        ReportKind::Investment => {
            let deal_id = config
                .deal_id
                .context("DF_DEAL_ID is required for the investment report")?;
            serde_json::to_value(service.get_investment_details(investor_id, deal_id).await?)?
        }
    };
    Ok(report)
}
