use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use dealfolio_core::ledger::{DealId, InvestorId};

/// Which view of the portfolio to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Portfolio,
    Overview,
    Companies,
    Industries,
    IndustryProfits,
    Monthly,
    Investment,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Portfolio => "portfolio",
            ReportKind::Overview => "overview",
            ReportKind::Companies => "companies",
            ReportKind::Industries => "industries",
            ReportKind::IndustryProfits => "industry-profits",
            ReportKind::Monthly => "monthly",
            ReportKind::Investment => "investment",
        }
    }
}

impl FromStr for ReportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portfolio" => Ok(ReportKind::Portfolio),
            "overview" => Ok(ReportKind::Overview),
            "companies" => Ok(ReportKind::Companies),
            "industries" => Ok(ReportKind::Industries),
            "industry-profits" => Ok(ReportKind::IndustryProfits),
            "monthly" => Ok(ReportKind::Monthly),
            "investment" => Ok(ReportKind::Investment),
            other => Err(anyhow!("Unknown report '{}'", other)),
        }
    }
}

pub struct Config {
    pub ledger_path: PathBuf,
    pub investor_id: InvestorId,
    pub report: ReportKind,
    pub deal_id: Option<DealId>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers other than the
    /// process environment can supply values.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ledger_path = lookup("DF_LEDGER_PATH")
            .unwrap_or_else(|| "./data/ledger.json".into())
            .into();
        let investor_id: InvestorId = lookup("DF_INVESTOR_ID")
            .context("DF_INVESTOR_ID is not set")?
            .trim()
            .parse()
            .context("Invalid DF_INVESTOR_ID")?;
        let report: ReportKind = lookup("DF_REPORT")
            .unwrap_or_else(|| "portfolio".into())
            .parse()
            .context("Invalid DF_REPORT")?;
        let deal_id = lookup("DF_DEAL_ID")
            .map(|raw| raw.trim().parse::<DealId>())
            .transpose()
            .context("Invalid DF_DEAL_ID")?;

        if report == ReportKind::Investment && deal_id.is_none() {
            bail!("DF_DEAL_ID is required for the investment report");
        }

        Ok(Self {
            ledger_path,
            investor_id,
            report,
            deal_id,
        })
    }
}
