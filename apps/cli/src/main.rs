use dealfolio_cli::config::Config;
use dealfolio_cli::{build_service, init_tracing, run_report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let service = build_service(&config).await?;
    let report = run_report(service.as_ref(), &config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
