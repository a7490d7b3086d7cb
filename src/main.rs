use anyhow::Context;
use clap::Parser;

use cloudflare_waf::cli::{run, Cli};
use cloudflare_waf::config::load_config;
use cloudflare_waf::utils::init_logging;
use cloudflare_waf::WafClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = load_config().context("failed to load configuration")?;
    init_logging(&settings.logging.level);
    tracing::debug!(config = ?settings.cloudflare, "Configuration loaded");

    let zone_id = cli.zone_id(settings.cloudflare.zone_id.as_deref())?;
    let client = WafClient::new(&settings.cloudflare)?;

    let output = run(&client, &zone_id, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
