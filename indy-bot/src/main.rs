//! indy-bot: post alliance industry cost indices to chat webhooks

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use indy_bot::{configured_notifiers, http, Args, BotConfig, EsiClient};
use indy_core::{Notifier, ReportPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (webhook URLs) from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Logs go to stderr; stdout carries the report when verbose
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("indy_bot={0},indy_core={0}", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting indy-bot {}", env!("CARGO_PKG_VERSION"));
    info!("Config file: {}", args.config.display());
    info!("ESI: {}", args.esi_url);

    let config = match BotConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    info!(
        alliances = config.pipeline.alliances.len(),
        regions = config.pipeline.regions.len(),
        threshold = config.pipeline.display_threshold,
        "Configuration loaded"
    );

    let client = http::build_client(args.timeout_secs)?;
    let esi = Arc::new(EsiClient::new(args.esi_url.clone(), client.clone()));

    let echo = config.verbose || args.verbose || args.dry_run;
    let mut pipeline = ReportPipeline::new(config.pipeline.clone(), esi).with_echo(echo);

    if args.dry_run {
        info!("Dry run, webhooks disabled");
    } else {
        for notifier in configured_notifiers(config.webhooks, &client) {
            info!(channel = notifier.channel(), "Webhook enabled");
            pipeline = pipeline.with_notifier(notifier);
        }
    }

    match pipeline.run().await {
        Ok(report) => {
            info!(bytes = report.len(), "Run complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Run failed, nothing further delivered");
            Err(e.into())
        }
    }
}
