use clap::Parser;
use miette::{IntoDiagnostic, Result};
use smartpay::application::dispatcher::PaymentDispatcher;
use smartpay::application::router::SelectionRouter;
use smartpay::config::RouterConfig;
use smartpay::infrastructure::registry::ProcessorRegistry;
use smartpay::interfaces::csv::outcome_writer::{OutcomeRow, OutcomeWriter, OutputFormat};
use smartpay::interfaces::csv::transaction_reader::TransactionReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transactions CSV file with `amount` and `currency` columns
    input: PathBuf,

    /// Router configuration (TOML). The built-in configuration is used when omitted.
    #[arg(long, env = "SMARTPAY_CONFIG")]
    config: Option<PathBuf>,

    /// Output format for routing results
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => RouterConfig::load(path),
        None => RouterConfig::builtin(),
    }
    .into_diagnostic()?;

    let catalog = ProcessorRegistry::with_builtin()
        .build_catalog(&config)
        .into_diagnostic()?;
    if catalog.is_empty() {
        warn!("No processors configured; every transaction will be rejected");
    }
    info!(processors = catalog.len(), "Loaded processor catalog");

    let dispatcher = PaymentDispatcher::new(SelectionRouter::new(
        Arc::new(catalog),
        config.priorities,
    ));

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = TransactionReader::new(file, config.default_currency);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock(), cli.format);

    for tx_result in reader.transactions() {
        let tx = match tx_result {
            Ok(tx) => tx,
            Err(e) => {
                warn!(error = %e, "Error reading transaction");
                continue;
            }
        };

        let row = match dispatcher.dispatch(&tx).await {
            Ok(outcome) => OutcomeRow::new(&tx, outcome),
            Err(e) => OutcomeRow::failed(&tx, &e),
        };
        writer.write(&row).into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
