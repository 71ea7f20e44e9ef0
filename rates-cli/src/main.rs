//! Rates CLI
//!
//! Converts USD amounts using the cached exchange rate provider.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::{Converter, FileStatsLog, RateProvider, RetryPolicy};
use rates_types::CurrencyCode;

use config::Config;

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "Convert USD into other currencies", long_about = None)]
struct Cli {
    /// File that receives one line per conversion attempt
    #[arg(long, global = true)]
    stats_path: Option<PathBuf>,

    /// Attempts made to fetch the rate table
    #[arg(long, global = true)]
    max_retries: Option<u32>,

    /// Seconds to wait between fetch attempts
    #[arg(long, global = true, value_parser = parse_delay_arg)]
    retry_delay: Option<std::time::Duration>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount of USD into one currency
    Convert {
        /// Amount in USD
        amount: f64,
        /// Target currency code, e.g. EUR
        #[arg(long)]
        to: String,
    },
    /// Convert an amount into RUB and EUR with separate converters
    Demo {
        #[arg(long, default_value = "100")]
        amount: f64,
    },
    /// Print the loaded rate table
    Rates {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_delay_arg(s: &str) -> Result<std::time::Duration, String> {
    config::parse_delay(s).map_err(|e| e.to_string())
}

fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse().map_err(|e| anyhow::anyhow!("{}", e))
}

struct Settings {
    stats_path: PathBuf,
    policy: RetryPolicy,
}

impl Settings {
    fn resolve(config: Config, cli: &Cli) -> Self {
        let mut policy = config.retry_policy();
        if let Some(max_retries) = cli.max_retries {
            policy.max_retries = max_retries;
        }
        if let Some(retry_delay) = cli.retry_delay {
            policy.retry_delay = retry_delay;
        }
        Self {
            stats_path: cli.stats_path.clone().unwrap_or(config.stats_path),
            policy,
        }
    }

    fn provider(&self) -> RateProvider {
        RateProvider::http(self.policy).with_stats(FileStatsLog::new(&self.stats_path))
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exchange_rates=info,rates_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::resolve(Config::from_env()?, &cli);

    tracing::debug!(
        stats_path = %settings.stats_path.display(),
        max_retries = settings.policy.max_retries,
        retry_delay = ?settings.policy.retry_delay,
        "Resolved settings"
    );

    match cli.command {
        Commands::Convert { amount, to } => {
            let target = parse_currency(&to)?;
            let converter = Converter::with_provider(settings.provider(), target);
            let value = converter.convert(amount).await;
            println!("{} USD in {} = {}", amount, converter.target(), value);
        }

        Commands::Demo { amount } => {
            println!("Testing Converter...");
            for code in ["RUB", "EUR"] {
                let converter = Converter::with_provider(settings.provider(), code);
                let value = converter.convert(amount).await;
                println!("{} USD in {} = {}", amount, code, value);
            }
        }

        Commands::Rates { json } => {
            let provider = settings.provider();
            let rates = provider.rates().await;
            if rates.is_empty() {
                anyhow::bail!("No rates available");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(rates)?);
            } else {
                for (code, rate) in rates.sorted() {
                    println!("{}\t{}", code, rate);
                }
            }
        }
    }

    Ok(())
}
