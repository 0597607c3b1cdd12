//! Farecard command-line tool.
//!
//! Formats balances and fares the way a card reader would display them,
//! honoring the privacy settings from configuration.
//!
//! Usage:
//!   farecard show '{"type":"iso","value":1234,"currencyCode":"AUD","divisor":100}'
//!   farecard fare 250 840
//!   farecard sum '[{"value":100,"currencyCode":"USD","divisor":100}, ...]'

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use farecard_core::format::{CatalogLocalizer, PlainFormatter};
use farecard_core::{Balance, TransitCurrency, TripObfuscator};
use farecard_shared::{AppConfig, AppError, AppResult};

const USAGE: &str = "usage: farecard <show JSON | fare AMOUNT NUMERIC_CODE | sum JSON_ARRAY>";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farecard=info,farecard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        privacy_flags = config.privacy.enabled_count(),
        seeded = config.obfuscation.seed.is_some(),
        "Configuration loaded"
    );

    let obfuscator = TripObfuscator::from_config(&config.obfuscation);
    let args: Vec<String> = std::env::args().skip(1).collect();

    let output = run(&args, &config, &obfuscator)
        .with_context(|| format!("farecard {}", args.join(" ")))?;
    println!("{output}");
    Ok(())
}

fn run(args: &[String], config: &AppConfig, obfuscator: &TripObfuscator) -> AppResult<String> {
    let localizer = CatalogLocalizer::new();

    match args {
        [command, json] if command == "show" => {
            let balance = Balance::from_json(json)?;
            let shown = balance.maybe_obfuscate_balance(obfuscator, config);
            Ok(shown
                .format_currency_string(true, &PlainFormatter, &localizer)
                .to_string())
        }
        [command, amount, numeric] if command == "fare" => {
            let amount: i64 = amount
                .parse()
                .map_err(|_| AppError::Validation(format!("amount must be an integer: {amount}")))?;
            let numeric: i32 = numeric.parse().map_err(|_| {
                AppError::Validation(format!("numeric code must be an integer: {numeric}"))
            })?;
            let fare = TransitCurrency::from_numeric(amount, numeric);
            let shown = obfuscator.maybe_obfuscate_fare(&fare, config);
            Ok(shown
                .format_currency_string(false, &PlainFormatter)
                .to_string())
        }
        [command, json] if command == "sum" => {
            let values: Vec<TransitCurrency> = serde_json::from_str(json)?;
            let total = TransitCurrency::try_sum(&values)?
                .ok_or_else(|| AppError::Validation("nothing to add".to_string()))?;
            info!(count = values.len(), currency = %total.currency_code(), "Summed values");
            Ok(total
                .format_currency_string(true, &PlainFormatter)
                .to_string())
        }
        _ => Err(AppError::Validation(USAGE.to_string())),
    }
}
