//! Command-line entry point for the verse bridge core.
//!
//! Wires configuration, the token catalog, a balance source and a
//! delivery implementation into the [`BridgeValidator`] and drives one
//! transfer through it. The delivery implementation here is the mock
//! (no chain is touched); a wallet-connected frontend embeds the same
//! core against its real executor.
//!
//! ```bash
//! bridge --config config/mainnet.toml --amount 1.5
//! bridge --config config/mainnet.toml --withdraw --token "USDC.e" --amount 0.25
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use bridge_balance::MemoryBalances;
use bridge_config::Config;
use bridge_core::{BridgeContext, BridgeValidator};
use bridge_delivery::MockBridgeDelivery;

/// Command-line arguments for the bridge service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to the bridge configuration file
	#[arg(short, long)]
	config: PathBuf,

	/// Withdraw (verse → hub) instead of the default deposit
	#[arg(long, default_value = "false")]
	withdraw: bool,

	/// Token symbol to transfer (defaults to the native asset)
	#[arg(long)]
	token: Option<String>,

	/// Amount to transfer, as a decimal string
	#[arg(long)]
	amount: Option<String>,

	/// Transfer the full source-side balance instead of --amount
	#[arg(long, default_value = "false")]
	max: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
	fmt().with_env_filter(env_filter).init();

	let config = Config::from_file(&args.config)
		.with_context(|| format!("loading configuration from {}", args.config.display()))?;
	tracing::info!(
		hub = config.bridge.hub_chain_id,
		verse = config.bridge.verse_chain_id,
		verse_version = config.bridge.verse_version,
		tokens = config.tokens.len(),
		"configuration loaded"
	);

	let catalog = Arc::new(bridge_catalog::from_config(&config));
	let balances = Arc::new(MemoryBalances::new());
	let delivery = Arc::new(MockBridgeDelivery::new(config.bridge.verse_version));

	let mut validator = BridgeValidator::new(
		BridgeContext::from_config(&config),
		catalog,
		balances,
		delivery,
	);

	if args.withdraw {
		validator.toggle_direction();
	}

	if let Some(symbol) = &args.token {
		let token = config
			.token_by_symbol(symbol)
			.with_context(|| format!("no token '{}' in the configured table", symbol))?;
		validator
			.select_token(token)
			.with_context(|| format!("token '{}' is not selectable for {}", symbol, validator.direction()))?;
	}

	match (&args.amount, args.max) {
		(Some(_), true) => bail!("--amount and --max are mutually exclusive"),
		(Some(amount), false) => {
			if !validator.set_amount(amount) {
				bail!("amount '{}' is not a plain decimal number", amount);
			}
		}
		(None, true) => validator.set_max().await,
		(None, false) => bail!("one of --amount or --max is required"),
	}

	if let Some(reason) = validator.validation_error() {
		bail!("amount '{}' not transferable: {}", validator.amount(), reason);
	}

	let balances = validator.display_balances().await;
	tracing::info!(hub = %balances.hub, verse = %balances.verse, "current balances");

	let hash = validator.bridge().await?;
	println!("{}", hash);
	Ok(())
}
