//! vision-cli: command-line front end for True Vision burn rewards.
//!
//! Quotes per-edition rewards and burns from sale facts given on the command
//! line or in a batch file, and inspects the effective pricing configuration.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use vision_core::address::{AddressKind, TezosAddress};
use vision_core::config::PricingConfig;
use vision_core::constants::{
    BURN_ADDRESS, CREATOR_ADDRESS, REWARD_TOKEN_CONTRACT, REWARD_TOKEN_ID, REWARD_TOKEN_SYMBOL,
};
use vision_core::traits::RewardCalculator;
use vision_core::types::{tez_from_mutez, NftHolding, PricedNft, PricingFactors, TokenRef};
use vision_pricing::{
    format_reward, price_holdings, pricing_explanation, quote_burn, PricingEngine,
    PricingIndicator,
};

mod batch;

use batch::BatchFile;

/// True Vision burn reward calculator.
#[derive(Parser)]
#[command(name = "vision-cli")]
#[command(version, about = "Burn NFT editions, receive True Vision.")]
struct Cli {
    /// Pricing config file (TOML, JSON or YAML). `VISION_*` env vars override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the reward for one edition.
    Quote(QuoteArgs),
    /// Quote the reward for burning several editions.
    Burn(BurnArgs),
    /// Price every holding in a batch file.
    Batch(BatchArgs),
    /// Print the effective pricing configuration.
    Config,
    /// Validate and describe a Tezos address.
    Address(AddressArgs),
}

#[derive(Args)]
struct SaleArgs {
    /// Last sale price in tez.
    #[arg(short, long, required_unless_present = "price_mutez", conflicts_with = "price_mutez")]
    price: Option<f64>,

    /// Last sale price in mutez, as reported by indexers.
    #[arg(long)]
    price_mutez: Option<u64>,

    /// Last sale timestamp (RFC 3339, e.g. 2025-06-01T00:00:00Z).
    #[arg(short, long)]
    sale_date: DateTime<Utc>,

    /// Total editions of the token.
    #[arg(short, long)]
    editions: u64,

    /// Price as of this instant instead of now (RFC 3339).
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct QuoteArgs {
    #[command(flatten)]
    sale: SaleArgs,
}

#[derive(Args)]
struct BurnArgs {
    #[command(flatten)]
    sale: SaleArgs,

    /// Editions held by the wallet.
    #[arg(short, long)]
    balance: u64,

    /// Editions to burn (1..=balance).
    #[arg(short, long)]
    quantity: u64,

    /// FA2 contract of the burned token (KT1...).
    #[arg(long)]
    contract: TezosAddress,

    /// Token id within the contract.
    #[arg(long, default_value = "0")]
    token_id: String,
}

#[derive(Args)]
struct BatchArgs {
    /// JSON file with holdings, sales and supplies.
    #[arg(short, long)]
    input: PathBuf,

    /// Price as of this instant instead of now (RFC 3339).
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AddressArgs {
    /// Address to check (tz1, tz2, tz3 or KT1).
    address: String,
}

#[derive(Serialize)]
struct QuoteOutput {
    factors: PricingFactors,
    explanation: String,
    indicator: PricingIndicator,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Quote(args) => quote(load_engine(cli.config)?, args),
        Commands::Burn(args) => burn(load_engine(cli.config)?, args),
        Commands::Batch(args) => batch(load_engine(cli.config)?, args),
        Commands::Config => show_config(load_engine(cli.config)?),
        Commands::Address(args) => address(args),
    }
}

fn load_engine(path: Option<PathBuf>) -> Result<PricingEngine> {
    let config = PricingConfig::load(path.as_deref()).context("Failed to load pricing config")?;
    let engine = PricingEngine::with_config(config)?;
    info!(
        base = config.base_reward_percentage,
        decay = config.monthly_decay_percentage,
        threshold = config.edition_penalty_threshold,
        minimum = config.minimum_reward,
        "Pricing config loaded"
    );
    Ok(engine)
}

impl SaleArgs {
    fn price_tez(&self) -> Result<f64> {
        match (self.price, self.price_mutez) {
            (_, Some(mutez)) => Ok(tez_from_mutez(mutez)),
            (Some(tez), None) => Ok(tez),
            (None, None) => bail!("one of --price or --price-mutez is required"),
        }
    }
}

fn price_sale(engine: &PricingEngine, sale: &SaleArgs) -> Result<PricingFactors> {
    let now = sale.now.unwrap_or_else(Utc::now);
    engine
        .compute_reward(sale.price_tez()?, sale.sale_date, sale.editions, now)
        .context("Failed to compute reward")
}

/// Token being burned; only originated (`KT1`) contracts hold FA2 tokens.
fn burn_token(contract: &TezosAddress, token_id: &str) -> Result<TokenRef> {
    if contract.kind() != AddressKind::Originated {
        bail!("--contract must be a KT1 contract address, got {}", contract.display_with_kind());
    }
    Ok(TokenRef::new(contract.as_str(), token_id))
}

fn quote(engine: PricingEngine, args: QuoteArgs) -> Result<()> {
    let factors = price_sale(&engine, &args.sale)?;
    let indicator = PricingIndicator::new(
        factors.months_since_last_sale,
        args.sale.editions,
        engine.config(),
    );

    if args.sale.json {
        let out = QuoteOutput {
            factors,
            explanation: pricing_explanation(&factors),
            indicator,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_factors(&factors);
    println!("  {indicator}");
    Ok(())
}

fn burn(engine: PricingEngine, args: BurnArgs) -> Result<()> {
    let token = burn_token(&args.contract, &args.token_id).context("Invalid burn token")?;
    let factors = price_sale(&engine, &args.sale)?;
    let now = args.sale.now.unwrap_or_else(Utc::now);
    let priced = PricedNft {
        holding: NftHolding {
            token,
            name: String::new(),
            balance: args.balance,
        },
        last_sale_price_tez: args.sale.price_tez()?,
        last_sale_date: args.sale.sale_date,
        total_editions: args.sale.editions,
        factors: Some(factors),
        reward_per_edition: factors.final_reward,
        priced_at: now,
        fallback: false,
    };
    let quote = quote_burn(&priced, args.quantity).context("Invalid burn")?;

    if args.sale.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    print_factors(&factors);
    println!("Burn {} edition(s) of {} to {BURN_ADDRESS}", quote.quantity, quote.token);
    println!(
        "  Total reward: {} {REWARD_TOKEN_SYMBOL} (transfer {} {REWARD_TOKEN_SYMBOL})",
        format_reward(quote.total_reward),
        quote.token_amount
    );
    println!("  Reward token: {REWARD_TOKEN_CONTRACT} id {REWARD_TOKEN_ID}");
    Ok(())
}

fn batch(engine: PricingEngine, args: BatchArgs) -> Result<()> {
    let (holdings, source) = BatchFile::load(&args.input)?.into_parts();
    let now = args.now.unwrap_or_else(Utc::now);
    let priced = price_holdings(&engine, &source, &holdings, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&priced)?);
        return Ok(());
    }

    println!("Priced {} holding(s) as of {}", priced.len(), now.to_rfc3339());
    for p in &priced {
        let note = match &p.factors {
            Some(f) => pricing_explanation(f),
            None => "no sale data, minimum reward".to_string(),
        };
        println!(
            "  {:<32} x{:<4} {:>10} {REWARD_TOKEN_SYMBOL}/ed  ({note})",
            p.holding.name,
            p.holding.balance,
            format_reward(p.reward_per_edition)
        );
    }
    Ok(())
}

fn show_config(engine: PricingEngine) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(engine.config())?);
    Ok(())
}

fn address(args: AddressArgs) -> Result<()> {
    let addr = TezosAddress::parse(&args.address)
        .with_context(|| format!("Invalid Tezos address: {}", args.address))?;
    println!("{}{}", addr.display_with_kind(), address_role(&addr));
    Ok(())
}

fn address_role(addr: &TezosAddress) -> String {
    match addr.as_str() {
        BURN_ADDRESS => " [burn address]".to_string(),
        CREATOR_ADDRESS => " [eligible creator]".to_string(),
        REWARD_TOKEN_CONTRACT => format!(" [{REWARD_TOKEN_SYMBOL} reward token]"),
        _ => String::new(),
    }
}

fn print_factors(f: &PricingFactors) {
    println!("Reward per edition: {} {REWARD_TOKEN_SYMBOL}", format_reward(f.final_reward));
    println!("  Base reward:      {}", format_reward(f.base_reward));
    println!(
        "  Time decay:       x{:.4} ({} month(s))",
        f.time_decay_factor, f.months_since_last_sale
    );
    println!(
        "  Edition penalty:  x{:.4} ({} step(s))",
        f.edition_penalty_factor, f.edition_penalty_steps
    );
    println!("  {}", pricing_explanation(f));
}
