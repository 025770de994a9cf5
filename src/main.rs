use clap::Parser;
use coinmint::application::mint::MintRegistry;
use coinmint::domain::currency::Currency;
use coinmint::domain::ports::{SharedRandomizer, SharedSerialIssuer};
use coinmint::domain::visitor::{CoinVisitor, NullCounter, UsdCounter};
use coinmint::infrastructure::random::{SeededRandomizer, ThreadRandomizer};
use coinmint::infrastructure::serial::{RemoteSerialIssuer, SequentialSerialIssuer};
use coinmint::interfaces::console::DenominationPrompt;
use coinmint::interfaces::purse::CoinPurse;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Currency to mint: USD, GBP, CAD or EUR. Falls back to USD.
    currency: Option<String>,

    /// Seed for the quality-gate randomizer; a run with the same seed
    /// reproduces the same gate outcomes.
    #[arg(long)]
    seed: Option<u64>,

    /// Address of the remote serial issuance service (host:port). If not
    /// provided, serials come from a local counter.
    #[arg(long)]
    serial_endpoint: Option<String>,

    /// Rounds of extra coins to top the purse up with before reporting.
    #[arg(long, default_value_t = 3)]
    rounds: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let randomizer: SharedRandomizer = match cli.seed {
        Some(seed) => Arc::new(SeededRandomizer::new(seed)),
        None => Arc::new(ThreadRandomizer),
    };
    let serials: SharedSerialIssuer = match cli.serial_endpoint {
        Some(endpoint) => Arc::new(RemoteSerialIssuer::new(endpoint)),
        None => Arc::new(SequentialSerialIssuer::new()),
    };
    let registry = MintRegistry::new(randomizer, serials);

    let mint = match cli.currency.as_deref().map(str::parse::<Currency>) {
        Some(Ok(currency)) => registry.get(currency),
        other => {
            if let Some(Err(err)) = other {
                println!("{err}.");
            }
            println!("Possible coin mints include: USD, GBP, CAD, EUR.");
            registry.get(Currency::Usd)
        }
    };
    println!("Using {}", mint.name());
    println!();

    // Mint the coins the user asks for and pocket them, sentinels included.
    let mut purse = CoinPurse::new();
    let stdin = io::stdin();
    let mut prompt = DenominationPrompt::new(stdin.lock(), io::stdout());
    while let Some(value) = prompt.next_request().into_diagnostic()? {
        let coin = mint.make_coin(value).await;
        println!("{coin}");
        purse.add(coin);
    }

    purse.fill(mint, cli.rounds).await;
    println!();
    println!("Coin Purse contains {} coins.", purse.len());

    let mut usd_counter = UsdCounter::default();
    let mut null_counter = NullCounter::default();
    for coin in &purse {
        coin.accept(&mut usd_counter);
        coin.accept(&mut null_counter);
    }
    println!("{}", usd_counter.report());
    println!("{}", null_counter.report());

    Ok(())
}
