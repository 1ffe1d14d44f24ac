use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use serde_json::Value;
use steam_pricer::{fetch_all, fetch_sync, App, Currency, PriceQuery, SteamMarket};

#[derive(Parser)]
#[command(about = "Look up Steam community market prices")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a single item
    Get {
        /// Full market name, e.g. "Dreams & Nightmares Case"
        item: String,
        /// App name (cs2, tf2, dota_2, rust, pubg) or numeric app id
        #[arg(long)]
        app: String,
        /// Currency name (usd, eur, ...) or numeric Steam currency code
        #[arg(long, default_value = "usd")]
        currency: String,
    },
    /// Price several items concurrently
    Batch {
        /// JSON array of {"item_name", "app_id", "currency"} objects,
        /// a few sample items are priced when omitted
        file: Option<PathBuf>,
    },
}

fn app_code(arg: &str) -> Result<u32, String> {
    arg.parse()
        .ok()
        .or_else(|| arg.trim().parse::<App>().ok().map(App::code))
        .ok_or_else(|| format!("Unknown app {:?}", arg))
}

fn currency_code(arg: &str) -> Result<u32, String> {
    arg.parse()
        .ok()
        .or_else(|| arg.trim().parse::<Currency>().ok().map(Currency::code))
        .ok_or_else(|| format!("Unknown currency {:?}", arg))
}

fn sample_queries() -> Result<Vec<PriceQuery>, Box<dyn Error>> {
    let samples = [
        ("Dreams & Nightmares Case", App::Cs2, Currency::Usd),
        ("Mann Co. Supply Crate Key", App::TeamFortress2, Currency::Eur),
        ("Doomsday Hoodie", App::Pubg, Currency::Gbp),
        ("AWP | Neo-Noir (Factory New)", App::Cs2, Currency::Usd),
        ("Snowcamo Jacket", App::Rust, Currency::Chf),
    ];

    let mut queries = Vec::with_capacity(samples.len());
    for (name, app, currency) in samples {
        queries.push(PriceQuery::new(name, app.code(), currency.code())?);
    }

    Ok(queries)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    match Cli::parse().command {
        Command::Get { item, app, currency } => {
            let app = app_code(&app)?;
            let currency = currency_code(&currency)?;

            let result =
                tokio::task::spawn_blocking(move || fetch_sync(&item, app, Some(currency))).await??;
            println!("{}", result);
        }
        Command::Batch { file } => {
            let queries = match file {
                Some(path) => {
                    let contents = tokio::fs::read_to_string(&path).await?;
                    let requests: Vec<Value> = serde_json::from_str(&contents)?;
                    info!("Read {} requests from {}", requests.len(), path.display());

                    requests
                        .iter()
                        .map(PriceQuery::from_json)
                        .collect::<Result<Vec<_>, _>>()?
                }
                None => sample_queries()?,
            };

            let market = SteamMarket::new()?;
            for result in fetch_all(&market, &queries).await {
                println!("{}", result);
            }
        }
    }

    Ok(())
}
