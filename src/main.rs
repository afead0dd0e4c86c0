// ctyresolve - resolve callsigns against a JSON prefix/country table
//
// Example:
//   ctyresolve --prefixes prefixes.json --countries countries.json --wpx K2ND/4 DL1XYZ/PA

use clap::Parser;
use std::path::{Path, PathBuf};

use ctyresolve::{ContestConfig, CountryList, PrefixList, ResolutionContext, Resolver, TableError};

/// Resolve amateur-radio callsigns to DXCC country, zones and continent
#[derive(Parser, Debug)]
#[command(name = "ctyresolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON array of prefix entries, in table order
    #[arg(long)]
    prefixes: PathBuf,

    /// JSON array of country records
    #[arg(long)]
    countries: PathBuf,

    /// JSON contest config ({"wpx": .., "pfx_mult": .., "itu_mult": ..})
    #[arg(long)]
    config: Option<PathBuf>,

    /// WPX contest (prefixes are multipliers)
    #[arg(long)]
    wpx: bool,

    /// Prefix-multiplier contest
    #[arg(long)]
    pfx_mult: bool,

    /// Export ITU zones instead of CQ zones
    #[arg(long)]
    itu_mult: bool,

    /// Callsigns to resolve
    #[arg(required = true)]
    calls: Vec<String>,
}

fn read_json(path: &Path) -> Result<String, TableError> {
    log::debug!("Reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

fn load_config(cli: &Cli) -> Result<ContestConfig, TableError> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&read_json(path)?)?,
        None => ContestConfig::default(),
    };
    // Flags only switch modes on
    config.wpx |= cli.wpx;
    config.pfx_mult |= cli.pfx_mult;
    config.itu_mult |= cli.itu_mult;
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), TableError> {
    let prefixes = PrefixList::from_json(&read_json(&cli.prefixes)?)?;
    let countries = CountryList::from_json(&read_json(&cli.countries)?)?;
    let config = load_config(cli)?;
    log::info!(
        "Loaded {} prefixes, {} countries ({:?})",
        prefixes.entries().len(),
        countries.len(),
        config
    );

    let resolver = Resolver::new(&prefixes, &countries, config);
    let mut ctx = ResolutionContext::new();
    let mut wpx_calls = |call: &str| log::info!("Prefix extraction for {}", call);

    for call in &cli.calls {
        resolver.resolve_and_publish(&mut ctx, &mut wpx_calls, call);
        let output = serde_json::json!({
            "lookup": resolver.lookup(call),
            "published": ctx,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("ctyresolve=info"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
