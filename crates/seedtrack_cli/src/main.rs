//! `seedtrack` command-line entry point.
//!
//! # Responsibility
//! - Expose label encode/decode, species resolution and SKU parsing to
//!   operators and smoke checks.
//! - Keep output plain and deterministic; data-quality outcomes (malformed
//!   token, unknown species, non-matching SKU) print a sentinel and exit 0.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use seedtrack_core::{
    core_version, decode, encode, init_logging, load_catalog_file, load_catalog_from_content_root,
    resolve, CatalogIndex, Locale, ProductCode, Resolution, SpeciesId,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seedtrack", version, about = "Seed-batch label codec and species lookup")]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "SEEDTRACK_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "SEEDTRACK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Species catalog JSON file.
    #[arg(long, global = true, env = "SEEDTRACK_CATALOG")]
    catalog: Option<PathBuf>,

    /// Directory searched for `Data/plants-types.json` when `--catalog` is unset.
    #[arg(long, global = true, env = "SEEDTRACK_CONTENT_ROOT", default_value = ".")]
    content_root: PathBuf,

    /// Display locale for species names (FR|EN|DE).
    #[arg(long, global = true, default_value = "EN")]
    locale: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the label token for a sowing date and species id.
    Encode {
        /// Sowing date, YYYY-MM-DD.
        date: NaiveDate,
        species_id: SpeciesId,
    },
    /// Split a scanned token into date and species fragment.
    Decode { token: String },
    /// Resolve a scanned token to a catalog species.
    Resolve { token: String },
    /// Search species by name, Latin name or id text.
    Search { term: String },
    /// Parse a manufacturing product code.
    ParseSku { code: String },
    /// Print the core version.
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&cli.log_level, log_dir).context("failed to initialize logging")?;
    }

    let locale = Locale::from_code(&cli.locale);
    match &cli.command {
        Command::Encode { date, species_id } => {
            let token = encode(*date, species_id).context("cannot encode sowing date")?;
            println!("{token}");
        }
        Command::Decode { token } => match decode(token) {
            Ok(decoded) => println!(
                "date={} fragment={}",
                decoded.sowing_date, decoded.species_fragment
            ),
            Err(err) => println!("malformed: {err}"),
        },
        Command::Resolve { token } => {
            let catalog = load_catalog(&cli)?;
            let resolution = resolve(token, &catalog, locale);
            let display = resolution.display(locale);
            match resolution {
                Resolution::Resolved {
                    species,
                    sowing_date,
                } => println!("{} {} {}", sowing_date, species.id, display.full_name),
                Resolution::NotFound { token } => {
                    println!("not found: {token} ({})", display.full_name)
                }
            }
        }
        Command::Search { term } => {
            let catalog = load_catalog(&cli)?;
            for species in catalog.search(term, locale) {
                println!(
                    "{} {} ({})",
                    species.short_id(),
                    species.name(locale),
                    species.latin_name
                );
            }
        }
        Command::ParseSku { code } => match ProductCode::parse(code) {
            Some(product) => println!(
                "prefix={} kit_type={} quantity={}",
                product.prefix, product.kit_type, product.total_quantity
            ),
            None => println!("no match: {code}"),
        },
        Command::Version => println!("seedtrack_core version={}", core_version()),
    }

    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<CatalogIndex> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog_file(path),
        None => load_catalog_from_content_root(&cli.content_root),
    };
    catalog.context("failed to load species catalog")
}
