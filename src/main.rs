//! Warborne Gear - command line entry point
//!
//! Computes item and roster gear power, and filters the gear catalog, for
//! scripting against backend dumps.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use warborne_gear::data::{export_default_catalog, load_catalog, load_catalog_or_default, load_player};
use warborne_gear::items::{compute_power, filter_catalog_by, Category, Rarity, Tier, DEFAULT_ITEM_LEVEL};
use warborne_gear::save::load_settings;

/// Gear power and loadout calculator for Warborne Above Ashes
#[derive(Parser, Debug)]
#[command(name = "warborne-gear", version)]
#[command(about = "Gear power and catalog tools for the Warborne guild dashboard")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Power of a single item
    Power {
        /// Tier token, I to XI (unknown tokens count as IV)
        tier: String,
        /// Rarity: common, uncommon, rare, epic or legendary (exact spelling)
        rarity: String,
        /// Item level
        #[arg(long, default_value_t = DEFAULT_ITEM_LEVEL, allow_hyphen_values = true)]
        level: i32,
    },
    /// Total gear power of a player dump (drifter list or player object)
    Total {
        player: PathBuf,
    },
    /// Filter the gear catalog and print the matches as JSON
    Filter {
        /// Catalog file (.json or .ron); defaults to settings, then built-in
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        rarity: String,
        #[arg(long, default_value = "all")]
        stat: String,
        #[arg(long, default_value = "all")]
        weapon_type: String,
    },
    /// Write the built-in catalog as catalog.ron and catalog.json
    ExportDefaults {
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.settings.as_deref());

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str())
    )
    .init();

    log::debug!("Starting warborne-gear v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Power { tier, rarity, level } => {
            if Tier::from_token(&tier).is_none() {
                log::warn!("Unknown tier {:?}, treating it as IV", tier);
            }
            let rarity = Rarity::parse(&rarity);
            println!("{}", compute_power(&tier, &rarity, level));
        }
        Command::Total { player } => {
            let record = load_player(&player)
                .with_context(|| format!("Failed to load player data from {}", player.display()))?;
            let roster = record.into_roster();
            for drifter in roster.assigned() {
                log::info!(
                    "Slot {}: {} ({} items equipped)",
                    drifter.number.unwrap_or_default(),
                    drifter.display_name(),
                    drifter.equipped_count
                );
            }
            println!("{}", roster.total_gear_power());
        }
        Command::Filter { catalog, category, search, rarity, stat, weapon_type } => {
            if Category::parse(&category).is_none() {
                bail!("Unknown category {:?}", category);
            }
            let catalog = match catalog {
                Some(path) => load_catalog(&path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
                None => load_catalog_or_default(settings.catalog_path.as_deref()),
            };
            let matches = filter_catalog_by(catalog.items(), &category, &search, &rarity, &stat, &weapon_type);
            log::info!("{} of {} items match", matches.len(), catalog.len());
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Command::ExportDefaults { dir } => {
            let written = export_default_catalog(&dir)
                .with_context(|| format!("Failed to export catalog to {}", dir.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
