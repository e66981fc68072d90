use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rotation_check::{check, Scenario};
use serde_json::Value;
use tactics::{
    visualize_tactics, ActionTag, AssetsConfig, FormationCatalog, GridConfig, SubPosition,
};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// JSON file with the tactics to check, instead of a formation
    #[arg(short, long, conflicts_with = "formation")]
    tactics: Option<PathBuf>,

    /// Formation code to look up in the catalog
    #[arg(short, long, default_value = "A02")]
    formation: String,

    /// Formation catalog JSON file. The built-in formations are used if omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Raw grid column to check
    #[arg(short, long, default_value_t = 6, allow_negative_numbers = true)]
    slot: i32,

    /// Action tag to look for
    #[arg(long, default_value = "attack")]
    target: String,

    /// Sub-position of each zone to look at
    #[arg(long, default_value = "down")]
    sub_position: String,

    /// Width of the pitch grid in columns
    #[arg(long, default_value_t = tactics::DEFAULT_GRID_COLUMNS)]
    columns: u8,

    /// Also draw the original and rotated tactics
    #[arg(short, long, default_value_t = false)]
    visualize: bool,

    /// Asset config JSON file, for printing the icon URL of the target
    #[arg(long)]
    assets: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn load_tactics(args: &Args) -> anyhow::Result<Value> {
    if let Some(path) = &args.tactics {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read tactics '{}'", path.display()))?;
        return serde_json::from_str(&contents)
            .with_context(|| format!("'{}' is not valid JSON", path.display()));
    }

    let catalog = match &args.catalog {
        Some(path) => FormationCatalog::load(path)?,
        None => FormationCatalog::builtin(),
    };
    let Some(formation) = catalog.get(&args.formation) else {
        anyhow::bail!(
            "Unknown formation '{}', known formations: {}",
            args.formation,
            catalog.codes().collect::<Vec<_>>().join(", ")
        );
    };
    info!(code = args.formation, formation_name = formation.name, "Checking formation");
    Ok(serde_json::to_value(&formation.tactics)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let value = load_tactics(&args)?;
    let scenario = Scenario {
        slot: args.slot,
        target: ActionTag::from(args.target.as_str()),
        sub_position: SubPosition::from(args.sub_position.as_str()),
        grid: GridConfig::new(args.columns)?,
    };
    debug!(?scenario);

    let report = check(&value, &scenario)?;
    print!("{}", report);

    if args.visualize {
        println!("\nOriginal:\n{}", visualize_tactics(&report.original));
        println!("\nRotated:\n{}", visualize_tactics(&report.rotated));
    }

    if let Some(path) = &args.assets {
        let assets = AssetsConfig::load(path)?;
        match assets.icon_url(&scenario.target) {
            Some(url) => println!("Icon for \"{}\": {}", scenario.target, url),
            None => println!("Icon for \"{}\": none", scenario.target),
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
