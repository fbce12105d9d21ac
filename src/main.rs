use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luckchance::config::Config;
use luckchance::spin::Spinner;
use luckchance::table::{
    multiplier_sweep, multiplier_table, player_luck_sweep, player_luck_table, simulation_table,
};

#[derive(Parser)]
#[command(name = "luckchance")]
#[command(about = "Rarity tier chances under a luck multiplier", long_about = None)]
struct Cli {
    /// JSON file overriding the catalogue, sweeps or luck policy
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the sweeps as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Also simulate this many spins and compare against the expected chances
    #[arg(short, long)]
    spins: Option<u64>,

    /// Luck multiplier used for --spins
    #[arg(short, long, default_value_t = 1.0, requires = "spins")]
    multiplier: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luckchance=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let multiplier_rows = multiplier_sweep(&config.catalogue, &config.multipliers)?;
    let player_rows = player_luck_sweep(&config.catalogue, &config.policy, &config.player_luck)?;

    if cli.json {
        let output = serde_json::json!({
            "multipliers": multiplier_rows,
            "player_luck": player_rows,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", multiplier_table(&multiplier_rows));
        println!();
        println!(
            "--- Player luck (crate bonus {:.1}, {} luck per 1%) ---",
            config.policy.crate_bonus, config.policy.luck_per_percent
        );
        println!("{}", player_luck_table(&player_rows));
    }

    if let Some(spins) = cli.spins {
        let spinner = Spinner::new(&config.catalogue, cli.multiplier)?;
        let simulated = spinner.simulate(&mut rand::rng(), spins);
        let analytic = config.catalogue.distribution(cli.multiplier)?;

        println!();
        println!("{}", simulation_table(&analytic, &simulated, spins));
    }

    Ok(())
}
