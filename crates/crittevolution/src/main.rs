use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use crittevolution::{CONFIG_FILE, RunOptions, load_config};
use crittevolution_core::SimConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file with `key = value` lines (age, health, foods, foodpower, critters)
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Seed for the random stream (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate, 0 runs until the population dies out
    #[arg(long, default_value = "6000")]
    frames: u64,

    /// Log population stats every N frames
    #[arg(long, default_value = "600")]
    log_every: u64,

    /// Write a RON summary of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Override the age limit from the config file
    #[arg(long)]
    age_limit: Option<u32>,

    /// Override the minimum mating health from the config file
    #[arg(long)]
    mate_health: Option<u32>,

    /// Override the number of foods from the config file
    #[arg(long)]
    foods: Option<u32>,

    /// Override the food power from the config file
    #[arg(long)]
    food_power: Option<u32>,

    /// Override the initial number of critters from the config file
    #[arg(long)]
    critters: Option<u32>,
}

impl Args {
    fn apply_overrides(&self, config: &mut SimConfig) {
        let overrides = [
            (self.age_limit, &mut config.age_limit),
            (self.mate_health, &mut config.mate_health),
            (self.foods, &mut config.foods),
            (self.food_power, &mut config.food_power),
            (self.critters, &mut config.critters),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = load_config(&args.config);
    args.apply_overrides(&mut config);
    log::info!("Using: {}", config);

    let seed = args.seed.unwrap_or_else(time_seed);

    log::info!("Starting Crittevolution");

    let options = RunOptions {
        frames: args.frames,
        log_every: args.log_every,
        report: args.report,
    };
    crittevolution::run(config, seed, &options)?;

    Ok(())
}

/// Seed derived from the wall clock
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
