//! Headless simulation runner
//!
//! Steps a population frame by frame without a window, logging progress and
//! optionally writing a RON summary when the run ends.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crittevolution_core::{FrameStats, Population, SimConfig};
use serde::{Deserialize, Serialize};

/// How long to run and what to report
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Stop after this many frames. Zero runs until extinction.
    pub frames: u64,
    /// Log a stats line every this many frames. Zero disables periodic logging.
    pub log_every: u64,
    /// Where to write the RON summary, if anywhere
    pub report: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 6000,
            log_every: 600,
            report: None,
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: u64,
    pub config: SimConfig,
    /// Frames simulated
    pub frames: u64,
    /// True if the run ended because every critter died
    pub extinct: bool,
    pub peak_population: usize,
    pub total_births: usize,
    pub total_deaths: usize,
    /// Stats of the final frame
    pub last: FrameStats,
}

/// Run a simulation until the frame budget is spent or the population dies out
pub fn run(config: SimConfig, seed: u64, options: &RunOptions) -> Result<RunReport> {
    let mut population = Population::new(config.clone(), seed);

    let mut report = RunReport {
        seed,
        config,
        frames: 0,
        extinct: population.is_extinct(),
        peak_population: population.count(),
        total_births: 0,
        total_deaths: 0,
        last: FrameStats::default(),
    };

    while !population.is_extinct() && (options.frames == 0 || report.frames < options.frames) {
        let stats = population.step();

        report.frames = stats.frame;
        report.peak_population = report.peak_population.max(stats.population);
        report.total_births += stats.births;
        report.total_deaths += stats.deaths;

        if options.log_every > 0 && stats.frame % options.log_every == 0 {
            log::info!("{}", stats);
        }

        report.last = stats;
    }

    report.extinct = population.is_extinct();
    if report.extinct {
        log::info!("Population died out after {} frames", report.frames);
    } else {
        log::info!(
            "Stopped after {} frames with {} critters",
            report.frames,
            population.count()
        );
    }

    if let Some(path) = &options.report {
        write_report(&report, path)?;
        log::info!("Wrote run report to {:?}", path);
    }

    Ok(report)
}

/// Serialize a run report as pretty RON
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {:?}", parent))?;
    }

    let text = ron::ser::to_string_pretty(report, ron::ser::PrettyConfig::default())
        .context("Failed to serialize run report")?;
    fs::write(path, text).with_context(|| format!("Failed to write run report: {:?}", path))?;
    Ok(())
}
