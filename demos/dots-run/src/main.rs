//! dots-run: headless batch runner for the dots population simulator.
//!
//! Reads a twelve-value settings file, scatters the initial population,
//! and steps the world until the tick budget runs out or every dot has
//! died.  Prints the run statistics at the end; optionally writes CSV
//! output and a JSON summary.
//!
//! ```text
//! RUST_LOG=dots_sim=debug dots-run --settings dots.conf --ticks 5000 --output out/
//! ```

mod settings;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dots_agent::DotView;
use dots_core::{DotConf, DotParams, Tick};
use dots_output::{CsvWriter, SimOutputObserver};
use dots_sim::{SimBuilder, SimObserver, SimStats, Simulator, TickSummary};

use settings::Settings;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "dots-run", version, about = "Run the dots population simulator headless")]
struct Cli {
    /// Settings file with the twelve run parameters.
    #[arg(long, default_value = "dots.conf")]
    settings: PathBuf,

    /// Maximum number of ticks to simulate.
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,

    /// Directory for `dot_snapshots.csv` and `tick_summaries.csv`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Ticks between population snapshots (0 disables them).
    #[arg(long, default_value_t = 100)]
    snapshot_every: u64,

    /// Override the seed from the settings file.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final statistics as JSON to this path.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs progress and forwards to the CSV observer when output is enabled.
struct RunObserver {
    output:        Option<SimOutputObserver<CsvWriter>>,
    report_every:  u64,
    summary_rows:  usize,
    snapshot_rows: usize,
}

impl SimObserver for RunObserver {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        if summary.tick.is_on_interval(self.report_every) {
            info!(
                tick = summary.tick.0,
                living = summary.living,
                deaths = summary.total_deaths,
                "progress"
            );
        }
        if let Some(out) = &mut self.output {
            self.summary_rows += 1;
            out.on_tick_end(summary);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, dots: &[DotView]) {
        if let Some(out) = &mut self.output {
            self.snapshot_rows += dots.len();
            out.on_snapshot(tick, dots);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &SimStats) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick, stats);
        }
    }
}

// ── JSON summary ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunSummary<'a> {
    seed:              u64,
    width:             u32,
    height:            u32,
    ticks:             u64,
    extinct:           bool,
    living:            usize,
    births:            u64,
    deaths:            u64,
    average_death_age: f64,
    max_age:           u64,
    max_population:    usize,
    params:            &'a DotParams,
    survivors:         Vec<DotView>,
}

impl<'a> RunSummary<'a> {
    fn new(sim: &'a Simulator) -> Self {
        let stats = sim.stats();
        Self {
            seed:              sim.seed(),
            width:             sim.width(),
            height:            sim.height(),
            ticks:             sim.tick().0,
            extinct:           sim.is_extinct(),
            living:            sim.living_count(),
            births:            stats.births,
            deaths:            stats.deaths,
            average_death_age: stats.average_death_age(),
            max_age:           stats.max_age,
            max_population:    stats.max_population,
            params:            sim.config().params(),
            survivors:         sim.snapshot(),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    // A second initialisation (tests, embedding) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // 1. Settings.
    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("cannot read settings from {}", cli.settings.display()))?;
    let seed = cli.seed.unwrap_or(settings.seed);
    info!(
        path = %cli.settings.display(),
        seed,
        width = settings.width,
        height = settings.height,
        initial_dots = settings.initial_dots,
        "settings loaded"
    );

    // 2. Simulator.
    let conf = DotConf::new(settings.params.clone()).context("invalid dot parameters")?;
    let mut sim = SimBuilder::new(seed, conf, settings.width, settings.height)
        .initial_dots(settings.initial_dots)
        .snapshot_interval(cli.snapshot_every)
        .build()?;

    // 3. Output.
    let output = match &cli.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("cannot create output in {}", dir.display()))?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };
    let mut obs = RunObserver {
        output,
        report_every: (cli.ticks / 10).max(1),
        summary_rows: 0,
        snapshot_rows: 0,
    };

    // 4. Run until the budget is spent or nobody is left.
    let t0 = Instant::now();
    while sim.tick().0 < cli.ticks && !sim.is_extinct() {
        sim.run_ticks(1, &mut obs);
    }
    obs.on_sim_end(sim.tick(), sim.stats());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.as_mut().and_then(SimOutputObserver::take_error) {
        warn!(error = %e, "output error");
    }

    // 5. Report.
    println!();
    if sim.is_extinct() {
        println!("- ALL DOTS ARE DEAD -");
    } else {
        println!("- SIMULATION FINISHED -");
    }
    println!("Tick:                       {}", sim.tick().0);
    println!("Live dots:                  {}", sim.living_count());
    println!("Dead dots so far:           {}", sim.deaths());
    println!("Births so far:              {}", sim.stats().births);
    println!("Average age at death:       {:.2}", sim.average_death_age());
    println!("Maximum dot age:            {}", sim.max_age());
    println!("Maximum live dots:          {}", sim.max_population());
    println!("Wall time:                  {:.3} s", elapsed.as_secs_f64());

    if let Some(oldest) = sim
        .dots()
        .filter(|d| d.status().is_alive())
        .max_by_key(|d| (d.age(), std::cmp::Reverse(d.id())))
    {
        println!();
        println!("{oldest}");
    }

    if let Some(dir) = &cli.output {
        println!();
        println!("Output written to {}", dir.display());
        println!("  dot_snapshots.csv  : {} rows", obs.snapshot_rows);
        println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    }

    // 6. JSON summary.
    if let Some(path) = &cli.summary_json {
        let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &RunSummary::new(&sim))?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}
