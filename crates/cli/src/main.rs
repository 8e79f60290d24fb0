// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod store;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use fixture_gen::ScheduleOutcome;
use fixture_gen_api::{
    DEFAULT_EXPORT_FILE_NAME, DEFAULT_PITCHES, DEFAULT_WEEKS, FixtureForm, RawInputs,
    load_raw_inputs, render_schedule, render_unscheduled, save_raw_inputs, write_schedule_csv,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use store::JsonFileStore;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// League fixture generator - builds a round-robin schedule across pitches and kick-off times
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated team names. Defaults to the last saved list.
    #[arg(short, long)]
    teams: Option<String>,

    /// Comma-separated kick-off times on a 24-hour clock, e.g. "18:00,19:00".
    /// Defaults to the last saved list.
    #[arg(long)]
    times: Option<String>,

    /// Number of pitches available at every kick-off time
    #[arg(short, long, default_value_t = DEFAULT_PITCHES, allow_negative_numbers = true)]
    pitches: i64,

    /// Date of the first week (YYYY-MM-DD)
    #[arg(short, long)]
    start_date: String,

    /// Number of weeks to schedule
    #[arg(short, long, default_value_t = DEFAULT_WEEKS, allow_negative_numbers = true)]
    weeks: i64,

    /// Also write the fixtures as CSV, to PATH or fixtures.csv
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE_NAME
    )]
    export: Option<PathBuf>,

    /// Print the schedule as JSON instead of text
    #[arg(long)]
    json: bool,

    /// File that remembers the team and time lists between runs
    #[arg(long, default_value = "fixtures-store.json")]
    store: PathBuf,

    /// Fail if any match does not fit into the requested weeks
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Initialize tracing; RUST_LOG overrides the verbosity flags
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => (),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Builds the form from arguments and saved input, generates the schedule
/// and writes it to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let mut store: JsonFileStore = JsonFileStore::open(&args.store)?;
    let saved: RawInputs = load_raw_inputs(&store)?;

    let form: FixtureForm = FixtureForm {
        raw_teams: args.teams.clone().unwrap_or_else(|| saved.teams.clone()),
        raw_times: args.times.clone().unwrap_or_else(|| saved.times.clone()),
        pitches: args.pitches,
        start_date: args.start_date.clone(),
        weeks: args.weeks,
    };

    let inputs: RawInputs = form.raw_inputs();
    if inputs != saved {
        save_raw_inputs(&mut store, &inputs)?;
        info!("Saved team and time lists to {}", store.path().display());
    }

    if !form.is_complete() {
        return Err(eyre!(
            "teams and times are required and pitches and weeks must be positive (saved lists: {})",
            store.path().display()
        ));
    }

    let outcome: ScheduleOutcome = form.generate()?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &outcome)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_schedule(&outcome.schedule)?)?;
        write!(out, "{}", render_unscheduled(&outcome.unscheduled))?;
    }

    if let Some(path) = &args.export {
        let file: File = File::create(path)
            .wrap_err_with(|| format!("failed to create {}", path.display()))?;
        write_schedule_csv(&outcome.schedule, BufWriter::new(file))?;
        info!("Exported fixtures to {}", path.display());
    }

    if let Some(err) = outcome.capacity_exceeded() {
        if args.strict {
            return Err(err.into());
        }
        warn!("{err}; increase the week count, time slots or pitches to fit every match");
    }

    Ok(())
}
