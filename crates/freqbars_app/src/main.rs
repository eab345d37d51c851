mod cli;
mod logging;
mod settings;

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use freqbars_engine::{run, TerminalPainter};
use freqbars_logging::{freq_error, freq_info};

use cli::Cli;
use logging::LogDestination;
use settings::{FileSettings, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(LogDestination::from_option(cli.log_file.as_deref()), cli.verbose);

    match run_app(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.log_file.is_some() {
                freq_error!("run failed: {err:#}");
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_app(cli: &Cli) -> anyhow::Result<()> {
    let file_settings = match &cli.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let settings = Settings::resolve(cli, &file_settings)?;
    freq_info!(
        "target={} limit={} width={} step={}ms file={:?}",
        settings.target,
        settings.display.limit,
        settings.display.chart_width,
        settings.display.time_step_millis,
        cli.file
    );

    let file = File::open(&cli.file)
        .with_context(|| format!("could not open {}", cli.file.display()))?;

    let stdout = io::stdout();
    let mut painter = TerminalPainter::new(stdout.lock());
    run(
        BufReader::new(file),
        &settings.target,
        &settings.display,
        &mut painter,
    )?;
    Ok(())
}
