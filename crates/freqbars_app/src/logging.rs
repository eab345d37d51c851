//! Logger initialization for the freqbars binary.
//!
//! Stdout carries the animated chart, so log output only ever goes to stderr
//! or to a file.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination {
    /// Warnings and errors to stderr.
    Terminal,
    /// Everything at the chosen level to a file.
    File(PathBuf),
}

impl LogDestination {
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Terminal,
        }
    }
}

/// Initialize the global logger.
///
/// If the log file cannot be created a warning is printed and the stderr
/// logger is installed instead.
pub fn initialize(destination: LogDestination, verbose: bool) {
    let config = build_config();
    let stderr_logger = |level: LevelFilter| -> Box<dyn SharedLogger> {
        TermLogger::new(level, config.clone(), TerminalMode::Stderr, ColorChoice::Auto)
    };

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Terminal => {
            let level = if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            };
            vec![stderr_logger(level)]
        }
        LogDestination::File(path) => {
            let level = if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            };
            match create_file_logger(&path, level, config.clone()) {
                Some(file_logger) => vec![file_logger],
                None => vec![stderr_logger(LevelFilter::Warn)],
            }
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
