//! Display settings: built-in defaults, an optional RON file, then CLI flags.
//!
//! Everything is validated here, once, before the engine starts.

use std::fs;
use std::path::{Path, PathBuf};

use freqbars_core::{
    DisplayConfig, DEFAULT_BAR_CHAR, DEFAULT_CHART_WIDTH, DEFAULT_LIMIT, DEFAULT_TIME_STEP_MILLIS,
};
use freqbars_engine::{Target, UnknownTarget};
use freqbars_logging::freq_info;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bar character must be exactly one printable character, got {0:?}")]
    BarChar(String),
    #[error("chart width must be greater than zero")]
    ZeroWidth,
    #[error(transparent)]
    Target(#[from] UnknownTarget),
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Contents of the optional RON config file. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub target: Option<String>,
    pub limit: Option<i64>,
    pub bar_char: Option<String>,
    pub width: Option<usize>,
    pub show_percentage: Option<bool>,
    pub step: Option<u64>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        freq_info!("Loaded display settings from {:?}", path);
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: Target,
    pub display: DisplayConfig,
}

impl Settings {
    /// CLI flags win over the file, the file wins over built-in defaults.
    pub fn resolve(cli: &Cli, file: &FileSettings) -> Result<Self, ConfigError> {
        let target = match (cli.target, file.target.as_deref()) {
            (Some(target), _) => target,
            (None, Some(name)) => name.parse()?,
            (None, None) => Target::default(),
        };

        let bar_char = match cli.bar_char.as_deref().or(file.bar_char.as_deref()) {
            Some(raw) => parse_bar_char(raw)?,
            None => DEFAULT_BAR_CHAR,
        };

        let chart_width = cli.width.or(file.width).unwrap_or(DEFAULT_CHART_WIDTH);
        if chart_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        let display = DisplayConfig {
            limit: cli.limit.or(file.limit).unwrap_or(DEFAULT_LIMIT),
            bar_char,
            chart_width,
            show_percentage: cli.show_percentage.or(file.show_percentage).unwrap_or(false),
            time_step_millis: cli.step.or(file.step).unwrap_or(DEFAULT_TIME_STEP_MILLIS),
        };

        Ok(Self { target, display })
    }
}

fn parse_bar_char(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() && !c.is_whitespace() => Ok(c),
        _ => Err(ConfigError::BarChar(raw.to_string())),
    }
}
