use std::path::PathBuf;

use clap::Parser;
use freqbars_engine::Target;

/// Animated bar chart of the most frequent characters, words or keywords in a file
#[derive(Debug, Parser)]
#[command(name = "freqbars", version)]
pub struct Cli {
    /// Text file to read line by line
    pub file: PathBuf,

    /// What to count: chars (ch), words (w) or keywords (kw, go) [default: chars]
    #[arg(long, value_parser = parse_target)]
    pub target: Option<Target>,

    /// Rows to display; zero or negative shows every token [default: 25]
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Character used to draw bars [default: █]
    #[arg(long = "char", value_name = "CHAR")]
    pub bar_char: Option<String>,

    /// Width in cells of the longest bar [default: 36]
    #[arg(long)]
    pub width: Option<usize>,

    /// Append each token's share of the total; `--show-percentage=false` turns it off
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub show_percentage: Option<bool>,

    /// Delay between frames in milliseconds [default: 30]
    #[arg(long, value_name = "MS")]
    pub step: Option<u64>,

    /// RON file with default display settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a log to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log debug detail for every frame
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_target(value: &str) -> Result<Target, String> {
    value.parse().map_err(|err: freqbars_engine::UnknownTarget| err.to_string())
}
