//! Freqbars core: frequency tally and pure chart rendering.
mod chart;
mod config;
mod table;

pub use chart::{chart_rows, render, Chart, ChartRow};
pub use config::{
    DisplayConfig, DEFAULT_BAR_CHAR, DEFAULT_CHART_WIDTH, DEFAULT_LIMIT, DEFAULT_TIME_STEP_MILLIS,
};
pub use table::{FrequencyTable, TableSnapshot};
