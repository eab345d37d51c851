use std::fmt::Write;

use crate::{DisplayConfig, TableSnapshot};

/// One ranked line of the chart. Derived on every render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow<'a> {
    pub token: &'a str,
    pub count: u64,
    /// Share of the total, in `0.0..=1.0`.
    pub percentage: f64,
    pub bar_len: usize,
}

/// Formatted chart text plus the number of rows it holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chart {
    pub text: String,
    pub rows: usize,
}

/// Ranks the snapshot and scales every kept row against the top one.
///
/// Rows are sorted by descending count; equal counts keep first-occurrence
/// order. The rank-0 bar is always exactly `chart_width` cells.
pub fn chart_rows<'a>(snapshot: &TableSnapshot<'a>, config: &DisplayConfig) -> Vec<ChartRow<'a>> {
    let total = snapshot.total();
    if total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(&'a str, u64)> = snapshot.entries().collect();
    // Stable sort: ties stay in insertion order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(config.row_count(ranked.len()));

    let Some(&(_, top)) = ranked.first() else {
        return Vec::new();
    };

    ranked
        .into_iter()
        .map(|(token, count)| ChartRow {
            token,
            count,
            percentage: count as f64 / total as f64,
            bar_len: scaled_len(config.chart_width, count, top),
        })
        .collect()
}

/// Pure render of a snapshot. An empty table renders to an empty chart.
pub fn render(snapshot: &TableSnapshot<'_>, config: &DisplayConfig) -> Chart {
    let rows = chart_rows(snapshot, config);
    let field = rows
        .iter()
        .map(|row| row.token.chars().count())
        .max()
        .unwrap_or(0);

    let mut text = String::new();
    for row in &rows {
        let _ = write!(text, "{:>field$} ", row.token);
        text.extend(std::iter::repeat(config.bar_char).take(row.bar_len));
        if config.show_percentage {
            let _ = write!(text, " {:.2}%", row.percentage * 100.0);
        }
        text.push('\n');
    }

    Chart {
        text,
        rows: rows.len(),
    }
}

// floor(width * (count/total) / (top/total)) without going through floats, so
// the top row lands on `width` exactly.
fn scaled_len(width: usize, count: u64, top: u64) -> usize {
    let cells = width as u128 * count as u128 / top.max(1) as u128;
    usize::try_from(cells).unwrap_or(width)
}
