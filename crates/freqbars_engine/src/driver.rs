use std::io::{BufRead, Write};

use freqbars_core::{render, DisplayConfig, FrequencyTable};
use freqbars_logging::{freq_debug, freq_info, set_frame};
use thiserror::Error;

use crate::{InputError, LineReader, PaintError, TerminalPainter, TokenExtractor};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Paint(#[from] PaintError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines: u64,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
}

/// Feeds every line of `input` through `extractor` and repaints the chart
/// after each one. Blocks for `config.time_step()` per line.
pub fn run<R, E, W>(
    input: R,
    extractor: &E,
    config: &DisplayConfig,
    painter: &mut TerminalPainter<W>,
) -> Result<RunSummary, RunError>
where
    R: BufRead,
    E: TokenExtractor + ?Sized,
    W: Write,
{
    let mut lines = LineReader::new(input);
    let mut table = FrequencyTable::new();
    let mut frame = 0u64;
    let pace = config.time_step();

    painter.begin()?;
    while let Some(line) = lines.next_line()? {
        frame += 1;
        set_frame(frame);
        let added = extractor.extract(&line, &mut table);
        let chart = render(&table.snapshot(), config);
        freq_debug!(
            "tokens_added={} rows={} total={} distinct={}",
            added,
            chart.rows,
            table.total(),
            table.distinct()
        );
        painter.repaint(&chart, pace)?;
    }
    painter.finish()?;

    let snapshot = table.snapshot();
    let summary = RunSummary {
        lines: frame,
        total_tokens: snapshot.total(),
        distinct_tokens: snapshot.distinct(),
    };
    freq_info!(
        "run complete lines={} tokens={} distinct={}",
        summary.lines,
        summary.total_tokens,
        summary.distinct_tokens
    );
    Ok(summary)
}
