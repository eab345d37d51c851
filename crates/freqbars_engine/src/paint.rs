use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use freqbars_core::Chart;
use freqbars_logging::{current_frame, freq_debug};
use thiserror::Error;

use crate::ansi;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
}

/// Redraws a variable-height block in place.
///
/// Each frame reserves room below the cursor, saves the cursor at the top of
/// the block, clears everything beneath it, writes the chart, waits, and then
/// restores the cursor so the next frame lands on the same rows. The only
/// state carried between frames is the row count of the last one.
pub struct TerminalPainter<W: Write> {
    out: W,
    last_rows: usize,
}

impl<W: Write> TerminalPainter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_rows: 0 }
    }

    /// Emits a blank line so the first frame does not overwrite the prompt line.
    pub fn begin(&mut self) -> Result<(), PaintError> {
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn repaint(&mut self, chart: &Chart, pace: Duration) -> Result<(), PaintError> {
        // The chart is followed by one extra line break, hence the +1.
        let reserve = chart.rows + 1;
        for _ in 0..reserve {
            self.out.write_all(b"\n")?;
        }
        ansi::cursor_up(&mut self.out, reserve)?;
        ansi::cursor_save(&mut self.out)?;

        if let Err(err) = self.draw(chart) {
            // Best effort: put the cursor back at the top of the block.
            let _ = ansi::cursor_restore(&mut self.out);
            let _ = self.out.flush();
            return Err(err.into());
        }

        if !pace.is_zero() {
            thread::sleep(pace);
        }

        ansi::cursor_restore(&mut self.out)?;
        self.out.flush()?;
        self.last_rows = chart.rows;
        freq_debug!("frame {} painted {} rows", current_frame(), chart.rows);
        Ok(())
    }

    fn draw(&mut self, chart: &Chart) -> io::Result<()> {
        ansi::erase_below(&mut self.out)?;
        self.out.write_all(chart.text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    /// Leaves the cursor below the last chart.
    pub fn finish(&mut self) -> Result<(), PaintError> {
        if self.last_rows > 0 {
            ansi::cursor_down(&mut self.out, self.last_rows)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn last_rows(&self) -> usize {
        self.last_rows
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
