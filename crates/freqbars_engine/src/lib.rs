//! Freqbars engine: token extraction, terminal painting and the line-driven run loop.
mod ansi;
mod driver;
mod extract;
mod input;
mod paint;

pub use driver::{run, RunError, RunSummary};
pub use extract::{
    CharExtractor, KeywordExtractor, Target, TokenExtractor, UnknownTarget, WordExtractor,
    KEYWORDS,
};
pub use input::{InputError, LineReader};
pub use paint::{PaintError, TerminalPainter};
