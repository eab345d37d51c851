#![deny(missing_docs)]
//! Shared logging utilities for the freqbars workspace.
//!
//! This crate provides the `freq_*` logging macros used by the library crates,
//! a per-thread frame counter the driver loop keeps current, and a minimal
//! test initializer for the global logger.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the frame currently being rendered.
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Sets the frame number for the current thread.
/// The driver calls this once per input line, before rendering.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// Retrieves the frame number for the current thread.
/// Returns 0 before the first frame.
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! freq_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! freq_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! freq_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! freq_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! freq_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Initializes a stderr logger for use in tests.
///
/// Output goes to stderr so it never mixes with captured chart bytes.
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counter_is_per_thread() {
        set_frame(7);
        assert_eq!(current_frame(), 7);

        let other = std::thread::spawn(current_frame).join().unwrap();
        assert_eq!(other, 0);
        assert_eq!(current_frame(), 7);
    }
}
