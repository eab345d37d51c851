//! ANSI control sequences used by the painter.
//!
//! Only these five sequences are ever emitted. They are written byte for byte
//! so terminals that only know the SCO save/restore pair keep working.

use std::io::{self, Write};

/// Save cursor position (SCO).
#[inline]
pub fn cursor_save<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[s")
}

/// Restore cursor position (SCO).
#[inline]
pub fn cursor_restore<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[u")
}

/// Erase from cursor to end of screen.
#[inline]
pub fn erase_below<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[0J")
}

/// Move cursor up by n rows.
#[inline]
pub fn cursor_up<W: Write>(w: &mut W, n: usize) -> io::Result<()> {
    write!(w, "\x1b[{n}A")
}

/// Move cursor down by n rows.
#[inline]
pub fn cursor_down<W: Write>(w: &mut W, n: usize) -> io::Result<()> {
    write!(w, "\x1b[{n}B")
}
