// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, num::NonZeroU16};

/// Read only access to the width of the terminal, in columns. This is read fresh for
/// every editing operation and every log write, so a resize takes effect on the next
/// keystroke or log line.
pub trait TerminalGeometry {
    /// # Errors
    ///
    /// Returns an error if the terminal size can't be determined, or if the terminal
    /// reports a width of zero.
    fn width(&self) -> io::Result<NonZeroU16>;
}

/// Asks the real terminal, via [`crossterm::terminal::size()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermGeometry;

impl TerminalGeometry for CrosstermGeometry {
    fn width(&self) -> io::Result<NonZeroU16> {
        let (cols, _rows) = crossterm::terminal::size()?;
        NonZeroU16::new(cols)
            .ok_or_else(|| io::Error::other("terminal reported a width of 0 columns"))
    }
}

/// A terminal that is always the same width. Useful for tests, and when the output
/// device isn't a real terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGeometry(pub NonZeroU16);

impl FixedGeometry {
    /// A `cols` of zero is raised to one.
    #[must_use]
    pub fn new(cols: u16) -> Self { Self(NonZeroU16::new(cols).unwrap_or(NonZeroU16::MIN)) }
}

impl TerminalGeometry for FixedGeometry {
    fn width(&self) -> io::Result<NonZeroU16> { Ok(self.0) }
}
