// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Wrap-aware caret arithmetic for a single logical line that may span several terminal
//! rows.
//!
//! Positions are always relative to the *anchor*, the terminal row on which the line
//! starts (with the prompt marker at column 0). The physical cursor is only ever moved
//! relative to where it currently is, so nothing here has to ask the terminal where the
//! cursor is.

use std::{io::{self, Write},
          num::NonZeroU16};

use crossterm::{QueueableCommand, cursor};

/// Row and column of the caret. `row` is counted from the anchor row (or includes the
/// anchor row that was passed to [`position_for_offset()`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretPosition {
    pub row: usize,
    pub col: usize,
}

/// Where the caret goes for a line of `line_len` cells, when the caret is `edit_offset`
/// cells before the end of the line.
///
/// `col` is always `< width`.
#[must_use]
pub fn position_for_offset(
    line_len: usize,
    edit_offset: usize,
    width: NonZeroU16,
    anchor_row: usize,
) -> CaretPosition {
    let it = position_for_index(line_len.saturating_sub(edit_offset), width);
    CaretPosition {
        row: anchor_row + it.row,
        col: it.col,
    }
}

/// Where the cell at `index` (counted from the start of the line) lands, relative to the
/// anchor row.
#[must_use]
pub fn position_for_index(index: usize, width: NonZeroU16) -> CaretPosition {
    let width = usize::from(width.get());
    CaretPosition {
        row: index / width,
        col: index % width,
    }
}

/// Number of rows a line of `line_len` cells spans *below* the anchor row. A line that
/// exactly fills its last row counts the empty row after it, since that's where the caret
/// goes when it sits at the end of the line.
#[must_use]
pub fn rows_spanned(line_len: usize, width: NonZeroU16) -> usize {
    line_len / usize::from(width.get())
}

/// Queue relative cursor moves to get from `from` to `to`. Zero count moves are never
/// queued, since `CSI 0 A` is treated as `CSI 1 A` by most terminals.
///
/// # Errors
///
/// Returns an error if the commands can't be queued on `term`.
pub fn queue_caret_move(
    term: &mut dyn Write,
    from: CaretPosition,
    to: CaretPosition,
) -> io::Result<()> {
    match to.row.cmp(&from.row) {
        std::cmp::Ordering::Less => {
            term.queue(cursor::MoveUp(clamp_u16(from.row - to.row)))?;
        }
        std::cmp::Ordering::Greater => {
            term.queue(cursor::MoveDown(clamp_u16(to.row - from.row)))?;
        }
        std::cmp::Ordering::Equal => {}
    }
    if to.col != from.col || to.row != from.row {
        term.queue(cursor::MoveToColumn(clamp_u16(to.col)))?;
    }
    Ok(())
}

fn clamp_u16(it: usize) -> u16 { u16::try_from(it).unwrap_or(u16::MAX) }
