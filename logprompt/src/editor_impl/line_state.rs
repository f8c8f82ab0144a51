// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          num::NonZeroU16};

use crossterm::{QueueableCommand, cursor,
                terminal::{Clear, ClearType::FromCursorDown}};

use crate::{CaretPosition, position_for_index, position_for_offset, queue_caret_move};

/// Printed at the start of every input line. It is part of [`LineState::text()`], but
/// the caret can never move into it, and it is never part of [`LineState::content()`].
pub const PROMPT_MARKER: &str = "> ";

/// [`PROMPT_MARKER`] is ASCII, so its length in bytes is its length in cells.
const PROMPT_LEN: usize = PROMPT_MARKER.len();

/// The line that is currently being edited, and where the caret is in it.
///
/// The caret is tracked as `edit_offset`: the number of cells between the caret and the
/// end of the line. `0` is the end of the line, and `len() - 2` is just after the
/// prompt marker.
///
/// Every editing method takes the terminal (`term`) and its current `width`, and moves
/// the physical cursor along with the logical caret. Between calls, the physical cursor
/// is always at [`Self::caret_position()`], counted from the row the line starts on
/// (the *anchor*). Nothing is flushed here, that is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    text: Vec<char>,
    edit_offset: usize,
}

impl Default for LineState {
    fn default() -> Self {
        Self {
            text: PROMPT_MARKER.chars().collect(),
            edit_offset: 0,
        }
    }
}

impl LineState {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// The whole line, prompt marker included.
    #[must_use]
    pub fn text(&self) -> String { self.text.iter().collect() }

    /// What the user typed, without the prompt marker.
    #[must_use]
    pub fn content(&self) -> String { self.text[PROMPT_LEN..].iter().collect() }

    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    /// Never true, the prompt marker is always there.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    #[must_use]
    pub fn edit_offset(&self) -> usize { self.edit_offset }

    /// Index into [`Self::text()`] of the cell the caret is on.
    #[must_use]
    pub fn caret_index(&self) -> usize { self.len() - self.edit_offset }

    #[must_use]
    pub fn caret_position(&self, width: NonZeroU16) -> CaretPosition {
        position_for_offset(self.len(), self.edit_offset, width, 0)
    }

    /// Back to just the prompt marker, with the caret at the end. Writes nothing.
    pub fn reset(&mut self) { *self = Self::default(); }
}

/// Caret movement.
impl LineState {
    fn move_caret_to_index(
        &mut self,
        index: usize,
        term: &mut dyn Write,
        width: NonZeroU16,
    ) -> io::Result<()> {
        let from = self.caret_position(width);
        self.edit_offset = self.len() - index;
        queue_caret_move(term, from, self.caret_position(width))
    }

    /// # Errors
    ///
    /// Returns an error if the cursor can't be moved on `term`.
    pub fn move_left(&mut self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        if self.edit_offset + 1 > self.len() - PROMPT_LEN {
            return Ok(());
        }
        self.move_caret_to_index(self.caret_index() - 1, term, width)
    }

    /// # Errors
    ///
    /// Returns an error if the cursor can't be moved on `term`.
    pub fn move_right(&mut self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        if self.edit_offset == 0 {
            return Ok(());
        }
        self.move_caret_to_index(self.caret_index() + 1, term, width)
    }

    /// # Errors
    ///
    /// Returns an error if the cursor can't be moved on `term`.
    pub fn move_home(&mut self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        self.move_caret_to_index(PROMPT_LEN, term, width)
    }

    /// # Errors
    ///
    /// Returns an error if the cursor can't be moved on `term`.
    pub fn move_end(&mut self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        self.move_caret_to_index(self.len(), term, width)
    }
}

/// Editing.
impl LineState {
    /// Write `text[from_index..]`, plus a blank cell if `blank_trailing_cell`, starting
    /// at the physical cursor (which must be at `from_index`). Returns where the physical
    /// cursor ends up.
    ///
    /// When the write ends exactly on the last column, terminals park the cursor on that
    /// column with a pending wrap. A `\r\n` takes it to the start of the next row, which
    /// is where [`position_for_index()`] says it is.
    fn write_from(
        &self,
        from_index: usize,
        blank_trailing_cell: bool,
        term: &mut dyn Write,
        width: NonZeroU16,
    ) -> io::Result<CaretPosition> {
        let mut it: String = self.text[from_index..].iter().collect();
        if blank_trailing_cell {
            it.push(' ');
        }
        let end_index = from_index + it.chars().count();
        if !it.is_empty() {
            write!(term, "{it}")?;
            if end_index.is_multiple_of(usize::from(width.get())) {
                write!(term, "\r\n")?;
            }
        }
        Ok(position_for_index(end_index, width))
    }

    /// Insert `ch` at the caret, and leave the caret just after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be redrawn on `term`.
    pub fn insert(
        &mut self,
        ch: char,
        term: &mut dyn Write,
        width: NonZeroU16,
    ) -> io::Result<()> {
        let index = self.caret_index();
        self.text.insert(index, ch);
        let end = self.write_from(index, false, term, width)?;
        queue_caret_move(term, end, position_for_index(index + 1, width))
    }

    /// Remove the character before the caret. Does nothing right after the prompt
    /// marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be redrawn on `term`.
    pub fn backspace(&mut self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        if self.caret_index() <= PROMPT_LEN {
            return Ok(());
        }
        let index = self.caret_index() - 1;
        queue_caret_move(
            term,
            self.caret_position(width),
            position_for_index(index, width),
        )?;
        self.text.remove(index);
        let end = self.write_from(index, true, term, width)?;
        queue_caret_move(term, end, position_for_index(index, width))
    }

    /// Remove the character under the caret. Does nothing at the end of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line can't be redrawn on `term`.
    pub fn delete(&mut self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        if self.edit_offset == 0 {
            return Ok(());
        }
        let index = self.caret_index();
        self.text.remove(index);
        self.edit_offset -= 1;
        let end = self.write_from(index, true, term, width)?;
        queue_caret_move(term, end, position_for_index(index, width))
    }
}

/// Whole line rendering.
impl LineState {
    /// Move to column 0 of the anchor row, and clear everything from there down. The
    /// physical cursor is left at the anchor, and the line state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `term` can't be written to.
    pub fn erase(&self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        let row = self.caret_position(width).row;
        if row != 0 {
            term.queue(cursor::MoveUp(u16::try_from(row).unwrap_or(u16::MAX)))?;
        }
        term.queue(cursor::MoveToColumn(0))?;
        term.queue(Clear(FromCursorDown))?;
        Ok(())
    }

    /// Write the whole line, starting at the physical cursor (which must be at column 0
    /// of the anchor row), then put the caret where it belongs.
    ///
    /// # Errors
    ///
    /// Returns an error if `term` can't be written to.
    pub fn render(&self, term: &mut dyn Write, width: NonZeroU16) -> io::Result<()> {
        let end = self.write_from(0, false, term, width)?;
        queue_caret_move(term, end, self.caret_position(width))
    }

    /// Swap what the user typed for `content` (eg: a history entry), with the caret at
    /// the end.
    ///
    /// # Errors
    ///
    /// Returns an error if `term` can't be written to.
    pub fn replace_content(
        &mut self,
        content: &str,
        term: &mut dyn Write,
        width: NonZeroU16,
    ) -> io::Result<()> {
        self.erase(term, width)?;
        self.text = PROMPT_MARKER.chars().chain(content.chars()).collect();
        self.edit_offset = 0;
        self.render(term, width)
    }
}
