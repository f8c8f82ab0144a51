// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          num::NonZeroU16,
          sync::Arc};

use crate::{EditorError, HistoryRing, KeyAction, LineState, OutputDevice, StdMutex,
            TerminalGeometry};

/// Everything that the reader ([`crate::Editor::read_line()`]) and the writers
/// ([`crate::Editor::info()`], [`crate::LogHandle`]) share. There's exactly one lock,
/// and every write to the terminal happens while holding it, so log output and line
/// editing never interleave.
#[allow(missing_debug_implementations)]
pub struct EditorState {
    pub line_state: LineState,
    pub history: HistoryRing,
    pub output_device: OutputDevice,
    pub geometry: Box<dyn TerminalGeometry + Send>,
    /// Set once the first prompt has been printed. Until then, log output is written
    /// as is, with no input line to redraw under it.
    pub is_initialized: bool,
}

pub type SafeEditorState = Arc<StdMutex<EditorState>>;

impl EditorState {
    fn width(&self) -> io::Result<NonZeroU16> { self.geometry.width() }

    /// Print the prompt (and whatever has been typed already) for the first time.
    /// Does nothing after the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn initialize_display(&mut self) -> io::Result<()> {
        if self.is_initialized {
            return Ok(());
        }
        let width = self.width()?;
        self.is_initialized = true;
        let term = self.output_device.term();
        self.line_state.render(term, width)?;
        term.flush()
    }

    /// Print `text` above the input line, then redraw the input line (with the caret
    /// where it was) underneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to, or its width can't be read.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        let width = self.width()?;
        let term = self.output_device.term();

        if self.is_initialized {
            self.line_state.erase(term, width)?;
        }

        if text.is_empty() {
            write!(term, "\r\n")?;
        }
        for segment in text.lines() {
            write!(term, "{segment}\r\n")?;
        }

        if self.is_initialized {
            self.line_state.render(term, width)?;
        }

        term.flush()
    }

    /// Apply one key action to the line and the history.
    ///
    /// Returns `Some(line)` when the line was committed.
    ///
    /// # Errors
    ///
    /// - [`EditorError::Interrupted`] and [`EditorError::EndOfInput`] when the user asked
    ///   for them.
    /// - [`EditorError::Io`] if the terminal can't be written to.
    pub fn apply(&mut self, action: KeyAction) -> Result<Option<String>, EditorError> {
        let width = self.width()?;
        let term = self.output_device.term();
        let line_state = &mut self.line_state;
        let history = &mut self.history;

        let mut content_changed = false;

        match action {
            KeyAction::MoveLeft => line_state.move_left(term, width)?,
            KeyAction::MoveRight => line_state.move_right(term, width)?,
            KeyAction::Home => line_state.move_home(term, width)?,
            KeyAction::End => line_state.move_end(term, width)?,
            KeyAction::MoveUp => {
                let entry = history.browse_older().to_string();
                line_state.replace_content(&entry, term, width)?;
            }
            KeyAction::MoveDown => {
                let entry = history.browse_newer().to_string();
                line_state.replace_content(&entry, term, width)?;
            }
            KeyAction::Insert(ch) => {
                line_state.insert(ch, term, width)?;
                content_changed = true;
            }
            KeyAction::Backspace => {
                line_state.backspace(term, width)?;
                content_changed = true;
            }
            KeyAction::Delete => {
                line_state.delete(term, width)?;
                content_changed = true;
            }
            KeyAction::EndOfInput => {
                if line_state.content().is_empty() {
                    return Err(EditorError::EndOfInput);
                }
                if cfg!(feature = "emacs") {
                    line_state.delete(term, width)?;
                    content_changed = true;
                }
            }
            KeyAction::Commit => {
                let line = line_state.content();
                finish_line(line_state, term, width)?;
                if !line.trim().is_empty() {
                    history.push(line.as_str());
                }
                history.reset_browse();
                history.hold("");
                line_state.reset();
                line_state.render(term, width)?;
                term.flush()?;
                return Ok(Some(line));
            }
            KeyAction::Interrupt => {
                finish_line(line_state, term, width)?;
                history.reset_browse();
                history.hold("");
                line_state.reset();
                line_state.render(term, width)?;
                term.flush()?;
                return Err(EditorError::Interrupted);
            }
            KeyAction::Ignore => return Ok(None),
        }

        if content_changed {
            history.reset_browse();
            history.hold(line_state.content());
        }

        term.flush()?;
        Ok(None)
    }

    /// Move the caret past the end of the line, and onto a fresh row.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to, or its width can't be read.
    pub fn finish_line(&mut self) -> io::Result<()> {
        let width = self.width()?;
        let term = self.output_device.term();
        finish_line(&mut self.line_state, term, width)?;
        term.flush()
    }
}

/// A line that exactly fills its last row already has the caret on a fresh row.
fn finish_line(
    line_state: &mut LineState,
    term: &mut dyn Write,
    width: NonZeroU16,
) -> io::Result<()> {
    line_state.move_end(term, width)?;
    if line_state.caret_position(width).col != 0 {
        write!(term, "\r\n")?;
    }
    Ok(())
}
