// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display,
          io::{self, Write}};

use crate::{EditorError, SafeEditorState};

/// Logs above the input line of the [`crate::Editor`] it came from. Get one from
/// [`crate::Editor::log_handle()`].
///
/// - It is cheap to clone, and can be sent to other threads and tasks.
/// - Each clone gets its own, empty, line buffer for the [`Write`] impl. Bytes are held
///   until a `\n` arrives, then every complete line is printed in one go. Whatever is
///   left over is printed on [`Write::flush()`], or when the handle is dropped.
/// - It implements [`tracing_subscriber::fmt::MakeWriter`], so it can be the writer for
///   a `tracing` fmt layer. See [`crate::DisplayPreference::LogHandle`].
pub struct LogHandle {
    safe_editor_state: SafeEditorState,
    buffer: Vec<u8>,
}

impl std::fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHandle")
            .field("buffered_bytes", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl Clone for LogHandle {
    fn clone(&self) -> Self {
        Self {
            safe_editor_state: self.safe_editor_state.clone(),
            buffer: Vec::new(),
        }
    }
}

impl LogHandle {
    #[must_use]
    pub fn new(safe_editor_state: SafeEditorState) -> Self {
        Self {
            safe_editor_state,
            buffer: Vec::new(),
        }
    }

    /// Same as [`crate::Editor::info()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn info(&self, data: impl Display) -> Result<(), EditorError> {
        let text = data.to_string();
        self.safe_editor_state.lock()?.info(&text)?;
        Ok(())
    }

    /// Same as [`crate::Editor::info_or_blank()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn info_or_blank(&self, data: Option<impl Display>) -> Result<(), EditorError> {
        self.info(data.map(|it| it.to_string()).unwrap_or_default())
    }
}

impl Write for LogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        if let Some(last_newline) = self.buffer.iter().rposition(|it| *it == b'\n') {
            let complete_lines: Vec<u8> = self.buffer.drain(..=last_newline).collect();
            let text = String::from_utf8_lossy(&complete_lines[..last_newline]);
            self.info(text)?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            self.info(String::from_utf8_lossy(&rest))?;
        }
        Ok(())
    }
}

impl Drop for LogHandle {
    fn drop(&mut self) { self.flush().ok(); }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogHandle {
    type Writer = LogHandle;

    fn make_writer(&'a self) -> Self::Writer { self.clone() }
}
