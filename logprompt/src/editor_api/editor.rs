// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display,
          io::{self, IsTerminal},
          sync::Arc};

use crate::{CrosstermGeometry, EditorError, EditorOptions, EditorState, HistoryRing,
            InputDevice, KeyAction, KeyClassifier, LineState, LogHandle, OutputDevice,
            SafeEditorState, StdMutex, TerminalGeometry};

/// # Mental model and overview
///
/// This is a replacement for [`std::io::BufRead::read_line`] that lets other threads and
/// tasks keep writing to the terminal while the user is typing. It is async.
///
/// There is one reader, [`Self::read_line()`], which takes `&mut self`. And there can be
/// any number of writers: [`Self::info()`] on the editor itself, or [`LogHandle`]s
/// (from [`Self::log_handle()`]) on any thread or task. Every write erases the input
/// line, prints the log text, and then redraws the input line underneath, with the
/// caret where it was.
///
/// # Inputs and dependency injection
///
/// [`Self::try_new()`] wires up the real terminal: `stdout`, a crossterm
/// [`crossterm::event::EventStream`], and [`CrosstermGeometry`]. For tests, use
/// [`Self::new()`] with an [`OutputDevice`] and an [`InputDevice`] from
/// [`crate::test_fixtures`], and a [`crate::FixedGeometry`].
///
/// # How or when to terminate the session
///
/// Call [`Self::shutdown()`], or just drop the editor. Either way the caret is moved
/// past the input line, and the terminal comes out of raw mode (if [`Self::try_new()`]
/// put it in raw mode).
#[allow(missing_debug_implementations)]
pub struct Editor {
    /// Device used to get the stream of key events from the user.
    pub input_device: InputDevice,

    /// The line, the history, and the output device, behind the one lock.
    pub safe_editor_state: SafeEditorState,

    pub key_classifier: KeyClassifier,

    raw_mode_enabled: bool,
    is_shut_down: bool,
}

impl Editor {
    /// Take over the real terminal. Returns [None] if `stdin` or `stdout` isn't an
    /// interactive terminal, in which case plain line based I/O should be used instead.
    ///
    /// Otherwise raw mode is enabled, and the prompt is printed.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled, or the prompt can't be printed.
    pub fn try_new(options: EditorOptions) -> Result<Option<Editor>, EditorError> {
        if !(io::stdin().is_terminal() && io::stdout().is_terminal()) {
            tracing::debug!("not an interactive terminal, editor not created");
            return Ok(None);
        }

        crossterm::terminal::enable_raw_mode()?;

        let history_capacity = options.history_capacity;
        let mut editor = Editor::new(
            OutputDevice::new_stdout(),
            InputDevice::new_event_stream(),
            CrosstermGeometry,
            options,
        );
        editor.raw_mode_enabled = true;
        editor.initialize(history_capacity)?;

        Ok(Some(editor))
    }

    /// Assemble an editor from its parts. Nothing is printed, and the terminal mode is
    /// left alone. The prompt is printed by [`Self::initialize()`], or by the first call
    /// to [`Self::read_line()`].
    #[must_use]
    pub fn new(
        output_device: OutputDevice,
        input_device: InputDevice,
        geometry: impl TerminalGeometry + Send + 'static,
        options: EditorOptions,
    ) -> Editor {
        let editor_state = EditorState {
            line_state: LineState::new(),
            history: HistoryRing::new(options.history_capacity),
            output_device,
            geometry: Box::new(geometry),
            is_initialized: false,
        };
        Editor {
            input_device,
            safe_editor_state: Arc::new(StdMutex::new(editor_state)),
            key_classifier: options.key_classifier,
            raw_mode_enabled: false,
            is_shut_down: false,
        }
    }

    /// Print the prompt, the first time this is called. Every call replaces the history
    /// with an empty one that holds `history_capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt can't be printed.
    pub fn initialize(&self, history_capacity: usize) -> Result<(), EditorError> {
        let mut editor_state = self.safe_editor_state.lock()?;
        editor_state.history = HistoryRing::new(history_capacity);
        editor_state.initialize_display()?;
        Ok(())
    }

    /// A handle that can be cloned and sent to other threads and tasks, to log above
    /// the input line.
    #[must_use]
    pub fn log_handle(&self) -> LogHandle { LogHandle::new(self.safe_editor_state.clone()) }

    /// Print `data` above the input line. Multi-line `data` prints one row per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn info(&self, data: impl Display) -> Result<(), EditorError> {
        let text = data.to_string();
        self.safe_editor_state.lock()?.info(&text)?;
        Ok(())
    }

    /// Like [`Self::info()`], but [None] prints a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn info_or_blank(&self, data: Option<impl Display>) -> Result<(), EditorError> {
        self.info(data.map(|it| it.to_string()).unwrap_or_default())
    }

    /// Wait for the user to type a line and press `Enter`. Returns the line, without the
    /// prompt marker. Lines that aren't blank are added to the history.
    ///
    /// The lock is only held while a key is being applied, never while waiting for the
    /// next key, so writers are never blocked for long.
    ///
    /// # Errors
    ///
    /// - [`EditorError::Interrupted`] on `Ctrl+C`. The line is discarded, a new prompt is
    ///   printed, and `read_line()` can be called again.
    /// - [`EditorError::EndOfInput`] on `Ctrl+D` when the line is empty.
    /// - [`EditorError::InputClosed`] when the key event stream ends.
    /// - [`EditorError::Io`] if the terminal can't be read from or written to.
    pub async fn read_line(&mut self) -> Result<String, EditorError> {
        self.safe_editor_state.lock()?.initialize_display()?;

        loop {
            let event = match self.input_device.next().await {
                Some(Ok(event)) => event,
                Some(Err(error)) => return Err(error.into()),
                None => return Err(EditorError::InputClosed),
            };

            let action = self.key_classifier.classify(&event);
            if action == KeyAction::Ignore {
                continue;
            }

            let maybe_line = {
                let mut editor_state = self.safe_editor_state.lock()?;
                editor_state.apply(action)
            };

            match maybe_line {
                Ok(Some(line)) => {
                    tracing::debug!(chars = line.chars().count(), "line committed");
                    return Ok(line);
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(%error, "read_line ended");
                    return Err(error);
                }
            }
        }
    }

    /// Move the caret past the input line, and take the terminal out of raw mode if
    /// [`Self::try_new()`] put it in raw mode. Calling this more than once does nothing.
    /// This also runs when the editor is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to, or raw mode can't be
    /// disabled.
    pub fn shutdown(&mut self) -> Result<(), EditorError> {
        if self.is_shut_down {
            return Ok(());
        }
        self.is_shut_down = true;

        let result = self.finish_display();

        if self.raw_mode_enabled {
            self.raw_mode_enabled = false;
            crossterm::terminal::disable_raw_mode()?;
        }

        result
    }

    fn finish_display(&self) -> Result<(), EditorError> {
        let mut editor_state = self.safe_editor_state.lock()?;
        if editor_state.is_initialized {
            editor_state.finish_line()?;
        }
        Ok(())
    }
}

impl Drop for Editor {
    fn drop(&mut self) { self.shutdown().ok(); }
}
