// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Errors returned by [`crate::Editor`] and [`crate::LogHandle`].
///
/// [`EditorError::Interrupted`] and [`EditorError::EndOfInput`] aren't failures as such,
/// they tell the caller what the user asked for, and the editor is still usable after
/// them.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EditorError {
    /// Writing to the terminal, or asking it for its size, failed.
    #[error(transparent)]
    #[diagnostic(code(logprompt::io))]
    Io(#[from] io::Error),

    /// The stream of key events ended.
    #[error("input stream closed")]
    #[diagnostic(code(logprompt::input_closed))]
    InputClosed,

    /// The user pressed `Ctrl+C`. The line they were editing was discarded.
    #[error("interrupted")]
    #[diagnostic(code(logprompt::interrupted))]
    Interrupted,

    /// The user pressed `Ctrl+D` on an empty line.
    #[error("end of input")]
    #[diagnostic(code(logprompt::end_of_input))]
    EndOfInput,

    /// A thread panicked while it was holding the editor lock.
    #[error("editor lock poisoned")]
    #[diagnostic(
        code(logprompt::lock_poisoned),
        help("A thread panicked while writing to the terminal. Create a new Editor.")
    )]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for EditorError {
    fn from(_: std::sync::PoisonError<T>) -> Self { EditorError::LockPoisoned }
}

/// So that [`crate::LogHandle`] can implement [`std::io::Write`].
impl From<EditorError> for io::Error {
    fn from(error: EditorError) -> Self {
        match error {
            EditorError::Io(it) => it,
            other => io::Error::other(other),
        }
    }
}
