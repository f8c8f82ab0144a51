// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # logprompt
//!
//! Read a line of input from the terminal while any number of threads and tasks keep
//! logging to the same terminal. Log lines show up *above* the input line, and the
//! input line (including whatever the user has typed so far, and the caret) is redrawn
//! underneath them. Nothing gets interleaved, and nothing the user typed is lost.
//!
//! The main types are:
//! - [`Editor`] owns the terminal. Call [`Editor::read_line()`] to get a line of input,
//!   and [`Editor::info()`] to log above it.
//! - [`LogHandle`] is a cheap, cloneable handle to the same editor. It can be sent to
//!   other threads and tasks. It also implements [`std::io::Write`] and
//!   [`tracing_subscriber::fmt::MakeWriter`], so it can be used as the output of a
//!   [`tracing`] subscriber (see [`tracing_logging`]).
//! - [`HistoryRing`] remembers committed lines, which the user can scroll through with
//!   the up and down arrow keys.
//!
//! ```no_run
//! use logprompt::{Editor, EditorError, EditorOptions};
//!
//! # async fn run() -> Result<(), EditorError> {
//! let Some(mut editor) = Editor::try_new(EditorOptions::default())? else {
//!     return Ok(()); // Not an interactive terminal.
//! };
//!
//! let log_handle = editor.log_handle();
//! std::thread::spawn(move || {
//!     for count in 0.. {
//!         log_handle.info(format!("tick {count}")).ok();
//!         std::thread::sleep(std::time::Duration::from_secs(1));
//!     }
//! });
//!
//! let line = editor.read_line().await?;
//! editor.info(format!("you typed: {line}"))?;
//! editor.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Multi-line input
//!
//! When the input line is longer than the terminal is wide, it wraps onto multiple rows.
//! All caret arithmetic is done by [`position_for_offset()`] and [`rows_spanned()`] so
//! that editing, history navigation and log output all agree on where the caret is.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod editor_api;
pub mod editor_impl;
pub mod test_fixtures;
pub mod tracing_logging;

// Re-export.
pub use core::*;
pub use editor_api::*;
pub use editor_impl::*;
pub use tracing_logging::*;
