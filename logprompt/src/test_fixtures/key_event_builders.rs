// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shorthand for building the key events that a terminal in raw mode would send.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState,
                       KeyModifiers};

use crate::CrosstermEventResult;

/// A key press with no modifiers.
#[must_use]
pub fn key(code: KeyCode) -> CrosstermEventResult { key_with(code, KeyModifiers::NONE) }

/// A key press with `modifiers` held down.
#[must_use]
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent::new(code, modifiers)))
}

/// `Ctrl` plus a character, eg: `ctrl('c')`.
#[must_use]
pub fn ctrl(ch: char) -> CrosstermEventResult { key_with(KeyCode::Char(ch), KeyModifiers::CONTROL) }

/// A key release. Terminals that support the kitty keyboard protocol send these.
#[must_use]
pub fn release(code: KeyCode) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent::new_with_kind_and_state(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    )))
}

/// One key press per character. Upper case characters carry the `SHIFT` modifier, the
/// way crossterm reports them.
#[must_use]
pub fn typed(text: &str) -> Vec<CrosstermEventResult> {
    text.chars()
        .map(|ch| {
            let modifiers = if ch.is_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            key_with(KeyCode::Char(ch), modifiers)
        })
        .collect()
}
