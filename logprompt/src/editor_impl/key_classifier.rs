// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    /// Older history entry.
    MoveUp,
    /// Newer history entry.
    MoveDown,
    Delete,
    Backspace,
    Home,
    End,
    Commit,
    Insert(char),
    /// `Ctrl+C`.
    Interrupt,
    /// `Ctrl+D`.
    EndOfInput,
    Ignore,
}

/// Keys that never produce a character, and that the editor has no use for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter,
         strum_macros::Display)]
pub enum KeyCategory {
    /// `F1` to `F24`.
    Function,
    /// Play, pause, volume, etc.
    Media,
    /// A modifier key pressed on its own (needs the kitty keyboard protocol).
    Modifier,
    /// Caps lock, num lock, scroll lock.
    Lock,
    /// Esc, Tab, Page Up / Down, Insert, Print Screen, Pause, Menu, etc.
    NonGlyph,
}

impl KeyCategory {
    #[must_use]
    pub fn of(code: &KeyCode) -> Option<KeyCategory> {
        match code {
            KeyCode::F(_) => Some(KeyCategory::Function),
            KeyCode::Media(_) => Some(KeyCategory::Media),
            KeyCode::Modifier(_) => Some(KeyCategory::Modifier),
            KeyCode::CapsLock | KeyCode::NumLock | KeyCode::ScrollLock => {
                Some(KeyCategory::Lock)
            }
            KeyCode::Esc
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Insert
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Null => Some(KeyCategory::NonGlyph),
            _ => None,
        }
    }
}

/// Characters that some keyboard layouts can only type with `AltGr` (or `Ctrl+Alt`, or
/// `Option` on macOS). Terminals report these with whatever modifiers were held, so they
/// are inserted whatever the modifiers say.
pub const DEFAULT_LAYOUT_PUNCTUATION: &[char] = &[
    '?', '/', ';', ':', ',', '.', '@', '"', '|', '`', '~', '{', '}', '[', ']', '\'', '\\',
];

/// Maps terminal events to [`KeyAction`]s.
///
/// Order of precedence:
/// 1. Anything that isn't a key press (or repeat) is ignored.
/// 2. Editing and navigation keys, and `Enter`.
/// 3. `Ctrl+C`, `Ctrl+D`, and with the `emacs` feature `Ctrl+A` and `Ctrl+E`.
/// 4. Keys in a [`KeyCategory`] are ignored.
/// 5. Layout punctuation (see [`DEFAULT_LAYOUT_PUNCTUATION`]) is inserted.
/// 6. Any other character is inserted, unless it's a control character, or was typed
///    with only `Ctrl` or only `Alt` held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyClassifier {
    layout_punctuation: Vec<char>,
}

impl Default for KeyClassifier {
    fn default() -> Self {
        Self::with_layout_punctuation(DEFAULT_LAYOUT_PUNCTUATION.iter().copied())
    }
}

impl KeyClassifier {
    #[must_use]
    pub fn with_layout_punctuation(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            layout_punctuation: chars.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn layout_punctuation(&self) -> &[char] { &self.layout_punctuation }

    #[must_use]
    pub fn classify(&self, event: &Event) -> KeyAction {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return KeyAction::Ignore;
        };

        if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return KeyAction::Ignore;
        }

        match code {
            KeyCode::Left => return KeyAction::MoveLeft,
            KeyCode::Right => return KeyAction::MoveRight,
            KeyCode::Up => return KeyAction::MoveUp,
            KeyCode::Down => return KeyAction::MoveDown,
            KeyCode::Home => return KeyAction::Home,
            KeyCode::End => return KeyAction::End,
            KeyCode::Delete => return KeyAction::Delete,
            KeyCode::Backspace => return KeyAction::Backspace,
            KeyCode::Enter | KeyCode::Char('\r') => return KeyAction::Commit,
            _ => {}
        }

        if let Some(action) = classify_control_chord(code, *modifiers) {
            return action;
        }

        if let Some(category) = KeyCategory::of(code) {
            tracing::trace!(%category, ?code, "ignoring key");
            return KeyAction::Ignore;
        }

        let KeyCode::Char(ch) = *code else {
            return KeyAction::Ignore;
        };

        if self.layout_punctuation.contains(&ch) {
            return KeyAction::Insert(ch);
        }

        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let alt = modifiers.contains(KeyModifiers::ALT);
        if ch.is_control() || (ctrl ^ alt) {
            return KeyAction::Ignore;
        }

        KeyAction::Insert(ch)
    }
}

fn classify_control_chord(code: &KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    if !modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let KeyCode::Char(ch) = code else {
        return None;
    };
    match ch.to_ascii_lowercase() {
        'c' => Some(KeyAction::Interrupt),
        'd' => Some(KeyAction::EndOfInput),
        #[cfg(feature = "emacs")]
        'a' => Some(KeyAction::Home),
        #[cfg(feature = "emacs")]
        'e' => Some(KeyAction::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{key, key_with, release};
    use crossterm::event::{MediaKeyCode, ModifierKeyCode};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    fn classify(event: crate::CrosstermEventResult) -> KeyAction {
        KeyClassifier::default().classify(&event.unwrap())
    }

    #[test_case(KeyCode::Left, KeyAction::MoveLeft)]
    #[test_case(KeyCode::Right, KeyAction::MoveRight)]
    #[test_case(KeyCode::Up, KeyAction::MoveUp)]
    #[test_case(KeyCode::Down, KeyAction::MoveDown)]
    #[test_case(KeyCode::Home, KeyAction::Home)]
    #[test_case(KeyCode::End, KeyAction::End)]
    #[test_case(KeyCode::Delete, KeyAction::Delete)]
    #[test_case(KeyCode::Backspace, KeyAction::Backspace)]
    #[test_case(KeyCode::Enter, KeyAction::Commit)]
    #[test_case(KeyCode::Char('\r'), KeyAction::Commit; "carriage return")]
    #[test_case(KeyCode::Char('\n'), KeyAction::Ignore; "line feed is not a commit")]
    #[test_case(KeyCode::Char('x'), KeyAction::Insert('x'))]
    #[test_case(KeyCode::Char(' '), KeyAction::Insert(' '); "space")]
    #[test_case(KeyCode::Char('é'), KeyAction::Insert('é'); "non ascii letter")]
    fn test_plain_keys(code: KeyCode, expected: KeyAction) {
        assert_eq!(classify(key(code)), expected);
    }

    #[test_case(KeyCode::F(1))]
    #[test_case(KeyCode::F(24))]
    #[test_case(KeyCode::Media(MediaKeyCode::Play))]
    #[test_case(KeyCode::Modifier(ModifierKeyCode::LeftShift))]
    #[test_case(KeyCode::CapsLock)]
    #[test_case(KeyCode::Esc)]
    #[test_case(KeyCode::Tab)]
    #[test_case(KeyCode::PageUp)]
    #[test_case(KeyCode::PageDown)]
    #[test_case(KeyCode::Insert)]
    #[test_case(KeyCode::Null)]
    fn test_denylisted_keys_are_ignored(code: KeyCode) {
        assert!(KeyCategory::of(&code).is_some());
        assert_eq!(classify(key(code)), KeyAction::Ignore);
    }

    #[test]
    fn test_every_category_has_a_name() {
        let names = KeyCategory::iter().map(|it| it.to_string()).collect::<Vec<_>>();
        assert_eq!(names, ["Function", "Media", "Modifier", "Lock", "NonGlyph"]);
    }

    #[test_case('c', KeyAction::Interrupt)]
    #[test_case('d', KeyAction::EndOfInput)]
    #[test_case('C', KeyAction::Interrupt; "shifted ctrl c")]
    #[test_case('x', KeyAction::Ignore; "other ctrl chord")]
    fn test_ctrl_chords(ch: char, expected: KeyAction) {
        assert_eq!(
            classify(key_with(KeyCode::Char(ch), KeyModifiers::CONTROL)),
            expected
        );
    }

    #[cfg(feature = "emacs")]
    #[test]
    fn test_emacs_chords() {
        assert_eq!(
            classify(key_with(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            KeyAction::Home
        );
        assert_eq!(
            classify(key_with(KeyCode::Char('e'), KeyModifiers::CONTROL)),
            KeyAction::End
        );
    }

    #[test]
    fn test_alt_only_chord_is_ignored() {
        assert_eq!(
            classify(key_with(KeyCode::Char('f'), KeyModifiers::ALT)),
            KeyAction::Ignore
        );
    }

    #[test]
    fn test_altgr_char_is_inserted() {
        // Windows reports AltGr as Ctrl+Alt.
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert_eq!(
            classify(key_with(KeyCode::Char('€'), altgr)),
            KeyAction::Insert('€')
        );
    }

    #[test_case('@'; "at sign")]
    #[test_case('\\'; "backslash")]
    #[test_case('{'; "open brace")]
    #[test_case('|'; "pipe")]
    fn test_layout_punctuation_ignores_modifiers(ch: char) {
        assert_eq!(
            classify(key_with(KeyCode::Char(ch), KeyModifiers::ALT)),
            KeyAction::Insert(ch)
        );
    }

    #[test]
    fn test_custom_layout_punctuation() {
        let classifier = KeyClassifier::with_layout_punctuation(['#']);
        let event = key_with(KeyCode::Char('#'), KeyModifiers::ALT).unwrap();
        assert_eq!(classifier.classify(&event), KeyAction::Insert('#'));

        let event = key_with(KeyCode::Char('@'), KeyModifiers::ALT).unwrap();
        assert_eq!(classifier.classify(&event), KeyAction::Ignore);
    }

    #[test]
    fn test_control_character_is_ignored() {
        assert_eq!(classify(key(KeyCode::Char('\u{7}'))), KeyAction::Ignore);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(classify(release(KeyCode::Char('a'))), KeyAction::Ignore);
        assert_eq!(classify(Ok(Event::FocusGained)), KeyAction::Ignore);
        assert_eq!(classify(Ok(Event::Resize(80, 24))), KeyAction::Ignore);
        assert_eq!(
            classify(Ok(Event::Paste("pasted".to_string()))),
            KeyAction::Ignore
        );
    }
}
