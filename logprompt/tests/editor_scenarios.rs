// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive an [`Editor`] end to end through its public API, with a mock terminal.

use std::{num::NonZeroU16, time::Duration};

use crossterm::event::KeyCode;
use logprompt::{CaretPosition, CrosstermEventResult, Editor, EditorError, EditorOptions,
                FixedGeometry, InputDevice, OutputDevice, rows_spanned,
                test_fixtures::{InputDeviceExtMock, OutputDeviceExt, StdoutMock, key,
                                typed}};
use pretty_assertions::assert_eq;

fn new_editor(
    events: Vec<CrosstermEventResult>,
    cols: u16,
    options: EditorOptions,
) -> (Editor, StdoutMock) {
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let editor = Editor::new(
        output_device,
        InputDevice::new_mock(events),
        FixedGeometry::new(cols),
        options,
    );
    (editor, stdout_mock)
}

fn keys(codes: &[KeyCode]) -> Vec<CrosstermEventResult> {
    codes.iter().map(|code| key(*code)).collect()
}

#[tokio::test]
async fn type_then_home_delete_commit() {
    let mut events = typed("hi");
    events.extend(keys(&[KeyCode::Home, KeyCode::Delete, KeyCode::Enter]));
    let (mut editor, stdout_mock) = new_editor(events, 80, EditorOptions::default());

    assert_eq!(editor.read_line().await.unwrap(), "i");

    // The committed line stays on screen, and a fresh prompt follows it.
    let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(output.ends_with("> "));
}

#[tokio::test]
async fn wrapped_line_caret_math() {
    let mut events = typed("abcdefghijkl");
    events.extend(keys(&[KeyCode::Home, KeyCode::End]));
    let (mut editor, _stdout_mock) = new_editor(events, 10, EditorOptions::default());

    assert!(matches!(
        editor.read_line().await,
        Err(EditorError::InputClosed)
    ));

    let width = NonZeroU16::new(10).unwrap();
    let editor_state = editor.safe_editor_state.lock().unwrap();
    assert_eq!(editor_state.line_state.len(), 14);
    assert_eq!(rows_spanned(editor_state.line_state.len(), width), 1);
    assert_eq!(
        editor_state.line_state.caret_position(width),
        CaretPosition { row: 1, col: 4 }
    );
}

#[tokio::test]
async fn info_while_editing_preserves_line() {
    let (mut editor, stdout_mock) = new_editor(typed("ab"), 80, EditorOptions::default());
    assert!(matches!(
        editor.read_line().await,
        Err(EditorError::InputClosed)
    ));
    stdout_mock.clear();

    editor.info("tick").unwrap();

    let raw = stdout_mock.get_copy_of_buffer_as_string();
    let tick_at = raw.find("tick\r\n").unwrap();
    let prompt_at = raw.rfind("> ab").unwrap();
    assert!(tick_at < prompt_at);
    assert!(raw.ends_with("> ab"));

    let editor_state = editor.safe_editor_state.lock().unwrap();
    assert_eq!(editor_state.line_state.text(), "> ab");
    assert_eq!(editor_state.line_state.edit_offset(), 0);
    assert_eq!(
        editor_state
            .line_state
            .caret_position(NonZeroU16::new(80).unwrap())
            .col,
        4
    );
}

#[tokio::test]
async fn history_up_on_empty_history() {
    let events = keys(&[KeyCode::Up, KeyCode::Enter]);
    let (mut editor, _stdout_mock) = new_editor(events, 80, EditorOptions::default());
    assert_eq!(editor.read_line().await.unwrap(), "");
}

#[tokio::test]
async fn backspace_at_prompt_is_noop() {
    let mut events = keys(&[KeyCode::Backspace, KeyCode::Backspace]);
    events.extend(typed("x"));
    events.extend(keys(&[KeyCode::Home, KeyCode::Backspace, KeyCode::Enter]));
    let (mut editor, _stdout_mock) = new_editor(events, 80, EditorOptions::default());
    assert_eq!(editor.read_line().await.unwrap(), "x");
}

#[tokio::test]
async fn history_browsing_clamps_and_restores_draft() {
    let mut events = typed("one");
    events.push(key(KeyCode::Enter));
    events.extend(typed("two"));
    events.push(key(KeyCode::Enter));
    // Up past the oldest entry clamps on "one".
    events.extend(keys(&[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Enter]));
    // Type a draft, look at history, then come back to the draft.
    events.extend(typed("draft"));
    events.extend(keys(&[KeyCode::Up, KeyCode::Down, KeyCode::Down, KeyCode::Enter]));
    let (mut editor, _stdout_mock) = new_editor(events, 80, EditorOptions::default());

    assert_eq!(editor.read_line().await.unwrap(), "one");
    assert_eq!(editor.read_line().await.unwrap(), "two");
    assert_eq!(editor.read_line().await.unwrap(), "one");
    assert_eq!(editor.read_line().await.unwrap(), "draft");
}

#[tokio::test]
async fn small_history_capacity() {
    let mut events = vec![];
    for it in ["a", "b", "c"] {
        events.extend(typed(it));
        events.push(key(KeyCode::Enter));
    }
    events.extend(keys(&[KeyCode::Up, KeyCode::Up, KeyCode::Enter]));
    let options = EditorOptions::default().with_history_capacity(2);
    let (mut editor, _stdout_mock) = new_editor(events, 80, options);

    for it in ["a", "b", "c"] {
        assert_eq!(editor.read_line().await.unwrap(), it);
    }
    // One slot holds the line being edited, so only the latest commit is reachable.
    assert_eq!(editor.read_line().await.unwrap(), "c");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_info_from_many_threads() {
    const THREADS: usize = 4;
    const LINES_PER_THREAD: usize = 50;

    let mut events = typed("hello world");
    events.push(key(KeyCode::Enter));
    let (output_device, stdout_mock) = OutputDevice::new_mock();
    let mut editor = Editor::new(
        output_device,
        InputDevice::new_mock_with_delay(events, Duration::from_millis(2)),
        FixedGeometry::new(7),
        EditorOptions::default(),
    );
    editor.initialize(10).unwrap();

    let writers = (0..THREADS)
        .map(|thread_id| {
            let log_handle = editor.log_handle();
            std::thread::spawn(move || {
                for count in 0..LINES_PER_THREAD {
                    log_handle.info(format!("[{thread_id}:{count}]")).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();

    let line = editor.read_line().await.unwrap();

    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(line, "hello world");
    let output = stdout_mock.get_copy_of_buffer_as_string();
    for thread_id in 0..THREADS {
        for count in 0..LINES_PER_THREAD {
            assert!(output.contains(&format!("[{thread_id}:{count}]\r\n")));
        }
    }

    let editor_state = editor.safe_editor_state.lock().unwrap();
    assert_eq!(editor_state.line_state.text(), "> ");
    assert_eq!(editor_state.history.pull(0), "hello world");
}
