// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::EventStream;
use futures_util::{FutureExt, StreamExt};

use crate::{CrosstermEventResult, PinnedInputStream};

/// Source of key events for [`crate::Editor::read_line()`]. See
/// [`crate::test_fixtures::InputDeviceExtMock`] for testing features.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    /// Events from the real terminal. The terminal should be in raw mode for key
    /// events to arrive one at a time.
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }
}

impl InputDevice {
    /// Returns [None] once the stream has ended.
    pub async fn next(&mut self) -> Option<CrosstermEventResult> {
        self.resource.next().fuse().await
    }
}
