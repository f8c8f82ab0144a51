// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SendRawTerminal;

/// Where the prompt, the input line and all log output are written. Unlike the reader
/// side, this is not shared by itself: it lives inside [`crate::EditorState`], behind
/// the one lock that every terminal write goes through. See
/// [`crate::test_fixtures::OutputDeviceExt`] for testing features.
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: Box<SendRawTerminal>,
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Box::new(std::io::stdout()),
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Box::new(std::io::stderr()),
        }
    }
}

impl OutputDevice {
    pub fn term(&mut self) -> &mut SendRawTerminal { &mut *self.resource }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_real_devices_flush() {
        OutputDevice::new_stdout().term().flush().unwrap();
        OutputDevice::new_stderr().term().flush().unwrap();
    }
}
