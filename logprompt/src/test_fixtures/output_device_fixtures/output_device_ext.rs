// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::StdoutMock;
use crate::OutputDevice;

pub trait OutputDeviceExt {
    /// Returns the device, and a handle to the buffer that everything written to the
    /// device ends up in.
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Box::new(stdout_mock.clone()),
        };
        (this, stdout_mock)
    }
}
