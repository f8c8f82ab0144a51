// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod async_input_stream_mock;
mod input_device_ext_mock;

// Re-export.
pub use async_input_stream_mock::*;
pub use input_device_ext_mock::*;
