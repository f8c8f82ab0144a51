// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mocks for the output device, the input device and key events. These are public so
//! that integration tests (and downstream crates) can drive an [`crate::Editor`] without
//! a real terminal.

// Attach.
mod input_device_fixtures;
mod key_event_builders;
mod output_device_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use key_event_builders::*;
pub use output_device_fixtures::*;
