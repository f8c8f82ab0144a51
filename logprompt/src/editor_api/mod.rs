// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod editor;
pub mod editor_options;
pub mod editor_state;
pub mod log_handle;

// Re-export.
pub use editor::*;
pub use editor_options::*;
pub use editor_state::*;
pub use log_handle::*;
