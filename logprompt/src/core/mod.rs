// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod cursor_mapper;
pub mod editor_error;
pub mod geometry;
pub mod history_ring;
pub mod terminal_io;

// Re-export.
pub use cursor_mapper::*;
pub use editor_error::*;
pub use geometry::*;
pub use history_ring::*;
pub use terminal_io::*;
