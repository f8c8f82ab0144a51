// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod key_classifier;
pub mod line_state;

// Re-export.
pub use key_classifier::*;
pub use line_state::*;
