// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_HISTORY_CAPACITY, KeyClassifier};

/// Configuration for [`crate::Editor::try_new()`] and [`crate::Editor::new()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// How many committed lines the up arrow can go back through. Zero is raised to one.
    pub history_capacity: usize,
    pub key_classifier: KeyClassifier,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            key_classifier: KeyClassifier::default(),
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    #[must_use]
    pub fn with_key_classifier(mut self, key_classifier: KeyClassifier) -> Self {
        self.key_classifier = key_classifier;
        self
    }
}
