// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// How many committed lines are remembered, unless configured otherwise via
/// [`crate::EditorOptions::history_capacity`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 250;

/// Fixed capacity ring of committed input lines.
///
/// The slot at `write_cursor` is special: it is the *held* slot, which holds the line
/// that is currently being edited (see [`Self::hold()`]). That way the user can scroll up
/// through history, then back down, and get back exactly what they had typed.
///
/// - [`Self::push()`] commits an entry and advances the write cursor.
/// - [`Self::pull()`] reads relative to the most recently committed entry. `pull(0)` is
///   the latest commit, `pull(1)` the one before that, and `pull(-1)` is the held slot.
///   Slots that were never written are empty strings.
///
/// Browsing (the up and down arrow keys) clamps at both ends, and never wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRing {
    entries: Vec<String>,
    write_cursor: usize,
    pushes: usize,
    browse_offset: usize,
}

impl Default for HistoryRing {
    fn default() -> Self { Self::new(DEFAULT_HISTORY_CAPACITY) }
}

impl HistoryRing {
    /// A `capacity` of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![String::new(); capacity.max(1)],
            write_cursor: 0,
            pushes: 0,
            browse_offset: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.entries.len() }

    /// `0` means the live (held) line, `k` means the k-th most recent commit.
    #[must_use]
    pub fn browse_offset(&self) -> usize { self.browse_offset }

    pub fn reset_browse(&mut self) { self.browse_offset = 0; }

    /// Capacity is never zero, and a Vec never holds more than `isize::MAX` elements.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn slot(&self, cursor: isize) -> usize {
        cursor.rem_euclid(self.entries.len() as isize) as usize
    }

    #[allow(clippy::cast_possible_wrap)]
    fn write_cursor_signed(&self) -> isize {
        (self.write_cursor % self.entries.len()) as isize
    }

    /// Commit `entry`, overwriting the oldest entry once the ring is full.
    pub fn push(&mut self, entry: impl Into<String>) {
        let slot = self.slot(self.write_cursor_signed());
        self.entries[slot] = entry.into();
        self.write_cursor = self.write_cursor.wrapping_add(1);
        self.pushes = self.pushes.saturating_add(1);
    }

    /// Overwrite the held slot, without committing.
    pub fn hold(&mut self, entry: impl Into<String>) {
        let slot = self.slot(self.write_cursor_signed());
        self.entries[slot] = entry.into();
    }

    /// Any `offset` is accepted, it wraps around the ring.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn pull(&self, offset: isize) -> &str {
        // Both terms are in `0..capacity`, so this can't overflow.
        let offset = offset.rem_euclid(self.entries.len() as isize);
        let slot = self.slot(self.write_cursor_signed() - 1 - offset);
        &self.entries[slot]
    }

    /// The furthest back browsing can go. The held slot shares storage with the oldest
    /// entry once the ring is full, so at most `capacity - 1` commits are reachable.
    fn browse_limit(&self) -> usize {
        self.pushes.min(self.capacity() - 1).max(1)
    }

    /// Step one entry further into the past (up arrow), clamping at the oldest reachable
    /// entry. With an empty history this yields an empty string.
    pub fn browse_older(&mut self) -> &str {
        if self.browse_offset < self.browse_limit() {
            self.browse_offset += 1;
        }
        self.pull_browsed()
    }

    /// Step one entry towards the present (down arrow), clamping at the held line.
    pub fn browse_newer(&mut self) -> &str {
        self.browse_offset = self.browse_offset.saturating_sub(1);
        self.pull_browsed()
    }

    #[allow(clippy::cast_possible_wrap)]
    fn pull_browsed(&self) -> &str { self.pull(self.browse_offset as isize - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_overwrites_oldest() {
        let mut history = HistoryRing::new(3);
        for it in ["a", "b", "c", "d"] {
            history.push(it);
        }
        assert_eq!(history.pull(0), "d");
        assert_eq!(history.pull(1), "c");
        assert_eq!(history.pull(2), "b");
        // "a" was overwritten, and the ring wraps back around to "d".
        assert_eq!(history.pull(3), "d");
        assert!((0..3).all(|offset| history.pull(offset) != "a"));
    }

    #[test]
    fn test_pull_never_written_is_empty() {
        let history = HistoryRing::new(5);
        assert_eq!(history.pull(0), "");
        assert_eq!(history.pull(-1), "");
        assert_eq!(history.pull(17), "");
    }

    #[test]
    fn test_hold_does_not_advance() {
        let mut history = HistoryRing::new(4);
        history.push("one");
        history.hold("draft");
        assert_eq!(history.pull(-1), "draft");
        assert_eq!(history.pull(0), "one");

        history.hold("draft 2");
        assert_eq!(history.pull(-1), "draft 2");

        // Committing overwrites the held slot.
        history.push("two");
        assert_eq!(history.pull(0), "two");
        assert_eq!(history.pull(1), "one");
    }

    #[test]
    fn test_pull_extreme_offsets() {
        let mut history = HistoryRing::new(5);
        for it in ["a", "b", "c"] {
            history.push(it);
        }
        // isize::MIN is -(2^63), which is 2 mod 5, so it lands on pull(2).
        assert_eq!(history.pull(isize::MIN), "a");
        // isize::MAX is 2^63 - 1, which is 2 mod 5 as well.
        assert_eq!(history.pull(isize::MAX), "a");
        assert_eq!(history.pull(isize::MIN + 1), history.pull(3));
        assert_eq!(history.pull(-6), history.pull(-1));

        let mut history = HistoryRing::new(1);
        history.push("only");
        assert_eq!(history.pull(isize::MIN), "only");
        assert_eq!(history.pull(isize::MAX), "only");
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let mut history = HistoryRing::new(0);
        assert_eq!(history.capacity(), 1);
        history.push("x");
        assert_eq!(history.pull(0), "x");
    }

    #[test]
    fn test_browse_empty_history() {
        let mut history = HistoryRing::new(10);
        assert_eq!(history.browse_older(), "");
        assert_eq!(history.browse_offset(), 1);
        assert_eq!(history.browse_older(), "");
        assert_eq!(history.browse_offset(), 1);
        assert_eq!(history.browse_newer(), "");
        assert_eq!(history.browse_offset(), 0);
    }

    #[test]
    fn test_browse_clamps_at_oldest() {
        let mut history = HistoryRing::new(10);
        history.push("a");
        history.push("b");
        history.hold("typing");

        assert_eq!(history.browse_older(), "b");
        assert_eq!(history.browse_older(), "a");
        assert_eq!(history.browse_older(), "a");
        assert_eq!(history.browse_older(), "a");
        assert_eq!(history.browse_offset(), 2);
    }

    #[test]
    fn test_browse_clamps_at_newest_and_restores_held_line() {
        let mut history = HistoryRing::new(10);
        history.push("a");
        history.push("b");
        history.hold("typing");

        assert_eq!(history.browse_older(), "b");
        assert_eq!(history.browse_newer(), "typing");
        assert_eq!(history.browse_newer(), "typing");
        assert_eq!(history.browse_offset(), 0);
    }

    #[test]
    fn test_browse_full_ring_never_shows_held_slot_as_history() {
        let mut history = HistoryRing::new(3);
        for it in ["a", "b", "c", "d"] {
            history.push(it);
        }
        history.hold("live");

        assert_eq!(history.browse_older(), "d");
        assert_eq!(history.browse_older(), "c");
        // Limit is capacity - 1, so we clamp here instead of landing on "live".
        assert_eq!(history.browse_older(), "c");
        assert_eq!(history.browse_newer(), "d");
        assert_eq!(history.browse_newer(), "live");
    }

    #[test]
    fn test_reset_browse() {
        let mut history = HistoryRing::new(3);
        history.push("a");
        history.browse_older();
        history.reset_browse();
        assert_eq!(history.browse_offset(), 0);
    }
}
