use std::{collections::VecDeque, num::NonZero};

/// Bounded linear history with a cursor.
///
/// Never empty: the entry under the cursor is the current one. Pushing past
/// the cursor discards the redo tail, and pushing at capacity drops the
/// oldest entry.
#[derive(Debug, Clone)]
pub(crate) struct History<T> {
    entries: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> History<T> {
    #[must_use]
    pub(crate) fn new(initial: T, capacity: NonZero<usize>) -> Self {
        Self {
            entries: VecDeque::from([initial]),
            capacity,
            cursor: 0,
        }
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    #[must_use]
    pub(crate) fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub(crate) fn push(&mut self, item: T) {
        self.entries.truncate(self.cursor + 1);
        if self.entries.len() == self.capacity.get() {
            self.entries.pop_front();
        }
        self.entries.push_back(item);
        self.cursor = self.entries.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub(crate) fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Replaces every entry with `initial`.
    pub(crate) fn reset(&mut self, initial: T) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.cursor = 0;
    }
}
