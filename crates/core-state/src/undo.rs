use core_text::Buffer;
use std::collections::VecDeque;
use tracing::trace;

/// Default number of snapshots retained in undo history.
pub const UNDO_HISTORY_MAX: usize = 10;

/// A full, independent copy of the document at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub buffer: Buffer,
}

/// Bounded undo stack plus redo stack of whole-buffer snapshots.
///
/// The undo side is a deque: new snapshots go on the back, overflow evicts
/// from the front, so the most recent `capacity` states are always kept.
/// The redo side is unbounded but cleared by every new edit.
pub struct UndoEngine {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    capacity: usize,
}

impl Default for UndoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoEngine {
    pub fn new() -> Self {
        Self::with_capacity(UNDO_HISTORY_MAX)
    }

    /// Engine retaining at most `capacity` undo snapshots (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity + 1),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Oldest retained snapshot (next to be evicted).
    pub fn oldest(&self) -> Option<&Snapshot> {
        self.undo_stack.front()
    }

    /// Push a pre-mutation copy of `buffer`, evicting the oldest entry on overflow.
    pub fn record(&mut self, buffer: &Buffer) {
        self.push_bounded(Snapshot {
            buffer: buffer.clone(),
        });
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), lines = buffer.line_count(), "push_snapshot");
    }

    /// Swap `buffer` with the newest undo snapshot, saving the current state for redo.
    /// Returns false (and leaves everything untouched) when there is nothing to undo.
    pub fn undo(&mut self, buffer: &mut Buffer) -> bool {
        let Some(last) = self.undo_stack.pop_back() else {
            return false;
        };
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        let current = std::mem::replace(buffer, last.buffer);
        self.redo_stack.push(Snapshot { buffer: current });
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), "redo_push_from_undo");
        true
    }

    /// Symmetric to `undo`: current state goes back onto the undo side.
    pub fn redo(&mut self, buffer: &mut Buffer) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), undo_depth = self.undo_stack.len(), "redo_pop");
        let current = std::mem::replace(buffer, next.buffer);
        self.push_bounded(Snapshot { buffer: current });
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "undo_push_from_redo");
        true
    }

    fn push_bounded(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > self.capacity {
            let _ = self.undo_stack.pop_front();
            trace!(target: "state.undo", capacity = self.capacity, "undo_stack_trimmed");
        }
    }

    pub fn clear_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    pub fn clear_all(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        trace!(target: "state.undo", "history_cleared");
    }
}
