//! Generic undo/redo action log.
//!
//! The log stores reversible actions as data: each entry carries an opaque
//! edit payload that the owner knows how to revert and reapply. The log
//! itself only manages ordering, the cursor, and eviction.

use shared::{generate_id, timestamp_millis};

/// Default cap on retained actions
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Broad classification of an action, for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Delete,
    Modify,
}

/// One undoable unit in the log
#[derive(Debug, Clone)]
pub struct HistoryAction<E> {
    /// Unique id of the action itself
    pub id: String,
    pub kind: ActionKind,
    /// Milliseconds since the Unix epoch at record time
    pub timestamp_ms: u64,
    /// Human-readable label ("Add cube", "Delete 2 object(s)", ...)
    pub description: String,
    /// Opaque edit payload; the owner interprets it for undo/redo
    pub edit: E,
}

/// Append-only action log with a movable cursor.
///
/// The cursor marks the last applied action. Entries past the cursor are the
/// redo future; pushing a new action discards them.
#[derive(Debug)]
pub struct HistoryLog<E> {
    actions: Vec<HistoryAction<E>>,
    cursor: Option<usize>,
    max_history: usize,
}

impl<E> Default for HistoryLog<E> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl<E> HistoryLog<E> {
    pub fn new(max_history: usize) -> Self {
        Self {
            actions: Vec::new(),
            cursor: None,
            // at least one entry
            max_history: max_history.max(1),
        }
    }

    /// Record a new action: drop the redo future, append, advance the cursor.
    /// The oldest entry is evicted once the log exceeds its cap.
    pub fn push(&mut self, kind: ActionKind, description: impl Into<String>, edit: E) {
        let keep = self.cursor.map(|i| i + 1).unwrap_or(0);
        self.actions.truncate(keep);
        self.actions.push(HistoryAction {
            id: generate_id(),
            kind,
            timestamp_ms: timestamp_millis(),
            description: description.into(),
            edit,
        });
        if self.actions.len() > self.max_history {
            self.actions.remove(0);
        }
        self.cursor = Some(self.actions.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map(|i| i + 1).unwrap_or(0) < self.actions.len()
    }

    /// Action the next `undo` would revert
    pub fn peek_undo(&self) -> Option<&HistoryAction<E>> {
        self.actions.get(self.cursor?)
    }

    /// Action the next `redo` would reapply
    pub fn peek_redo(&self) -> Option<&HistoryAction<E>> {
        let next = self.cursor.map(|i| i + 1).unwrap_or(0);
        self.actions.get(next)
    }

    /// Drop every recorded action
    pub fn clear(&mut self) {
        self.actions.clear();
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Index of the last applied action, `None` before the first one
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Full log, oldest first
    pub fn actions(&self) -> &[HistoryAction<E>] {
        &self.actions
    }
}

impl<E: Clone> HistoryLog<E> {
    /// Step the cursor back and hand out the edit to revert.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<E> {
        let index = self.cursor?;
        let edit = self.actions[index].edit.clone();
        self.cursor = index.checked_sub(1);
        Some(edit)
    }

    /// Step the cursor forward and hand out the edit to reapply.
    /// Returns `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<E> {
        let next = self.cursor.map(|i| i + 1).unwrap_or(0);
        if next < self.actions.len() {
            self.cursor = Some(next);
            Some(self.actions[next].edit.clone())
        } else {
            None
        }
    }
}
