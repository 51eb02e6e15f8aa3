//! Scene state management
//!
//! `SceneState` owns the canonical object list, the selection, the transform
//! mode, and the editing settings, and records every mutation into the
//! undo/redo history.

mod history;
mod object_ops;
mod persistence;

use shared::{ObjectId, SceneObject, SceneSettings, SettingsPatch, TransformMode};

use crate::history::{HistoryLog, DEFAULT_MAX_HISTORY};
use crate::state::selection::Selection;

/// One reversible state transition. Every payload is a deep copy captured at
/// record time; nothing in here aliases the live scene.
#[derive(Debug, Clone)]
pub(crate) enum SceneEdit {
    /// Objects appended to the scene (add, duplicate)
    Create { objects: Vec<SceneObject> },
    /// Objects removed from the scene
    Delete { objects: Vec<SceneObject> },
    /// One object rewritten in place
    Modify {
        before: Box<SceneObject>,
        after: Box<SceneObject>,
    },
    /// Whole object list swapped out (load, clear)
    Replace {
        before: Vec<SceneObject>,
        after: Vec<SceneObject>,
    },
}

/// A scene edit paired with the selection on both sides of it
#[derive(Debug, Clone)]
pub(crate) struct SceneDelta {
    pub edit: SceneEdit,
    pub selected_before: Vec<ObjectId>,
    pub selected_after: Vec<ObjectId>,
}

/// Canonical editor state with undo/redo history
pub struct SceneState {
    objects: Vec<SceneObject>,
    selection: Selection,
    transform_mode: TransformMode,
    settings: SceneSettings,
    history: HistoryLog<SceneDelta>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::with_max_history(DEFAULT_MAX_HISTORY)
    }
}

impl SceneState {
    /// State with a custom history cap
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            objects: Vec::new(),
            selection: Selection::default(),
            transform_mode: TransformMode::default(),
            settings: SceneSettings::default(),
            history: HistoryLog::new(max_history),
            version: 0,
        }
    }

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All objects, in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Get an object by id
    pub fn get_object(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    // ── Selection (not undoable) ──────────────────────────────

    /// Currently selected ids, in selection order
    pub fn selected_ids(&self) -> &[ObjectId] {
        self.selection.all()
    }

    /// All selected objects
    pub fn selected_objects(&self) -> Vec<&SceneObject> {
        self.selection
            .all()
            .iter()
            .filter_map(|id| self.get_object(id))
            .collect()
    }

    /// The selected object, when exactly one is selected
    pub fn selected_object(&self) -> Option<&SceneObject> {
        let selected = self.selected_objects();
        if selected.len() == 1 {
            Some(selected[0])
        } else {
            None
        }
    }

    /// Replace the selection. The caller is responsible for passing live ids.
    pub fn select_objects(&mut self, ids: Vec<ObjectId>) {
        self.selection.set(ids);
    }

    /// Select a single object, or clear the selection with `None`
    pub fn select_object(&mut self, id: Option<&str>) {
        self.selection.select_one(id.map(str::to_string));
    }

    // ── Transform mode & settings (not undoable) ──────────────

    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.transform_mode = mode;
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Shallow-merge a partial settings update
    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.settings.merge(patch);
    }
}
