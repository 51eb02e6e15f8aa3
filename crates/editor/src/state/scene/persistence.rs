//! Scene save/load/clear
//!
//! Saving never mutates state. Loading replaces the object list and records
//! a single history action so the previous scene is one undo away; a failed
//! load leaves everything untouched.

use std::path::Path;

use shared::{SceneData, SceneObject};

use super::{SceneDelta, SceneEdit, SceneState};
use crate::history::ActionKind;
use crate::serializer;

impl SceneState {
    /// Snapshot the current objects as a persistable document
    pub fn export_scene(&self, name: Option<&str>) -> SceneData {
        serializer::export_scene_to_json(&self.objects, name)
    }

    /// Serialize the scene and write it to `path`. Returns false on I/O error.
    pub fn save_scene(&self, path: &Path, name: Option<&str>) -> bool {
        let data = self.export_scene(name);
        serializer::save_scene_to_file(&data, path)
    }

    /// Load a scene file, replacing the current objects and clearing the
    /// selection. Returns false (state untouched) if the file cannot be
    /// read or fails validation.
    pub fn load_scene(&mut self, path: &Path) -> bool {
        match serializer::load_scene_from_file(path) {
            Some(data) => {
                self.load_scene_data(data);
                true
            }
            None => false,
        }
    }

    /// Replace the scene with already-parsed data
    pub fn load_scene_data(&mut self, data: SceneData) {
        self.replace_objects(data.objects, ActionKind::Modify, "Load scene");
    }

    /// Empty the scene and the selection. No-op when already empty.
    pub fn clear_scene(&mut self) {
        if self.objects.is_empty() {
            return;
        }
        self.replace_objects(Vec::new(), ActionKind::Delete, "Clear scene");
    }

    fn replace_objects(&mut self, objects: Vec<SceneObject>, kind: ActionKind, description: &str) {
        let before = std::mem::replace(&mut self.objects, objects);
        let selected_before = self.selection.all().to_vec();

        self.selection.clear();
        self.version += 1;

        self.history.push(
            kind,
            description,
            SceneDelta {
                edit: SceneEdit::Replace {
                    before,
                    after: self.objects.clone(),
                },
                selected_before,
                selected_after: Vec::new(),
            },
        );
    }
}
