//! Object CRUD operations
//!
//! Every operation mutates the scene first, then records one history action
//! carrying deep-copied before/after payloads. Operations that match nothing
//! record nothing.

use rand::Rng;
use shared::{snap_position, MaterialPatch, ObjectId, ObjectPatch, ObjectType, SceneObject};

use super::{SceneDelta, SceneEdit, SceneState};
use crate::history::ActionKind;

impl SceneState {
    /// Create a new object at a randomized spawn position and select it
    pub fn add_object(&mut self, object_type: ObjectType) -> ObjectId {
        let mut rng = rand::rng();
        let mut object = SceneObject::new(object_type);
        object.position = [
            rng.random_range(-2.0..=2.0),
            rng.random_range(1.0..=3.0),
            rng.random_range(-2.0..=2.0),
        ];

        let selected_before = self.selection.all().to_vec();
        let id = object.id.clone();

        self.objects.push(object.clone());
        self.selection.select_one(Some(id.clone()));
        self.version += 1;

        self.history.push(
            ActionKind::Create,
            format!("Add {object_type}"),
            SceneDelta {
                edit: SceneEdit::Create {
                    objects: vec![object],
                },
                selected_before,
                selected_after: vec![id.clone()],
            },
        );

        tracing::debug!("added {object_type} {id}");
        id
    }

    /// Merge a partial update onto an object. Unknown ids are ignored.
    ///
    /// When grid snapping is enabled, an updated position is snapped before
    /// it is applied, so the recorded `after` snapshot already holds the
    /// snapped value.
    pub fn update_object(&mut self, id: &str, mut patch: ObjectPatch) {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            tracing::debug!("update for unknown object {id} ignored");
            return;
        };

        if self.settings.grid_snap {
            if let Some(position) = patch.position {
                patch.position = Some(snap_position(position, self.settings.snap_size));
            }
        }

        let before = self.objects[index].clone();
        let mut after = before.clone();
        after.apply_patch(&patch);

        self.objects[index] = after.clone();
        self.version += 1;

        let selected = self.selection.all().to_vec();
        self.history.push(
            ActionKind::Modify,
            format!("Modify {}", before.name),
            SceneDelta {
                edit: SceneEdit::Modify {
                    before: Box::new(before),
                    after: Box::new(after),
                },
                selected_before: selected.clone(),
                selected_after: selected,
            },
        );
    }

    /// Merge a partial material update onto an object's current material
    pub fn update_object_material(&mut self, id: &str, patch: &MaterialPatch) {
        let Some(object) = self.get_object(id) else {
            tracing::debug!("material update for unknown object {id} ignored");
            return;
        };

        let mut material = object.material.clone();
        material.merge(patch);
        self.update_object(
            id,
            ObjectPatch {
                material: Some(material),
                ..ObjectPatch::default()
            },
        );
    }

    /// Remove the given objects and prune them from the selection
    pub fn delete_objects(&mut self, ids: &[ObjectId]) {
        if ids.is_empty() {
            return;
        }

        let removed: Vec<SceneObject> = self
            .objects
            .iter()
            .filter(|o| ids.contains(&o.id))
            .cloned()
            .collect();
        if removed.is_empty() {
            return;
        }

        let selected_before = self.selection.all().to_vec();

        self.objects.retain(|o| !ids.contains(&o.id));
        self.selection
            .retain(|id| !ids.iter().any(|removed_id| removed_id.as_str() == id));
        self.version += 1;

        let selected_after = self.selection.all().to_vec();
        let description = format!("Delete {} object(s)", removed.len());
        self.history.push(
            ActionKind::Delete,
            description,
            SceneDelta {
                edit: SceneEdit::Delete { objects: removed },
                selected_before,
                selected_after,
            },
        );
    }

    /// Remove a single object
    pub fn delete_object(&mut self, id: &str) {
        self.delete_objects(&[id.to_string()]);
    }

    /// Remove every currently selected object
    pub fn delete_selected(&mut self) {
        let ids = self.selection.all().to_vec();
        self.delete_objects(&ids);
    }

    /// Clone the given objects with fresh ids, a `_copy` name suffix, and a
    /// one-unit X offset; the clones become the new selection
    pub fn duplicate_objects(&mut self, ids: &[ObjectId]) -> Vec<ObjectId> {
        if ids.is_empty() {
            return Vec::new();
        }

        let clones: Vec<SceneObject> = self
            .objects
            .iter()
            .filter(|o| ids.contains(&o.id))
            .map(|original| {
                let mut clone = original.clone();
                clone.id = shared::generate_id();
                clone.name = format!("{}_copy", original.name);
                clone.position[0] += 1.0;
                clone
            })
            .collect();
        if clones.is_empty() {
            return Vec::new();
        }

        let selected_before = self.selection.all().to_vec();
        let new_ids: Vec<ObjectId> = clones.iter().map(|c| c.id.clone()).collect();

        self.objects.extend(clones.iter().cloned());
        self.selection.set(new_ids.clone());
        self.version += 1;

        let description = format!("Duplicate {} object(s)", clones.len());
        self.history.push(
            ActionKind::Create,
            description,
            SceneDelta {
                edit: SceneEdit::Create { objects: clones },
                selected_before,
                selected_after: new_ids.clone(),
            },
        );

        new_ids
    }

    /// Clone a single object
    pub fn duplicate_object(&mut self, id: &str) -> Option<ObjectId> {
        self.duplicate_objects(&[id.to_string()]).into_iter().next()
    }
}
