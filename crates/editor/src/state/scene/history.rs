//! Undo/redo wiring
//!
//! The history log hands back recorded deltas; the interpreter below turns
//! them into raw state replacement. Replay never records — recording from
//! inside a replay would corrupt the cursor.

use super::{SceneDelta, SceneEdit, SceneState};
use shared::SceneObject;

impl SceneState {
    /// Revert the last applied action. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(delta) => {
                self.revert(&delta);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Reapply the last undone action. Returns false when there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(delta) => {
                self.reapply(&delta);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Label of the action the next undo would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.history.peek_undo().map(|a| a.description.as_str())
    }

    /// Label of the action the next redo would reapply
    pub fn redo_description(&self) -> Option<&str> {
        self.history.peek_redo().map(|a| a.description.as_str())
    }

    /// Number of recorded actions
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop all recorded history; the scene itself is untouched
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ── Delta interpreter ─────────────────────────────────────

    fn revert(&mut self, delta: &SceneDelta) {
        match &delta.edit {
            SceneEdit::Create { objects } => self.remove_snapshots(objects),
            // restored objects go to the tail; identity and fields are exact
            SceneEdit::Delete { objects } => self.objects.extend(objects.iter().cloned()),
            SceneEdit::Modify { before, .. } => self.put_back(before),
            SceneEdit::Replace { before, .. } => self.objects = before.clone(),
        }
        self.selection.set(delta.selected_before.clone());
    }

    fn reapply(&mut self, delta: &SceneDelta) {
        match &delta.edit {
            SceneEdit::Create { objects } => self.objects.extend(objects.iter().cloned()),
            SceneEdit::Delete { objects } => self.remove_snapshots(objects),
            SceneEdit::Modify { after, .. } => self.put_back(after),
            SceneEdit::Replace { after, .. } => self.objects = after.clone(),
        }
        self.selection.set(delta.selected_after.clone());
    }

    fn remove_snapshots(&mut self, snapshots: &[SceneObject]) {
        self.objects
            .retain(|o| !snapshots.iter().any(|s| s.id == o.id));
    }

    fn put_back(&mut self, snapshot: &SceneObject) {
        match self.objects.iter_mut().find(|o| o.id == snapshot.id) {
            Some(slot) => *slot = snapshot.clone(),
            None => {
                tracing::warn!("history replay references missing object {}", snapshot.id);
                self.objects.push(snapshot.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ObjectPatch, ObjectType};

    #[test]
    fn test_undo_redo_of_add() {
        let mut state = SceneState::default();
        let id = state.add_object(ObjectType::Cube);
        let snapshot = state.get_object(&id).unwrap().clone();

        assert!(state.undo());
        assert_eq!(state.object_count(), 0);
        assert!(state.selected_ids().is_empty());
        assert!(!state.can_undo());

        assert!(state.redo());
        assert_eq!(state.get_object(&id), Some(&snapshot));
        assert_eq!(state.selected_ids(), &[id]);
    }

    #[test]
    fn test_undo_redo_of_update() {
        let mut state = SceneState::default();
        let id = state.add_object(ObjectType::Sphere);
        let original = state.get_object(&id).unwrap().clone();

        state.update_object(
            &id,
            ObjectPatch {
                position: Some([5.0, 5.0, 5.0]),
                ..ObjectPatch::default()
            },
        );

        assert!(state.undo());
        assert_eq!(state.get_object(&id), Some(&original));

        assert!(state.redo());
        assert_eq!(state.get_object(&id).unwrap().position, [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_undo_of_delete_restores_objects_and_selection() {
        let mut state = SceneState::default();
        let a = state.add_object(ObjectType::Cube);
        let b = state.add_object(ObjectType::Sphere);
        let obj_a = state.get_object(&a).unwrap().clone();
        let obj_b = state.get_object(&b).unwrap().clone();
        state.select_objects(vec![a.clone(), b.clone()]);

        state.delete_objects(&[a.clone(), b.clone()]);
        assert_eq!(state.object_count(), 0);

        assert!(state.undo());
        assert_eq!(state.object_count(), 2);
        assert_eq!(state.get_object(&a), Some(&obj_a));
        assert_eq!(state.get_object(&b), Some(&obj_b));
        assert_eq!(state.selected_ids(), &[a, b]);
    }

    #[test]
    fn test_undo_inverse_law_over_mixed_sequence() {
        let mut state = SceneState::default();
        let a = state.add_object(ObjectType::Cube);
        state.update_object(
            &a,
            ObjectPatch {
                position: Some([1.0, 2.0, 3.0]),
                ..ObjectPatch::default()
            },
        );
        let clones = state.duplicate_objects(&[a.clone()]);
        state.delete_objects(&[a.clone()]);
        let mutations = 4;

        let final_objects: Vec<_> = state.objects().to_vec();
        let final_selection = state.selected_ids().to_vec();

        for _ in 0..mutations {
            assert!(state.undo());
        }
        assert!(!state.can_undo());
        assert_eq!(state.object_count(), 0);
        assert!(state.selected_ids().is_empty());

        for _ in 0..mutations {
            assert!(state.redo());
        }
        assert!(!state.can_redo());
        assert_eq!(state.objects(), &final_objects[..]);
        assert_eq!(state.selected_ids(), &final_selection[..]);
        assert!(state.get_object(&clones[0]).is_some());
    }

    #[test]
    fn test_new_action_truncates_redo_future() {
        let mut state = SceneState::default();
        state.add_object(ObjectType::Cube);
        state.add_object(ObjectType::Sphere);

        assert!(state.undo());
        assert!(state.can_redo());

        state.add_object(ObjectType::Cube);
        assert!(!state.can_redo());
        assert!(!state.redo());
    }

    #[test]
    fn test_bounded_history_eviction() {
        let mut state = SceneState::with_max_history(5);
        for _ in 0..8 {
            state.add_object(ObjectType::Cube);
        }
        assert_eq!(state.history_len(), 5);

        let mut undos = 0;
        while state.undo() {
            undos += 1;
        }
        assert_eq!(undos, 5);
        // the three oldest adds are beyond the horizon
        assert_eq!(state.object_count(), 3);
    }

    #[test]
    fn test_undo_descriptions() {
        let mut state = SceneState::default();
        assert!(state.undo_description().is_none());

        state.add_object(ObjectType::Cube);
        assert_eq!(state.undo_description(), Some("Add cube"));

        state.undo();
        assert_eq!(state.redo_description(), Some("Add cube"));
    }

    #[test]
    fn test_clear_history_keeps_scene() {
        let mut state = SceneState::default();
        state.add_object(ObjectType::Cube);
        state.clear_history();

        assert_eq!(state.object_count(), 1);
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }
}
