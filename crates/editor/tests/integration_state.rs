//! Integration tests for the scene state core.
//!
//! Exercises the full editing loop through the public API: create, edit,
//! delete, duplicate, undo/redo, and persistence.

use shared::{ObjectPatch, ObjectType, SettingsPatch};
use vscene_editor::fixtures;
use vscene_editor::serializer;
use vscene_editor::state::SceneState;

#[test]
fn test_add_undo_redo_cycle() {
    let mut state = SceneState::default();
    assert!(!state.can_undo());

    let id = state.add_object(ObjectType::Cube);
    let snapshot = state.get_object(&id).unwrap().clone();
    assert_eq!(state.object_count(), 1);
    assert_eq!(state.selected_ids(), &[id.clone()]);
    assert!(state.can_undo());

    assert!(state.undo());
    assert_eq!(state.object_count(), 0);
    assert!(state.selected_ids().is_empty());
    assert!(!state.can_undo());

    assert!(state.redo());
    assert_eq!(state.object_count(), 1);
    assert_eq!(state.get_object(&id), Some(&snapshot));
}

#[test]
fn test_multi_delete_undo_restores_both() {
    let mut state = SceneState::default();
    let a = state.add_object(ObjectType::Cube);
    let b = state.add_object(ObjectType::Sphere);
    let obj_a = state.get_object(&a).unwrap().clone();
    let obj_b = state.get_object(&b).unwrap().clone();

    state.delete_objects(&[a.clone(), b.clone()]);
    assert_eq!(state.object_count(), 0);

    assert!(state.undo());
    assert_eq!(state.object_count(), 2);
    assert_eq!(state.get_object(&a), Some(&obj_a));
    assert_eq!(state.get_object(&b), Some(&obj_b));
}

#[test]
fn test_undo_redo_inverse_law() {
    let mut state = SceneState::default();

    let initial_objects = state.objects().to_vec();
    let a = state.add_object(ObjectType::Cube);
    state.update_object(
        &a,
        ObjectPatch {
            position: Some([3.0, 1.0, -2.0]),
            ..ObjectPatch::default()
        },
    );
    state.duplicate_objects(&[a.clone()]);
    let b = state.add_object(ObjectType::Sphere);
    state.delete_objects(&[b]);
    state.clear_scene();
    let mutations = 6;

    let final_objects = state.objects().to_vec();
    let final_selection = state.selected_ids().to_vec();

    for step in 0..mutations {
        assert!(state.undo(), "undo {step} should succeed");
    }
    assert!(!state.can_undo());
    assert_eq!(state.objects(), &initial_objects[..]);
    assert!(state.selected_ids().is_empty());

    for step in 0..mutations {
        assert!(state.redo(), "redo {step} should succeed");
    }
    assert!(!state.can_redo());
    assert_eq!(state.objects(), &final_objects[..]);
    assert_eq!(state.selected_ids(), &final_selection[..]);
}

#[test]
fn test_history_truncation_after_new_action() {
    let mut state = SceneState::default();
    state.add_object(ObjectType::Cube);
    state.add_object(ObjectType::Sphere);

    assert!(state.undo());
    assert!(state.can_redo());

    state.add_object(ObjectType::Cube);
    assert!(!state.can_redo());
}

#[test]
fn test_bounded_history() {
    let max_history = 10;
    let extra = 4;
    let mut state = SceneState::with_max_history(max_history);

    for _ in 0..max_history + extra {
        state.add_object(ObjectType::Cube);
    }
    assert_eq!(state.history_len(), max_history);

    let mut undos = 0;
    while state.undo() {
        undos += 1;
    }
    assert_eq!(undos, max_history);
    assert_eq!(state.object_count(), extra);
}

#[test]
fn test_selection_pruned_on_delete() {
    let mut state = SceneState::default();
    let a = state.add_object(ObjectType::Cube);
    let b = state.add_object(ObjectType::Sphere);
    state.select_objects(vec![a.clone(), b.clone()]);

    state.delete_object(&a);

    assert_eq!(state.selected_ids(), &[b]);
    for id in state.selected_ids() {
        assert!(state.get_object(id).is_some(), "dangling selection id {id}");
    }
}

#[test]
fn test_grid_snap_on_update() {
    let mut state = SceneState::default();
    let id = state.add_object(ObjectType::Cube);
    state.update_settings(&SettingsPatch {
        grid_snap: Some(true),
        snap_size: Some(0.5),
        ..Default::default()
    });

    state.update_object(
        &id,
        ObjectPatch {
            position: Some([1.23, 0.0, 0.0]),
            ..ObjectPatch::default()
        },
    );

    // 1.23 / 0.5 = 2.46, rounds to 2 -> 1.0
    assert_eq!(state.get_object(&id).unwrap().position, [1.0, 0.0, 0.0]);
}

#[test]
fn test_grid_snap_zero_size_is_noop() {
    let mut state = SceneState::default();
    let id = state.add_object(ObjectType::Cube);
    state.update_settings(&SettingsPatch {
        grid_snap: Some(true),
        snap_size: Some(0.0),
        ..Default::default()
    });

    state.update_object(
        &id,
        ObjectPatch {
            position: Some([1.23, 4.56, 7.89]),
            ..ObjectPatch::default()
        },
    );

    assert_eq!(state.get_object(&id).unwrap().position, [1.23, 4.56, 7.89]);
}

#[test]
fn test_scene_file_roundtrip() {
    let objects = fixtures::sample_objects();
    let data = serializer::export_scene_to_json(&objects, Some("integration"));
    let json = serde_json::to_string_pretty(&data).unwrap();

    let loaded = serializer::load_scene_from_json(&json).expect("exported scene must load");
    assert_eq!(loaded.objects, objects);
}

#[test]
fn test_load_failure_keeps_scene() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    // metadata.version missing
    std::fs::write(&path, r#"{"objects": [], "metadata": {}}"#).unwrap();

    let mut state = SceneState::default();
    let id = state.add_object(ObjectType::Cube);

    assert!(!state.load_scene(&path));
    assert_eq!(state.object_count(), 1);
    assert!(state.get_object(&id).is_some());
}

#[test]
fn test_save_then_load_into_fresh_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let mut state = SceneState::default();
    let cube = state.add_object(ObjectType::Cube);
    state.update_object(
        &cube,
        ObjectPatch {
            name: Some("hero".to_string()),
            position: Some([1.0, 2.0, 3.0]),
            ..ObjectPatch::default()
        },
    );
    assert!(state.save_scene(&path, Some("saved")));

    let mut fresh = SceneState::default();
    assert!(fresh.load_scene(&path));
    assert_eq!(fresh.objects(), state.objects());

    // loading replaced an empty scene; undoing returns to empty
    assert!(fresh.undo());
    assert_eq!(fresh.object_count(), 0);
}

#[test]
fn test_material_edit_via_history() {
    let mut state = SceneState::default();
    let id = state.add_object(ObjectType::Sphere);

    state.update_object_material(
        &id,
        &shared::MaterialPatch {
            color: Some("#abcdef".to_string()),
            emissive_intensity: Some(0.9),
            ..Default::default()
        },
    );
    assert_eq!(state.get_object(&id).unwrap().material.color, "#abcdef");

    assert!(state.undo());
    assert_eq!(state.get_object(&id).unwrap().material.color, "#ef4444");

    assert!(state.redo());
    let material = &state.get_object(&id).unwrap().material;
    assert_eq!(material.color, "#abcdef");
    assert_eq!(material.emissive_intensity, 0.9);
}
