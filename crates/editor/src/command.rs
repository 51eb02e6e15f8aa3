//! JSON command protocol.
//!
//! Lets external drivers (scripts, agents, the headless binary) execute the
//! full editor operation set over a line-oriented JSON protocol.

use serde::{Deserialize, Serialize};
use shared::{MaterialPatch, ObjectPatch, ObjectType, SettingsPatch, TransformMode};

use crate::state::SceneState;

/// A command a driver can execute against the scene state
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Create a new object of the given kind
    AddObject { object_type: ObjectType },
    /// Merge a partial update onto an object
    UpdateObject {
        id: String,
        #[serde(default)]
        updates: ObjectPatch,
    },
    /// Merge a partial material update onto an object
    UpdateMaterial {
        id: String,
        #[serde(default)]
        updates: MaterialPatch,
    },
    /// Delete objects by id
    DeleteObjects { ids: Vec<String> },
    /// Duplicate objects by id
    DuplicateObjects { ids: Vec<String> },
    /// Replace the selection
    Select { ids: Vec<String> },
    /// Clear the selection
    ClearSelection,
    /// Switch the active gizmo mode
    SetTransformMode { mode: TransformMode },
    /// Merge a partial settings update
    UpdateSettings {
        #[serde(default)]
        updates: SettingsPatch,
    },
    /// Undo the last operation
    Undo,
    /// Redo the last undone operation
    Redo,
    /// Clear the entire scene
    Clear,
    /// Serialize the scene to a file
    SaveScene {
        path: String,
        #[serde(default)]
        name: Option<String>,
    },
    /// Load a scene file, replacing the current scene
    LoadScene { path: String },
    /// Inspect the scene: objects, selection, history flags
    Inspect,
    /// Export the scene as JSON
    ExportScene,
}

/// Response from executing a command
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command against the scene state
pub fn execute_command(state: &mut SceneState, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddObject { object_type } => {
            let id = state.add_object(object_type);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::UpdateObject { id, updates } => {
            let found = state.get_object(&id).is_some();
            state.update_object(&id, updates);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": found }))
        }

        EditorCommand::UpdateMaterial { id, updates } => {
            let found = state.get_object(&id).is_some();
            state.update_object_material(&id, &updates);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": found }))
        }

        EditorCommand::DeleteObjects { ids } => {
            let before = state.object_count();
            state.delete_objects(&ids);
            let removed = before - state.object_count();
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        EditorCommand::DuplicateObjects { ids } => {
            let new_ids = state.duplicate_objects(&ids);
            CommandResponse::ok_with_data(serde_json::json!({ "ids": new_ids }))
        }

        EditorCommand::Select { ids } => {
            state.select_objects(ids.clone());
            CommandResponse::ok_with_data(serde_json::json!({ "selected": ids }))
        }

        EditorCommand::ClearSelection => {
            state.select_object(None);
            CommandResponse::ok()
        }

        EditorCommand::SetTransformMode { mode } => {
            state.set_transform_mode(mode);
            CommandResponse::ok()
        }

        EditorCommand::UpdateSettings { updates } => {
            state.update_settings(&updates);
            CommandResponse::ok()
        }

        EditorCommand::Undo => {
            let success = state.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = state.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::Clear => {
            state.clear_scene();
            CommandResponse::ok()
        }

        EditorCommand::SaveScene { path, name } => {
            if state.save_scene(std::path::Path::new(&path), name.as_deref()) {
                CommandResponse::ok_with_data(serde_json::json!({ "path": path }))
            } else {
                CommandResponse::err(format!("failed to save scene to {path}"))
            }
        }

        EditorCommand::LoadScene { path } => {
            if state.load_scene(std::path::Path::new(&path)) {
                CommandResponse::ok_with_data(
                    serde_json::json!({ "objects": state.object_count() }),
                )
            } else {
                CommandResponse::err(format!("failed to load scene from {path}"))
            }
        }

        EditorCommand::Inspect => {
            let objects: Vec<serde_json::Value> = state
                .objects()
                .iter()
                .map(|obj| {
                    serde_json::json!({
                        "id": obj.id,
                        "name": obj.name,
                        "type": obj.object_type,
                        "position": obj.position,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "object_count": objects.len(),
                "objects": objects,
                "selected": state.selected_ids(),
                "can_undo": state.can_undo(),
                "can_redo": state.can_redo(),
            }))
        }

        EditorCommand::ExportScene => {
            let data = state.export_scene(None);
            let json = serde_json::to_string_pretty(&data).unwrap_or_default();
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string
pub fn execute_json(state: &mut SceneState, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(state, cmd))
}

/// Parse and execute multiple JSON commands (array)
pub fn execute_json_batch(
    state: &mut SceneState,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(state, cmd))
        .collect())
}
