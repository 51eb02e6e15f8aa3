//! Scene document serialization
//!
//! Converts object lists to/from the versioned JSON scene format and handles
//! the file I/O around it. Parsing is strict (`parse_scene_json` returns a
//! typed error); the `load_*` wrappers log the reason and hand the caller a
//! definite `None` instead, so nothing ever propagates past this boundary.

use std::path::Path;

use serde::Deserialize;
use shared::{timestamp_millis, Material, ObjectType, SceneData, SceneMetadata, SceneObject};
use thiserror::Error;

/// Format version written into every exported document
pub const SCENE_FORMAT_VERSION: &str = "2.0";

/// Why a scene document failed to parse
#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene data: {0}")]
    InvalidFormat(String),
}

/// On-disk object shape. Kept separate from `SceneObject` so legacy documents
/// (pre-2.0 stored a single top-level `color` instead of a material) can be
/// migrated on load.
#[derive(Deserialize)]
struct RawSceneObject {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    object_type: ObjectType,
    position: [f64; 3],
    rotation: [f64; 3],
    scale: [f64; 3],
    #[serde(default)]
    material: Option<Material>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
struct RawMetadata {
    version: String,
    #[serde(default)]
    created: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawSceneData {
    objects: Vec<RawSceneObject>,
    metadata: RawMetadata,
}

/// Wrap an object list as a versioned scene document.
///
/// Every material field is emitted explicitly so future readers never depend
/// on default elision.
pub fn export_scene_to_json(objects: &[SceneObject], name: Option<&str>) -> SceneData {
    SceneData {
        objects: objects.to_vec(),
        metadata: SceneMetadata {
            version: SCENE_FORMAT_VERSION.to_string(),
            created: chrono::Utc::now().to_rfc3339(),
            name: Some(name.unwrap_or("Untitled Scene").to_string()),
        },
    }
}

/// Strictly parse and validate a scene document
pub fn parse_scene_json(json: &str) -> Result<SceneData, SceneFileError> {
    let raw: RawSceneData = serde_json::from_str(json)?;

    if raw.metadata.version.is_empty() {
        return Err(SceneFileError::InvalidFormat(
            "missing metadata version".to_string(),
        ));
    }

    let mut objects = Vec::with_capacity(raw.objects.len());
    for (index, obj) in raw.objects.into_iter().enumerate() {
        if obj.id.is_empty() {
            return Err(SceneFileError::InvalidFormat(format!(
                "object {index} has an empty id"
            )));
        }

        let material = match obj.material {
            Some(material) => material,
            None => {
                // legacy shim: a bare color becomes a full material
                let mut material = Material::default();
                if let Some(color) = obj.color {
                    material.color = color;
                }
                material
            }
        };

        objects.push(SceneObject {
            id: obj.id,
            name: obj.name,
            object_type: obj.object_type,
            position: obj.position,
            rotation: obj.rotation,
            scale: obj.scale,
            material,
        });
    }

    Ok(SceneData {
        objects,
        metadata: SceneMetadata {
            version: raw.metadata.version,
            created: raw.metadata.created,
            name: raw.metadata.name,
        },
    })
}

/// Parse a scene document, logging and returning `None` on any failure
pub fn load_scene_from_json(json: &str) -> Option<SceneData> {
    match parse_scene_json(json) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!("failed to load scene: {e}");
            None
        }
    }
}

/// Read and parse a scene file, logging and returning `None` on any failure
pub fn load_scene_from_file(path: &Path) -> Option<SceneData> {
    match std::fs::read_to_string(path) {
        Ok(json) => load_scene_from_json(&json),
        Err(e) => {
            tracing::warn!("failed to read scene file {}: {e}", path.display());
            None
        }
    }
}

/// Write a scene document as pretty-printed JSON. Returns false on failure.
pub fn save_scene_to_file(data: &SceneData, path: &Path) -> bool {
    let json = match serde_json::to_string_pretty(data) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("failed to serialize scene: {e}");
            return false;
        }
    };
    if let Err(e) = std::fs::write(path, json) {
        tracing::error!("failed to write scene file {}: {e}", path.display());
        return false;
    }
    true
}

/// Default file name for a saved scene
pub fn default_scene_filename() -> String {
    format!("scene-{}.json", timestamp_millis())
}
