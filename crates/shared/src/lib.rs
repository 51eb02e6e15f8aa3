use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Unique identifier of an object in the scene
pub type ObjectId = String;

/// Primitive kind of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Cube,
    Sphere,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Cube => write!(f, "cube"),
            ObjectType::Sphere => write!(f, "sphere"),
        }
    }
}

fn default_color() -> String {
    "#ffffff".to_string()
}

fn default_emissive() -> String {
    "#000000".to_string()
}

fn default_roughness() -> f64 {
    0.3
}

fn default_metalness() -> f64 {
    0.1
}

/// PBR material of a scene object.
///
/// Missing fields deserialize to the standard defaults so files written by
/// older builds keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_roughness")]
    pub roughness: f64,
    #[serde(default = "default_metalness")]
    pub metalness: f64,
    #[serde(default = "default_emissive")]
    pub emissive: String,
    #[serde(default)]
    pub emissive_intensity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: default_color(),
            roughness: default_roughness(),
            metalness: default_metalness(),
            emissive: default_emissive(),
            emissive_intensity: 0.0,
        }
    }
}

impl Material {
    /// Creation-time material for a primitive kind (indigo cubes, red spheres)
    pub fn default_for(object_type: ObjectType) -> Self {
        let color = match object_type {
            ObjectType::Cube => "#4f46e5",
            ObjectType::Sphere => "#ef4444",
        };
        Self {
            color: color.to_string(),
            ..Self::default()
        }
    }

    /// Merge a partial material update onto this material
    pub fn merge(&mut self, patch: &MaterialPatch) {
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(roughness) = patch.roughness {
            self.roughness = roughness;
        }
        if let Some(metalness) = patch.metalness {
            self.metalness = metalness;
        }
        if let Some(emissive) = &patch.emissive {
            self.emissive = emissive.clone();
        }
        if let Some(intensity) = patch.emissive_intensity {
            self.emissive_intensity = intensity;
        }
    }
}

/// Partial material update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPatch {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub roughness: Option<f64>,
    #[serde(default)]
    pub metalness: Option<f64>,
    #[serde(default)]
    pub emissive: Option<String>,
    #[serde(default)]
    pub emissive_intensity: Option<f64>,
}

/// One renderable primitive in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique identifier, assigned at creation, immutable afterwards
    pub id: ObjectId,
    /// Human-readable label shown in the object list
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub position: [f64; 3],
    /// Euler rotation in radians
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
    pub material: Material,
}

impl SceneObject {
    /// Create an object with the standard defaults for its kind
    pub fn new(object_type: ObjectType) -> Self {
        Self {
            id: generate_id(),
            name: default_name(object_type),
            object_type,
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            material: Material::default_for(object_type),
        }
    }

    /// Merge a partial update onto this object (id is never touched)
    pub fn apply_patch(&mut self, patch: &ObjectPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(material) = &patch.material {
            self.material = material.clone();
        }
    }
}

/// Partial update for a scene object; `material` replaces the whole material
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<[f64; 3]>,
    #[serde(default)]
    pub rotation: Option<[f64; 3]>,
    #[serde(default)]
    pub scale: Option<[f64; 3]>,
    #[serde(default)]
    pub material: Option<Material>,
}

/// Active gizmo mode of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Editing preferences owned by the scene core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    pub grid_snap: bool,
    pub snap_size: f64,
    pub show_grid: bool,
    pub show_shadows: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            grid_snap: false,
            snap_size: 1.0,
            show_grid: true,
            show_shadows: true,
        }
    }
}

impl SceneSettings {
    /// Merge a partial settings update
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(grid_snap) = patch.grid_snap {
            self.grid_snap = grid_snap;
        }
        if let Some(snap_size) = patch.snap_size {
            self.snap_size = snap_size;
        }
        if let Some(show_grid) = patch.show_grid {
            self.show_grid = show_grid;
        }
        if let Some(show_shadows) = patch.show_shadows {
            self.show_shadows = show_shadows;
        }
    }
}

/// Partial settings update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub grid_snap: Option<bool>,
    #[serde(default)]
    pub snap_size: Option<f64>,
    #[serde(default)]
    pub show_grid: Option<bool>,
    #[serde(default)]
    pub show_shadows: Option<bool>,
}

/// Persisted scene document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub objects: Vec<SceneObject>,
    pub metadata: SceneMetadata,
}

/// Document metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub version: String,
    #[serde(default)]
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Milliseconds since the Unix epoch
pub fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Generate a session-unique object id: millisecond timestamp plus a short
/// random suffix
pub fn generate_id() -> ObjectId {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", timestamp_millis(), &suffix[..9])
}

fn default_name(object_type: ObjectType) -> String {
    let millis = timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(4)..];
    format!("{object_type}_{tail}")
}

/// Round a coordinate to the nearest multiple of `snap_size`.
///
/// A non-positive `snap_size` disables snapping and returns the value as is.
pub fn snap_to_grid(value: f64, snap_size: f64) -> f64 {
    if snap_size <= 0.0 {
        return value;
    }
    (value / snap_size).round() * snap_size
}

/// Snap each axis of a position to the grid
pub fn snap_position(position: [f64; 3], snap_size: f64) -> [f64; 3] {
    [
        snap_to_grid(position[0], snap_size),
        snap_to_grid(position[1], snap_size),
        snap_to_grid(position[2], snap_size),
    ]
}
