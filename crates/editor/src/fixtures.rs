//! Factory functions for creating test data.
//!
//! Convenient helpers to construct `SceneObject` and `SceneData` values used
//! in tests and examples.

use shared::{Material, ObjectType, SceneData, SceneMetadata, SceneObject};

/// Create a cube object with the given name
pub fn cube(name: &str) -> SceneObject {
    let mut obj = SceneObject::new(ObjectType::Cube);
    obj.name = name.to_string();
    obj
}

/// Create a cube object at a specific position
pub fn cube_at(name: &str, position: [f64; 3]) -> SceneObject {
    let mut obj = cube(name);
    obj.position = position;
    obj
}

/// Create a sphere object with the given name
pub fn sphere(name: &str) -> SceneObject {
    let mut obj = SceneObject::new(ObjectType::Sphere);
    obj.name = name.to_string();
    obj
}

/// Create a sphere object at a specific position
pub fn sphere_at(name: &str, position: [f64; 3]) -> SceneObject {
    let mut obj = sphere(name);
    obj.position = position;
    obj
}

/// A small mixed scene: two cubes and a sphere with a custom material
pub fn sample_objects() -> Vec<SceneObject> {
    let mut glowing = sphere_at("glow", [0.0, 2.0, 0.0]);
    glowing.material = Material {
        color: "#22cc88".to_string(),
        roughness: 0.5,
        metalness: 0.7,
        emissive: "#113322".to_string(),
        emissive_intensity: 0.4,
    };
    vec![
        cube_at("floor", [0.0, 0.0, 0.0]),
        cube_at("wall", [2.0, 1.0, -1.5]),
        glowing,
    ]
}

/// Wrap objects as a scene document with fixed metadata
pub fn scene_data(objects: Vec<SceneObject>) -> SceneData {
    SceneData {
        objects,
        metadata: SceneMetadata {
            version: "2.0".to_string(),
            created: "2026-01-01T00:00:00+00:00".to_string(),
            name: Some("Fixture Scene".to_string()),
        },
    }
}
