pub mod preferences;
pub mod scene;
pub mod selection;

pub use preferences::{EditorPreferences, Theme};
pub use scene::SceneState;
pub use selection::Selection;
