// Library crate: the headless scene-editing core. Rendering, camera controls,
// and all visual panels live in downstream presentation crates that consume
// this API.

pub mod command;
pub mod fixtures;
pub mod history;
pub mod serializer;
pub mod state;
