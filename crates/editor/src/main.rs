//! Headless editor driver.
//!
//! Reads one JSON command per stdin line and prints one JSON response per
//! line. `--scene <path>` preloads a scene file before the loop starts.

use std::io::BufRead;

use vscene_editor::command::{execute_json, CommandResponse};
use vscene_editor::serializer;
use vscene_editor::state::SceneState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vscene_editor=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut state = SceneState::default();

    if let Some(data) = parse_scene_arg() {
        tracing::info!("preloaded scene ({} objects)", data.objects.len());
        state.load_scene_data(data);
        state.clear_history();
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("stdin read failed: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match execute_json(&mut state, &line) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{e}");
                CommandResponse {
                    success: false,
                    error: Some(e),
                    data: None,
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("failed to serialize response: {e}"),
        }
    }
}

fn parse_scene_arg() -> Option<shared::SceneData> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--scene" && i + 1 < args.len() {
            let path = std::path::Path::new(&args[i + 1]);
            return serializer::load_scene_from_file(path);
        }
        i += 1;
    }
    None
}
