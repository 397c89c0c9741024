use wasm_bindgen::prelude::*;

/// The arena, its lift and the spinning core, as authored in `world.json`.
const WORLD_MANIFEST: &str = include_str!("../world.json");

grid_web::export_world!(WORLD_MANIFEST, "the-grid");
