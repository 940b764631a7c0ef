use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod controls;
mod game;
mod orbit;
mod scene;
mod theme;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
