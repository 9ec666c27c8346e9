//! Softine Engine - 2D soft body and rigid body physics in WASM
//!
//! Architecture:
//! - core/        - Vector math, safety macros
//! - domain/      - Points, springs, shapes, bodies, config, errors
//! - spatial/     - Quadtree, hash grid, broad phase
//! - systems/     - Forces, integration, collision
//! - simulation/  - World orchestration and the wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Softine physics engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::Vec2;
pub use domain::{BodyDesc, BodyHandle, PhysicsConfig, PhysicsError, ShapeKind, Transform};
pub use simulation::{PerfStats, World, WorldCore};

// Export shape codes for JS
#[wasm_bindgen]
pub fn shape_circle() -> u8 { domain::shape::SHAPE_CIRCLE }
#[wasm_bindgen]
pub fn shape_square() -> u8 { domain::shape::SHAPE_SQUARE }
#[wasm_bindgen]
pub fn shape_triangle() -> u8 { domain::shape::SHAPE_TRIANGLE }
#[wasm_bindgen]
pub fn shape_polygon() -> u8 { domain::shape::SHAPE_POLYGON }
