use wasm_bindgen::prelude::*;

use crate::core::math::Vec2;
use crate::domain::{BodyDesc, BodyHandle, PhysicsError, ShapeKind};

use super::perf_stats::PerfStats;
use super::render_extract::flatten;
use super::WorldCore;

fn js_error(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a camelCase `PhysicsConfig` JSON document
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn point_count(&self) -> usize { self.core.point_count() }

    #[wasm_bindgen(getter)]
    pub fn spring_count(&self) -> usize { self.core.spring_count() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.set_gravity(x, y).map_err(js_error)
    }

    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_bounds(width, height).map_err(js_error)
    }

    // === BODY API ===

    /// Spawn a soft body; `shape` is one of the `shape_*()` codes.
    /// Polygons use the configured side count.
    pub fn create_soft_body(&mut self, shape: u8, x: f32, y: f32, scale: f32) -> Result<u32, JsValue> {
        let kind = ShapeKind::from_code(shape, self.core.config().polygon_sides).map_err(js_error)?;
        self.core
            .create_soft_body(kind, Vec2::new(x, y), scale)
            .map(|h| h.0)
            .map_err(js_error)
    }

    /// Spawn a rigid body with randomized size
    pub fn create_rigid_body(&mut self, shape: u8, x: f32, y: f32, scale: f32) -> Result<u32, JsValue> {
        let kind = ShapeKind::from_code(shape, self.core.config().polygon_sides).map_err(js_error)?;
        self.core
            .create_rigid_body(kind, Vec2::new(x, y), scale)
            .map(|h| h.0)
            .map_err(js_error)
    }

    /// Spawn from a JSON `BodyDesc`
    pub fn spawn(&mut self, desc_json: String) -> Result<u32, JsValue> {
        let desc: BodyDesc = serde_json::from_str(&desc_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.spawn(&desc).map(|h| h.0).map_err(js_error)
    }

    /// Remove a body by id. Returns false when no such body exists.
    pub fn destroy_body(&mut self, id: u32) -> bool {
        self.core.destroy_body(BodyHandle(id)).is_ok()
    }

    pub fn apply_explosion(&mut self, x: f32, y: f32, strength: f32, radius: f32) -> u32 {
        self.core.apply_explosion(Vec2::new(x, y), strength, radius) as u32
    }

    /// Remove every body
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === STEPPING ===

    /// Run exactly one fixed step
    pub fn tick(&mut self, dt: f32) {
        self.core.tick(dt);
    }

    /// Accumulate frame time and run the fixed steps it covers
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.core.advance(frame_dt)
    }

    // === RENDER EXTRACTION ===

    pub fn body_ids(&self) -> Vec<u32> {
        self.core.body_handles().into_iter().map(|h| h.0).collect()
    }

    /// `[x0, y0, x1, y1, ...]`; empty for unknown ids
    pub fn point_positions(&self, id: u32) -> Vec<f32> {
        self.core
            .point_positions(BodyHandle(id))
            .map(flatten)
            .unwrap_or_default()
    }

    /// `[ax, ay, bx, by, ...]` per spring
    pub fn spring_segments(&self, id: u32) -> Vec<f32> {
        self.core
            .spring_segments(BodyHandle(id))
            .map(|segs| flatten(segs.into_iter().flat_map(|(a, b)| [a, b])))
            .unwrap_or_default()
    }

    /// `[x, y]`
    pub fn centroid(&self, id: u32) -> Vec<f32> {
        self.core
            .centroid(BodyHandle(id))
            .map(|c| vec![c.x, c.y])
            .unwrap_or_default()
    }

    pub fn rotation(&self, id: u32) -> f32 {
        self.core.rotation(BodyHandle(id)).unwrap_or(0.0)
    }

    /// `[x, y, scale, rotation]`; for rigid bodies `scale` is the randomized
    /// size (radius for circles, side length for squares)
    pub fn transform(&self, id: u32) -> Vec<f32> {
        self.core
            .transform(BodyHandle(id))
            .map(|t| vec![t.position.x, t.position.y, t.scale, t.rotation])
            .unwrap_or_default()
    }

    /// Rigid outline vertices, interleaved; empty for circles and soft bodies
    pub fn outline(&self, id: u32) -> Vec<f32> {
        self.core
            .outline(BodyHandle(id))
            .map(flatten)
            .unwrap_or_default()
    }

    /// Shape code of a body, or -1 for unknown ids
    pub fn body_shape(&self, id: u32) -> i32 {
        self.core
            .body(BodyHandle(id))
            .map(|b| b.shape().code() as i32)
            .unwrap_or(-1)
    }

    pub fn is_rigid(&self, id: u32) -> bool {
        self.core
            .body(BodyHandle(id))
            .map(|b| b.as_rigid().is_some())
            .unwrap_or(false)
    }
}
