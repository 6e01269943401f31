use macroquad::prelude::*;

use super::publisher::{HandleId, RenderSink};

/// One pooled cube visual owned by the scene
struct CubeVisual {
    position: Vec3,
    color: Color,
    scale: f32,
    visible: bool,
}

/// CubeScene renders each visible handle as a colored cube. Handles index
/// into `cubes` and stay valid for the scene's whole lifetime; hiding never
/// deallocates, so the vector only grows to the high-water mark of live
/// cells.
pub struct CubeScene {
    cubes: Vec<CubeVisual>,
}

impl CubeScene {
    pub const fn new() -> Self {
        Self { cubes: Vec::new() }
    }

    /// Total visuals ever allocated, visible or parked
    pub fn handle_count(&self) -> usize {
        self.cubes.len()
    }

    pub fn visible_count(&self) -> usize {
        self.cubes.iter().filter(|cube| cube.visible).count()
    }

    /// Draw every visible cube. Call inside a 3D camera pass.
    pub fn draw(&self) {
        for cube in self.cubes.iter().filter(|cube| cube.visible) {
            let size = Vec3::splat(cube.scale);
            draw_cube(cube.position, size, None, cube.color);
            draw_cube_wires(cube.position, size, BLACK);
        }
    }
}

impl RenderSink for CubeScene {
    fn create(&mut self) -> HandleId {
        self.cubes.push(CubeVisual {
            position: Vec3::ZERO,
            color: WHITE,
            scale: 1.0,
            visible: false,
        });
        self.cubes.len() - 1
    }

    fn update(&mut self, id: HandleId, position: Vec3, color: Color, scale: f32) {
        if let Some(cube) = self.cubes.get_mut(id) {
            cube.position = position;
            cube.color = color;
            cube.scale = scale;
        }
    }

    fn show(&mut self, id: HandleId) {
        if let Some(cube) = self.cubes.get_mut(id) {
            cube.visible = true;
        }
    }

    fn hide(&mut self, id: HandleId) {
        if let Some(cube) = self.cubes.get_mut(id) {
            cube.visible = false;
        }
    }
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new()
    }
}
