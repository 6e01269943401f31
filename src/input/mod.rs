use macroquad::prelude::*;

use crate::application::{OrbitCamera, Simulation};
use crate::rendering::CubeScene;
use crate::ui::viewport_width;

const ORBIT_SENSITIVITY: f32 = 2.5;

/// Orbit with left mouse drag over the 3D viewport
pub fn handle_orbit(camera: &mut OrbitCamera, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) || mouse_pos.0 >= viewport_width() {
        return;
    }

    // Delta in normalized screen coordinates, so sensitivity is resolution
    // independent
    let delta = mouse_delta_position();
    camera.orbit(delta.x * ORBIT_SENSITIVITY, delta.y * ORBIT_SENSITIVITY);
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut OrbitCamera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom(1.0 / 1.1);
    } else if wheel < 0.0 {
        camera.zoom(1.1);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard(sim: &mut Simulation, camera: &mut OrbitCamera, scene: &mut CubeScene) {
    if is_key_pressed(KeyCode::Space) {
        sim.toggle_running();
    }
    if is_key_pressed(KeyCode::R) {
        sim.reset(scene);
    }
    if is_key_pressed(KeyCode::H) {
        camera.reset();
        camera.frame(sim.config().grid_size, sim.config().cell_size);
    }
}
