mod publisher;
mod scene;

pub use publisher::{CellPublisher, HandleId, RenderSink};
pub use scene::CubeScene;

use macroquad::prelude::*;

use crate::application::{OrbitCamera, Simulation};
use crate::ui::{Button, Dropdown, PANEL_WIDTH, panel_x};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, dropdowns, and info
pub fn draw_controls(
    sim: &Simulation,
    scene: &CubeScene,
    camera: &OrbitCamera,
    buttons: &[Button],
    dropdowns: &[Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    // Draw all buttons FIRST
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    // Controls help - positioned below the dropdowns
    let controls = [
        ("Controls:", 240.0, 14.0, WHITE),
        ("Drag: Orbit", 255.0, 12.0, GRAY),
        ("Wheel: Zoom", 268.0, 12.0, GRAY),
        ("Space: Pause", 281.0, 12.0, GRAY),
        ("R: Reseed", 294.0, 12.0, GRAY),
        ("H: Home view", 307.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Grid info
    let size = sim.config().grid_size;
    let cells = size * size * size;
    draw_text(
        &format!("Grid: {size}x{size}x{size}"),
        px,
        335.0,
        12.0,
        Color::from_rgba(150, 150, 150, 255),
    );
    draw_text(
        &format!("Cells: {}", format_number(cells)),
        px,
        350.0,
        12.0,
        Color::from_rgba(150, 150, 150, 255),
    );
    draw_text(
        &format!("Alive: {}", format_number(sim.alive_count())),
        px,
        365.0,
        12.0,
        Color::from_rgba(0, 255, 150, 255),
    );

    // Handle pool stats: cubes in use vs parked for reuse
    draw_text(
        &format!(
            "Handles: {} / {}",
            sim.visible_handles(),
            scene.handle_count()
        ),
        px,
        380.0,
        12.0,
        Color::from_rgba(100, 200, 255, 255),
    );

    // Step time, color coded against the frame budget
    let step_ms = sim.last_step_time_ms;
    let perf_color = if step_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if step_ms < 16.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };
    draw_text(&format!("Step: {step_ms:.1}ms"), px, 405.0, 13.0, perf_color);
    draw_text(&format!("FPS: {}", get_fps()), px, 420.0, 12.0, GRAY);

    // Status block
    let labels = [
        ("Speed:".to_string(), 560.0, 16.0, WHITE),
        (
            format!("{} ms/gen", sim.config().speed * 10),
            580.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:".to_string(), 610.0, 16.0, WHITE),
        (
            format!("{}", sim.generation),
            630.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:".to_string(), 665.0, 16.0, WHITE),
        (
            if sim.is_running { "Running" } else { "Paused" }.to_string(),
            685.0,
            16.0,
            if sim.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("Distance:".to_string(), 715.0, 14.0, WHITE),
        (
            format!("{:.0}", camera.distance),
            730.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    // Draw dropdowns LAST so they appear on top of everything; the open one
    // goes on top of the closed ones
    let mut open_dropdown: Option<&Dropdown> = None;
    for dropdown in dropdowns.iter() {
        if dropdown.is_open() {
            open_dropdown = Some(dropdown);
        } else {
            dropdown.draw(mouse_pos);
        }
    }
    if let Some(dd) = open_dropdown {
        dd.draw(mouse_pos);
    }
}
