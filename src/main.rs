use std::time::Duration;

use macroquad::prelude::*;

use life3d::{
    CubeScene, OrbitCamera, Simulation,
    domain::all_rules,
    input, rendering,
    ui::{self, CELL_SIZES, Dropdown, GRID_SIZES, SPEEDS},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "3D Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut sim = Simulation::new();
    let mut scene = CubeScene::new();
    let mut camera = OrbitCamera::new();
    camera.frame(sim.config().grid_size, sim.config().cell_size);

    // Show the seeded grid before the first generation fires
    sim.refresh(&mut scene);

    // Dropdowns - simple vertical stack at the top of the panel
    let px = ui::panel_x();
    let grid_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut grid_dropdown = Dropdown::new(px, 20.0, ui::PANEL_WIDTH, "Grid Size", grid_items);
    grid_dropdown.set_selected(2); // 16x16x16, the default config

    let rule_items: Vec<String> = all_rules().iter().map(|(name, _)| name.to_string()).collect();
    let mut rule_dropdown = Dropdown::new(px, 75.0, ui::PANEL_WIDTH, "Rule", rule_items);

    let cell_items: Vec<String> = CELL_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut cell_dropdown = Dropdown::new(px, 130.0, ui::PANEL_WIDTH, "Cell Size", cell_items);
    cell_dropdown.set_selected(1); // 1.0

    let speed_items: Vec<String> = SPEEDS.iter().map(|(_, name)| name.to_string()).collect();
    let mut speed_dropdown = Dropdown::new(px, 185.0, ui::PANEL_WIDTH, "Speed", speed_items);
    speed_dropdown.set_selected(2); // 100 ms

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        grid_dropdown.set_position(px, 20.0);
        rule_dropdown.set_position(px, 75.0);
        cell_dropdown.set_position(px, 130.0);
        speed_dropdown.set_position(px, 185.0);

        let buttons = ui::create_buttons();

        // Handle dropdowns - only one can be open at a time
        if grid_dropdown.update(mouse_pos) {
            let (size, _) = GRID_SIZES[grid_dropdown.selected()];
            if sim.set_grid_size(size, &mut scene).is_ok() {
                camera.frame(size, sim.config().cell_size);
            }
        }
        if grid_dropdown.is_open() {
            rule_dropdown.close();
            cell_dropdown.close();
            speed_dropdown.close();
        }

        if rule_dropdown.update(mouse_pos) {
            if let Some((_, rule)) = all_rules().into_iter().nth(rule_dropdown.selected()) {
                sim.set_rule(rule);
            }
        }
        if rule_dropdown.is_open() {
            grid_dropdown.close();
            cell_dropdown.close();
            speed_dropdown.close();
        }

        if cell_dropdown.update(mouse_pos) {
            let (size, _) = CELL_SIZES[cell_dropdown.selected()];
            if sim.set_cell_size(size, &mut scene).is_ok() {
                camera.frame(sim.config().grid_size, size);
            }
        }
        if cell_dropdown.is_open() {
            grid_dropdown.close();
            rule_dropdown.close();
            speed_dropdown.close();
        }

        if speed_dropdown.update(mouse_pos) {
            let (speed, _) = SPEEDS[speed_dropdown.selected()];
            let _ = sim.set_speed(speed);
        }
        if speed_dropdown.is_open() {
            grid_dropdown.close();
            rule_dropdown.close();
            cell_dropdown.close();
        }

        // Buttons
        if buttons[0].is_clicked(mouse_pos) {
            sim.toggle_running();
        }
        if buttons[1].is_clicked(mouse_pos) {
            sim.reset(&mut scene);
        }

        // Camera and keyboard input
        input::handle_orbit(&mut camera, mouse_pos);
        input::handle_zoom(&mut camera);
        input::process_keyboard(&mut sim, &mut camera, &mut scene);

        // One advance per frame; the simulation clock decides whether a
        // generation is due
        sim.advance(Duration::from_secs_f64(get_time()), &mut scene);

        // Render: 3D pass for the cubes, then the 2D overlay
        clear_background(BLACK);
        set_camera(&camera.to_camera3d());
        scene.draw();
        set_default_camera();

        let dropdowns: &[Dropdown] = &[
            grid_dropdown.clone(),
            rule_dropdown.clone(),
            cell_dropdown.clone(),
            speed_dropdown.clone(),
        ];
        rendering::draw_controls(&sim, &scene, &camera, &buttons, dropdowns, mouse_pos);

        next_frame().await;
    }
}
