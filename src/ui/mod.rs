mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the 3D viewport area
pub fn viewport_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Grid edge lengths offered in the dropdown; the cell count grows
/// cubically, so the list stops well short of the 2D demo sizes
pub const GRID_SIZES: &[(usize, &str)] = &[
    (8, "8x8x8"),
    (12, "12x12x12"),
    (16, "16x16x16"),
    (20, "20x20x20"),
    (24, "24x24x24"),
    (32, "32x32x32"),
    (48, "48x48x48"),
];

/// Cube edge lengths in world units
pub const CELL_SIZES: &[(f32, &str)] = &[
    (0.5, "0.5"),
    (1.0, "1.0"),
    (1.5, "1.5"),
    (2.0, "2.0"),
];

/// Speed presets; the label shows the resulting generation interval
pub const SPEEDS: &[(u32, &str)] = &[
    (1, "10 ms"),
    (5, "50 ms"),
    (10, "100 ms"),
    (25, "250 ms"),
    (50, "500 ms"),
    (100, "1 s"),
];

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 450.0, PANEL_WIDTH, BUTTON_HEIGHT, "Pause/Resume"),
        Button::new(px, 500.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reseed"),
    ]
}
