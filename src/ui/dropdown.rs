use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 30.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Close the dropdown
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn row_rect(&self, row: usize) -> Rect {
        // Row 0 is the closed header; rows 1.. are the open menu items
        Rect::new(self.x, self.y + row as f32 * ROW_HEIGHT, self.width, ROW_HEIGHT)
    }

    fn hovered_row(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        let point = vec2(mouse_pos.0, mouse_pos.1);
        let rows = if self.is_open { self.items.len() + 1 } else { 1 };
        (0..rows).find(|&row| self.row_rect(row).contains(point))
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let hovered = self.hovered_row(mouse_pos);

        // Closed header showing the current selection
        let header = self.row_rect(0);
        let header_color = if hovered == Some(0) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(header.x, header.y, header.w, header.h, header_color);
        draw_rectangle_lines(header.x, header.y, header.w, header.h, 2.0, WHITE);
        draw_text(&self.items[self.selected], header.x + 5.0, header.y + 21.0, 16.0, WHITE);
        draw_text("v", header.x + header.w - 16.0, header.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let row = self.row_rect(i + 1);
            let row_color = if hovered == Some(i + 1) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.w, row.h, row_color);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(item, row.x + 5.0, row.y + 21.0, 16.0, WHITE);
        }

        let menu = self.row_rect(1);
        draw_rectangle_lines(
            menu.x,
            menu.y,
            menu.w,
            self.items.len() as f32 * ROW_HEIGHT,
            2.0,
            WHITE,
        );
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        match self.hovered_row(mouse_pos) {
            // Toggling the header open/closed is not a selection change
            Some(0) => {
                self.is_open = !self.is_open;
                false
            }
            Some(row) if self.is_open => {
                let index = row - 1;
                let changed = self.selected != index;
                self.selected = index;
                self.is_open = false;
                changed
            }
            _ => {
                // Click landed outside the menu
                self.is_open = false;
                false
            }
        }
    }
}
