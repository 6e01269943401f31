use macroquad::color::hsl_to_rgb;
use macroquad::prelude::*;
use rayon::prelude::*;

use crate::application::Config;
use crate::domain::{Cell, Grid, PARALLEL_THRESHOLD};

/// Stable integer id addressing one renderer-owned visual
pub type HandleId = usize;

// Palette constants from the original demo: hue sweeps with x at full
// saturation, half lightness
const SATURATION: f32 = 1.0;
const LIGHTNESS: f32 = 0.5;

/// The renderer boundary. The publisher drives visuals exclusively through
/// these four operations and never looks behind them; handles live until the
/// sink itself is torn down.
pub trait RenderSink {
    /// Allocate a fresh visual, hidden until the first `show`
    fn create(&mut self) -> HandleId;

    /// Move, recolor and rescale a visual in place
    fn update(&mut self, id: HandleId, position: Vec3, color: Color, scale: f32);

    fn show(&mut self, id: HandleId);

    fn hide(&mut self, id: HandleId);
}

/// Placement and color for one live cell. Both depend only on the cell's
/// own coordinate, so instances can be computed in any order.
#[derive(Clone, Copy, PartialEq, Debug)]
struct CellInstance {
    position: Vec3,
    color: Color,
}

/// World placement: the grid is centered on the origin, one cell_size per
/// step; hue = (x / grid_size) x 360 degrees.
fn instance_at(x: usize, y: usize, z: usize, grid_size: usize, cell_size: f32) -> CellInstance {
    let half = grid_size as f32 / 2.0;
    let position = vec3(
        (x as f32 - half) * cell_size,
        (y as f32 - half) * cell_size,
        (z as f32 - half) * cell_size,
    );
    let hue = x as f32 / grid_size as f32;
    CellInstance {
        position,
        color: hsl_to_rgb(hue, SATURATION, LIGHTNESS),
    }
}

fn collect_instances(grid: &Grid, config: &Config) -> Vec<CellInstance> {
    grid.iter_alive()
        .map(|(x, y, z)| instance_at(x, y, z, grid.size(), config.cell_size))
        .collect()
}

/// Same output as `collect_instances`, fanned out by z-slice over the
/// read-only grid snapshot
fn collect_instances_parallel(grid: &Grid, config: &Config) -> Vec<CellInstance> {
    let size = grid.size();
    let slices: Vec<Vec<CellInstance>> = (0..size)
        .into_par_iter()
        .map(|z| {
            let mut slice = Vec::new();
            for y in 0..size {
                for x in 0..size {
                    if grid.get(x, y, z).is_some_and(Cell::is_alive) {
                        slice.push(instance_at(x, y, z, size, config.cell_size));
                    }
                }
            }
            slice
        })
        .collect();
    slices.into_iter().flatten().collect()
}

/// CellPublisher reconciles the live-cell set with the renderer, reusing
/// handles across generations instead of allocating a visual per cell per
/// pass. After every publish, visible handles == live cells.
pub struct CellPublisher {
    pool: Vec<HandleId>,
    visible: Vec<HandleId>,
}

impl CellPublisher {
    pub const fn new() -> Self {
        Self {
            pool: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Mirror `grid` into the renderer. Every handle visible from the
    /// previous pass is hidden and pooled before any claim happens, so no
    /// handle stands for two cells within one pass. The pool is an
    /// optimization, not a cap: an empty pool falls back to `create`.
    pub fn publish(&mut self, grid: &Grid, config: &Config, sink: &mut dyn RenderSink) {
        for id in self.visible.drain(..) {
            sink.hide(id);
            self.pool.push(id);
        }

        let instances = if grid.size() >= PARALLEL_THRESHOLD {
            collect_instances_parallel(grid, config)
        } else {
            collect_instances(grid, config)
        };

        // Pool pop/push stays on this thread; only the instance computation
        // above fans out
        for instance in instances {
            let id = self.pool.pop().unwrap_or_else(|| sink.create());
            sink.update(id, instance.position, instance.color, config.cell_size);
            sink.show(id);
            self.visible.push(id);
        }
    }

    /// Hide and pool every outstanding handle. Used on destructive resets
    /// where the grid the visuals mirrored no longer exists.
    pub fn release_all(&mut self, sink: &mut dyn RenderSink) {
        for id in self.visible.drain(..) {
            sink.hide(id);
            self.pool.push(id);
        }
    }

    /// Handles currently showing a live cell
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Handles parked for reuse
    pub fn pooled_count(&self) -> usize {
        self.pool.len()
    }
}

impl Default for CellPublisher {
    fn default() -> Self {
        Self::new()
    }
}
