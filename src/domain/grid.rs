use super::{Cell, rules::Rule};
use rand::Rng;
use rayon::prelude::*;

/// Grid edge length at which the parallel evolve path starts to pay off.
pub const PARALLEL_THRESHOLD: usize = 24;

/// Grid is one bounded size x size x size buffer of cells, flat-indexed
/// z-major. Coordinates outside [0, size) are not wrapped and carry no
/// virtual dead value; aggregates simply skip them.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size * size],
        }
    }

    /// Grid edge length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 3D coordinates to 1D index
    const fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.size + y) * self.size + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<Cell> {
        (x < self.size && y < self.size && z < self.size)
            .then(|| self.cells[self.index(x, y, z)])
    }

    /// Set cell at position
    pub fn set(&mut self, x: usize, y: usize, z: usize, cell: Cell) {
        if x < self.size && y < self.size && z < self.size {
            let idx = self.index(x, y, z);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells over the 26-offset Moore neighborhood.
    /// Offsets landing outside the grid are skipped, not wrapped, so edge
    /// cells see fewer neighbors (a corner sees at most 7).
    pub fn count_live_neighbors(&self, x: usize, y: usize, z: usize) -> u8 {
        let size = self.size as i32;
        let mut count = 0;

        for dz in -1..=1i32 {
            for dy in -1..=1i32 {
                for dx in -1..=1i32 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }

                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;
                    let nz = z as i32 + dz;

                    if nx < 0 || nx >= size || ny < 0 || ny >= size || nz < 0 || nz >= size {
                        continue;
                    }

                    if self.cells[self.index(nx as usize, ny as usize, nz as usize)].is_alive() {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    /// One generation transition, written into `next`. Pure function of
    /// `self`; `next` is fully overwritten.
    pub fn evolve_into(&self, rule: &dyn Rule, next: &mut Grid) {
        debug_assert_eq!(self.size, next.size);

        for z in 0..self.size {
            for y in 0..self.size {
                for x in 0..self.size {
                    let idx = self.index(x, y, z);
                    let neighbors = self.count_live_neighbors(x, y, z);
                    next.cells[idx] = rule.evolve(self.cells[idx], neighbors);
                }
            }
        }
    }

    /// Parallel evolution partitioned by z-slice. Each slice of `next` is
    /// written by exactly one worker from the read-only `self` snapshot, so
    /// no partial generation is ever observable.
    pub fn evolve_into_parallel(&self, rule: &dyn Rule, next: &mut Grid) {
        debug_assert_eq!(self.size, next.size);

        let size = self.size;
        let layer = size * size;
        next.cells
            .par_chunks_mut(layer)
            .enumerate()
            .for_each(|(z, slice)| {
                for y in 0..size {
                    for x in 0..size {
                        let neighbors = self.count_live_neighbors(x, y, z);
                        let current = self.cells[self.index(x, y, z)];
                        slice[y * size + x] = rule.evolve(current, neighbors);
                    }
                }
            });
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Seed every cell independently: alive with the given probability
    pub fn randomize_with(&mut self, rng: &mut impl Rng, alive_probability: f32) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random::<f32>() < alive_probability {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Number of live cells in the grid
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over the coordinates of all live cells, z-major
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |z| (0..size).flat_map(move |y| (0..size).map(move |x| (x, y, z))))
            .filter(move |&(x, y, z)| self.cells[self.index(x, y, z)].is_alive())
    }
}

/// GridPair is the double buffer: `current` is the only readable side,
/// `next` is scratch that every evolve pass fully overwrites before the
/// swap. A generation either completes into `next` wholesale or (on
/// resize/reseed) is discarded wholesale.
pub struct GridPair {
    current: Grid,
    next: Grid,
}

impl GridPair {
    /// Allocate both buffers and seed them identically
    pub fn new(size: usize, rng: &mut impl Rng, alive_probability: f32) -> Self {
        let mut current = Grid::new(size);
        current.randomize_with(rng, alive_probability);
        let next = current.clone();
        Self { current, next }
    }

    /// The readable side of the buffer pair
    pub const fn current(&self) -> &Grid {
        &self.current
    }

    /// Grid edge length
    pub const fn size(&self) -> usize {
        self.current.size()
    }

    /// Run one generation: evolve current into next, then swap. The swap is
    /// the single point after which readers see the new generation.
    pub fn advance(&mut self, rule: &dyn Rule) {
        if self.current.size() >= PARALLEL_THRESHOLD {
            self.current.evolve_into_parallel(rule, &mut self.next);
        } else {
            self.current.evolve_into(rule, &mut self.next);
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Destructive: reallocate both buffers at the new size and reseed.
    /// Nothing carries over from the old grid.
    pub fn resize(&mut self, new_size: usize, rng: &mut impl Rng, alive_probability: f32) {
        *self = Self::new(new_size, rng, alive_probability);
    }

    /// Reseed at the current size
    pub fn reseed(&mut self, rng: &mut impl Rng, alive_probability: f32) {
        self.current.randomize_with(rng, alive_probability);
        self.next.clone_from(&self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StandardRule;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.get(3, 3, 3), Some(Cell::Dead));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::new(3);
        assert_eq!(grid.get(3, 0, 0), None);
        assert_eq!(grid.get(0, 3, 0), None);
        assert_eq!(grid.get(0, 0, 3), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(5);
        grid.set(1, 2, 3, Cell::Alive);
        assert_eq!(grid.get(1, 2, 3), Some(Cell::Alive));
        assert_eq!(grid.get(3, 2, 1), Some(Cell::Dead));
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn test_isolated_cell_has_zero_neighbors() {
        // Out-of-bounds offsets are excluded from the sum, never counted
        // as dead or wrapped
        let mut grid = Grid::new(3);
        grid.set(1, 1, 1, Cell::Alive);
        assert_eq!(grid.count_live_neighbors(1, 1, 1), 0);
    }

    #[test]
    fn test_full_grid_neighbor_counts() {
        let mut grid = Grid::new(3);
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    grid.set(x, y, z, Cell::Alive);
                }
            }
        }

        // Interior cell sees the full Moore neighborhood
        assert_eq!(grid.count_live_neighbors(1, 1, 1), 26);
        // A corner only has 7 in-bounds offsets
        assert_eq!(grid.count_live_neighbors(0, 0, 0), 7);
        assert_eq!(grid.count_live_neighbors(2, 2, 2), 7);
        // An edge cell has 11, a face center 17
        assert_eq!(grid.count_live_neighbors(1, 0, 0), 11);
        assert_eq!(grid.count_live_neighbors(1, 1, 0), 17);
    }

    #[test]
    fn test_isolated_cell_dies_in_one_step() {
        let mut grid = Grid::new(4);
        grid.set(2, 2, 2, Cell::Alive);

        let mut next = Grid::new(4);
        grid.evolve_into(&StandardRule, &mut next);

        // The lone cell starves and no dead neighbor reaches exactly 3
        assert_eq!(next.alive_count(), 0);
    }

    #[test]
    fn test_saturated_grid_dies_in_one_step() {
        // Size-3 grid, every cell alive except the center
        let mut grid = Grid::new(3);
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    if (x, y, z) != (1, 1, 1) {
                        grid.set(x, y, z, Cell::Alive);
                    }
                }
            }
        }

        // Hand-computed live-neighbor counts: the dead center is adjacent to
        // every corner, edge and face cell, so each class loses exactly one
        // from its in-bounds total
        assert_eq!(grid.count_live_neighbors(0, 0, 0), 6); // corner: 7 - 1
        assert_eq!(grid.count_live_neighbors(1, 0, 0), 10); // edge: 11 - 1
        assert_eq!(grid.count_live_neighbors(1, 1, 0), 16); // face: 17 - 1
        assert_eq!(grid.count_live_neighbors(1, 1, 1), 26);

        let mut next = Grid::new(3);
        grid.evolve_into(&StandardRule, &mut next);

        // Every live count is above the survival window and the center's 26
        // is not a birth, so the whole grid dies
        assert_eq!(next.alive_count(), 0);
    }

    #[test]
    fn test_birth_on_exactly_three_neighbors() {
        let mut grid = Grid::new(4);
        grid.set(0, 1, 1, Cell::Alive);
        grid.set(1, 0, 1, Cell::Alive);
        grid.set(1, 1, 0, Cell::Alive);

        assert_eq!(grid.count_live_neighbors(1, 1, 1), 3);

        let mut next = Grid::new(4);
        grid.evolve_into(&StandardRule, &mut next);
        assert_eq!(next.get(1, 1, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_serial_and_parallel_evolve_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(PARALLEL_THRESHOLD);
        grid.randomize_with(&mut rng, 0.15);

        let mut serial = Grid::new(PARALLEL_THRESHOLD);
        let mut parallel = Grid::new(PARALLEL_THRESHOLD);
        grid.evolve_into(&StandardRule, &mut serial);
        grid.evolve_into_parallel(&StandardRule, &mut parallel);

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_evolution_is_deterministic() {
        // Two identically seeded grids stay bit-identical across steps
        let mut a = Grid::new(8);
        let mut b = Grid::new(8);
        a.randomize_with(&mut StdRng::seed_from_u64(7), 0.15);
        b.randomize_with(&mut StdRng::seed_from_u64(7), 0.15);
        assert_eq!(a, b);

        let mut scratch_a = Grid::new(8);
        let mut scratch_b = Grid::new(8);
        for _ in 0..5 {
            a.evolve_into(&StandardRule, &mut scratch_a);
            b.evolve_into(&StandardRule, &mut scratch_b);
            std::mem::swap(&mut a, &mut scratch_a);
            std::mem::swap(&mut b, &mut scratch_b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_randomize_density() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::new(20);
        grid.randomize_with(&mut rng, 0.15);

        // 8000 cells at p = 0.15: expect ~1200 alive
        let alive = grid.alive_count();
        assert!((1000..1400).contains(&alive), "got {alive}");
    }

    #[test]
    fn test_iter_alive_matches_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(6);
        grid.randomize_with(&mut rng, 0.3);

        let listed: Vec<_> = grid.iter_alive().collect();
        assert_eq!(listed.len(), grid.alive_count());
        for (x, y, z) in listed {
            assert_eq!(grid.get(x, y, z), Some(Cell::Alive));
        }
    }

    #[test]
    fn test_pair_advance_swaps_buffers() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pair = GridPair::new(4, &mut rng, 0.15);

        let mut expected = Grid::new(4);
        pair.current().evolve_into(&StandardRule, &mut expected);

        pair.advance(&StandardRule);
        assert_eq!(*pair.current(), expected);
    }

    #[test]
    fn test_pair_resize_reseeds_at_new_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pair = GridPair::new(4, &mut rng, 0.15);

        pair.resize(6, &mut rng, 0.5);
        assert_eq!(pair.size(), 6);
        assert!(pair.current().get(5, 5, 5).is_some());
        assert!(pair.current().alive_count() > 0);
    }

    #[test]
    fn test_pair_reseed_keeps_size() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut pair = GridPair::new(5, &mut rng, 0.15);
        let before = pair.current().clone();

        pair.reseed(&mut rng, 0.5);
        assert_eq!(pair.size(), 5);
        assert_ne!(*pair.current(), before);
    }

    #[test]
    fn test_clear() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = Grid::new(5);
        grid.randomize_with(&mut rng, 0.5);
        assert!(grid.alive_count() > 0);

        grid.clear();
        assert_eq!(grid.alive_count(), 0);
    }
}
