use std::time::Duration;

use crate::domain::{Grid, GridPair, Rule, default_rule};
use crate::rendering::{CellPublisher, RenderSink};

use super::clock::SimulationClock;
use super::config::{ALIVE_PROBABILITY, Config, ConfigError};

/// Simulation owns the double-buffered grid, the update rule, the pacing
/// clock and the handle pool, and exposes the command surface the demo
/// drives. No simulation state lives outside this value.
pub struct Simulation {
    grids: GridPair,
    rule: Box<dyn Rule>,
    clock: SimulationClock,
    publisher: CellPublisher,
    config: Config,
    pub is_running: bool,
    pub generation: u64,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Create a simulation with the default configuration
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Create a simulation with a caller-supplied configuration
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let mut rng = rand::rng();
        Self {
            grids: GridPair::new(config.grid_size, &mut rng, ALIVE_PROBABILITY),
            rule: default_rule(),
            clock: SimulationClock::new(config.speed),
            publisher: CellPublisher::new(),
            config,
            is_running: true,
            generation: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Host-loop entry point: called once per frame with a monotonic
    /// timestamp. Runs at most one generation, then reconciles the
    /// renderer with the new current buffer.
    pub fn advance(&mut self, now: Duration, sink: &mut dyn RenderSink) {
        if !self.is_running || !self.clock.tick(now) {
            return;
        }

        let start = std::time::Instant::now();
        self.grids.advance(self.rule.as_ref());
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        self.publisher.publish(self.grids.current(), &self.config, sink);
        self.generation += 1;
    }

    /// Push the current grid to the renderer without stepping (first frame
    /// after construction)
    pub fn refresh(&mut self, sink: &mut dyn RenderSink) {
        self.publisher.publish(self.grids.current(), &self.config, sink);
    }

    /// Destructive: reallocates both buffers at the new size, reseeds, and
    /// recycles every outstanding handle. Nothing carries over.
    pub fn set_grid_size(
        &mut self,
        size: usize,
        sink: &mut dyn RenderSink,
    ) -> Result<(), ConfigError> {
        self.config.set_grid_size(size)?;

        let mut rng = rand::rng();
        self.grids.resize(size, &mut rng, ALIVE_PROBABILITY);
        self.generation = 0;

        self.publisher.release_all(sink);
        self.publisher.publish(self.grids.current(), &self.config, sink);
        Ok(())
    }

    /// Cosmetic: repositions and rescales the existing visuals. Cell states
    /// are untouched.
    pub fn set_cell_size(
        &mut self,
        size: f32,
        sink: &mut dyn RenderSink,
    ) -> Result<(), ConfigError> {
        self.config.set_cell_size(size)?;
        self.publisher.publish(self.grids.current(), &self.config, sink);
        Ok(())
    }

    /// Retime the clock; applies to the next tick comparison
    pub fn set_speed(&mut self, speed: u32) -> Result<(), ConfigError> {
        self.config.set_speed(speed)?;
        self.clock.set_speed(speed);
        Ok(())
    }

    /// Reseed at the current size. Config, rule and pacing are untouched.
    pub fn reset(&mut self, sink: &mut dyn RenderSink) {
        let mut rng = rand::rng();
        self.grids.reseed(&mut rng, ALIVE_PROBABILITY);
        self.generation = 0;

        self.publisher.release_all(sink);
        self.publisher.publish(self.grids.current(), &self.config, sink);
    }

    /// Swap the update rule for subsequent generations
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// The authoritative (current) grid
    pub const fn grid(&self) -> &Grid {
        self.grids.current()
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn alive_count(&self) -> usize {
        self.grids.current().alive_count()
    }

    pub fn visible_handles(&self) -> usize {
        self.publisher.visible_count()
    }

    pub fn pooled_handles(&self) -> usize {
        self.publisher.pooled_count()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
