// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Orchestration, pacing, configuration
pub mod application;

// Infrastructure layer - UI, rendering bridge, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridPair, Rule};
pub use application::{Config, ConfigError, OrbitCamera, Simulation, SimulationClock};
pub use rendering::{CellPublisher, CubeScene, RenderSink};
pub use ui::Button;
