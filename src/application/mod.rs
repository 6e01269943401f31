mod camera;
mod clock;
mod config;
mod simulation;

pub use camera::OrbitCamera;
pub use clock::SimulationClock;
pub use config::{ALIVE_PROBABILITY, Config, ConfigError};
pub use simulation::Simulation;
