use thiserror::Error;

/// Seeding density carried over from the original demo: each cell starts
/// alive with probability 0.15, independently of its neighbors.
pub const ALIVE_PROBABILITY: f32 = 0.15;

/// Rejection reasons for the mutating config surface. Whenever one of these
/// comes back, the previous value is still in place.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    GridSize,

    #[error("cell size must be positive and finite, got {0}")]
    CellSize(f32),

    #[error("speed must be positive")]
    Speed,
}

/// Simulation tunables. `speed` is the generation interval in units of
/// 10 milliseconds (speed 10 = one generation every 100 ms).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    pub grid_size: usize,
    pub cell_size: f32,
    pub speed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 16,
            cell_size: 1.0,
            speed: 10,
        }
    }
}

impl Config {
    /// Check every field at once (used at construction)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::GridSize);
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.speed == 0 {
            return Err(ConfigError::Speed);
        }
        Ok(())
    }

    /// Apply a new grid size, rejecting zero without touching the old value
    pub fn set_grid_size(&mut self, size: usize) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::GridSize);
        }
        self.grid_size = size;
        Ok(())
    }

    /// Apply a new cell size, rejecting non-positive and non-finite values
    pub fn set_cell_size(&mut self, size: f32) -> Result<(), ConfigError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::CellSize(size));
        }
        self.cell_size = size;
        Ok(())
    }

    /// Apply a new speed, rejecting zero
    pub fn set_speed(&mut self, speed: u32) -> Result<(), ConfigError> {
        if speed == 0 {
            return Err(ConfigError::Speed);
        }
        self.speed = speed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_grid_size() {
        let mut config = Config::default();
        assert_eq!(config.set_grid_size(0), Err(ConfigError::GridSize));
        assert_eq!(config.grid_size, 16);

        assert_eq!(config.set_grid_size(24), Ok(()));
        assert_eq!(config.grid_size, 24);
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        let mut config = Config::default();
        assert!(config.set_cell_size(0.0).is_err());
        assert!(config.set_cell_size(-1.5).is_err());
        assert!(config.set_cell_size(f32::NAN).is_err());
        assert!(config.set_cell_size(f32::INFINITY).is_err());
        assert_eq!(config.cell_size, 1.0);

        assert_eq!(config.set_cell_size(2.0), Ok(()));
        assert_eq!(config.cell_size, 2.0);
    }

    #[test]
    fn test_rejects_zero_speed() {
        let mut config = Config::default();
        assert_eq!(config.set_speed(0), Err(ConfigError::Speed));
        assert_eq!(config.speed, 10);

        assert_eq!(config.set_speed(50), Ok(()));
        assert_eq!(config.speed, 50);
    }
}
