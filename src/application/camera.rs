use macroquad::prelude::*;

/// OrbitCamera circles the grid center for 3D navigation
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.8,
            pitch: 0.5,
            distance: 40.0,
            target: Vec3::ZERO,
        }
    }

    /// Rotate around the target; pitch is clamped short of the poles
    pub fn orbit(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-1.5, 1.5);
    }

    /// Scale the orbit distance by factor
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(4.0, 400.0);
    }

    /// Pull back far enough to see the whole grid
    pub fn frame(&mut self, grid_size: usize, cell_size: f32) {
        self.distance = (grid_size as f32 * cell_size * 2.5).clamp(4.0, 400.0);
    }

    /// Reset orientation to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Eye position on the orbit sphere
    pub fn position(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        self.target + vec3(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos) * self.distance
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            target: self.target,
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
