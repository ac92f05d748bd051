use glam::{EulerRot, Mat4, Vec3};

/// Per-frame Euler rotation of the centre piece (applied in X, Y, Z order).
#[derive(Clone, Debug, Default)]
pub struct Spin {
    pub angles: Vec3,
    pub rate_per_frame: Vec3,
}

impl Spin {
    pub fn new(rate_per_frame: Vec3) -> Self {
        Self {
            angles: Vec3::ZERO,
            rate_per_frame,
        }
    }

    // Advances once per rendered frame, not per second.
    pub fn advance(&mut self) {
        self.angles += self.rate_per_frame;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}
