use glam::{Mat4, Vec3};

const POLAR_EPS: f32 = 1e-6;

/// Camera orbiting a target point, driven by pointer drags and wheel zoom.
///
/// Position is kept in spherical coordinates around `target`: `radius`, the
/// azimuth `theta` around +Y (0 looks down -Z from +Z) and the polar angle
/// `phi` from +Y.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl OrbitCamera {
    /// Place the camera at `eye` looking at `target`.
    pub fn looking_at(eye: Vec3, target: Vec3, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            radius,
            theta,
            phi: phi.clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS),
            fovy_radians,
            aspect: 1.0,
            znear,
            zfar,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            enable_zoom: true,
            enable_pan: true,
            min_radius: 0.0,
            max_radius: f32::INFINITY,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit by a pointer movement of (`dx`, `dy`) pixels on a viewport `viewport_h` pixels tall.
    ///
    /// A drag spanning the full viewport height turns the camera by one full revolution.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        let h = viewport_h.max(1.0);
        let tau = std::f32::consts::TAU;
        self.theta -= tau * dx / h * self.rotate_speed;
        self.phi -= tau * dy / h * self.rotate_speed;
        self.phi = self
            .phi
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);
    }

    /// Wheel zoom: negative `delta_y` moves closer, positive moves away.
    pub fn zoom(&mut self, delta_y: f32) {
        if !self.enable_zoom || delta_y == 0.0 {
            return;
        }
        let scale = 0.95_f32.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.radius *= scale;
        } else {
            self.radius /= scale;
        }
        self.radius = self
            .radius
            .clamp(self.min_radius.max(f32::EPSILON), self.max_radius);
    }

    /// Slide target and eye together in the view plane.
    ///
    /// Scaled so the point under the cursor at the target's depth follows the pointer.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        if !self.enable_pan {
            return;
        }
        let h = viewport_h.max(1.0);
        let target_distance = self.radius * (self.fovy_radians * 0.5).tan();
        let scale = 2.0 * target_distance / h * self.pan_speed;
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.target += (up * dy - right * dx) * scale;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_phi * sin_theta,
                self.radius * cos_phi,
                self.radius * sin_phi * cos_theta,
            )
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye()).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
