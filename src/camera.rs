use glam::{Mat4, Vec3};

/// Discrete movement commands fed to [`Camera::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Construction-time camera tuning. The defaults are the classic
/// LearnOpenGL values: looking down -Z, 45 degree FOV.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            fov: 45.0,
        }
    }
}

pub const PITCH_LIMIT: f32 = 89.0;
pub const FOV_MIN: f32 = 1.0;
pub const FOV_MAX: f32 = 45.0;

/// First-person free-fly camera.
///
/// Orientation is two Euler angles in degrees; `front`/`right`/`up` are
/// derived from them as a unit and never mutated independently, so the
/// basis stays orthonormal after every rotation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    move_speed: f32,
    mouse_sensitivity: f32,
    fov: f32,
}

impl Camera {
    pub fn new(position: Vec3, config: CameraConfig) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            move_speed: config.move_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            fov: config.fov.clamp(FOV_MIN, FOV_MAX),
        };
        camera.update_basis();
        camera
    }

    /// Displace along `front` or `right`, scaled by speed and elapsed time.
    /// World space is unbounded; no clamping.
    pub fn translate(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.move_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a cursor delta (already in pixels) to yaw/pitch. Pitch is
    /// clamped short of +-90 so `up` can never flip past vertical.
    pub fn rotate(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// Scroll-wheel zoom: narrows the FOV on scroll-up. Independent of
    /// orientation, so the basis is left alone.
    pub fn zoom(&mut self, scroll_dy: f32) {
        self.fov = (self.fov - scroll_dy).clamp(FOV_MIN, FOV_MAX);
    }

    /// World-to-eye transform. Pure read; valid from construction.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, for the projection matrix.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set orientation directly (panel-driven control mode).
    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        // cross with world_up first, then re-derive up, so up stays
        // perpendicular even when world_up isn't perpendicular to front
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "expected {b:?}, got {a:?}");
    }

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front().length() - 1.0).abs() < EPS);
        assert!((camera.right().length() - 1.0).abs() < EPS);
        assert!((camera.up().length() - 1.0).abs() < EPS);
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::default();
        assert_vec3_near(camera.front(), Vec3::NEG_Z);
        assert_vec3_near(camera.right(), Vec3::X);
        assert_vec3_near(camera.up(), Vec3::Y);
    }

    #[test]
    fn basis_stays_orthonormal_under_rotation() {
        let mut camera = Camera::default();
        let deltas = [
            (10.0, 5.0),
            (-250.0, 40.0),
            (1234.5, -600.0),
            (0.3, 0.0),
            (-0.1, 88.8),
        ];
        for (dx, dy) in deltas {
            camera.rotate(dx, dy, true);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn pitch_is_clamped_after_every_rotate() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.rotate(37.0, 500.0, true);
            assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
        }
        for _ in 0..50 {
            camera.rotate(-11.0, -500.0, true);
            assert!(camera.pitch() >= -PITCH_LIMIT && camera.pitch() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn huge_pitch_delta_clamps_exactly() {
        let mut camera = Camera::default();
        // sensitivity 0.1, so a 1000px drag asks for +100 degrees
        camera.rotate(0.0, 1000.0, true);
        assert!((camera.pitch() - PITCH_LIMIT).abs() < EPS);
    }

    #[test]
    fn unconstrained_pitch_is_not_clamped() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < EPS);
    }

    #[test]
    fn zoom_is_clamped_to_fov_bounds() {
        let mut camera = Camera::default();
        camera.zoom(10.0);
        assert!((camera.fov() - 35.0).abs() < EPS);

        let mut camera = Camera::default();
        camera.zoom(50.0);
        assert!((camera.fov() - FOV_MIN).abs() < EPS);

        camera.zoom(-1000.0);
        assert!((camera.fov() - FOV_MAX).abs() < EPS);
    }

    #[test]
    fn zoom_sequences_stay_in_bounds() {
        let mut camera = Camera::default();
        for dy in [3.0, -7.5, 100.0, -0.1, -500.0, 44.0, 44.0] {
            camera.zoom(dy);
            assert!(camera.fov() >= FOV_MIN && camera.fov() <= FOV_MAX);
        }
    }

    #[test]
    fn forward_then_backward_returns_to_start() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), CameraConfig::default());
        camera.rotate(123.0, -45.0, true);
        let start = camera.position();

        camera.translate(MoveDirection::Forward, 0.73);
        camera.translate(MoveDirection::Backward, 0.73);
        assert_vec3_near(camera.position(), start);

        camera.translate(MoveDirection::Left, 1.5);
        camera.translate(MoveDirection::Right, 1.5);
        assert_vec3_near(camera.position(), start);
    }

    #[test]
    fn translate_moves_along_front_and_right() {
        let mut camera = Camera::default();
        camera.translate(MoveDirection::Forward, 1.0);
        // default speed 2.5, front = -Z
        assert_vec3_near(camera.position(), Vec3::new(0.0, 0.0, -2.5));

        let mut camera = Camera::default();
        camera.translate(MoveDirection::Right, 2.0);
        assert_vec3_near(camera.position(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn view_matrix_is_pure() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, 5.0), CameraConfig::default());
        camera.rotate(33.0, 12.0, true);
        let a = camera.view_matrix();
        let b = camera.view_matrix();
        assert_eq!(a.to_cols_array(), b.to_cols_array());
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), CameraConfig::default());
        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        let got = camera.view_matrix().to_cols_array();
        for (g, e) in got.iter().zip(expected.to_cols_array()) {
            assert!((g - e).abs() < 1e-4);
        }
    }

    #[test]
    fn set_rotation_clamps_pitch_and_rebuilds_basis() {
        let mut camera = Camera::default();
        camera.set_rotation(0.0, 120.0);
        assert!((camera.pitch() - PITCH_LIMIT).abs() < EPS);
        assert_orthonormal(&camera);
        // yaw 0 looks down +X
        assert!(camera.front().x > 0.0);
    }
}
