use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::{Camera, MoveDirection};

/// Who is driving the camera: the inspector panel or WASD + mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Gui,
    Keyboard,
}

/// Converts absolute cursor positions into frame-to-frame deltas.
///
/// The first sample after `reset` (or ever) is treated as a baseline and
/// yields a zero delta, so re-engaging a drag never produces a spurious
/// jump. The vertical component is inverted: dragging up pitches up.
#[derive(Debug, Clone, Copy)]
pub struct CursorTracker {
    last: Vec2,
    first_sample: bool,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self {
            last: Vec2::ZERO,
            first_sample: true,
        }
    }

    pub fn sample(&mut self, pos: Vec2) -> Vec2 {
        if self.first_sample {
            self.last = pos;
            self.first_sample = false;
            return Vec2::ZERO;
        }
        let delta = Vec2::new(pos.x - self.last.x, self.last.y - pos.y);
        self.last = pos;
        delta
    }

    pub fn reset(&mut self) {
        self.first_sample = true;
    }
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Window-event-based camera input: WASD movement, right-button mouse
/// look, scroll zoom.
pub struct InputHandler {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    rotating: bool,
    cursor: CursorTracker,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            rotating: false,
            cursor: CursorTracker::new(),
        }
    }

    /// Returns true if the event was consumed by the camera.
    pub fn handle_event(&mut self, camera: &mut Camera, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyW) => self.forward = pressed,
                    PhysicalKey::Code(KeyCode::KeyS) => self.backward = pressed,
                    PhysicalKey::Code(KeyCode::KeyA) => self.left = pressed,
                    PhysicalKey::Code(KeyCode::KeyD) => self.right = pressed,
                    _ => return false,
                }
                true
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state,
                ..
            } => {
                if *state == ElementState::Pressed {
                    self.rotating = true;
                } else {
                    self.release_rotate();
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.rotating {
                    let delta = self
                        .cursor
                        .sample(Vec2::new(position.x as f32, position.y as f32));
                    camera.rotate(delta.x, delta.y, true);
                }
                self.rotating
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                camera.zoom(scroll);
                true
            }
            _ => false,
        }
    }

    /// Disengage mouse look and rearm the drag baseline. Split out from
    /// `handle_event` so a release that landed on the GUI (and was
    /// consumed there) can still reach us; see `State::process_event`.
    pub fn release_rotate(&mut self) {
        self.rotating = false;
        self.cursor.reset();
    }

    /// Apply held movement keys for this frame.
    pub fn advance(&self, camera: &mut Camera, dt: f32) {
        if self.forward {
            camera.translate(MoveDirection::Forward, dt);
        }
        if self.backward {
            camera.translate(MoveDirection::Backward, dt);
        }
        if self.left {
            camera.translate(MoveDirection::Left, dt);
        }
        if self.right {
            camera.translate(MoveDirection::Right, dt);
        }
    }

    /// Drop all transient state (used when switching to GUI control so a
    /// stale held key can't keep moving the camera).
    pub fn clear(&mut self) {
        self.forward = false;
        self.backward = false;
        self.left = false;
        self.right = false;
        self.rotating = false;
        self.cursor.reset();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use glam::Vec3;

    #[test]
    fn first_cursor_sample_is_a_baseline() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.sample(Vec2::new(640.0, 360.0)), Vec2::ZERO);
        assert_eq!(tracker.sample(Vec2::new(650.0, 356.0)), Vec2::new(10.0, 4.0));
    }

    #[test]
    fn reset_rearms_the_baseline() {
        let mut tracker = CursorTracker::new();
        let _ = tracker.sample(Vec2::new(0.0, 0.0));
        let _ = tracker.sample(Vec2::new(5.0, 5.0));
        tracker.reset();
        // a big cursor jump while disengaged must not show up as a delta
        assert_eq!(tracker.sample(Vec2::new(900.0, 12.0)), Vec2::ZERO);
    }

    #[test]
    fn vertical_delta_is_inverted() {
        let mut tracker = CursorTracker::new();
        let _ = tracker.sample(Vec2::new(100.0, 100.0));
        // cursor moved down the screen -> negative pitch delta
        let delta = tracker.sample(Vec2::new(100.0, 130.0));
        assert_eq!(delta, Vec2::new(0.0, -30.0));
    }

    #[test]
    fn swallowed_release_still_disengages_mouse_look() {
        let mut input = InputHandler::new();
        input.rotating = true;
        let _ = input.cursor.sample(Vec2::new(100.0, 100.0));
        let _ = input.cursor.sample(Vec2::new(120.0, 90.0));

        // release landed on the panel and was delivered out of band
        input.release_rotate();
        assert!(!input.rotating);

        // next engagement starts from a fresh baseline, so the cursor
        // travel while disengaged never turns into a rotation
        input.rotating = true;
        assert_eq!(input.cursor.sample(Vec2::new(900.0, 12.0)), Vec2::ZERO);
    }

    #[test]
    fn advance_applies_held_directions() {
        let mut camera = Camera::new(Vec3::ZERO, CameraConfig::default());
        let mut input = InputHandler::new();
        input.forward = true;
        input.advance(&mut camera, 1.0);
        assert!(camera.position().z < 0.0);

        input.clear();
        let before = camera.position();
        input.advance(&mut camera, 1.0);
        assert_eq!(camera.position(), before);
    }
}
