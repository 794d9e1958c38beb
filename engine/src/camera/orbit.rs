//! Orbit Camera
//!
//! Perspective camera that orbits, pans and zooms around a target point.
//! The eye position is stored directly (not as spherical angles) so other
//! code, like the camera panel, can write it and the orbit controls keep
//! working from wherever the eye ends up.
//!
//! Controls:
//! - Left mouse drag: Orbit (rotate around target)
//! - Right mouse drag: Pan (translate target and eye)
//! - Scroll wheel: Zoom (change distance from target)

use glam::{Mat4, Vec3};

use crate::input::MouseButton;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default eye position.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(13.0, 13.0, 16.0);
/// Default vertical field of view in degrees.
const DEFAULT_FOV: f32 = 75.0;
/// Near clip plane.
const DEFAULT_NEAR: f32 = 0.1;
/// Far clip plane.
const DEFAULT_FAR: f32 = 100.0;

/// Minimum zoom distance.
const MIN_DISTANCE: f32 = 1.0;
/// Maximum zoom distance.
const MAX_DISTANCE: f32 = 80.0;

/// Elevation limit in degrees (keeps the view matrix away from the poles).
const MAX_ELEVATION: f32 = 89.0;

/// Orbit sensitivity: degrees per pixel of mouse movement.
const ORBIT_SENSITIVITY: f32 = 0.3;
/// Pan sensitivity factor: multiplied by distance for depth-proportional panning.
const PAN_SENSITIVITY: f32 = 0.002;
/// Scroll zoom factor: how much each scroll tick affects distance.
const SCROLL_FACTOR: f32 = 0.1;

// ============================================================================
// ORBIT CAMERA
// ============================================================================

/// A perspective camera orbiting a target point. Y is up.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// The point the camera looks at and orbits around.
    pub target: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,

    is_orbiting: bool,
    is_panning: bool,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self::looking_at(DEFAULT_POSITION, Vec3::ZERO, aspect)
    }

    pub fn looking_at(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            aspect,
            fov: DEFAULT_FOV,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            is_orbiting: false,
            is_panning: false,
        }
    }

    // ========================================================================
    // MATRIX COMPUTATION
    // ========================================================================

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Right-handed perspective with wgpu's [0, 1] depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    // ========================================================================
    // CONTROLS
    // ========================================================================

    /// Rotate the eye around the target by mouse deltas in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius < 1e-4 {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) - (dx * ORBIT_SENSITIVITY).to_radians();
        let elevation = ((offset.y / radius).clamp(-1.0, 1.0).asin()
            + (dy * ORBIT_SENSITIVITY).to_radians())
        .clamp(-MAX_ELEVATION.to_radians(), MAX_ELEVATION.to_radians());

        let cos_elev = elevation.cos();
        self.position = self.target
            + Vec3::new(
                radius * cos_elev * azimuth.sin(),
                radius * elevation.sin(),
                radius * cos_elev * azimuth.cos(),
            );
    }

    /// Move eye and target together in the camera's right/up plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let scale = PAN_SENSITIVITY * self.distance();
        let shift = right * (-dx * scale) + up * (dy * scale);
        self.position += shift;
        self.target += shift;
    }

    /// Multiplicative zoom; positive delta moves closer.
    pub fn zoom(&mut self, delta: f32) {
        let offset = self.position - self.target;
        let distance = offset.length();
        if distance < 1e-4 {
            return;
        }
        let new_distance = (distance * (1.0 - delta * SCROLL_FACTOR)).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.position = self.target + offset / distance * new_distance;
    }

    /// Start or stop a drag. Left orbits, right pans.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.is_orbiting = pressed,
            MouseButton::Right => self.is_panning = pressed,
            _ => {}
        }
    }

    /// Apply a cursor delta to whichever drag is active.
    pub fn handle_mouse_move(&mut self, dx: f32, dy: f32) {
        if self.is_orbiting {
            self.orbit(dx, dy);
        }
        if self.is_panning {
            self.pan(dx, dy);
        }
    }

    /// Update the viewport aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_orbiting || self.is_panning
    }
}

// ============================================================================
// TESTS
// ============================================================================
