//! Rigid bodies
//!
//! A body is either a box (cuboid) or a plane. Mass 0 marks a static body that
//! gravity and contacts never move; static bodies can still be re-oriented
//! from outside (the tilting ground).

use glam::{Mat3, Quat, Vec2, Vec3};

use super::types::Transform;

/// Stable index of a body inside a [`PhysicsWorld`](super::PhysicsWorld).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Collision geometry of a body, in body-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    /// Box with the given half extents along local X/Y/Z.
    Cuboid { half_extents: Vec3 },
    /// Plane through the body origin with normal along local +Z.
    ///
    /// `half_size` bounds the plane along local X/Y; `None` is unbounded.
    Plane { half_size: Option<Vec2> },
}

impl BodyShape {
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self::Cuboid { half_extents }
    }

    /// Radius of a sphere around the body origin containing the whole shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            BodyShape::Cuboid { half_extents } => half_extents.length(),
            BodyShape::Plane { half_size: Some(h) } => h.length(),
            BodyShape::Plane { half_size: None } => f32::INFINITY,
        }
    }

    /// Diagonal of the inverse inertia tensor for a body of `mass`.
    fn inverse_inertia(&self, mass: f32) -> Vec3 {
        match *self {
            BodyShape::Cuboid { half_extents: h } if mass > 0.0 => {
                let sq = h * h;
                let inertia = Vec3::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * (mass / 3.0);
                Vec3::new(1.0 / inertia.x, 1.0 / inertia.y, 1.0 / inertia.z)
            }
            _ => Vec3::ZERO,
        }
    }
}

/// A simulated rigid body.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub shape: BodyShape,
    /// Mass in kg; 0 means static.
    pub mass: f32,
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    inv_mass: f32,
    inv_inertia_local: Vec3,
}

impl RigidBody {
    pub fn new(shape: BodyShape, mass: f32, position: Vec3) -> Self {
        let mass = mass.max(0.0);
        Self {
            shape,
            mass,
            position,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
            inv_inertia_local: shape.inverse_inertia(mass),
        }
    }

    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation.normalize();
        self
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// World-space inverse inertia tensor (R * I⁻¹ * Rᵀ).
    pub fn inv_inertia_world(&self) -> Mat3 {
        if self.is_static() {
            return Mat3::ZERO;
        }
        let rot = Mat3::from_quat(self.orientation);
        rot * Mat3::from_diagonal(self.inv_inertia_local) * rot.transpose()
    }

    /// Velocity of the material point at world position `point`.
    pub fn velocity_at(&self, point: Vec3) -> Vec3 {
        self.velocity + self.angular_velocity.cross(point - self.position)
    }

    /// Apply an impulse at a world-space point.
    pub fn apply_impulse(&mut self, impulse: Vec3, point: Vec3) {
        if self.is_static() {
            return;
        }
        self.velocity += impulse * self.inv_mass;
        let torque = (point - self.position).cross(impulse);
        self.angular_velocity += self.inv_inertia_world() * torque;
    }

    /// Current pose by value.
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.orientation)
    }

    /// Transform a world-space point into body-local space.
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.orientation.inverse() * (point - self.position)
    }

    /// Transform a body-local point into world space.
    pub fn to_world(&self, point: Vec3) -> Vec3 {
        self.position + self.orientation * point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_is_static() {
        let body = RigidBody::new(BodyShape::cuboid(Vec3::ONE), 0.0, Vec3::ZERO);
        assert!(body.is_static());
        assert_eq!(body.inv_inertia_world(), Mat3::ZERO);
    }

    #[test]
    fn impulse_on_static_body_is_ignored() {
        let mut body = RigidBody::new(BodyShape::Plane { half_size: None }, 0.0, Vec3::ZERO);
        body.apply_impulse(Vec3::Y * 10.0, Vec3::X);
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn off_center_impulse_spins_the_box() {
        let mut body = RigidBody::new(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::ZERO);
        body.apply_impulse(Vec3::Y, Vec3::X);
        assert!((body.velocity - Vec3::Y).length() < 1e-6);
        assert!(body.angular_velocity.z > 0.0);
    }

    #[test]
    fn local_world_round_trip() {
        let body = RigidBody::new(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::new(1.0, 2.0, 3.0))
            .with_orientation(Quat::from_rotation_y(0.7));
        let p = Vec3::new(0.3, -0.2, 0.9);
        assert!((body.to_local(body.to_world(p)) - p).length() < 1e-5);
    }
}
