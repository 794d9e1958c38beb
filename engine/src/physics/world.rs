//! Physics world
//!
//! Owns every rigid body and advances them by one fixed increment per
//! [`PhysicsWorld::step`]. There is no sub-stepping and no interpolation: the
//! caller decides how often to step.
//!
//! # Step
//!
//! 1. Apply gravity to dynamic bodies
//! 2. Naive broadphase (all pairs, bounding-sphere prefilter)
//! 3. Corner contacts for each overlapping pair, plus speculative plane contacts
//! 4. Sequential-impulse solver (restitution, Coulomb friction, Baumgarte bias)
//! 5. Integrate positions and orientations
//!
//! A pair counts as colliding when it overlaps or when a speculative contact
//! had to push back, meaning the bodies meet during this step.

use glam::{Quat, Vec2, Vec3};

use super::body::{BodyHandle, BodyShape, RigidBody};
use super::collision::{Contact, collide};

/// Tunables for the world solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub gravity: Vec3,
    /// Solver passes over all contacts per step.
    pub iterations: u32,
    /// Coulomb friction coefficient shared by all contacts.
    pub friction: f32,
    /// Bounciness in [0, 1].
    pub restitution: f32,
    /// Penetration allowed before positional correction kicks in.
    pub slop: f32,
    /// Fraction of the penetration resolved per step.
    pub bias_factor: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.82, 0.0),
            iterations: 10,
            friction: 0.3,
            restitution: 0.0,
            slop: 0.005,
            bias_factor: 0.2,
        }
    }
}

/// Two bodies touched during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: BodyHandle,
    pub b: BodyHandle,
}

impl CollisionEvent {
    pub fn involves(&self, handle: BodyHandle) -> bool {
        self.a == handle || self.b == handle
    }
}

/// Contact between two bodies plus the impulses accumulated by the solver.
#[derive(Debug, Clone, Copy)]
struct SolverContact {
    a: usize,
    b: usize,
    contact: Contact,
    normal_impulse: f32,
    tangent_impulse: [f32; 2],
    bias: f32,
    bounce: f32,
}

/// A simulation context holding all registered bodies.
pub struct PhysicsWorld {
    config: WorldConfig,
    bodies: Vec<RigidBody>,
    contacts: Vec<SolverContact>,
    scratch: Vec<Contact>,
    steps: u64,
}

impl PhysicsWorld {
    /// Create a world with default solver settings and the given gravity.
    pub fn new(gravity: Vec3) -> Self {
        Self::with_config(WorldConfig {
            gravity,
            ..WorldConfig::default()
        })
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            contacts: Vec::new(),
            scratch: Vec::new(),
            steps: 0,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Register a body and return its handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(body);
        handle
    }

    /// Unbounded static plane; its normal is the local +Z axis.
    pub fn add_static_plane(&mut self, position: Vec3, orientation: Quat) -> BodyHandle {
        self.add_body(
            RigidBody::new(BodyShape::Plane { half_size: None }, 0.0, position)
                .with_orientation(orientation),
        )
    }

    /// Static plane limited to `half_size` along its local X/Y axes.
    pub fn add_static_plane_bounded(
        &mut self,
        position: Vec3,
        orientation: Quat,
        half_size: Vec2,
    ) -> BodyHandle {
        self.add_body(
            RigidBody::new(BodyShape::Plane { half_size: Some(half_size) }, 0.0, position)
                .with_orientation(orientation),
        )
    }

    /// Dynamic body at rest; `mass == 0.0` makes it static.
    pub fn add_dynamic_body(&mut self, shape: BodyShape, mass: f32, position: Vec3) -> BodyHandle {
        self.add_body(RigidBody::new(shape, mass, position))
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.index())
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.index())
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyHandle(i as u32), b))
    }

    /// Re-orient a body directly (used to animate static bodies).
    pub fn set_orientation(&mut self, handle: BodyHandle, orientation: Quat) {
        if let Some(body) = self.body_mut(handle) {
            body.orientation = orientation.normalize();
        }
    }

    /// Advance the simulation by exactly `dt` seconds.
    ///
    /// Returns one event per pair of bodies that were in contact.
    pub fn step(&mut self, dt: f32) -> Vec<CollisionEvent> {
        if dt <= 0.0 {
            return Vec::new();
        }

        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut().filter(|b| !b.is_static()) {
            body.velocity += gravity * dt;
        }

        self.find_contacts(dt);

        for _ in 0..self.config.iterations {
            for i in 0..self.contacts.len() {
                self.solve_contact(i);
            }
        }
        let events = self.touching_pairs();

        for body in self.bodies.iter_mut().filter(|b| !b.is_static()) {
            body.position += body.velocity * dt;
            let w = body.angular_velocity;
            let spin = Quat::from_xyzw(w.x, w.y, w.z, 0.0) * body.orientation;
            body.orientation = Quat::from_xyzw(
                body.orientation.x + spin.x * 0.5 * dt,
                body.orientation.y + spin.y * 0.5 * dt,
                body.orientation.z + spin.z * 0.5 * dt,
                body.orientation.w + spin.w * 0.5 * dt,
            )
            .normalize();
        }

        self.steps += 1;
        events
    }

    fn find_contacts(&mut self, dt: f32) {
        self.contacts.clear();

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (a, b) = (&self.bodies[i], &self.bodies[j]);
                if a.is_static() && b.is_static() {
                    continue;
                }
                let reach = a.shape.bounding_radius() + b.shape.bounding_radius();
                if reach.is_finite() && a.position.distance_squared(b.position) > reach * reach {
                    continue;
                }

                self.scratch.clear();
                if collide(a, b, dt, &mut self.scratch) == 0 {
                    continue;
                }

                for contact in self.scratch.drain(..) {
                    let approach = (a.velocity_at(contact.point) - b.velocity_at(contact.point))
                        .dot(contact.normal);
                    // A speculative contact lets the pair close exactly its gap.
                    let bias = if contact.depth < 0.0 {
                        contact.depth / dt
                    } else {
                        self.config.bias_factor / dt * (contact.depth - self.config.slop).max(0.0)
                    };
                    let bounce = if approach < -1.0 && contact.depth >= 0.0 {
                        -self.config.restitution * approach
                    } else {
                        0.0
                    };
                    self.contacts.push(SolverContact {
                        a: i,
                        b: j,
                        contact,
                        normal_impulse: 0.0,
                        tangent_impulse: [0.0; 2],
                        bias,
                        bounce,
                    });
                }
            }
        }
    }

    /// One event per pair with an overlapping or load-bearing contact.
    /// Contacts of a pair are stored contiguously.
    fn touching_pairs(&self) -> Vec<CollisionEvent> {
        let mut events: Vec<CollisionEvent> = Vec::new();
        for sc in &self.contacts {
            if sc.contact.depth < 0.0 && sc.normal_impulse <= 0.0 {
                continue;
            }
            let event = CollisionEvent {
                a: BodyHandle(sc.a as u32),
                b: BodyHandle(sc.b as u32),
            };
            if events.last() != Some(&event) {
                events.push(event);
            }
        }
        events
    }

    fn solve_contact(&mut self, index: usize) {
        let sc = self.contacts[index];
        let (a, b) = pair_mut(&mut self.bodies, sc.a, sc.b);
        let n = sc.contact.normal;
        let p = sc.contact.point;
        let ra = p - a.position;
        let rb = p - b.position;
        let inv_ia = a.inv_inertia_world();
        let inv_ib = b.inv_inertia_world();
        let (inv_ma, inv_mb) = (a.inv_mass(), b.inv_mass());

        let effective_mass = |dir: Vec3| -> f32 {
            let ka = inv_ma + dir.dot((inv_ia * ra.cross(dir)).cross(ra));
            let kb = inv_mb + dir.dot((inv_ib * rb.cross(dir)).cross(rb));
            let k = ka + kb;
            if k > 0.0 { 1.0 / k } else { 0.0 }
        };

        // Normal
        let rel = a.velocity_at(p) - b.velocity_at(p);
        let vn = rel.dot(n);
        let lambda = -(vn - sc.bias - sc.bounce) * effective_mass(n);
        let accumulated = (sc.normal_impulse + lambda).max(0.0);
        let delta = accumulated - sc.normal_impulse;
        a.apply_impulse(n * delta, p);
        b.apply_impulse(-n * delta, p);

        // Friction along two tangents
        let max_friction = self.config.friction * accumulated;
        let (t1, t2) = n.any_orthonormal_pair();
        let mut tangent_impulse = sc.tangent_impulse;
        for (k, t) in [t1, t2].into_iter().enumerate() {
            let rel = a.velocity_at(p) - b.velocity_at(p);
            let vt = rel.dot(t);
            let lambda = -vt * effective_mass(t);
            let total = (tangent_impulse[k] + lambda).clamp(-max_friction, max_friction);
            let delta_t = total - tangent_impulse[k];
            tangent_impulse[k] = total;
            a.apply_impulse(t * delta_t, p);
            b.apply_impulse(-t * delta_t, p);
        }

        let sc = &mut self.contacts[index];
        sc.normal_impulse = accumulated;
        sc.tangent_impulse = tangent_impulse;
    }
}

/// Two distinct mutable bodies out of one slice.
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn handles_are_sequential() {
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let a = world.add_static_plane(Vec3::ZERO, Quat::IDENTITY);
        let b = world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::Y);
        assert_eq!(a, BodyHandle(0));
        assert_eq!(b, BodyHandle(1));
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn non_positive_dt_is_a_no_op() {
        let mut world = PhysicsWorld::new(Vec3::new(0.0, -10.0, 0.0));
        let h = world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::ZERO);
        world.step(0.0);
        assert_eq!(world.body(h).map(|b| b.velocity), Some(Vec3::ZERO));
        assert_eq!(world.steps(), 0);
    }

    #[test]
    fn set_orientation_normalizes() {
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let h = world.add_static_plane(Vec3::ZERO, Quat::IDENTITY);
        world.set_orientation(h, Quat::from_xyzw(0.0, 0.0, 0.0, 2.0));
        let q = world.body(h).map(|b| b.orientation).unwrap_or_default();
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn resting_box_reports_collision_with_ground() {
        let mut world = PhysicsWorld::new(Vec3::new(0.0, -40.0, 0.0));
        let ground = world.add_static_plane(Vec3::ZERO, Quat::from_rotation_x(-FRAC_PI_2));
        let cube = world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::new(0.0, 0.98, 0.0));
        let events = world.step(DT);
        assert_eq!(events, vec![CollisionEvent { a: ground, b: cube }]);
        assert!(events[0].involves(cube));
    }
}
