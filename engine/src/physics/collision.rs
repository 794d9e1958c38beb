//! Contact generation
//!
//! Narrow-phase tests between pairs of bodies. Contacts are corner based:
//! a box corner that ends up inside the other shape produces one contact.
//! This misses pure edge-edge overlap, which is fine for letters and cubes
//! resting on a ground plane and on each other.
//!
//! Every contact is expressed for an ordered pair `(a, b)`: the normal points
//! from `b` toward `a`, so pushing `a` along the normal separates the pair.
//!
//! Planes are one-sided. A box whose centre is below a plane never touches
//! it. Box corners still above a plane but closing on it within `dt` produce
//! speculative contacts with negative depth, so fast thin boxes cannot jump
//! past the surface in one step.

use glam::{Vec2, Vec3};

use super::body::{BodyShape, RigidBody};

/// A single point of contact between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// World-space contact point.
    pub point: Vec3,
    /// Unit normal pointing from body `b` toward body `a`.
    pub normal: Vec3,
    /// Penetration depth. Positive when overlapping, negative for a
    /// speculative contact that is still `-depth` apart.
    pub depth: f32,
}

/// Append the contacts between `a` and `b` to `out`. Returns how many were added.
///
/// `dt` is the look-ahead for speculative plane contacts; 0 reports overlap only.
pub fn collide(a: &RigidBody, b: &RigidBody, dt: f32, out: &mut Vec<Contact>) -> usize {
    let before = out.len();
    match (a.shape, b.shape) {
        (BodyShape::Cuboid { half_extents }, BodyShape::Plane { half_size }) => {
            box_plane(a, half_extents, b, half_size, dt, out, false);
        }
        (BodyShape::Plane { half_size }, BodyShape::Cuboid { half_extents }) => {
            box_plane(b, half_extents, a, half_size, dt, out, true);
        }
        (BodyShape::Cuboid { half_extents: ha }, BodyShape::Cuboid { half_extents: hb }) => {
            corners_in_box(a, ha, b, hb, out, false);
            corners_in_box(b, hb, a, ha, out, true);
        }
        (BodyShape::Plane { .. }, BodyShape::Plane { .. }) => {}
    }
    out.len() - before
}

/// World-space corners of a box body.
pub fn box_corners(body: &RigidBody, half_extents: Vec3) -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sign = Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        );
        *corner = body.to_world(half_extents * sign);
    }
    corners
}

/// Box corners below a plane, or about to reach it. `flipped` means the plane is body `a`.
fn box_plane(
    cuboid: &RigidBody,
    half_extents: Vec3,
    plane: &RigidBody,
    half_size: Option<Vec2>,
    dt: f32,
    out: &mut Vec<Contact>,
    flipped: bool,
) {
    if plane.to_local(cuboid.position).z < 0.0 {
        return;
    }
    let normal = (plane.orientation * Vec3::Z).normalize();
    for corner in box_corners(cuboid, half_extents) {
        let local = plane.to_local(corner);
        let closing = -cuboid.velocity_at(corner).dot(normal) * dt;
        if local.z >= closing.max(0.0) {
            continue;
        }
        if let Some(h) = half_size
            && (local.x.abs() > h.x || local.y.abs() > h.y)
        {
            continue;
        }
        out.push(Contact {
            point: corner,
            normal: if flipped { -normal } else { normal },
            depth: -local.z,
        });
    }
}

/// Corners of `inner` that lie inside the box `outer`.
///
/// With `flipped == false` the pair is `(inner, outer)`; otherwise `(outer, inner)`.
fn corners_in_box(
    inner: &RigidBody,
    inner_half: Vec3,
    outer: &RigidBody,
    outer_half: Vec3,
    out: &mut Vec<Contact>,
    flipped: bool,
) {
    for corner in box_corners(inner, inner_half) {
        let local = outer.to_local(corner);
        let gap = outer_half - local.abs();
        if gap.min_element() <= 0.0 {
            continue;
        }

        // Shallowest axis decides the face the corner is pushed out through.
        let (axis, depth) = if gap.x <= gap.y && gap.x <= gap.z {
            (Vec3::X * local.x.signum(), gap.x)
        } else if gap.y <= gap.z {
            (Vec3::Y * local.y.signum(), gap.y)
        } else {
            (Vec3::Z * local.z.signum(), gap.z)
        };
        let normal = (outer.orientation * axis).normalize();
        out.push(Contact {
            point: corner,
            normal: if flipped { -normal } else { normal },
            depth,
        });
    }
}
