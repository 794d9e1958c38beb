//! Physics Tests - Fixed Stepping, Ground Contact and the Cube Drop Sketch
//!
//! Integration tests for the rigid-body world through its public API.

use std::f32::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use glam::{Quat, Vec3};
use letterfall_engine::game::config::DemoConfig;
use letterfall_engine::game::scenes::{CubeDrop, Sketch};
use letterfall_engine::physics::{BodyShape, FIXED_TIME_STEP, PhysicsWorld};

const GRAVITY: Vec3 = Vec3::new(0.0, -40.0, 0.0);

fn ground_orientation() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

// ============================================================================
// Fixed Stepping
// ============================================================================

#[test]
fn test_free_fall_advances_exactly_one_increment_per_step() {
    let mut world = PhysicsWorld::new(GRAVITY);
    let body = world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::new(0.0, 100.0, 0.0));

    for n in 1..=30 {
        let events = world.step(FIXED_TIME_STEP);
        assert!(events.is_empty());
        let velocity = world.body(body).unwrap().velocity;
        assert_relative_eq!(velocity.y, GRAVITY.y * FIXED_TIME_STEP * n as f32, epsilon = 1e-3);
    }
    assert_eq!(world.steps(), 30);
}

#[test]
fn test_zero_dt_is_a_no_op() {
    let mut world = PhysicsWorld::new(GRAVITY);
    let body = world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::new(0.0, 5.0, 0.0));
    world.step(0.0);
    assert_eq!(world.body(body).unwrap().position, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(world.steps(), 0);
}

// ============================================================================
// Ground Contact
// ============================================================================

#[test]
fn test_box_comes_to_rest_on_plane() {
    let mut world = PhysicsWorld::new(GRAVITY);
    let ground = world.add_static_plane(Vec3::ZERO, ground_orientation());
    let body = world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::new(0.0, 4.0, 0.0));

    let mut touched = false;
    for _ in 0..300 {
        for event in world.step(FIXED_TIME_STEP) {
            if event.involves(ground) && event.involves(body) {
                touched = true;
            }
        }
    }

    assert!(touched, "box never reported touching the ground");
    let rest = world.body(body).unwrap();
    assert_relative_eq!(rest.position.y, 1.0, epsilon = 0.05);
    assert!(rest.velocity.length() < 0.1, "still moving: {:?}", rest.velocity);
}

#[test]
fn test_static_plane_never_moves() {
    let mut world = PhysicsWorld::new(GRAVITY);
    let ground = world.add_static_plane(Vec3::ZERO, ground_orientation());
    world.add_dynamic_body(BodyShape::cuboid(Vec3::ONE), 1.0, Vec3::new(0.0, 3.0, 0.0));

    for _ in 0..120 {
        world.step(FIXED_TIME_STEP);
    }

    let plane = world.body(ground).unwrap();
    assert_eq!(plane.position, Vec3::ZERO);
    assert_eq!(plane.velocity, Vec3::ZERO);
    assert!(plane.orientation.angle_between(ground_orientation()) < 1e-6);
}

#[test]
fn test_bounded_plane_ignores_bodies_beyond_edge() {
    let mut world = PhysicsWorld::new(GRAVITY);
    world.add_static_plane_bounded(Vec3::ZERO, ground_orientation(), glam::Vec2::splat(2.0));
    let body = world.add_dynamic_body(BodyShape::cuboid(Vec3::splat(0.5)), 1.0, Vec3::new(10.0, 2.0, 0.0));

    for _ in 0..120 {
        world.step(FIXED_TIME_STEP);
    }
    assert!(world.body(body).unwrap().position.y < -5.0);
}

#[test]
fn test_box_under_plane_falls_away() {
    let mut world = PhysicsWorld::new(GRAVITY);
    let ground = world.add_static_plane_bounded(Vec3::ZERO, ground_orientation(), glam::Vec2::splat(10.0));
    let letter = world.add_dynamic_body(
        BodyShape::cuboid(Vec3::new(1.0, 1.0, 0.1)),
        1.0,
        Vec3::new(0.0, -1.05, 0.0),
    );

    for _ in 0..120 {
        for event in world.step(FIXED_TIME_STEP) {
            assert!(!event.involves(ground), "touched the ground from below");
        }
    }
    assert!(world.body(letter).unwrap().position.y < -5.0);
}

#[test]
fn test_fast_thin_box_lands_instead_of_passing_through() {
    let mut world = PhysicsWorld::new(GRAVITY);
    let ground = world.add_static_plane(Vec3::ZERO, ground_orientation());
    let letter = world.add_dynamic_body(
        BodyShape::cuboid(Vec3::new(1.0, 1.0, 0.1)),
        1.0,
        Vec3::new(0.0, 20.0, 0.0),
    );
    world.set_orientation(letter, ground_orientation());

    let mut touched = false;
    for _ in 0..300 {
        touched |= world.step(FIXED_TIME_STEP).iter().any(|e| e.involves(ground));
    }

    assert!(touched);
    let rest = world.body(letter).unwrap();
    assert_relative_eq!(rest.position.y, 0.1, epsilon = 0.05);
}

// ============================================================================
// Cube Drop Sketch
// ============================================================================

#[test]
fn test_cube_drop_settles_on_ground() {
    let mut sketch = CubeDrop::new(DemoConfig::default());
    for _ in 0..400 {
        sketch.frame(FIXED_TIME_STEP);
    }

    let cube = sketch.world().body(sketch.cube().body).unwrap();
    assert_relative_eq!(cube.position.y, 1.0, epsilon = 0.1);
    assert_eq!(sketch.world().steps(), 400);
    assert!(!sketch.cube().is_scattered());
}

#[test]
fn test_cube_drop_mesh_follows_body() {
    let mut sketch = CubeDrop::new(DemoConfig::default());
    for _ in 0..25 {
        sketch.frame(FIXED_TIME_STEP);
    }
    let body = sketch.world().body(sketch.cube().body).unwrap();
    let mesh = sketch.scene().get(sketch.cube().mesh).unwrap();
    assert_eq!(mesh.position, body.position);
    assert_eq!(mesh.orientation, body.orientation);
    assert!(mesh.material.wireframe);
}
