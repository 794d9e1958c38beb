//! Sync Tests - Physics to Visual Transform Copies
//!
//! Every visual mesh must equal its body after creation and after every
//! step + synchronize, and a second synchronize changes nothing.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use letterfall_engine::game::entity::{EntityFactory, EntityPair, Pairing};
use letterfall_engine::game::font::FontFace;
use letterfall_engine::game::scene::{Material, MeshId, RenderScene, VisualMesh};
use letterfall_engine::game::sync::{sync_pairing, synchronize};
use letterfall_engine::game::types::{generate_plane, hex_color};
use letterfall_engine::physics::{BodyHandle, FIXED_TIME_STEP, PhysicsWorld};

struct Fixture {
    world: PhysicsWorld,
    scene: RenderScene,
    ground: Pairing,
    pairs: Vec<EntityPair>,
}

fn fixture() -> Fixture {
    let mut world = PhysicsWorld::new(Vec3::new(0.0, -40.0, 0.0));
    let mut scene = RenderScene::new();
    let body = world.add_static_plane_bounded(
        Vec3::ZERO,
        Quat::from_rotation_x(-FRAC_PI_2),
        Vec2::splat(10.0),
    );
    let mesh = scene.add(VisualMesh::new(
        generate_plane(Vec2::splat(20.0), 4, hex_color(0xcccccc)),
        Material::basic(hex_color(0xcccccc)),
    ));
    let ground = Pairing { mesh, body };

    let font = FontFace::builtin();
    let factory = EntityFactory::default();
    let pairs = ['a', 'W', '7']
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            factory
                .create_text_entity(c, &font, Vec3::new(i as f32 * 3.0 - 3.0, 12.0 + i as f32, 0.5))
                .register(&mut world, &mut scene)
        })
        .collect();

    Fixture {
        world,
        scene,
        ground,
        pairs,
    }
}

fn assert_in_sync(f: &Fixture) {
    for pair in &f.pairs {
        let body = f.world.body(pair.body).unwrap();
        let mesh = f.scene.get(pair.mesh).unwrap();
        assert_eq!(mesh.position, body.position, "{:?} position", pair.glyph);
        assert_eq!(mesh.orientation, body.orientation, "{:?} orientation", pair.glyph);
    }
}

#[test]
fn test_pairs_match_immediately_after_creation() {
    let f = fixture();
    for pair in &f.pairs {
        let body = f.world.body(pair.body).unwrap();
        let mesh = f.scene.get(pair.mesh).unwrap();
        assert!((mesh.position - body.position).abs().max_element() <= 1e-6);
    }
}

#[test]
fn test_step_then_sync_copies_exactly() {
    let mut f = fixture();
    for _ in 0..90 {
        f.world.step(FIXED_TIME_STEP);
        let written = synchronize(&f.world, &mut f.scene, f.ground, &f.pairs);
        assert_eq!(written, f.pairs.len() + 1);
        assert_in_sync(&f);
    }
}

#[test]
fn test_sync_twice_is_idempotent() {
    let mut f = fixture();
    for _ in 0..40 {
        f.world.step(FIXED_TIME_STEP);
    }
    synchronize(&f.world, &mut f.scene, f.ground, &f.pairs);
    let first: Vec<_> = f.scene.iter().map(|(_, m)| (m.position, m.orientation)).collect();
    synchronize(&f.world, &mut f.scene, f.ground, &f.pairs);
    let second: Vec<_> = f.scene.iter().map(|(_, m)| (m.position, m.orientation)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_sync_never_writes_back_to_physics() {
    let mut f = fixture();
    let pair = f.pairs[0].pairing();
    let before = f.world.body(pair.body).unwrap().position;
    f.scene.get_mut(pair.mesh).unwrap().position = Vec3::splat(99.0);
    synchronize(&f.world, &mut f.scene, f.ground, &f.pairs);
    assert_eq!(f.world.body(pair.body).unwrap().position, before);
    assert_eq!(f.scene.get(pair.mesh).unwrap().position, before);
}

#[test]
fn test_ground_tilt_reaches_mesh() {
    let mut f = fixture();
    let tilted = Quat::from_rotation_z(0.4) * Quat::from_rotation_x(-FRAC_PI_2);
    f.world.set_orientation(f.ground.body, tilted);
    synchronize(&f.world, &mut f.scene, f.ground, &f.pairs);
    let mesh = f.scene.get(f.ground.mesh).unwrap();
    assert!(mesh.orientation.angle_between(tilted) < 1e-5);
}

#[test]
fn test_missing_counterpart_is_skipped() {
    let mut f = fixture();
    let dangling = Pairing {
        mesh: MeshId(1000),
        body: BodyHandle(0),
    };
    assert!(!sync_pairing(&f.world, &mut f.scene, dangling));
}
