//! Cube Drop
//!
//! One wireframe cube falls from 10 m onto a grey ground plane.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::game::config::DemoConfig;
use crate::game::entity::{EntityFactory, EntityPair, Pairing};
use crate::game::scene::{Material, RenderScene, VisualMesh};
use crate::game::sync::synchronize;
use crate::game::types::{generate_plane, hex_color};
use crate::physics::{PhysicsWorld, WorldConfig};

use super::Sketch;

const CUBE_HALF_EXTENTS: Vec3 = Vec3::ONE;
const CUBE_START: Vec3 = Vec3::new(0.0, 10.0, 0.0);
const CUBE_COLOR: u32 = 0xff0000;
const PLANE_SEGMENTS: u32 = 32;

pub struct CubeDrop {
    config: DemoConfig,
    world: PhysicsWorld,
    scene: RenderScene,
    ground: Pairing,
    cube: EntityPair,
}

impl CubeDrop {
    pub fn new(config: DemoConfig) -> Self {
        let mut world = PhysicsWorld::with_config(WorldConfig {
            gravity: config.physics.gravity,
            iterations: config.physics.solver_iterations,
            ..WorldConfig::default()
        });
        let mut scene = RenderScene::new();

        let half_size = config.letters.ground_half_size;
        let ground_body = world.add_static_plane_bounded(
            Vec3::ZERO,
            Quat::from_rotation_x(-FRAC_PI_2),
            half_size,
        );
        let ground_mesh = scene.add(VisualMesh::new(
            generate_plane(half_size * 2.0, PLANE_SEGMENTS, hex_color(config.letters.ground_color)),
            Material::basic(hex_color(config.letters.ground_color)),
        ));
        let ground = Pairing {
            mesh: ground_mesh,
            body: ground_body,
        };

        let cube = EntityFactory::from_config(&config.letters)
            .create_box_entity(
                CUBE_HALF_EXTENTS,
                1.0,
                CUBE_START,
                Material::basic(hex_color(CUBE_COLOR)).wireframe(),
            )
            .register(&mut world, &mut scene);

        let mut sketch = Self {
            config,
            world,
            scene,
            ground,
            cube,
        };
        synchronize(&sketch.world, &mut sketch.scene, sketch.ground, std::slice::from_ref(&sketch.cube));
        log::info!("cube drop ready: {} bodies", sketch.world.len());
        sketch
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn cube(&self) -> &EntityPair {
        &self.cube
    }

    pub fn ground(&self) -> Pairing {
        self.ground
    }
}

impl Sketch for CubeDrop {
    fn title(&self) -> &str {
        "Cube Drop"
    }

    fn frame(&mut self, _dt: f32) {
        self.world.step(self.config.physics.fixed_step);
        synchronize(
            &self.world,
            &mut self.scene,
            self.ground,
            std::slice::from_ref(&self.cube),
        );
    }

    fn scene(&self) -> &RenderScene {
        &self.scene
    }

    fn camera_position(&self) -> Vec3 {
        self.config.view.camera_position
    }

    fn status(&self) -> String {
        format!("STEP {}", self.world.steps())
    }
}
