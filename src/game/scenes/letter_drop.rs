//! Letter Drop
//!
//! Type to drop letters onto the ground; each letter bounces off in a random
//! direction the first time it hits something. Backspace tilts the ground
//! to dump the pile, and typing is ignored until the ground is level again.
//!
//! Nothing is simulated until the font has loaded. Keys pressed before then
//! are dropped.

use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::config::DemoConfig;
use crate::game::entity::{EntityFactory, EntityPair, Pairing};
use crate::game::font::FontLoad;
use crate::game::input::{IgnoreReason, InputCommand, InputController, InputMode, SpawnRegion};
use crate::game::scene::{Material, RenderScene, VisualMesh};
use crate::game::session::Session;
use crate::game::sync::synchronize;
use crate::game::tilt::TiltAnimation;
use crate::game::types::{generate_plane, hex_color};
use crate::input::KeyPress;
use crate::physics::{BodyHandle, PhysicsWorld, WorldConfig};

use super::Sketch;

const PLANE_SEGMENTS: u32 = 32;
/// World axis the ground tilts around.
const TILT_AXIS: Vec3 = Vec3::Z;

pub struct LetterDrop {
    config: DemoConfig,
    session: Session,
    factory: EntityFactory,
    controller: InputController,
    rng: StdRng,

    world: Option<PhysicsWorld>,
    scene: RenderScene,
    ground: Option<Pairing>,
    ground_rest: Quat,
    pairs: Vec<EntityPair>,
    pair_by_body: HashMap<BodyHandle, usize>,
    tilt: Option<TiltAnimation>,
}

impl LetterDrop {
    /// Start loading the configured font in the background.
    pub fn new(config: DemoConfig) -> Self {
        let load = FontLoad::spawn(config.letters.font_path.clone());
        Self::with_font_load(config, load, StdRng::from_entropy())
    }

    pub fn with_font_load(config: DemoConfig, load: FontLoad, rng: StdRng) -> Self {
        Self {
            factory: EntityFactory::from_config(&config.letters),
            controller: InputController::new(SpawnRegion::from_config(&config.letters)),
            session: Session::new(load),
            rng,
            world: None,
            scene: RenderScene::new(),
            ground: None,
            ground_rest: Quat::from_rotation_x(-FRAC_PI_2),
            pairs: Vec::new(),
            pair_by_body: HashMap::new(),
            tilt: None,
            config,
        }
    }

    /// Build the physics world and the ground. Runs once, when the font arrives.
    fn initialize(&mut self) {
        let physics = &self.config.physics;
        let mut world = PhysicsWorld::with_config(WorldConfig {
            gravity: physics.gravity,
            iterations: physics.solver_iterations,
            ..WorldConfig::default()
        });

        let letters = &self.config.letters;
        let ground_body =
            world.add_static_plane_bounded(Vec3::ZERO, self.ground_rest, letters.ground_half_size);
        let color = hex_color(letters.ground_color);
        let ground_mesh = self.scene.add(VisualMesh::new(
            generate_plane(letters.ground_half_size * 2.0, PLANE_SEGMENTS, color),
            Material::basic(color),
        ));
        let ground = Pairing {
            mesh: ground_mesh,
            body: ground_body,
        };

        synchronize(&world, &mut self.scene, ground, &self.pairs);
        log::info!(
            "letter world initialized (gravity {:?}, step {:.4}s)",
            physics.gravity,
            physics.fixed_step
        );
        self.ground = Some(ground);
        self.world = Some(world);
    }

    pub fn is_initialized(&self) -> bool {
        self.world.is_some()
    }

    pub fn world(&self) -> Option<&PhysicsWorld> {
        self.world.as_ref()
    }

    pub fn pairs(&self) -> &[EntityPair] {
        &self.pairs
    }

    pub fn ground(&self) -> Option<Pairing> {
        self.ground
    }

    pub fn input_mode(&self) -> InputMode {
        self.controller.mode()
    }

    pub fn tilt(&self) -> Option<&TiltAnimation> {
        self.tilt.as_ref()
    }

    fn spawn(&mut self, glyph: char, position: Vec3) {
        let (Some(world), Some(font)) = (self.world.as_mut(), self.session.font()) else {
            return;
        };
        let pair = self
            .factory
            .create_text_entity(glyph, font, position)
            .register(world, &mut self.scene);
        log::debug!("spawned {glyph:?} at {position:?}");
        self.pair_by_body.insert(pair.body, self.pairs.len());
        self.pairs.push(pair);
    }

    fn start_tilt(&mut self) {
        let letters = &self.config.letters;
        self.tilt = Some(TiltAnimation::new(
            self.ground_rest,
            TILT_AXIS,
            letters.tilt_angle,
            letters.tilt_duration,
        ));
        log::debug!("tilting ground, {} letters", self.pairs.len());
    }
}

impl Sketch for LetterDrop {
    fn title(&self) -> &str {
        "Letter Drop"
    }

    fn frame(&mut self, dt: f32) {
        if self.session.poll() {
            self.initialize();
        }
        let (Some(world), Some(ground)) = (self.world.as_mut(), self.ground) else {
            return;
        };

        for event in world.step(self.config.physics.fixed_step) {
            for handle in [event.a, event.b] {
                let Some(&index) = self.pair_by_body.get(&handle) else {
                    continue;
                };
                if let Some(body) = world.body_mut(handle)
                    && self.pairs[index].on_collision(body, &mut self.rng)
                {
                    log::debug!("scattered {:?}", self.pairs[index].glyph);
                }
            }
        }

        if let Some(tilt) = self.tilt.as_mut() {
            let step = tilt.advance(dt);
            world.set_orientation(ground.body, step.orientation);
            if step.completed {
                self.tilt = None;
                self.controller.on_animation_complete();
                log::debug!("tilt finished");
            }
        }

        synchronize(world, &mut self.scene, ground, &self.pairs);
    }

    fn on_key(&mut self, press: &KeyPress) -> InputCommand {
        if !self.is_initialized() {
            log::debug!("dropped key {press:?}: assets still loading");
            return InputCommand::Ignored(IgnoreReason::Loading);
        }

        let command = self.controller.handle_key(press, &mut self.rng);
        match command {
            InputCommand::Spawn { glyph, position } => self.spawn(glyph, position),
            InputCommand::StartTilt => self.start_tilt(),
            InputCommand::Ignored(reason) => log::debug!("ignored {press:?}: {reason:?}"),
        }
        command
    }

    fn scene(&self) -> &RenderScene {
        &self.scene
    }

    fn camera_position(&self) -> Vec3 {
        self.config.view.camera_position
    }

    fn status(&self) -> String {
        if !self.is_initialized() {
            return "LOADING FONT".to_string();
        }
        match self.controller.mode() {
            InputMode::Enabled => format!("LETTERS {}", self.pairs.len()),
            InputMode::Disabled => format!("TILTING {:.0}", self.tilt.as_ref().map_or(0.0, |t| t.progress() * 100.0)),
        }
    }
}
