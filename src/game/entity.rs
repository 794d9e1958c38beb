//! Renderable Entities
//!
//! An entity is one visual mesh paired with one rigid body. The factory
//! builds both halves with the same starting transform; registering the
//! spawn hands the halves to the scene and the physics world and returns the
//! [`EntityPair`] the synchronizer walks every frame.
//!
//! Letters use the same physics box regardless of how wide the glyph is.

use glam::Vec3;
use rand::Rng;

use crate::game::config::LetterConfig;
use crate::game::font::FontFace;
use crate::game::glyph_mesh::{GlyphMeshOptions, text_geometry};
use crate::game::scene::{Material, MeshId, RenderScene, VisualMesh};
use crate::game::types::{generate_box, hex_color};
use crate::physics::{BodyHandle, BodyShape, PhysicsWorld, RigidBody};

/// Link between a visual mesh and the body that drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub mesh: MeshId,
    pub body: BodyHandle,
}

/// Bounds of the one-shot velocity a letter receives on first contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterRange {
    /// x and z are drawn from [-horizontal, horizontal]
    pub horizontal: f32,
    pub vertical_min: f32,
    pub vertical_max: f32,
}

impl Default for ScatterRange {
    fn default() -> Self {
        Self {
            horizontal: 10.0,
            vertical_min: 5.0,
            vertical_max: 15.0,
        }
    }
}

impl ScatterRange {
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-self.horizontal..=self.horizontal),
            rng.gen_range(self.vertical_min..=self.vertical_max),
            rng.gen_range(-self.horizontal..=self.horizontal),
        )
    }

    pub fn contains(&self, velocity: Vec3) -> bool {
        velocity.x.abs() <= self.horizontal
            && velocity.z.abs() <= self.horizontal
            && (self.vertical_min..=self.vertical_max).contains(&velocity.y)
    }
}

// ============================================================================
// ENTITY PAIR
// ============================================================================

/// A registered entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPair {
    pub mesh: MeshId,
    pub body: BodyHandle,
    /// Character shown by a letter entity
    pub glyph: Option<char>,
    /// `None` means collisions never change the body's velocity
    pub scatter: Option<ScatterRange>,
    scattered: bool,
}

impl EntityPair {
    pub fn pairing(&self) -> Pairing {
        Pairing {
            mesh: self.mesh,
            body: self.body,
        }
    }

    pub fn is_scattered(&self) -> bool {
        self.scattered
    }

    /// React to a collision of this entity's body.
    ///
    /// The first call on a scattering entity overwrites the body's velocity
    /// with a random one and returns true; later calls do nothing.
    pub fn on_collision(&mut self, body: &mut RigidBody, rng: &mut impl Rng) -> bool {
        let Some(range) = self.scatter else {
            return false;
        };
        if self.scattered {
            return false;
        }
        self.scattered = true;
        body.velocity = range.sample(rng);
        true
    }
}

// ============================================================================
// ENTITY FACTORY
// ============================================================================

/// Both halves of an entity before registration.
#[derive(Debug, Clone)]
pub struct EntitySpawn {
    pub mesh: VisualMesh,
    pub body: RigidBody,
    pub glyph: Option<char>,
    pub scatter: Option<ScatterRange>,
    /// Translation applied to the geometry to center it on its bounds
    pub recenter: Vec3,
}

impl EntitySpawn {
    /// Add both halves to their owners.
    pub fn register(self, world: &mut PhysicsWorld, scene: &mut RenderScene) -> EntityPair {
        let body = world.add_body(self.body);
        let mesh = scene.add(self.mesh);
        EntityPair {
            mesh,
            body,
            glyph: self.glyph,
            scatter: self.scatter,
            scattered: false,
        }
    }
}

/// Builds letter and box entities.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFactory {
    pub glyph: GlyphMeshOptions,
    /// Physics box used for every letter
    pub glyph_half_extents: Vec3,
    pub glyph_mass: f32,
    pub scatter: ScatterRange,
}

impl Default for EntityFactory {
    fn default() -> Self {
        Self::from_config(&LetterConfig::default())
    }
}

impl EntityFactory {
    pub fn from_config(config: &LetterConfig) -> Self {
        Self {
            glyph: GlyphMeshOptions {
                size: config.glyph_size,
                depth: config.glyph_depth,
                color: hex_color(config.glyph_color),
            },
            glyph_half_extents: config.glyph_half_extents,
            glyph_mass: config.glyph_mass,
            scatter: ScatterRange {
                horizontal: config.scatter_horizontal,
                vertical_min: config.scatter_vertical_min,
                vertical_max: config.scatter_vertical_max,
            },
        }
    }

    /// A letter: centered extruded glyph plus a fixed-size box body, both at `spawn`.
    pub fn create_text_entity(&self, glyph: char, font: &FontFace, spawn: Vec3) -> EntitySpawn {
        let (geometry, recenter) = text_geometry(glyph, font, &self.glyph);
        let mesh = VisualMesh::new(geometry, Material::lambert(self.glyph.color)).at(spawn);
        let body = RigidBody::new(
            BodyShape::cuboid(self.glyph_half_extents),
            self.glyph_mass,
            spawn,
        );
        EntitySpawn {
            mesh,
            body,
            glyph: Some(glyph),
            scatter: Some(self.scatter),
            recenter,
        }
    }

    /// A box whose mesh matches its body exactly. Collisions leave it alone.
    pub fn create_box_entity(
        &self,
        half_extents: Vec3,
        mass: f32,
        spawn: Vec3,
        material: Material,
    ) -> EntitySpawn {
        let geometry = generate_box(half_extents, material.color);
        EntitySpawn {
            mesh: VisualMesh::new(geometry, material).at(spawn),
            body: RigidBody::new(BodyShape::cuboid(half_extents), mass, spawn),
            glyph: None,
            scatter: None,
            recenter: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_text_entity_halves_share_position() {
        let factory = EntityFactory::default();
        let spawn = Vec3::new(1.5, 12.0, -3.0);
        let entity = factory.create_text_entity('a', &FontFace::builtin(), spawn);
        assert_eq!(entity.mesh.position, spawn);
        assert_eq!(entity.body.position, spawn);
        assert_eq!(entity.mesh.orientation, entity.body.orientation);
        assert_eq!(
            entity.body.shape,
            BodyShape::cuboid(Vec3::new(1.0, 1.0, 0.1))
        );
        assert_eq!(entity.glyph, Some('a'));
    }

    #[test]
    fn test_text_entity_reports_recenter_offset() {
        let factory = EntityFactory::default();
        let font = FontFace::builtin();
        let entity = factory.create_text_entity('L', &font, Vec3::ZERO);

        let raw = crate::game::glyph_mesh::extrude_bitmap(font.glyph('L'), &factory.glyph);
        let (min, max) = raw.bounds().unwrap();
        assert!(entity.recenter.length() > 0.1);
        assert!((entity.recenter + (min + max) * 0.5).length() < 1e-5);

        let (min, max) = entity.mesh.geometry.bounds().unwrap();
        assert!(((min + max) * 0.5).length() < 1e-5);
    }

    #[test]
    fn test_box_entity_needs_no_recenter() {
        let entity = EntityFactory::default().create_box_entity(
            Vec3::ONE,
            1.0,
            Vec3::Y,
            Material::basic([1.0; 4]),
        );
        assert_eq!(entity.recenter, Vec3::ZERO);
    }

    #[test]
    fn test_glyph_width_does_not_change_body() {
        let factory = EntityFactory::default();
        let font = FontFace::builtin();
        let i = factory.create_text_entity('I', &font, Vec3::ZERO);
        let w = factory.create_text_entity('W', &font, Vec3::ZERO);
        assert_eq!(i.body.shape, w.body.shape);
    }

    #[test]
    fn test_scatter_only_once() {
        let factory = EntityFactory::default();
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let mut scene = RenderScene::new();
        let mut pair = factory
            .create_text_entity('x', &FontFace::builtin(), Vec3::ZERO)
            .register(&mut world, &mut scene);
        let mut rng = StdRng::seed_from_u64(7);

        let body = world.body_mut(pair.body).unwrap();
        assert!(pair.on_collision(body, &mut rng));
        let first = body.velocity;
        assert!(factory.scatter.contains(first));

        assert!(!pair.on_collision(body, &mut rng));
        assert_eq!(body.velocity, first);
        assert!(pair.is_scattered());
    }

    #[test]
    fn test_box_entity_never_scatters() {
        let factory = EntityFactory::default();
        let mut world = PhysicsWorld::new(Vec3::ZERO);
        let mut scene = RenderScene::new();
        let mut pair = factory
            .create_box_entity(Vec3::ONE, 1.0, Vec3::Y, Material::basic([1.0; 4]))
            .register(&mut world, &mut scene);
        let mut rng = StdRng::seed_from_u64(1);
        let body = world.body_mut(pair.body).unwrap();
        assert!(!pair.on_collision(body, &mut rng));
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_scatter_samples_in_range() {
        let range = ScatterRange::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }
}
