//! Scene Synchronizer
//!
//! Copies body transforms onto their visual meshes. Data only flows from
//! physics to visuals. Run it after the world step and before drawing.

use crate::game::entity::{EntityPair, Pairing};
use crate::game::scene::RenderScene;
use crate::physics::PhysicsWorld;

/// Copy one body's position and orientation onto its mesh.
///
/// Returns false if either side is missing.
pub fn sync_pairing(world: &PhysicsWorld, scene: &mut RenderScene, pairing: Pairing) -> bool {
    let (Some(body), Some(mesh)) = (world.body(pairing.body), scene.get_mut(pairing.mesh)) else {
        return false;
    };
    mesh.set_transform(body.transform());
    true
}

/// Synchronize the ground and every entity. Returns how many meshes were written.
pub fn synchronize(
    world: &PhysicsWorld,
    scene: &mut RenderScene,
    ground: Pairing,
    pairs: &[EntityPair],
) -> usize {
    let mut written = usize::from(sync_pairing(world, scene, ground));
    for pair in pairs {
        if sync_pairing(world, scene, pair.pairing()) {
            written += 1;
        } else {
            log::warn!("entity {:?}/{:?} has no counterpart", pair.mesh, pair.body);
        }
    }
    written
}
