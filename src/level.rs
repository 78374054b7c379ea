use glam::Vec3;

use crate::sim::entity::{Entity, EntityKind, TextureHandle};
use crate::sim::physics::step;
use crate::sim::world::GameWorld;

pub const GRAVITY: Vec3 = Vec3::new(0.0, -0.1, 0.0);
pub const PLAYER_SPAWN: Vec3 = Vec3::new(-3.0, 2.5, 0.0);

const TILE_SIZE: f32 = 1.0;

// ---------------------------------------------------------------------------
// Arena layout: unit tiles centered on these points
// ---------------------------------------------------------------------------

// Floor row (with the landing gap), side borders, top row, then the two
// interior blocker pairs. The bottom of the gap is filled by PLATFORMS.
#[rustfmt::skip]
const BLOCKS: &[(f32, f32)] = &[
    // floor
    (-5.0, -3.25), (-4.0, -3.25), (-3.0, -3.25),
    ( 0.0, -3.25), ( 1.0, -3.25), ( 2.0, -3.25),
    ( 3.0, -3.25), ( 4.0, -3.25), ( 5.0, -3.25),
    // left border
    (-4.5, -2.25), (-4.5, -1.25), (-4.5, -0.25), (-4.5, 0.75),
    (-4.5,  1.75), (-4.5,  2.75), (-4.5,  3.75),
    // right border
    ( 4.5, -2.25), ( 4.5, -1.25), ( 4.5, -0.25), ( 4.5, 0.75),
    ( 4.5,  1.75), ( 4.5,  2.75), ( 4.5,  3.75),
    // ceiling over the right half
    (-0.5,  3.25), ( 0.5,  3.25), ( 1.5,  3.25), ( 2.5,  3.25), ( 3.5,  3.25),
    // blockers guarding the descent
    (-3.5,  0.5), (-2.5,  0.5), ( 2.0, -1.0), ( 3.0, -1.0),
];

// The landing pad filling the floor gap. Listed after BLOCKS when the world
// is built, so a pad contact wins the latch over a simultaneous block hit.
#[rustfmt::skip]
const PLATFORMS: &[(f32, f32)] = &[
    (-2.0, -3.25), (-1.0, -3.25),
];

/// Assemble the playfield: the falling player plus every static collider in
/// resolution order. Each static gets one zero-dt step against an empty
/// sequence to bake its transform; nothing steps them again afterwards.
pub fn build_world(
    player_tex: TextureHandle,
    block_tex: TextureHandle,
    platform_tex: TextureHandle,
) -> GameWorld {
    let mut player = Entity::new(
        EntityKind::Player,
        PLAYER_SPAWN,
        TILE_SIZE,
        TILE_SIZE,
        player_tex,
    );
    player.acceleration = GRAVITY;

    let mut colliders = Vec::with_capacity(BLOCKS.len() + PLATFORMS.len());
    for &(x, y) in BLOCKS {
        colliders.push(Entity::new(
            EntityKind::Obstacle,
            Vec3::new(x, y, 0.0),
            TILE_SIZE,
            TILE_SIZE,
            block_tex,
        ));
    }
    for &(x, y) in PLATFORMS {
        colliders.push(Entity::new(
            EntityKind::Platform,
            Vec3::new(x, y, 0.0),
            TILE_SIZE,
            TILE_SIZE,
            platform_tex,
        ));
    }

    for collider in &mut colliders {
        step(collider, 0.0, &[]);
    }

    GameWorld::new(player, colliders)
}
