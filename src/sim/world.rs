use super::entity::{Entity, EntityKind};
use super::physics::step;

/// The whole simulation in one place: the steered player plus the static
/// colliders it is tested against. The collider order is the resolution
/// order, so it decides which contact wins the latch when several overlap
/// at once.
pub struct GameWorld {
    pub player: Entity,
    pub colliders: Vec<Entity>,
}

impl GameWorld {
    pub fn new(player: Entity, colliders: Vec<Entity>) -> Self {
        Self { player, colliders }
    }

    /// Run one fixed step of the player against the collider sequence.
    /// Statics are never stepped here; they were baked at build time.
    pub fn step_player(&mut self, dt: f32) {
        step(&mut self.player, dt, &self.colliders);
    }

    /// Kind of the most recent thing the player touched, if anything yet.
    pub fn last_contact(&self) -> Option<EntityKind> {
        self.player.last_contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::TextureHandle;
    use crate::sim::physics::FIXED_STEP;
    use glam::Vec3;

    #[test]
    fn player_steps_against_the_collider_sequence() {
        let mut player =
            Entity::new(EntityKind::Player, Vec3::new(0.0, 0.0, 0.0), 1.0, 1.0, TextureHandle(0));
        player.velocity = Vec3::new(0.0, -3.0, 0.0);
        let colliders = vec![Entity::new(
            EntityKind::Platform,
            Vec3::new(0.0, -1.2, 0.0),
            1.0,
            1.0,
            TextureHandle(0),
        )];

        let mut world = GameWorld::new(player, colliders);
        assert_eq!(world.last_contact(), None);

        for _ in 0..10 {
            world.step_player(FIXED_STEP);
        }

        assert_eq!(world.last_contact(), Some(EntityKind::Platform));
        assert!(world.player.position.y < 0.0);
    }
}
