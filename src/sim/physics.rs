use glam::Mat4;

use super::collision::{resolve_x, resolve_y};
use super::entity::Entity;

pub const FIXED_STEP: f32 = 1.0 / 60.0;

/// Advance one entity by `dt` against an ordered collider sequence.
///
/// The axis order is fixed: integrate velocity, move and resolve Y, then
/// move and resolve X, then rebuild the model transform from the new
/// position. An inactive entity returns immediately, flags included, so
/// stale flags stay readable. `colliders` must not contain the stepped
/// entity itself, and `dt` and the motion state must be finite.
pub fn step(entity: &mut Entity, dt: f32, colliders: &[Entity]) {
    debug_assert!(dt.is_finite(), "step dt must be finite");
    debug_assert!(
        entity.position.is_finite()
            && entity.velocity.is_finite()
            && entity.acceleration.is_finite(),
        "entity motion state must be finite"
    );

    if !entity.active {
        return;
    }

    entity.flags.clear();

    entity.velocity += entity.acceleration * dt;

    entity.position.y += entity.velocity.y * dt;
    resolve_y(entity, colliders);

    entity.position.x += entity.velocity.x * dt;
    resolve_x(entity, colliders);

    entity.model = Mat4::from_translation(entity.position);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{EntityKind, TextureHandle};
    use glam::Vec3;

    fn body(kind: EntityKind, x: f32, y: f32) -> Entity {
        Entity::new(kind, Vec3::new(x, y, 0.0), 1.0, 1.0, TextureHandle(0))
    }

    #[test]
    fn zero_dt_leaves_position_and_rederives_flags() {
        // A standing overlap with downward velocity: stepping zero seconds
        // must not move anything but still reports the contact.
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        player.velocity = Vec3::new(0.0, -1.0, 0.0);
        let colliders = vec![body(EntityKind::Obstacle, 0.0, -0.75)];

        step(&mut player, 0.0, &colliders);

        assert_eq!(player.position, Vec3::ZERO);
        assert_eq!(player.velocity, Vec3::new(0.0, -1.0, 0.0));
        assert!(player.flags.bottom);
        assert_eq!(player.last_contact, Some(EntityKind::Obstacle));
    }

    #[test]
    fn zero_dt_clears_stale_flags_when_clear_of_contact() {
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        player.flags.bottom = true;
        player.flags.left = true;

        step(&mut player, 0.0, &[]);

        assert!(!player.flags.bottom);
        assert!(!player.flags.left);
    }

    #[test]
    fn inactive_entity_is_untouched() {
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        player.velocity = Vec3::new(1.0, -1.0, 0.0);
        player.flags.top = true;
        player.active = false;
        let colliders = vec![body(EntityKind::Obstacle, 0.0, -0.75)];

        step(&mut player, FIXED_STEP, &colliders);

        assert_eq!(player.position, Vec3::ZERO);
        assert_eq!(player.velocity, Vec3::new(1.0, -1.0, 0.0));
        assert!(player.flags.top);
        assert!(player.last_contact.is_none());
    }

    #[test]
    fn model_tracks_position() {
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        player.velocity = Vec3::new(0.5, -0.25, 0.0);

        step(&mut player, FIXED_STEP, &[]);

        assert_eq!(player.model, Mat4::from_translation(player.position));
    }

    #[test]
    fn falling_contact_flags_bottom_and_gravity_keeps_acting() {
        // Scenario: straight fall onto a block. A few steps in, the bottom
        // flag raises; vertical velocity keeps integrating because the Y
        // pass never zeroes it.
        let mut player = body(EntityKind::Player, 0.0, -2.1);
        player.velocity = Vec3::new(0.0, -1.0, 0.0);
        player.acceleration = Vec3::new(0.0, -0.1, 0.0);
        let colliders = vec![body(EntityKind::Obstacle, 0.0, -3.25)];

        let mut steps_taken = 0;
        for _ in 0..20 {
            step(&mut player, FIXED_STEP, &colliders);
            steps_taken += 1;
            if player.flags.bottom {
                break;
            }
        }

        assert!(player.flags.bottom, "no contact after {steps_taken} steps");
        assert_eq!(player.last_contact, Some(EntityKind::Obstacle));

        let vy_at_contact = player.velocity.y;
        step(&mut player, FIXED_STEP, &colliders);
        assert!(player.velocity.y < vy_at_contact);
        assert!(player.flags.bottom);
    }

    #[test]
    fn wall_contact_stops_horizontal_motion_for_good() {
        // Scenario: drifting right into a wall. The impact step flags the
        // right face and zeroes both velocity.x and acceleration.x; after
        // that the overlap only latches, so the flag drops again while the
        // entity stays put.
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        player.velocity = Vec3::new(1.0, 0.0, 0.0);
        player.acceleration = Vec3::new(0.01, 0.0, 0.0);
        let colliders = vec![body(EntityKind::Obstacle, 1.5, 0.0)];

        let mut hit = false;
        for _ in 0..60 {
            step(&mut player, FIXED_STEP, &colliders);
            if player.flags.right {
                hit = true;
                break;
            }
        }

        assert!(hit);
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.acceleration.x, 0.0);

        let x_at_impact = player.position.x;
        step(&mut player, FIXED_STEP, &colliders);
        assert_eq!(player.position.x, x_at_impact);
        assert!(!player.flags.right);
        assert_eq!(player.last_contact, Some(EntityKind::Obstacle));
    }

    #[test]
    #[should_panic(expected = "dt must be finite")]
    fn non_finite_dt_is_rejected() {
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        step(&mut player, f32::NAN, &[]);
    }

    #[test]
    #[should_panic(expected = "motion state must be finite")]
    fn non_finite_velocity_is_rejected() {
        // A NaN here would otherwise integrate straight into position.
        let mut player = body(EntityKind::Player, 0.0, 0.0);
        player.velocity.y = f32::NAN;
        step(&mut player, FIXED_STEP, &[]);
    }

    #[test]
    fn identical_runs_are_bit_identical() {
        let colliders = vec![
            body(EntityKind::Obstacle, 0.6, -2.0),
            body(EntityKind::Platform, -0.8, -2.0),
        ];

        let run = |mut player: Entity| {
            for _ in 0..240 {
                step(&mut player, FIXED_STEP, &colliders);
            }
            player
        };

        let mut start = body(EntityKind::Player, 0.0, 1.0);
        start.velocity = Vec3::new(0.3, -1.5, 0.0);
        start.acceleration = Vec3::new(0.0, -0.1, 0.0);

        let a = run(start.clone());
        let b = run(start);

        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.flags, b.flags);
        assert_eq!(a.last_contact, b.last_contact);
    }
}
