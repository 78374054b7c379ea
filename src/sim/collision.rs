use super::entity::Entity;

/// Axis-aligned overlap test between two box entities, on center distance
/// minus combined half extents. Exact edge contact (either gap == 0) does
/// not count. Pure query: no latch write, and `active` is not consulted.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    let x_gap = (a.position.x - b.position.x).abs() - (a.width + b.width) / 2.0;
    let y_gap = (a.position.y - b.position.y).abs() - (a.height + b.height) / 2.0;
    x_gap < 0.0 && y_gap < 0.0
}

/// Vertical pass over the collider sequence, in order. Every overlap latches
/// the collider's kind; the face flag follows the velocity sign (rising hits
/// top, falling hits bottom). Velocity is left alone so gravity keeps
/// pulling after a landing. Nothing is pushed back out: an overlap can
/// persist across steps and is visible on screen.
pub fn resolve_y(entity: &mut Entity, colliders: &[Entity]) {
    for other in colliders {
        if !overlaps(entity, other) {
            continue;
        }
        entity.record_contact(other.kind);
        if entity.velocity.y > 0.0 {
            entity.flags.top = true;
        } else if entity.velocity.y < 0.0 {
            entity.flags.bottom = true;
        }
    }
}

/// Horizontal pass, in order. Every overlap latches; sideways motion into a
/// collider is a hard stop, zeroing both velocity.x and acceleration.x so
/// accumulated steering cannot push through a wall. With velocity.x already
/// zero only the latch fires.
pub fn resolve_x(entity: &mut Entity, colliders: &[Entity]) {
    for other in colliders {
        if !overlaps(entity, other) {
            continue;
        }
        entity.record_contact(other.kind);
        if entity.velocity.x > 0.0 {
            entity.flags.right = true;
            entity.velocity.x = 0.0;
            entity.acceleration.x = 0.0;
        } else if entity.velocity.x < 0.0 {
            entity.flags.left = true;
            entity.velocity.x = 0.0;
            entity.acceleration.x = 0.0;
        }
    }
}
