use glam::{Mat4, Vec3};

/// What an entity is. Fixed at construction; contact outcomes key off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Obstacle,
    Platform,
}

/// Index into the TextureStore. Entities reference textures by handle so the
/// simulation never touches GL state.
#[derive(Clone, Copy)]
pub struct TextureHandle(pub usize);

/// Which faces of an entity hit something during the current step.
/// Cleared at the top of every step, so they describe that step only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One simulated body: an axis-aligned box centered on `position`, with
/// `width`/`height` as full extents. `last_contact` is sticky; it keeps the
/// kind of the most recent thing touched and is never cleared during a run.
#[derive(Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub width: f32,
    pub height: f32,
    pub flags: CollisionFlags,
    pub last_contact: Option<EntityKind>,
    pub active: bool,
    pub texture: TextureHandle,
    pub model: Mat4,
}

impl Entity {
    /// Panics if either extent is not strictly positive; a zero-extent box
    /// would make every gap test vacuous.
    pub fn new(
        kind: EntityKind,
        position: Vec3,
        width: f32,
        height: f32,
        texture: TextureHandle,
    ) -> Self {
        assert!(width > 0.0, "entity width must be positive");
        assert!(height > 0.0, "entity height must be positive");
        Self {
            kind,
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            width,
            height,
            flags: CollisionFlags::default(),
            last_contact: None,
            active: true,
            texture,
            model: Mat4::IDENTITY,
        }
    }

    /// Overwrite the contact latch. Later contacts win.
    pub fn record_contact(&mut self, kind: EntityKind) {
        self.last_contact = Some(kind);
    }
}
