use crate::sim::entity::EntityKind;

/// Terminal result of a run, read off the player's contact latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Landed,
    Crashed,
}

impl Outcome {
    /// Block contact loses, pad contact wins. The player kind never ends up
    /// in the latch, so it maps to no outcome.
    pub fn from_contact(contact: EntityKind) -> Option<Outcome> {
        match contact {
            EntityKind::Obstacle => Some(Outcome::Crashed),
            EntityKind::Platform => Some(Outcome::Landed),
            EntityKind::Player => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Landed => "Mission Successful",
            Outcome::Crashed => "Mission Failed",
        }
    }
}
