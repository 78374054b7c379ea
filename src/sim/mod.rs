pub mod collision;
pub mod entity;
pub mod physics;
pub mod world;
