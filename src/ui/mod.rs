pub mod banner;
pub mod text;

pub use banner::Outcome;
pub use text::TextRenderer;
