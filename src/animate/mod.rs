mod animator;
mod polygon;
mod settings;

pub use animator::*;
pub use polygon::*;
pub use settings::*;
