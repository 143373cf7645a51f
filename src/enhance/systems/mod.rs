pub mod render;
pub mod step;

pub use render::*;
pub use step::*;
