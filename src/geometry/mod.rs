mod cube;
mod plane;
mod rect;
mod sphere;

pub use cube::*;
pub use plane::*;
pub use rect::*;
pub use sphere::*;
