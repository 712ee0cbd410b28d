pub mod camera;
pub mod color;
pub mod context;
pub mod error;
pub mod geometry;
pub mod math;
pub mod object;
pub mod scene;
pub mod scenes;

pub use error::{Error, Result};
