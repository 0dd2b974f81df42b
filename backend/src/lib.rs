pub mod app;
pub mod device;
pub mod error;
pub mod glutils;
pub mod input;
pub mod math;
pub mod mesh;
pub mod mode;
pub mod render;
pub mod shaders;
pub mod system;
pub mod window;

#[cfg(test)]
pub(crate) mod fakes;

pub use error::{Error, Result};
