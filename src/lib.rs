pub mod codec;
pub mod domain;
pub mod error;
pub mod math;
pub mod mesh;

pub use error::{MeshError, Result};
