mod camera;
mod graph;
mod mesh;
mod theme;
mod types;

pub use camera::*;
pub use graph::*;
pub use mesh::*;
pub use theme::*;
pub use types::*;
