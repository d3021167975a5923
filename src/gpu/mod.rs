mod geometry;
#[cfg(target_arch = "wasm32")]
mod renderer;
mod vertex;

pub use geometry::tessellate;
#[cfg(target_arch = "wasm32")]
pub use renderer::*;
pub use vertex::*;
