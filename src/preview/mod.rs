mod html;
pub mod lookup;
#[cfg(target_arch = "wasm32")]
mod observer;
mod render;
mod sync;

pub use html::escape_html;
pub use lookup::{FieldLookup, SectionLookup};
#[cfg(target_arch = "wasm32")]
pub use observer::ChangeObserver;
pub use render::render_preview;
pub use sync::PreviewState;

/// Id of the element the live preview is written into
pub const PREVIEW_ELEMENT_ID: &str = "resumePreview";
