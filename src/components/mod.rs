mod entry_list;
mod personal_fields;
mod stage_canvas;

pub use entry_list::*;
pub use personal_fields::*;
pub use stage_canvas::*;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Current value of the input, textarea or select that fired the event
pub fn control_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        Some(textarea.value())
    } else {
        target.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
    }
}
