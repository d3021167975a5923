use super::sync::PreviewState;
use super::PREVIEW_ELEMENT_ID;
use crate::error::Result;
use crate::form::{scan_document, ControlTag};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MutationObserver, MutationObserverInit};

/// Keeps the live preview in step with the form
///
/// One delegated `input` and one `change` listener on the editor root, plus a
/// child-list observer on each dynamic list container. Dropping the observer
/// removes the listeners and disconnects the mutation observer.
pub struct ChangeObserver {
    state: Rc<RefCell<PreviewState>>,
    _listeners: Vec<EventListener>,
    mutations: MutationObserver,
    _on_mutation: Closure<dyn FnMut()>,
}

impl ChangeObserver {
    pub fn attach(root: &Element, container_ids: &[&str]) -> Result<Self> {
        let state = Rc::new(RefCell::new(PreviewState::new()));

        let listeners = ["input", "change"]
            .into_iter()
            .map(|event_type| {
                let state = state.clone();
                EventListener::new(root, event_type, move |event| {
                    if is_form_control(event) {
                        refresh_preview(&state);
                    }
                })
            })
            .collect();

        let on_mutation = {
            let state = state.clone();
            Closure::<dyn FnMut()>::new(move || {
                log::debug!("List container changed");
                refresh_preview(&state);
            })
        };
        let mutations = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);

        let document = gloo_utils::document();
        for id in container_ids {
            match document.get_element_by_id(id) {
                Some(container) => mutations.observe_with_options(&container, &init)?,
                None => log::warn!("List container #{} not found; not observing it", id),
            }
        }
        log::debug!("Change observer attached to {} containers", container_ids.len());

        Ok(Self {
            state,
            _listeners: listeners,
            mutations,
            _on_mutation: on_mutation,
        })
    }

    /// Re-render after programmatic changes the DOM events do not report
    pub fn refresh(&self) {
        refresh_preview(&self.state);
    }

    /// Re-render and write even if the markup is unchanged
    pub fn force_refresh(&self) {
        self.state.borrow_mut().invalidate();
        refresh_preview(&self.state);
    }
}

impl Drop for ChangeObserver {
    fn drop(&mut self) {
        self.mutations.disconnect();
    }
}

fn is_form_control(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| ControlTag::from_tag_name(&el.tag_name()))
        .is_some()
}

fn refresh_preview(state: &RefCell<PreviewState>) {
    let document = gloo_utils::document();
    let Some(preview) = document.get_element_by_id(PREVIEW_ELEMENT_ID) else {
        log::error!("Preview element #{} not found", PREVIEW_ELEMENT_ID);
        return;
    };
    let snapshot = scan_document(&document);
    if let Some(html) = state.borrow_mut().refresh(&snapshot) {
        preview.set_inner_html(html);
        log::debug!("Preview updated");
    }
}
