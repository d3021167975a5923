use super::control::{ControlTag, FieldControl};
use super::snapshot::{EntryContainer, EntrySnapshot, FormSnapshot};
use super::ENTRY_CONTAINER_IDS;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const CONTROL_QUERY: &str = "input, textarea, select";

/// Enumerate every resume control and list container currently in the document
pub fn scan_document(document: &Document) -> FormSnapshot {
    let controls = match document.query_selector_all(CONTROL_QUERY) {
        Ok(list) => collect_controls(&list),
        Err(e) => {
            log::error!("Control query failed: {:?}", e);
            Vec::new()
        }
    };

    let containers = ENTRY_CONTAINER_IDS
        .iter()
        .filter_map(|id| document.get_element_by_id(id).map(|el| scan_container(id, &el)))
        .collect();

    FormSnapshot { controls, containers }
}

fn scan_container(id: &str, element: &Element) -> EntryContainer {
    let children = element.children();
    let mut container = EntryContainer::new(id);
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            container.children.push(scan_entry(&child));
        }
    }
    container
}

fn scan_entry(element: &Element) -> EntrySnapshot {
    let controls = element
        .query_selector_all(CONTROL_QUERY)
        .map(|list| collect_controls(&list))
        .unwrap_or_default();

    EntrySnapshot {
        tag: element.tag_name().to_ascii_lowercase(),
        data_section: element.get_attribute("data-section"),
        classes: element
            .class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        controls,
    }
}

fn collect_controls(list: &web_sys::NodeList) -> Vec<FieldControl> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| read_control(&el))
        .collect()
}

fn read_control(element: &Element) -> Option<FieldControl> {
    let tag = ControlTag::from_tag_name(&element.tag_name())?;

    let value = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    };

    let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };

    Some(FieldControl {
        tag,
        id: non_empty(element.id()),
        name: element.get_attribute("name"),
        placeholder: element.get_attribute("placeholder"),
        input_type: element.get_attribute("type"),
        value,
    })
}
