#![cfg(target_arch = "wasm32")]

use folio_builder::config::{AppConfig, Page};
use folio_builder::form::scan_document;
use folio_builder::preview::{render_preview, ChangeObserver, PREVIEW_ELEMENT_ID};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlInputElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount markup in a fresh container and return it; the caller removes it
fn fixture(markup: &str) -> Element {
    let document = gloo_utils::document();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(markup);
    gloo_utils::body().append_child(&root).unwrap();
    root
}

/// Dispatch a bubbling event the way the browser does for user edits
fn fire(target: &Element, event_type: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn by_id(id: &str) -> Element {
    gloo_utils::document().get_element_by_id(id).unwrap()
}

fn preview_html() -> String {
    by_id(PREVIEW_ELEMENT_ID).inner_html()
}

/// Replaces `fullName`'s value without firing any event
fn set_full_name(value: &str) {
    by_id("fullName").dyn_into::<HtmlInputElement>().unwrap().set_value(value);
}

fn editor_markup(containers: &str) -> String {
    format!(
        r#"<input id="fullName" name="fullName" value="Grace Hopper">
           <div id="notAControl"></div>
           {}
           <div id="{}"></div>"#,
        containers, PREVIEW_ELEMENT_ID
    )
}

#[wasm_bindgen_test]
fn scan_reads_professional_form() {
    let root = fixture(
        r#"
        <input id="fullName" name="fullName" placeholder="Full Name" value="Ada Lovelace">
        <input id="title" name="professionalTitle" placeholder="Professional Title" value="Analyst">
        <div id="experienceList">
            <div data-section="experience">
                <input placeholder="Company Name" value="Analytical Engines">
                <input placeholder="Position" value="">
            </div>
        </div>
        "#,
    );

    let html = render_preview(&scan_document(&gloo_utils::document()));
    root.remove();

    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Analyst"));
    assert!(html.contains("Analytical Engines"));
    assert!(html.contains("Position"));
    assert!(!html.contains("Education"));
}

#[wasm_bindgen_test]
fn observer_fills_preview_on_force_refresh() {
    let root = fixture(&format!(
        r#"<input id="fullName" name="fullName" value="Grace Hopper">
           <div id="skillsList"></div>
           <div id="{}"></div>"#,
        PREVIEW_ELEMENT_ID
    ));

    let observer = ChangeObserver::attach(&root, &["skillsList"]).unwrap();
    observer.force_refresh();
    let preview = gloo_utils::document().get_element_by_id(PREVIEW_ELEMENT_ID).unwrap();
    let html = preview.inner_html();
    drop(observer);
    root.remove();

    assert!(html.contains("Grace Hopper"));
}

#[wasm_bindgen_test]
fn config_defaults_without_data_attributes() {
    let config = AppConfig::from_document();
    assert_eq!(config.page, Page::ResumeEditor);
    assert_eq!(config.api_base, "");
}

#[wasm_bindgen_test]
fn input_event_on_control_refreshes_preview() {
    let root = fixture(&editor_markup(r#"<div id="skillsList"></div>"#));
    let observer = ChangeObserver::attach(&root, &["skillsList"]).unwrap();
    observer.force_refresh();
    let before = preview_html();

    set_full_name("Ada Lovelace");
    fire(&by_id("fullName"), "input");
    let after = preview_html();
    drop(observer);
    root.remove();

    assert!(before.contains("Grace Hopper"));
    assert!(after.contains("Ada Lovelace"));
}

#[wasm_bindgen_test]
fn change_event_on_select_refreshes_preview() {
    let root = fixture(&editor_markup(
        r#"<div id="skillsList">
               <div data-section="skill">
                   <input placeholder="Skill Name" value="Rust">
                   <select id="level">
                       <option value="">Select Level</option>
                       <option value="Expert">Expert</option>
                   </select>
               </div>
           </div>"#,
    ));
    let observer = ChangeObserver::attach(&root, &["skillsList"]).unwrap();
    observer.force_refresh();
    let before = preview_html();

    by_id("level").dyn_into::<HtmlSelectElement>().unwrap().set_value("Expert");
    fire(&by_id("level"), "change");
    let after = preview_html();
    drop(observer);
    root.remove();

    assert!(before.contains("Rust"));
    assert!(!before.contains("Expert"));
    assert!(after.contains("Expert"));
}

#[wasm_bindgen_test]
fn events_from_non_controls_are_ignored() {
    let root = fixture(&editor_markup(r#"<div id="skillsList"></div>"#));
    let observer = ChangeObserver::attach(&root, &["skillsList"]).unwrap();
    observer.force_refresh();

    set_full_name("Ada Lovelace");
    fire(&by_id("notAControl"), "input");
    let after = preview_html();
    drop(observer);
    root.remove();

    assert!(after.contains("Grace Hopper"));
    assert!(!after.contains("Ada Lovelace"));
}

#[wasm_bindgen_test]
async fn container_mutations_refresh_preview() {
    let root = fixture(&editor_markup(r#"<div id="skillsList"></div>"#));
    let observer = ChangeObserver::attach(&root, &["skillsList"]).unwrap();
    observer.force_refresh();
    let empty = preview_html();

    let entry = gloo_utils::document().create_element("div").unwrap();
    entry.set_inner_html(r#"<input placeholder="Skill Name" value="Rust">"#);
    by_id("skillsList").append_child(&entry).unwrap();
    TimeoutFuture::new(0).await;
    let added = preview_html();

    entry.remove();
    TimeoutFuture::new(0).await;
    let removed = preview_html();
    drop(observer);
    root.remove();

    assert!(!empty.contains("Rust"));
    assert!(added.contains("Rust"));
    assert!(!removed.contains("Rust"));
}

#[wasm_bindgen_test]
fn missing_container_still_attaches() {
    let root = fixture(&editor_markup(r#"<div id="skillsList"></div>"#));
    let observer = ChangeObserver::attach(&root, &["skillsList", "educationList"]);
    assert!(observer.is_ok());
    let observer = observer.unwrap();

    set_full_name("Ada Lovelace");
    fire(&by_id("fullName"), "input");
    let after = preview_html();
    drop(observer);
    root.remove();

    assert!(after.contains("Ada Lovelace"));
}
