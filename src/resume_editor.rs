use crate::components::{EntryList, EntryRow, PersonalFields};
use crate::form::ResumeTemplate;
use crate::lists::EntryKey;
use crate::persistence::{ApiClient, SaveOutcome, MISSING_SECTIONS_MESSAGE};
use crate::preview::{ChangeObserver, PREVIEW_ELEMENT_ID};
use crate::resume_state::{EditorAction, EditorState};
use crate::types::{EntryField, EntryKind, PersonalField};
use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResumeEditorProps {
    pub template: ResumeTemplate,
    pub api: ApiClient,
}

#[function_component(ResumeEditor)]
pub fn resume_editor(props: &ResumeEditorProps) -> Html {
    let template = props.template;
    let layout = template.layout();
    let state = use_reducer(|| EditorState::new(template));
    let root = use_node_ref();
    let observer = use_mut_ref(|| None::<ChangeObserver>);

    // Attach the preview observer and load the saved resume once the form exists
    {
        let root = root.clone();
        let observer = observer.clone();
        let dispatcher = state.dispatcher();
        let api = props.api.clone();
        use_effect_with((), move |_| {
            if let Some(root) = root.cast::<web_sys::Element>() {
                match ChangeObserver::attach(&root, &layout.container_ids()) {
                    Ok(attached) => {
                        attached.force_refresh();
                        *observer.borrow_mut() = Some(attached);
                    }
                    Err(e) => log::error!("Live preview disabled: {}", e),
                }
            }

            spawn_local(async move {
                match api.load_resume().await {
                    Ok(Some(data)) => dispatcher.dispatch(EditorAction::Load(data)),
                    Ok(None) => {}
                    Err(e) => log::error!("Error loading resume: {}", e),
                }
            });

            move || {
                observer.borrow_mut().take();
            }
        });
    }

    // Values set through props fire no DOM events, so re-render on every state change
    {
        let observer = observer.clone();
        use_effect_with(state.revision, move |_| {
            if let Some(observer) = observer.borrow().as_ref() {
                observer.refresh();
            }
        });
    }

    let on_personal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (PersonalField, String)| {
            dispatcher.dispatch(EditorAction::SetPersonal(field, value))
        })
    };

    let on_save = {
        let state = state.clone();
        let api = props.api.clone();
        Callback::from(move |_: MouseEvent| {
            let document = gloo_utils::document();
            let missing: Vec<&str> = layout
                .required_ids()
                .into_iter()
                .filter(|id| document.get_element_by_id(id).is_none())
                .collect();
            if !missing.is_empty() {
                log::error!("Missing form elements: {}", missing.join(", "));
                alert(MISSING_SECTIONS_MESSAGE);
                return;
            }

            let data = state.to_resume_data();
            let api = api.clone();
            spawn_local(async move {
                let outcome = SaveOutcome::from_result(&api.save_resume(&data).await);
                alert(&outcome.message());
            });
        })
    };

    let on_preview = {
        let observer = observer.clone();
        Callback::from(move |_: MouseEvent| match observer.borrow().as_ref() {
            Some(observer) => observer.force_refresh(),
            None => log::warn!("Preview requested before the observer was attached"),
        })
    };

    let sections = layout.sections.iter().map(|section| {
        let kind = section.kind;
        let rows = match kind {
            EntryKind::Experience => EntryRow::rows(section, &state.lists.experience),
            EntryKind::Education => EntryRow::rows(section, &state.lists.education),
            EntryKind::Skill => EntryRow::rows(section, &state.lists.skills),
        };
        let dispatcher = state.dispatcher();
        let on_add = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: ()| dispatcher.dispatch(EditorAction::Add(kind)))
        };
        let on_remove = {
            let dispatcher = dispatcher.clone();
            Callback::from(move |key: EntryKey| dispatcher.dispatch(EditorAction::Remove(kind, key)))
        };
        let on_quick_add = {
            let dispatcher = dispatcher.clone();
            let field = section.quick_add.map(|quick| quick.field);
            Callback::from(move |value: String| {
                if let Some(field) = field {
                    dispatcher.dispatch(EditorAction::AddFilled(kind, field, value))
                }
            })
        };
        let on_change = Callback::from(move |(key, field, value): (EntryKey, EntryField, String)| {
            dispatcher.dispatch(EditorAction::SetEntryField(kind, key, field, value))
        });

        html! {
            <EntryList key={kind.data_section()} {section} {rows} {on_add} {on_remove} {on_change} {on_quick_add} />
        }
    });

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 p-8">
            <div ref={root} id="resumeForm" class="bg-white p-6 rounded shadow">
                <PersonalFields specs={layout.personal} personal={state.personal.clone()} on_change={on_personal} />
                { for sections }
                <div class="flex gap-4 mt-6">
                    <button type="button" onclick={on_preview} class="px-4 py-2 bg-gray-200 rounded">
                        {"Preview"}
                    </button>
                    <button type="button" onclick={on_save} class="px-4 py-2 bg-blue-600 text-white rounded">
                        {"Save Resume"}
                    </button>
                </div>
            </div>
            <div id={PREVIEW_ELEMENT_ID}></div>
        </div>
    }
}
