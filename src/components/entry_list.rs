use super::control_value;
use crate::form::{ControlTag, SectionLayout};
use crate::lists::{EntryKey, KeyedList};
use crate::types::{EntryField, EntryFields, SkillLevel};
use gloo::dialogs::alert;
use yew::prelude::*;

/// One entry's values, in the order of the section's field specs
#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub key: EntryKey,
    pub values: Vec<String>,
}

impl EntryRow {
    pub fn rows<T: EntryFields>(section: &SectionLayout, list: &KeyedList<T>) -> Vec<EntryRow> {
        list.iter()
            .map(|(key, entry)| EntryRow {
                key,
                values: section
                    .fields
                    .iter()
                    .map(|spec| entry.field(spec.field).to_string())
                    .collect(),
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct EntryListProps {
    pub section: &'static SectionLayout,
    pub rows: Vec<EntryRow>,
    pub on_add: Callback<()>,
    pub on_remove: Callback<EntryKey>,
    pub on_change: Callback<(EntryKey, EntryField, String)>,
    /// Receives the validated text of the quick-add box, when the section has one
    #[prop_or_default]
    pub on_quick_add: Callback<String>,
}

/// A dynamic list section: container of entry sub-forms plus its Add button
#[function_component(EntryList)]
pub fn entry_list(props: &EntryListProps) -> Html {
    let section = props.section;
    let kind = section.kind;
    let entry_class = if section.classed_entries {
        classes!(kind.entry_class(), "border", "rounded", "p-4", "mb-4")
    } else {
        classes!("border", "rounded", "p-4", "mb-4")
    };

    let draft = use_state(String::new);

    let onadd = {
        let on_add = props.on_add.clone();
        let on_quick_add = props.on_quick_add.clone();
        let draft = draft.clone();
        let quick_add = section.quick_add;
        Callback::from(move |_: MouseEvent| match quick_add {
            Some(quick) => match quick.validate(&draft) {
                Ok(value) => {
                    on_quick_add.emit(value);
                    draft.set(String::new());
                }
                Err(message) => alert(message),
            },
            None => on_add.emit(()),
        })
    };

    let quick_input = section.quick_add.map(|quick| {
        let oninput = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = control_value(&e) {
                    draft.set(value);
                }
            })
        };
        html! {
            <input
                id={quick.input_id}
                type="text"
                placeholder={quick.placeholder}
                value={(*draft).clone()}
                {oninput}
                class="px-3 py-2 border rounded mr-2"
            />
        }
    });

    html! {
        <section class="mb-6">
            <h2 class="text-xl font-semibold mb-4">{kind.label()}</h2>
            <div id={section.container_id}>
                { for props.rows.iter().map(|row| {
                    let key = row.key;
                    let onremove = {
                        let on_remove = props.on_remove.clone();
                        Callback::from(move |_: MouseEvent| on_remove.emit(key))
                    };
                    html! {
                        <div key={key} data-section={kind.data_section()} class={entry_class.clone()}>
                            { for section.fields.iter().zip(row.values.iter()).map(|(spec, value)| {
                                let field = spec.field;
                                let on_change = props.on_change.clone();
                                let oninput = Callback::from(move |e: InputEvent| {
                                    if let Some(value) = control_value(&e) {
                                        on_change.emit((key, field, value));
                                    }
                                });
                                match spec.tag {
                                    ControlTag::Input => html! {
                                        <input
                                            type={spec.input_type}
                                            placeholder={spec.placeholder}
                                            value={value.clone()}
                                            {oninput}
                                            class="w-full px-3 py-2 border rounded mb-2"
                                        />
                                    },
                                    ControlTag::Textarea => html! {
                                        <textarea
                                            placeholder={spec.placeholder}
                                            value={value.clone()}
                                            {oninput}
                                            class="w-full px-3 py-2 border rounded mb-2"
                                        />
                                    },
                                    ControlTag::Select => {
                                        let on_change = props.on_change.clone();
                                        let onchange = Callback::from(move |e: Event| {
                                            if let Some(value) = control_value(&e) {
                                                on_change.emit((key, field, value));
                                            }
                                        });
                                        html! {
                                            <select {onchange} class="w-full px-3 py-2 border rounded mb-2">
                                                <option value="" selected={value.is_empty()}>{"Select Level"}</option>
                                                { for SkillLevel::ALL.iter().map(|level| html! {
                                                    <option value={level.as_str()} selected={value == level.as_str()}>
                                                        {level.as_str()}
                                                    </option>
                                                }) }
                                            </select>
                                        }
                                    }
                                }
                            }) }
                            <button type="button" onclick={onremove} class="text-red-600 text-sm">
                                {"Remove"}
                            </button>
                        </div>
                    }
                }) }
            </div>
            { for quick_input }
            <button type="button" onclick={onadd} class="px-4 py-2 bg-gray-200 rounded">
                {section.add_label}
            </button>
        </section>
    }
}
