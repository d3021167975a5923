use super::control_value;
use crate::form::{ControlTag, PersonalFieldSpec};
use crate::types::{PersonalField, PersonalInfo};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PersonalFieldsProps {
    pub specs: &'static [PersonalFieldSpec],
    pub personal: PersonalInfo,
    pub on_change: Callback<(PersonalField, String)>,
}

#[function_component(PersonalFields)]
pub fn personal_fields(props: &PersonalFieldsProps) -> Html {
    html! {
        <section class="mb-6">
            <h2 class="text-xl font-semibold mb-4">{"Personal Information"}</h2>
            { for props.specs.iter().map(|spec| {
                let field = spec.field;
                let value = props.personal.get(field).to_string();
                let on_change = props.on_change.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    if let Some(value) = control_value(&e) {
                        on_change.emit((field, value));
                    }
                });

                let control = match spec.tag {
                    ControlTag::Textarea => html! {
                        <textarea
                            id={spec.id}
                            name={spec.name}
                            placeholder={spec.placeholder}
                            {value}
                            {oninput}
                            rows="4"
                            class="w-full px-3 py-2 border rounded"
                        />
                    },
                    _ => html! {
                        <input
                            id={spec.id}
                            name={spec.name}
                            type={spec.input_type}
                            placeholder={spec.placeholder}
                            {value}
                            {oninput}
                            class="w-full px-3 py-2 border rounded"
                        />
                    },
                };

                html! {
                    <div class="mb-4">
                        <label for={spec.id} class="block text-sm font-medium text-gray-700 mb-1">
                            {spec.label}
                        </label>
                        {control}
                    </div>
                }
            }) }
        </section>
    }
}
