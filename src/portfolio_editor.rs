use crate::components::{control_value, StageCanvas};
use crate::lists::EntryKey;
use crate::persistence::ApiClient;
use crate::portfolio_state::{ExperienceField, PortfolioAction, PortfolioField, PortfolioState, ProjectField};
use crate::scene::Theme;
use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortfolioEditorProps {
    pub theme: Theme,
    pub api: ApiClient,
}

/// An input or textarea bound to one value
fn text_control(placeholder: &'static str, multiline: bool, value: &str, on_input: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(value) = control_value(&e) {
            on_input.emit(value);
        }
    });
    let value = value.to_string();
    if multiline {
        html! {
            <textarea {placeholder} {value} {oninput} rows="3" class="w-full px-3 py-2 border rounded mb-2" />
        }
    } else {
        html! {
            <input type="text" {placeholder} {value} {oninput} class="w-full px-3 py-2 border rounded mb-2" />
        }
    }
}

#[function_component(PortfolioEditor)]
pub fn portfolio_editor(props: &PortfolioEditorProps) -> Html {
    let initial_theme = props.theme;
    let state = use_reducer(|| PortfolioState::new(initial_theme));

    let fields = PortfolioField::ALL.iter().map(|&field| {
        let dispatcher = state.dispatcher();
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(value) = control_value(&e) {
                dispatcher.dispatch(PortfolioAction::SetField(field, value));
            }
        });
        let value = state.field(field).to_string();
        let control = if field == PortfolioField::About {
            html! {
                <textarea id={field.id()} name={field.id()} {value} {oninput} rows="4"
                    class="w-full px-3 py-2 border rounded" />
            }
        } else {
            html! {
                <input id={field.id()} name={field.id()} type={field.input_type()} {value} {oninput}
                    class="w-full px-3 py-2 border rounded" />
            }
        };
        html! {
            <div class="mb-4">
                <label for={field.id()} class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</label>
                {control}
            </div>
        }
    });

    let on_theme = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(value) = control_value(&e) {
                dispatcher.dispatch(PortfolioAction::SelectTheme(Theme::parse(&value)));
            }
        })
    };

    let experience = state.experience.iter().map(|(key, entry)| {
        let set = |field: ExperienceField| {
            let dispatcher = state.dispatcher();
            Callback::from(move |value: String| dispatcher.dispatch(PortfolioAction::SetExperience(key, field, value)))
        };
        let dispatcher = state.dispatcher();
        let onremove = Callback::from(move |_: MouseEvent| dispatcher.dispatch(PortfolioAction::RemoveExperience(key)));
        html! {
            <div key={key} class="experience-entry border rounded p-4 mb-4">
                {text_control("Title", false, &entry.title, set(ExperienceField::Title))}
                {text_control("Company", false, &entry.company, set(ExperienceField::Company))}
                {text_control("Duration", false, &entry.duration, set(ExperienceField::Duration))}
                {text_control("Description", true, &entry.description, set(ExperienceField::Description))}
                <button type="button" onclick={onremove} class="text-red-600 text-sm">{"Remove"}</button>
            </div>
        }
    });

    let projects = state.projects.iter().map(|(key, project)| {
        let set = |field: ProjectField| {
            let dispatcher = state.dispatcher();
            Callback::from(move |value: String| dispatcher.dispatch(PortfolioAction::SetProject(key, field, value)))
        };
        let dispatcher = state.dispatcher();
        let onremove = Callback::from(move |_: MouseEvent| dispatcher.dispatch(PortfolioAction::RemoveProject(key)));
        html! {
            <div key={key} class="project-entry border rounded p-4 mb-4">
                {text_control("Project Title", false, &project.title, set(ProjectField::Title))}
                {text_control("Project Description", true, &project.description, set(ProjectField::Description))}
                <button type="button" onclick={onremove} class="text-red-600 text-sm">{"Remove"}</button>
            </div>
        }
    });

    let on_add_experience = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PortfolioAction::AddExperience))
    };
    let on_add_project = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PortfolioAction::AddProject))
    };

    let on_submit = {
        let state = state.clone();
        let api = props.api.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let data = state.to_portfolio_data();
            state.dispatch(PortfolioAction::ApplyTheme);

            let api = api.clone();
            spawn_local(async move {
                match api.save_portfolio(&data).await {
                    Ok(reply) => {
                        log::info!("Portfolio saved ({})", reply.status);
                        if let Some(url) = reply.redirect_url.filter(|url| !url.is_empty()) {
                            if let Err(e) = gloo_utils::window().location().set_href(&url) {
                                log::error!("Redirect to {} failed: {:?}", url, e);
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("Error saving portfolio: {}", e);
                        alert("Error saving portfolio. Please try again.");
                    }
                }
            });
        })
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 p-8">
            <form id="portfolioForm" onsubmit={on_submit} class="bg-white p-6 rounded shadow">
                { for fields }
                <div class="mb-4">
                    <label for="theme" class="block text-sm font-medium text-gray-700 mb-1">{"Theme"}</label>
                    <select id="theme" name="theme" onchange={on_theme} class="w-full px-3 py-2 border rounded">
                        { for Theme::SELECTABLE.iter().map(|theme| html! {
                            <option value={theme.as_str()} selected={*theme == state.theme}>{theme.as_str()}</option>
                        }) }
                    </select>
                </div>

                <section class="mb-6">
                    <h2 class="text-xl font-semibold mb-4">{"Experience"}</h2>
                    <div id="experienceContainer">{ for experience }</div>
                    <button type="button" onclick={on_add_experience} class="px-4 py-2 bg-gray-200 rounded">
                        {"Add Experience"}
                    </button>
                </section>

                <section class="mb-6">
                    <h2 class="text-xl font-semibold mb-4">{"Projects"}</h2>
                    <div id="projectsContainer">{ for projects }</div>
                    <button type="button" onclick={on_add_project} class="px-4 py-2 bg-gray-200 rounded">
                        {"Add Project"}
                    </button>
                </section>

                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded">{"Save Portfolio"}</button>
            </form>
            <div class="h-96 lg:h-auto min-h-[24rem]">
                <StageCanvas theme={state.stage_theme} class="w-full h-full" />
            </div>
        </div>
    }
}
