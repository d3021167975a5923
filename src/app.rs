use crate::config::{AppConfig, Page};
use crate::persistence::ApiClient;
use crate::portfolio_editor::PortfolioEditor;
use crate::portfolio_view::PortfolioView;
use crate::resume_editor::ResumeEditor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let api = ApiClient::new(config.api_base.clone());

    match config.page {
        Page::ResumeEditor => html! { <ResumeEditor template={config.template} {api} /> },
        Page::PortfolioEditor => html! { <PortfolioEditor theme={config.theme} {api} /> },
        Page::PortfolioView => html! { <PortfolioView theme={config.theme} /> },
    }
}
