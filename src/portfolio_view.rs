use crate::components::StageCanvas;
use crate::scene::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortfolioViewProps {
    pub theme: Theme,
}

/// Published portfolio page: only the 3D stage is driven from here
#[function_component(PortfolioView)]
pub fn portfolio_view(props: &PortfolioViewProps) -> Html {
    html! {
        <div id="portfolio-3d" class="w-full h-screen">
            <StageCanvas theme={props.theme} class="w-full h-full" />
        </div>
    }
}
