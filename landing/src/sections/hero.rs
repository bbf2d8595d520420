use leptos::prelude::*;

use super::PanelLayer;
use crate::motion::Panel;

#[component]
pub fn Hero(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <PanelLayer panel=Panel::Hero progress=progress>
            <h1 class="hero-title">
                "Some " <span class="accent">"matches"</span> " don’t need an introduction."
            </h1>
            <div class="hero-rule"></div>
        </PanelLayer>
    }
}
