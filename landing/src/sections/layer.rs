use leptos::prelude::*;

use crate::motion::Panel;

/// Absolutely positioned layer whose opacity and transform follow `progress`.
#[component]
pub fn PanelLayer(
    panel: Panel,
    #[prop(into)] progress: Signal<f64>,
    children: Children,
) -> impl IntoView {
    let style = move || panel.style_at(progress.get()).to_css();
    view! {
        <div class=format!("panel panel-{}", panel.name()) data-panel=panel.name() style=style>
            {children()}
        </div>
    }
}
