use leptos::prelude::*;

use super::PanelLayer;
use crate::motion::Panel;

const LINES: [(Panel, &str); 4] = [
    (Panel::Line1, "You don’t swipe endlessly."),
    (Panel::Line2, "You don’t explain why you like what you like."),
    (Panel::Line3, "You just feel it."),
    (Panel::Line4, "We build around that feeling."),
];

#[component]
pub fn Lines(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    LINES
        .into_iter()
        .map(|(panel, text)| {
            view! {
                <PanelLayer panel=panel progress=progress>
                    <p class="line-text">{text}</p>
                </PanelLayer>
            }
        })
        .collect_view()
}
