use leptos::prelude::*;

use super::PanelLayer;
use crate::motion::Panel;

/// Closing panel: brand, tagline and the "coming soon" footer.
#[component]
pub fn Reveal(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <PanelLayer panel=Panel::Reveal progress=progress>
            <div class="reveal">
                <h2 class="reveal-brand">"Amp" <span class="accent">"U"</span> "p"</h2>
                <p class="reveal-tagline">
                    "A new way people connect"
                    <br />
                    "through feeling and music."
                </p>
                <div class="reveal-status">
                    <p class="reveal-soon">"Coming soon."</p>
                </div>
                <footer class="reveal-footer">
                    <p>"Designed for people who feel first."</p>
                    <p>"© Ampup"</p>
                </footer>
            </div>
        </PanelLayer>
    }
}
