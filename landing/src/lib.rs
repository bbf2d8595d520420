// Ampup Landing Page — Leptos 0.8 Edition
//
// A single scroll-locked sequence: wheel and touch input drive one progress
// value in [0, 1], and six panels fade, slide and settle along it.

pub mod config;
pub mod error;
pub mod logging;
pub mod motion;
pub mod scroll;
mod sections;
pub mod styles;

use std::rc::Rc;

use leptos::prelude::*;

pub use config::SiteConfig;
pub use error::DomError;
use motion::Panel;
use scroll::{LockFlag, ScrollController, ScrollLock};
use sections::*;
use styles::LANDING_CSS;

/// Mount the landing page onto `<body>`.
pub fn mount(config: SiteConfig) {
    if let Err(err) = config::apply_page_meta(&config.page) {
        tracing::warn!("page metadata not applied: {err}");
    }
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);
    let locked = RwSignal::new(true);

    let controller = Rc::new(ScrollController::new(&config.scroll, LockFlag::new(true)));
    let active_lock = StoredValue::new_local(None::<ScrollLock>);

    // Listeners are registered once per lock; the flag is what they read.
    Effect::new(move |_| {
        let is_locked = locked.get();
        controller.lock_flag().set(is_locked);

        if !is_locked {
            if release(active_lock) {
                tracing::info!("scroll sequence unlocked");
            }
            return;
        }
        if active_lock.with_value(Option::is_some) {
            return;
        }

        let Some(window) = web_sys::window() else {
            tracing::error!("scroll lock unavailable: {}", DomError::NoWindow);
            return;
        };
        let publish = Rc::new(move |value: f64| {
            if progress.get_untracked() != value {
                progress.set(value);
            }
        });
        match ScrollLock::acquire(&window, Rc::clone(&controller), publish) {
            Ok(lock) => {
                tracing::info!("scroll sequence locked");
                active_lock.set_value(Some(lock));
            }
            Err(err) => tracing::error!("scroll lock unavailable: {err}"),
        }
    });

    on_cleanup(move || {
        if release(active_lock) {
            tracing::info!("scroll sequence released on unmount");
        }
    });

    let stage = Memo::new(move |_| Panel::stage_at(progress.get()));
    Effect::new(move |_| {
        tracing::debug!(stage = stage.get().name(), "stage changed");
    });

    let progress: Signal<f64> = progress.into();

    view! {
        <style>{LANDING_CSS}</style>
        <main class="sequence" data-stage=move || stage.get().name()>
            <section class="sequence-track">
                <div class="sequence-viewport">
                    <div class="sequence-stage">
                        <Hero progress=progress />
                        <Lines progress=progress />
                        <Reveal progress=progress />
                    </div>
                </div>
            </section>
        </main>
    }
}

/// Drop the held lock, if any. Returns whether one was held.
fn release(slot: StoredValue<Option<ScrollLock>, LocalStorage>) -> bool {
    slot.try_update_value(Option::take).flatten().is_some()
}
