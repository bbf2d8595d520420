//! Scoped ownership of the page while the sequence is active.
//!
//! [`ScrollLock`] bundles the body style overrides and every input listener.
//! Dropping it, on any path, restores the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, CssStyleDeclaration, EventTarget, TouchEvent, WheelEvent,
};

use super::controller::{InputOutcome, ScrollController};
use super::gesture::{DeltaMode, WheelDelta};
use crate::error::DomError;

/// Body style properties suppressed while locked.
const LOCKED_STYLES: &[(&str, &str)] = &[
    ("overflow", "hidden"),
    ("overscroll-behavior", "none"),
    ("touch-action", "none"),
];

/// A listener on an [`EventTarget`] that unregisters itself on drop.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl EventListener {
    /// Register a non-passive listener so the handler may call `preventDefault`.
    pub fn new<E, F>(
        target: &EventTarget,
        event: &'static str,
        mut handler: F,
    ) -> Result<Self, DomError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| DomError::listener(event, err))?;

        Ok(Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    pub fn is_registered(&self) -> bool {
        self.callback.is_some()
    }

    /// Unregister. Safe to call any number of times.
    pub fn remove(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self.target.remove_event_listener_with_callback(
                self.event,
                callback.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.remove();
    }
}

/// Overrides body styles and puts the previous values back on drop.
pub struct BodyStyleGuard {
    style: CssStyleDeclaration,
    saved: Vec<(&'static str, String)>,
}

impl BodyStyleGuard {
    pub fn acquire(body: &web_sys::HtmlElement) -> Result<Self, DomError> {
        let style = body.style();
        let mut guard = Self {
            style,
            saved: Vec::with_capacity(LOCKED_STYLES.len()),
        };
        for &(property, value) in LOCKED_STYLES {
            let previous = guard
                .style
                .get_property_value(property)
                .map_err(|err| DomError::style(property, err))?;
            // Saved before writing so a failed write is still undone.
            guard.saved.push((property, previous));
            guard
                .style
                .set_property(property, value)
                .map_err(|err| DomError::style(property, err))?;
        }
        Ok(guard)
    }

    pub fn release(&mut self) {
        for (property, previous) in self.saved.drain(..).rev() {
            let restored = if previous.is_empty() {
                self.style.remove_property(property).map(|_| ())
            } else {
                self.style.set_property(property, &previous)
            };
            if let Err(err) = restored {
                tracing::warn!(property, "body style not restored: {err:?}");
            }
        }
    }
}

impl Drop for BodyStyleGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Everything the active sequence holds on the page.
pub struct ScrollLock {
    // Listeners go first so no handler runs against restored styles.
    listeners: Vec<EventListener>,
    _styles: BodyStyleGuard,
}

impl ScrollLock {
    /// Suppress native scrolling on `<body>` and route wheel/touch input on
    /// `window` into `controller`. `publish` receives each new progress value.
    pub fn acquire(
        window: &web_sys::Window,
        controller: Rc<ScrollController>,
        publish: Rc<dyn Fn(f64)>,
    ) -> Result<Self, DomError> {
        let document = window.document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;
        let styles = BodyStyleGuard::acquire(&body)?;
        let target: &EventTarget = window.as_ref();

        let mut listeners = Vec::with_capacity(5);

        listeners.push(EventListener::new(target, "wheel", {
            let controller = Rc::clone(&controller);
            let publish = Rc::clone(&publish);
            let window = window.clone();
            move |event: WheelEvent| {
                let delta = WheelDelta {
                    delta_y: event.delta_y(),
                    mode: DeltaMode::from_dom(event.delta_mode()),
                };
                let page_height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                settle(&event, controller.wheel(delta, page_height), &*publish);
            }
        })?);

        listeners.push(EventListener::new(target, "touchstart", {
            let controller = Rc::clone(&controller);
            let publish = Rc::clone(&publish);
            move |event: TouchEvent| {
                settle(&event, controller.touch_start(first_touch_y(&event)), &*publish);
            }
        })?);

        listeners.push(EventListener::new(target, "touchmove", {
            let controller = Rc::clone(&controller);
            let publish = Rc::clone(&publish);
            move |event: TouchEvent| {
                settle(&event, controller.touch_move(first_touch_y(&event)), &*publish);
            }
        })?);

        for name in ["touchend", "touchcancel"] {
            listeners.push(EventListener::new(target, name, {
                let controller = Rc::clone(&controller);
                move |_: TouchEvent| {
                    controller.touch_end();
                }
            })?);
        }

        let events: Vec<_> = listeners.iter().map(EventListener::event).collect();
        tracing::debug!(?events, "scroll listeners registered");
        Ok(Self {
            listeners,
            _styles: styles,
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.is_registered()).count()
    }

    /// Event names with a live listener, in registration order.
    pub fn events(&self) -> Vec<&'static str> {
        self.listeners
            .iter()
            .filter(|l| l.is_registered())
            .map(EventListener::event)
            .collect()
    }
}

fn first_touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.client_y()))
}

fn settle(event: &web_sys::Event, outcome: InputOutcome, publish: &dyn Fn(f64)) {
    if let InputOutcome::Advanced(progress) = outcome {
        event.prevent_default();
        publish(progress);
    }
}
