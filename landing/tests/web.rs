#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use ampup_landing::config::{PageMeta, ScrollConfig, apply_page_meta};
use ampup_landing::scroll::{EventListener, LockFlag, ScrollController, ScrollLock};
use ampup_landing::{App, SiteConfig};
use leptos::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Touch, TouchEvent, TouchEventInit, TouchInit, WheelEvent, WheelEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().expect("no window")
}

fn body() -> web_sys::HtmlElement {
    window().document().unwrap().body().expect("no body")
}

fn body_style(property: &str) -> String {
    body().style().get_property_value(property).unwrap()
}

/// Dispatch a cancelable wheel event; returns `false` if a handler prevented it.
fn wheel(delta_y: f64) -> bool {
    let init = WheelEventInit::new();
    init.set_delta_y(delta_y);
    init.set_cancelable(true);
    let event = WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
    window().dispatch_event(&event).unwrap()
}

/// Dispatch a cancelable touch event whose finger `i` sits at `ys[i]`.
/// Returns `false` if a handler prevented it.
fn touch(kind: &str, ys: &[i32]) -> bool {
    let body = body();
    let target: &web_sys::EventTarget = body.as_ref();
    let touches = js_sys::Array::new();
    for (id, &y) in ys.iter().enumerate() {
        let init = TouchInit::new(id as i32, target);
        init.set_client_y(y);
        touches.push(&Touch::new(&init).unwrap());
    }
    let init = TouchEventInit::new();
    init.set_cancelable(true);
    init.set_touches(&touches);
    let event = TouchEvent::new_with_event_init_dict(kind, &init).unwrap();
    window().dispatch_event(&event).unwrap()
}

struct Harness {
    controller: Rc<ScrollController>,
    published: Rc<RefCell<Vec<f64>>>,
}

impl Harness {
    fn new(flag: LockFlag) -> Self {
        Self {
            controller: Rc::new(ScrollController::new(&ScrollConfig::default(), flag)),
            published: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn lock(&self) -> ScrollLock {
        let published = Rc::clone(&self.published);
        ScrollLock::acquire(
            &window(),
            Rc::clone(&self.controller),
            Rc::new(move |value| published.borrow_mut().push(value)),
        )
        .expect("lock acquired")
    }
}

#[wasm_bindgen_test]
fn lock_overrides_and_restores_body_styles() {
    body().style().set_property("overflow", "scroll").unwrap();

    let harness = Harness::new(LockFlag::new(true));
    let lock = harness.lock();
    assert_eq!(body_style("overflow"), "hidden");
    assert_eq!(body_style("overscroll-behavior"), "none");
    assert_eq!(body_style("touch-action"), "none");
    assert_eq!(lock.listener_count(), 5);
    assert_eq!(
        lock.events(),
        vec!["wheel", "touchstart", "touchmove", "touchend", "touchcancel"]
    );

    drop(lock);
    assert_eq!(body_style("overflow"), "scroll");
    assert_eq!(body_style("overscroll-behavior"), "");
    assert_eq!(body_style("touch-action"), "");

    body().style().remove_property("overflow").unwrap();
}

#[wasm_bindgen_test]
fn wheel_advances_progress_and_blocks_native_scroll() {
    let harness = Harness::new(LockFlag::new(true));
    let _lock = harness.lock();

    assert!(!wheel(600.0));
    assert!(!wheel(-5000.0));
    assert!(!wheel(1200.0));
    assert_eq!(*harness.published.borrow(), vec![0.5, 0.0, 1.0]);
    assert_eq!(harness.controller.progress(), 1.0);
}

#[wasm_bindgen_test]
fn unlocked_flag_lets_events_through() {
    let flag = LockFlag::new(false);
    let harness = Harness::new(flag.clone());
    let _lock = harness.lock();

    assert!(wheel(600.0));
    assert!(harness.published.borrow().is_empty());

    flag.set(true);
    assert!(!wheel(600.0));
    assert_eq!(*harness.published.borrow(), vec![0.5]);
}

#[wasm_bindgen_test]
fn released_lock_stops_updates() {
    let harness = Harness::new(LockFlag::new(true));
    let lock = harness.lock();
    assert!(!wheel(120.0));
    drop(lock);

    assert!(wheel(120.0));
    assert_eq!(harness.published.borrow().len(), 1);
    assert_eq!(harness.controller.progress(), 0.1);
}

#[wasm_bindgen_test]
fn restore_is_exact_after_many_updates() {
    body()
        .style()
        .set_property("overscroll-behavior", "contain")
        .unwrap();

    let harness = Harness::new(LockFlag::new(true));
    let lock = harness.lock();
    for step in 0..50 {
        wheel(if step % 3 == 0 { -90.0 } else { 75.0 });
    }
    drop(lock);

    assert_eq!(body_style("overscroll-behavior"), "contain");
    assert_eq!(body_style("overflow"), "");
    body().style().remove_property("overscroll-behavior").unwrap();
}

#[wasm_bindgen_test]
fn listener_removal_is_idempotent() {
    let window = window();
    let target: &web_sys::EventTarget = window.as_ref();
    let hits = Rc::new(RefCell::new(0));
    let mut listener = EventListener::new(target, "wheel", {
        let hits = Rc::clone(&hits);
        move |_: WheelEvent| *hits.borrow_mut() += 1
    })
    .unwrap();

    assert_eq!(listener.event(), "wheel");
    wheel(10.0);
    listener.remove();
    listener.remove();
    assert!(!listener.is_registered());
    wheel(10.0);
    drop(listener);

    assert_eq!(*hits.borrow(), 1);
}

#[wasm_bindgen_test]
fn page_meta_is_written_to_document() {
    let meta = PageMeta::default();
    apply_page_meta(&meta).unwrap();

    let document = window().document().unwrap();
    assert_eq!(document.title(), "Ampup");
    let description = document
        .query_selector(r#"meta[name="description"]"#)
        .unwrap()
        .expect("description tag");
    assert_eq!(
        description.get_attribute("content").as_deref(),
        Some(meta.description)
    );
    assert_eq!(
        document.document_element().unwrap().get_attribute("lang").as_deref(),
        Some("en")
    );
}

#[wasm_bindgen_test]
fn second_finger_never_moves_progress() {
    let harness = Harness::new(LockFlag::new(true));
    let _lock = harness.lock();

    // touchstart only records the anchor; native handling continues.
    assert!(touch("touchstart", &[300, 900]));
    // The second finger jumps around; only the first one counts.
    assert!(!touch("touchmove", &[280, 100]));
    assert!(!touch("touchmove", &[260, 700]));
    assert!((harness.controller.progress() - 40.0 / 1200.0).abs() < 1e-12);

    assert!(touch("touchend", &[]));
    // New gesture without touchstart re-anchors instead of jumping.
    assert!(!touch("touchmove", &[10, 600]));
    assert!((harness.controller.progress() - 40.0 / 1200.0).abs() < 1e-12);
    assert_eq!(harness.published.borrow().len(), 3);
}

#[wasm_bindgen_test]
async fn app_locks_on_mount_and_releases_on_unmount() {
    let style = body().style();
    style.set_property("overflow", "auto").unwrap();
    style.set_property("overscroll-behavior", "contain").unwrap();

    let handle = leptos::mount::mount_to(body(), || {
        view! { <App config=SiteConfig::default() /> }
    });
    leptos::task::tick().await;
    leptos::task::tick().await;

    assert_eq!(body_style("overflow"), "hidden");
    assert_eq!(body_style("overscroll-behavior"), "none");
    assert_eq!(body_style("touch-action"), "none");
    assert!(!wheel(120.0));

    drop(handle);

    assert_eq!(body_style("overflow"), "auto");
    assert_eq!(body_style("overscroll-behavior"), "contain");
    assert_eq!(body_style("touch-action"), "");
    assert!(wheel(120.0));

    style.remove_property("overflow").unwrap();
    style.remove_property("overscroll-behavior").unwrap();
}
