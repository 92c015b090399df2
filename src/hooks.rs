use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys::{window, Element, EventTarget, HtmlElement};
use yew::prelude::*;

use crate::handles::{EventListener, ScopedHandle, ViewportObserver};
use crate::motion::scroll::{element_progress, page_progress, TargetBox};
use crate::motion::{MotionValue, RevealLatch, ScrollOffsets, Subscription};

const SCROLL_EVENTS: &[&str] = &["scroll", "resize"];

/// Set once the hydration gate has let the page in. Mount-time entrance
/// animations wait on it so they start from their initial pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hydrated(pub bool);

#[hook]
pub fn use_hydrated() -> bool {
    use_context::<Hydrated>().map(|h| h.0).unwrap_or(true)
}

/// `false` until the element behind `node` first intersects the viewport
/// (shrunk or grown by `root_margin`), then `true` for good.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut handle = ScopedHandle::empty();

                match node.cast::<Element>() {
                    Some(element) => {
                        let latch = Rc::new(RefCell::new(RevealLatch::new()));
                        let on_entry = {
                            let revealed = revealed.clone();
                            move |intersecting: bool, observer: &web_sys::IntersectionObserver| {
                                if latch.borrow_mut().observe(intersecting) {
                                    log::debug!("Element revealed, detaching observer");
                                    observer.disconnect();
                                    revealed.set(true);
                                }
                            }
                        };
                        match ViewportObserver::watch(&element, root_margin, on_entry) {
                            Ok(observer) => handle = ScopedHandle::new(observer),
                            Err(err) => {
                                log::warn!("IntersectionObserver unavailable, revealing now: {:?}", err);
                                revealed.set(true);
                            }
                        }
                    }
                    None => {
                        log::debug!("Reveal target missing, revealing now");
                        revealed.set(true);
                    }
                }

                move || drop(handle)
            },
            node,
        );
    }

    *revealed
}

fn attach_scroll_listener(on_change: impl Fn() + 'static) -> ScopedHandle<EventListener> {
    let Some(window) = window() else {
        return ScopedHandle::empty();
    };
    let target: EventTarget = window.into();
    let callback = Closure::<dyn FnMut()>::new(on_change);
    match EventListener::passive(target, SCROLL_EVENTS, callback) {
        Ok(listener) => ScopedHandle::new(listener),
        Err(err) => {
            log::warn!("Failed to attach scroll listener: {:?}", err);
            ScopedHandle::empty()
        }
    }
}

fn measure_element(node: &NodeRef, offsets: ScrollOffsets) -> f64 {
    let (Some(element), Some(window)) = (node.cast::<Element>(), window()) else {
        return 0.0;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    element_progress(
        TargetBox {
            top: rect.top(),
            height: rect.height(),
        },
        viewport_height,
        offsets,
    )
}

fn measure_page() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    page_progress(window.scroll_y().unwrap_or(0.0), scroll_height, viewport_height)
}

/// Progress of the element behind `node` through the scroll window
/// described by `offsets`. Updated on every scroll and resize.
#[hook]
pub fn use_scroll_progress(node: NodeRef, offsets: ScrollOffsets) -> MotionValue {
    let progress = use_memo(|_| MotionValue::new(0.0), ());

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, offsets): &(NodeRef, ScrollOffsets)| {
                let (node, offsets) = (node.clone(), *offsets);
                let update = move || progress.set(measure_element(&node, offsets));
                update();
                let listener = attach_scroll_listener(update);
                move || drop(listener)
            },
            (node, offsets),
        );
    }

    (*progress).clone()
}

/// Progress through the whole document.
#[hook]
pub fn use_page_progress() -> MotionValue {
    let progress = use_memo(|_| MotionValue::new(0.0), ());

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || progress.set(measure_page());
                update();
                let listener = attach_scroll_listener(update);
                move || drop(listener)
            },
            (),
        );
    }

    (*progress).clone()
}

/// Writes `render()` into the inline style of the element behind `node`,
/// now and after every change of `source`.
///
/// Derived values captured by `render` must be created from `source` before
/// this is called so they are notified first.
pub fn bind_style(
    node: &NodeRef,
    source: &MotionValue,
    render: impl Fn() -> String + 'static,
) -> Subscription {
    let node = node.clone();
    let write = move || {
        if let Some(element) = node.cast::<HtmlElement>() {
            if let Err(err) = element.set_attribute("style", &render()) {
                log::warn!("Failed to write motion style: {:?}", err);
            }
        }
    };
    write();
    source.subscribe(move |_| write())
}
