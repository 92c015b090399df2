//! Owners for browser resources that must be let go of when a component
//! unmounts: timers, event listeners and intersection observers.

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Element, EventTarget, IntersectionObserver, IntersectionObserverInit,
};

/// Something that holds on to a browser resource until released.
pub trait Release {
    fn release(self);
}

impl Release for Interval {
    fn release(self) {
        drop(self.cancel());
    }
}

impl Release for Timeout {
    fn release(self) {
        drop(self.cancel());
    }
}

/// Holds a resource and releases it exactly once, either explicitly or on
/// drop.
pub struct ScopedHandle<T: Release> {
    inner: Option<T>,
}

impl<T: Release> ScopedHandle<T> {
    pub fn new(resource: T) -> Self {
        Self {
            inner: Some(resource),
        }
    }

    pub fn empty() -> Self {
        Self { inner: None }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Releases the resource. Does nothing if it is already gone.
    pub fn release(&mut self) {
        if let Some(resource) = self.inner.take() {
            resource.release();
        }
    }
}

impl<T: Release> Drop for ScopedHandle<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// One callback registered for one or more events on a target.
pub struct EventListener {
    target: EventTarget,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl EventListener {
    /// Registers `callback` as a passive listener so it never holds up
    /// scrolling.
    pub fn passive(
        target: EventTarget,
        events: &'static [&'static str],
        callback: Closure<dyn FnMut()>,
    ) -> Result<Self, JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let listener = Self {
            target,
            events,
            callback,
        };
        for event in listener.events {
            if let Err(err) = listener
                .target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    listener.callback.as_ref().unchecked_ref(),
                    &options,
                )
            {
                // unregister whatever did attach before the closure goes away
                listener.release();
                return Err(err);
            }
        }
        Ok(listener)
    }
}

impl Release for EventListener {
    fn release(self) {
        for event in self.events {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, err);
            }
        }
        log::debug!("Released listener for {:?}", self.events);
    }
}

/// An `IntersectionObserver` watching a single element.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Calls `on_entry` with `isIntersecting` for every entry the observer
    /// reports for `element`.
    pub fn watch(
        element: &Element,
        root_margin: &str,
        mut on_entry: impl FnMut(bool, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                        on_entry(entry.is_intersecting(), &observer);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Release for ViewportObserver {
    fn release(self) {
        // disconnecting an already disconnected observer is harmless
        self.observer.disconnect();
        log::debug!("Released viewport observer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracked(Rc<Cell<u32>>);

    impl Release for Tracked {
        fn release(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn release_happens_once() {
        let released = Rc::new(Cell::new(0));
        let mut handle = ScopedHandle::new(Tracked(released.clone()));
        assert!(handle.is_active());

        handle.release();
        handle.release();
        assert!(!handle.is_active());
        drop(handle);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn drop_releases() {
        let released = Rc::new(Cell::new(0));
        {
            let _handle = ScopedHandle::new(Tracked(released.clone()));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn empty_handle_is_inert() {
        let mut handle: ScopedHandle<Tracked> = ScopedHandle::empty();
        handle.release();
        assert!(!handle.is_active());
    }
}
