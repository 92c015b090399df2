use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::breakpoints::BreakpointTable;

type Listener = Rc<dyn Fn(f64)>;

struct Inner {
    current: f64,
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
    // keeps a derived value attached to its source for as long as it lives
    upstream: Option<Subscription>,
}

/// A scalar that notifies its subscribers whenever it changes.
///
/// Scroll trackers write progress into a `MotionValue`; derived values and
/// style writers subscribe to it, so a scroll frame updates styles without
/// going through a component re-render.
#[derive(Clone)]
pub struct MotionValue {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for MotionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for MotionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionValue")
            .field("current", &self.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl MotionValue {
    pub fn new(initial: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: initial,
                next_id: 0,
                listeners: Vec::new(),
                upstream: None,
            })),
        }
    }

    pub fn get(&self) -> f64 {
        self.inner.borrow().current
    }

    pub fn set(&self, value: f64) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == value {
                return;
            }
            inner.current = value;
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(value);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            source: Rc::downgrade(&self.inner),
            id,
            active: true,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// A value that always equals `f(self)`.
    pub fn map(&self, f: impl Fn(f64) -> f64 + 'static) -> MotionValue {
        let derived = MotionValue::new(f(self.get()));
        let target: Weak<RefCell<Inner>> = Rc::downgrade(&derived.inner);
        let subscription = self.subscribe(move |value| {
            if let Some(inner) = target.upgrade() {
                MotionValue { inner }.set(f(value));
            }
        });
        derived.inner.borrow_mut().upstream = Some(subscription);
        derived
    }

    /// A value that always equals `table.sample(self)`.
    pub fn transform(&self, table: BreakpointTable) -> MotionValue {
        self.map(move |progress| table.sample(progress))
    }
}

/// Registration of a listener on a `MotionValue`. Dropping it unsubscribes.
pub struct Subscription {
    source: Weak<RefCell<Inner>>,
    id: usize,
    active: bool,
}

impl Subscription {
    /// Removes the listener. Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let Some(source) = self.source.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = source.borrow_mut();
            inner
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| inner.listeners.remove(index))
        };
        // may own derived values subscribed to this same source
        drop(removed);
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_every_subscriber() {
        let value = MotionValue::new(0.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let count = Rc::new(Cell::new(0));

        let _a = value.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(v)
        });
        let _b = value.subscribe({
            let count = count.clone();
            move |_| count.set(count.get() + 1)
        });

        value.set(0.25);
        value.set(0.75);
        assert_eq!(*seen.borrow(), vec![0.25, 0.75]);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let value = MotionValue::new(0.5);
        let count = Rc::new(Cell::new(0));
        let _sub = value.subscribe({
            let count = count.clone();
            move |_| count.set(count.get() + 1)
        });
        value.set(0.5);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribe_twice_is_a_no_op() {
        let value = MotionValue::new(0.0);
        let count = Rc::new(Cell::new(0));
        let mut sub = value.subscribe({
            let count = count.clone();
            move |_| count.set(count.get() + 1)
        });
        assert_eq!(value.listener_count(), 1);

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(value.listener_count(), 0);

        value.set(1.0);
        assert_eq!(count.get(), 0);
        drop(sub);
    }

    #[test]
    fn unsubscribe_after_source_dropped() {
        let value = MotionValue::new(0.0);
        let mut sub = value.subscribe(|_| {});
        drop(value);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }

    #[test]
    fn derived_values_follow_source_in_lockstep() {
        let progress = MotionValue::new(0.0);
        let y = progress.transform(BreakpointTable::linear(50.0, -50.0));
        let opacity = progress.transform(
            BreakpointTable::from_ranges(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap(),
        );
        assert_eq!(y.get(), 50.0);
        assert_eq!(opacity.get(), 0.0);

        progress.set(0.5);
        assert_eq!(y.get(), 0.0);
        assert_eq!(opacity.get(), 1.0);

        progress.set(2.0);
        assert_eq!(y.get(), -50.0);
        assert_eq!(opacity.get(), 0.0);
    }

    #[test]
    fn dropping_derived_value_detaches_it() {
        let progress = MotionValue::new(0.0);
        let scale = progress.map(|p| 1.0 + p);
        assert_eq!(progress.listener_count(), 1);
        drop(scale);
        assert_eq!(progress.listener_count(), 0);
    }

    #[test]
    fn dropping_style_writer_releases_its_derived_values() {
        let progress = MotionValue::new(0.0);
        for _ in 0..4 {
            let y = progress.transform(BreakpointTable::linear(0.0, 10.0));
            let writer = progress.subscribe(move |_| {
                y.get();
            });
            assert_eq!(progress.listener_count(), 2);
            drop(writer);
            assert_eq!(progress.listener_count(), 0);
        }
        progress.set(1.0);
    }

    #[test]
    fn unsubscribing_from_inside_a_listener_is_safe() {
        let progress = MotionValue::new(0.0);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let sub = progress.subscribe({
            let slot = slot.clone();
            move |_| drop(slot.borrow_mut().take())
        });
        *slot.borrow_mut() = Some(sub);

        progress.set(0.5);
        assert_eq!(progress.listener_count(), 0);
        progress.set(1.0);
    }

    #[test]
    fn chained_derivations_propagate() {
        let progress = MotionValue::new(0.0);
        let degrees = progress.transform(BreakpointTable::linear(0.0, 360.0));
        let turns = degrees.map(|d| d / 360.0);
        progress.set(0.5);
        assert_eq!(turns.get(), 0.5);
    }
}
