//! Scroll-event delivery with scoped listener registration.

use core::mem;
use log::trace;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(f64)>;

struct Entry {
    id: u64,
    listener: Listener,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    entries: Vec<Entry>,
    /// Ids unsubscribed while a dispatch had the entries checked out.
    retired: Vec<u64>,
    dispatching: bool,
}

/// Delivers scroll-position-changed events to registered listeners, in
/// registration order, synchronously on the caller's stack.
///
/// Registration returns a [`ScrollSubscription`] guard; dropping the guard
/// deregisters the listener exactly once. After the guard is dropped the
/// listener is never invoked again, matching the mount/unmount contract.
#[derive(Clone, Default)]
pub struct ScrollEventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ScrollEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The listener fires until the returned guard is
    /// dropped.
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            listener: Box::new(listener),
        });
        trace!("scroll listener {id} registered");
        ScrollSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver one scroll event to every live listener.
    ///
    /// Listeners may subscribe or drop guards from inside the callback; the
    /// entries are checked out for the duration of the dispatch so the bus
    /// is never re-borrowed while a listener runs.
    pub fn dispatch(&self, offset: f64) {
        let mut active = {
            let mut inner = self.inner.borrow_mut();
            inner.dispatching = true;
            mem::take(&mut inner.entries)
        };
        for entry in &mut active {
            let retired = self.inner.borrow().retired.contains(&entry.id);
            if !retired {
                (entry.listener)(offset);
            }
        }
        let mut inner = self.inner.borrow_mut();
        inner.dispatching = false;
        // Listeners subscribed during the dispatch landed in `entries`.
        let added = mem::take(&mut inner.entries);
        inner.entries = active;
        inner.entries.extend(added);
        let retired = mem::take(&mut inner.retired);
        inner.entries.retain(|entry| !retired.contains(&entry.id));
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Guard tying a listener's lifetime to its owner's lifetime.
pub struct ScrollSubscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        let mut inner = bus.borrow_mut();
        if inner.dispatching {
            // Entries are checked out; mark for removal when they return.
            inner.retired.push(self.id);
        } else {
            let id = self.id;
            inner.entries.retain(|entry| entry.id != id);
        }
        trace!("scroll listener {} deregistered", self.id);
    }
}
