//! Surface-size notifications with explicit teardown.
//!
//! A host publishes the initial size and every resize into a [`ResizeHub`].
//! Consumers subscribe and hold the returned [`Subscription`]; dropping it
//! (or calling [`Subscription::unsubscribe`]) releases the listener, so a
//! torn-down view is never asked to render again.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tg_render::{ResizeHub, Size};
//!
//! let hub = ResizeHub::new();
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = seen.clone();
//! let subscription = hub.subscribe(move |size: Size| sink.set(size.width));
//! hub.publish(Size::new(640.0, 480.0));
//! assert_eq!(seen.get(), 640.0);
//!
//! subscription.unsubscribe();
//! hub.publish(Size::new(800.0, 600.0));
//! assert_eq!(seen.get(), 640.0);
//! ```

use crate::geometry::Size;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(Size)>>;

/// Single-threaded fan-out of surface sizes.
#[derive(Default)]
pub struct ResizeHub {
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
    last: Cell<Option<Size>>,
}

impl ResizeHub {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a listener. If a size was already published, the listener
    /// is called with it straight away.
    pub fn subscribe<F>(self: &Rc<Self>, listener: F) -> Subscription
    where
        F: FnMut(Size) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let listener: Listener = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().push((id, listener.clone()));

        if let Some(size) = self.last.get() {
            (&mut *listener.borrow_mut())(size);
        }

        Subscription {
            hub: Rc::downgrade(self),
            id,
            active: true,
        }
    }

    /// Deliver a size to every current listener.
    pub fn publish(&self, size: Size) {
        self.last.set(Some(size));
        // snapshot so listeners may unsubscribe while being notified
        let listeners: Vec<(u64, Listener)> = self.listeners.borrow().clone();
        for (id, listener) in listeners {
            // an earlier listener may have unsubscribed this one
            if !self.is_registered(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(size),
                Err(_) => log::warn!("skipping re-entrant resize listener"),
            }
        }
    }

    pub fn last_size(&self) -> Option<Size> {
        self.last.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(i, _)| *i == id)
    }

    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(i, _)| *i != id);
    }
}

/// Keeps one listener registered on a [`ResizeHub`] while alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    hub: Weak<ResizeHub>,
    id: u64,
    active: bool,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.active && self.hub.strong_count() > 0
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(hub) = self.hub.upgrade() {
            hub.remove(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
