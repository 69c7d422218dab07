//! Subscriber registry with deferred delivery.
//!
//! Widgets publish values with [`Subscribers::schedule`]; nothing is called
//! until the host runs [`Subscribers::flush`] on its next event-loop turn.
//! This keeps subscriber code from running inside the widget's own state
//! update.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use cms_ui::Subscribers;
//!
//! let subscribers = Subscribers::<u32>::new();
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//! let subscription = subscribers.subscribe(move |value| sink.set(value));
//!
//! subscribers.schedule(7);
//! assert_eq!(seen.get(), 0);
//! subscribers.flush();
//! assert_eq!(seen.get(), 7);
//!
//! subscription.unsubscribe();
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier handed out per subscription, unique within one registry.
pub type SubscriptionId = u64;

type Handler<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Registry<T> {
    next_id: SubscriptionId,
    handlers: Vec<(SubscriptionId, Handler<T>)>,
    /// Values waiting for delivery, each with the handlers subscribed when it was scheduled
    pending: VecDeque<(T, Vec<Handler<T>>)>,
}

trait Unsubscribe {
    fn remove(&mut self, id: SubscriptionId) -> bool;
}

impl<T> Unsubscribe for Registry<T> {
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }
}

/// A set of callbacks notified with deferred values of type `T`.
///
/// Single-threaded: the registry lives on the UI thread with its owner.
pub struct Subscribers<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

impl<T: Clone + 'static> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
                pending: VecDeque::new(),
            })),
        }
    }

    /// Register a callback. It stays registered until the returned
    /// [`Subscription`] is unsubscribed; dropping the handle keeps it.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: FnMut(T) + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        let handler: Handler<T> = Rc::new(RefCell::new(f));
        registry.handlers.push((id, handler));
        drop(registry);

        let erased: Rc<RefCell<dyn Unsubscribe>> = self.inner.clone();
        Subscription {
            id,
            registry: Rc::downgrade(&erased),
        }
    }

    /// Queue `value` for every currently subscribed callback.
    ///
    /// The subscriber list is captured now: callbacks unsubscribed before the
    /// next flush still receive this value, callbacks subscribed later don't.
    pub fn schedule(&self, value: T) {
        let mut registry = self.inner.borrow_mut();
        if registry.handlers.is_empty() {
            return;
        }
        let targets = registry.handlers.iter().map(|(_, h)| h.clone()).collect();
        registry.pending.push_back((value, targets));
    }

    /// Deliver everything scheduled before this call. Values scheduled by the
    /// callbacks themselves wait for the next flush.
    ///
    /// Returns the number of callback invocations.
    pub fn flush(&self) -> usize {
        let batch = std::mem::take(&mut self.inner.borrow_mut().pending);
        let mut delivered = 0;
        for (value, targets) in batch {
            for handler in targets {
                match handler.try_borrow_mut() {
                    Ok(mut f) => {
                        let callback = &mut *f;
                        callback(value.clone());
                        delivered += 1;
                    }
                    Err(_) => log::warn!("Skipping re-entrant subscriber callback"),
                }
            }
        }
        delivered
    }

    /// Drop all queued values without delivering them.
    pub fn discard_pending(&self) {
        self.inner.borrow_mut().pending.clear();
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.inner.borrow().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values waiting for [`flush`](Self::flush).
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl<T: Clone + 'static> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("Subscribers")
            .field("handlers", &registry.handlers.len())
            .field("pending", &registry.pending.len())
            .finish()
    }
}

/// Handle returned by [`Subscribers::subscribe`].
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<dyn Unsubscribe>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Stop future notifications. Returns false if the registry is gone or
    /// the callback was already removed.
    pub fn unsubscribe(self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.borrow_mut().remove(self.id),
            None => false,
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("alive", &(self.registry.strong_count() > 0))
            .finish()
    }
}
