//! Observable value container shared by the client stores.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Writable::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

/// A value plus the callbacks interested in it.
///
/// Cloning a `Writable` clones the handle: both clones see the same value.
/// Subscribers run synchronously after every `set`/`update` and may read
/// the container, but must not write to it from inside the callback.
pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Writable {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Writable<T> {
    fn default() -> Self {
        Writable::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Writable {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value (cloned)
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Register a callback. It is called at once with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let callback: Subscriber<T> = Rc::new(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&current);
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Mutate in place, then notify
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        let (value, subscribers): (T, Vec<Subscriber<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.value.clone(),
                inner.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect(),
            )
        };
        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscribe_called_immediately() {
        let store = Writable::new(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |v| sink.borrow_mut().push(*v));

        store.set(4);
        store.update(|v| *v *= 10);
        assert_eq!(*seen.borrow(), vec![3, 4, 40]);
        assert_eq!(store.get(), 40);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Writable::new(String::new());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set("changed".into());
        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let a = Writable::new(vec![1]);
        let b = a.clone();
        b.update(|v| v.push(2));
        assert_eq!(a.with(|v| v.len()), 2);
    }

    #[test]
    fn test_subscriber_may_read_store() {
        let store = Writable::new(1);
        let reader = store.clone();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        store.subscribe(move |_| sink.set(reader.get()));
        store.set(9);
        assert_eq!(seen.get(), 9);
    }
}
