//! Subscriber lists for wheel and controller events
//!
//! A `Notifier` holds plain callbacks keyed by a handle. Callbacks cannot
//! report failure back to the notifier, so a misbehaving sink never stalls the
//! animation loop.

/// Handle returned by [`Notifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u32);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered list of event subscribers
pub struct Notifier<E> {
    subscribers: Vec<(SubscriberId, Callback<E>)>,
    next_id: u32,
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a callback; it is invoked in subscription order
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver an event to every subscriber
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::<u32>::new();

        let a = log.clone();
        notifier.subscribe(move |e| a.borrow_mut().push(("a", *e)));
        let b = log.clone();
        notifier.subscribe(move |e| b.borrow_mut().push(("b", *e)));

        notifier.notify(&7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe_only_removes_handle() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::<()>::new();

        let a = hits.clone();
        let id_a = notifier.subscribe(move |_| a.borrow_mut().push('a'));
        let b = hits.clone();
        notifier.subscribe(move |_| b.borrow_mut().push('b'));

        assert!(notifier.unsubscribe(id_a));
        assert!(!notifier.unsubscribe(id_a));
        assert_eq!(notifier.len(), 1);

        notifier.notify(&());
        assert_eq!(*hits.borrow(), vec!['b']);
    }

    #[test]
    fn test_empty_notifier() {
        let mut notifier = Notifier::<i32>::default();
        assert!(notifier.is_empty());
        notifier.notify(&1);
    }
}
