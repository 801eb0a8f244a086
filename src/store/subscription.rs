//! Listener registration handles.

use std::fmt;

type Cancel = Box<dyn FnOnce() + Send + Sync>;

/// Keeps a store listener registered.
///
/// The listener is removed when the subscription is dropped or
/// [`unsubscribe`](Self::unsubscribe)d. Call [`detach`](Self::detach) to
/// keep it for the rest of the store's lifetime.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    cancel: Option<Cancel>,
}

impl Subscription {
    /// A subscription that runs `cancel` once when it ends.
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Gives up the ability to unsubscribe.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Arc<AtomicUsize>, Subscription) {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cancelled);
        let subscription = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (cancelled, subscription)
    }

    #[test]
    fn drop_cancels_once() {
        let (cancelled, subscription) = counting();
        drop(subscription);
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_cancels_once() {
        let (cancelled, subscription) = counting();
        subscription.unsubscribe();
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn detach_never_cancels() {
        let (cancelled, subscription) = counting();
        subscription.detach();
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);
    }
}
