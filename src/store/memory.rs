//! In-memory store.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::Mutex;

use super::{Listener, Store, Subscription};
use crate::action::Action;
use crate::config::StoreConfig;
use crate::reducer::{Reducer, State};

/// One entry of a store's dispatch history.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord<K> {
    /// 1-based position of the action among everything dispatched.
    pub sequence: u64,
    pub kind: K,
    pub at: SystemTime,
}

struct Inner<S, K> {
    state: Arc<S>,
    sequence: u64,
    history: VecDeque<DispatchRecord<K>>,
}

type Listeners = Arc<Mutex<Vec<(u64, Listener)>>>;

/// A thread-safe store holding the root state in memory.
///
/// Actions are reduced under a lock, so concurrent dispatches are applied
/// one after another. Listeners run after the lock is released and may
/// dispatch again.
pub struct MemoryStore<S, A: Action> {
    reducer: Reducer<S, A>,
    inner: Mutex<Inner<S, A::Kind>>,
    listeners: Listeners,
    next_listener: AtomicU64,
    history_capacity: usize,
}

impl<S: State, A: Action> MemoryStore<S, A> {
    /// A store starting from the reducer's empty state.
    pub fn new(reducer: Reducer<S, A>, config: &StoreConfig) -> Self {
        let state = reducer.empty().clone();
        Self::with_state(reducer, state, config)
    }

    pub fn with_state(reducer: Reducer<S, A>, state: S, config: &StoreConfig) -> Self {
        Self {
            reducer,
            inner: Mutex::new(Inner {
                state: Arc::new(state),
                sequence: 0,
                history: VecDeque::with_capacity(config.history_capacity),
            }),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener: AtomicU64::new(0),
            history_capacity: config.history_capacity,
        }
    }

    pub fn reducer(&self) -> &Reducer<S, A> {
        &self.reducer
    }

    /// Number of actions dispatched so far.
    pub fn sequence(&self) -> u64 {
        self.inner.lock().sequence
    }

    /// The most recent dispatches, oldest first.
    pub fn history(&self) -> Vec<DispatchRecord<A::Kind>> {
        self.inner.lock().history.iter().cloned().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener();
        }
    }
}

impl<S: State, A: Action> Store<S, A> for MemoryStore<S, A> {
    fn dispatch(&self, action: A) {
        let kind = action.kind();

        let sequence = {
            let mut inner = self.inner.lock();
            let next = self.reducer.apply(S::clone(&inner.state), action);
            inner.state = Arc::new(next);
            inner.sequence += 1;

            let sequence = inner.sequence;
            if self.history_capacity > 0 {
                if inner.history.len() == self.history_capacity {
                    inner.history.pop_front();
                }
                inner.history.push_back(DispatchRecord {
                    sequence,
                    kind,
                    at: SystemTime::now(),
                });
            }
            sequence
        };

        tracing::debug!(sequence, kind = ?kind, "Action dispatched");
        self.notify();
    }

    fn current_state(&self) -> Arc<S> {
        Arc::clone(&self.inner.lock().state)
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_listener.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, listener));
        tracing::trace!(listener = id, "Listener subscribed");

        let listeners = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.lock().retain(|(existing, _)| *existing != id);
                tracing::trace!(listener = id, "Listener unsubscribed");
            }
        })
    }
}

impl<S: 'static, A: Action> fmt::Debug for MemoryStore<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("reducer", &self.reducer)
            .field("sequence", &self.inner.lock().sequence)
            .field("history_capacity", &self.history_capacity)
            .finish_non_exhaustive()
    }
}
