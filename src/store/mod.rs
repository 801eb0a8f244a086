//! Stores: the one mutable cell that holds the root state.
//!
//! The engine only needs three things from a store, captured by the
//! [`Store`] trait: dispatch an action, read the current state and notify
//! subscribers. [`MemoryStore`] is the bundled in-memory implementation;
//! [`snapshot`] and [`live`] turn any store into a root [`Cursor`].

mod memory;
mod subscription;

use std::sync::Arc;

use crate::action::Action;
use crate::cursor::{Cursor, Fetched};
use crate::reducer::State;

pub use memory::{DispatchRecord, MemoryStore};
pub use subscription::Subscription;

/// Callback run after every dispatch.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// A container for the root state driven by a reducer.
pub trait Store<S, A: Action>: Send + Sync {
    /// Reduces `action` into the held state and notifies listeners.
    fn dispatch(&self, action: A);

    fn current_state(&self) -> Arc<S>;

    /// Registers `listener`; it runs after each dispatch until the
    /// returned [`Subscription`] is dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// A root cursor over the store's state as of now.
///
/// Dispatching sends the action to the store and returns a cursor over
/// the state the store holds right after.
pub fn snapshot<S, A, T>(store: &Arc<T>) -> Cursor<S, A>
where
    S: State,
    A: Action,
    T: Store<S, A> + ?Sized + 'static,
{
    let fetched = Fetched {
        exists: true,
        state: store.current_state(),
    };
    let store = Arc::clone(store);
    Cursor::new(fetched, move |action| {
        store.dispatch(action);
        snapshot(&store)
    })
}

/// A root cursor that reads the store's current state on every access.
pub fn live<S, A, T>(store: &Arc<T>) -> Cursor<S, A>
where
    S: State,
    A: Action,
    T: Store<S, A> + ?Sized + 'static,
{
    let reader = Arc::clone(store);
    let store = Arc::clone(store);
    Cursor::live(
        move || Fetched {
            exists: true,
            state: reader.current_state(),
        },
        move |action| {
            store.dispatch(action);
            live(&store)
        },
    )
}
