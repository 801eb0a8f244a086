//! The handler chain behind every reducer.

use std::fmt;
use std::sync::Arc;

use crate::action::{Action, ActionCreator, ActionDefinition, Variant};
use crate::config::StoreConfig;
use crate::reducer::State;
use crate::store::MemoryStore;

struct Handler<S, A: Action> {
    kind: A::Kind,
    definition: Arc<dyn ActionDefinition<S, A>>,
}

impl<S, A: Action> Clone for Handler<S, A> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            definition: Arc::clone(&self.definition),
        }
    }
}

/// Transforms state based on actions.
///
/// Holds the empty state and an ordered list of handlers, one per kind.
/// Dispatch scans the list from the most recently registered handler;
/// an action nobody handles leaves the state unchanged.
///
/// Registering a kind that is already present shadows the earlier
/// handler: the later registration wins.
pub struct Reducer<S, A: Action> {
    empty: Arc<S>,
    handlers: Arc<[Handler<S, A>]>,
}

/// Creates a reducer with no handlers, starting from `empty`.
pub fn reducer<S: 'static, A: Action>(empty: S) -> Reducer<S, A> {
    Reducer::new(empty)
}

impl<S: 'static, A: Action> Reducer<S, A> {
    pub fn new(empty: S) -> Self {
        Self {
            empty: Arc::new(empty),
            handlers: Arc::from(Vec::new()),
        }
    }

    /// A suitable initial state.
    pub fn empty(&self) -> &S {
        &self.empty
    }

    /// Returns a reducer that additionally handles `definition`'s kind.
    ///
    /// `self` is left untouched.
    pub fn action<D>(&self, definition: D) -> Self
    where
        D: ActionDefinition<S, A>,
    {
        self.with_handler(Handler {
            kind: definition.kind(),
            definition: Arc::new(definition),
        })
    }

    /// Shorthand for `.action(ActionCreator::new(variant, reduce))`.
    pub fn on<P, F>(&self, variant: Variant<A, P>, reduce: F) -> Self
    where
        P: 'static,
        F: Fn(S, P) -> S + Send + Sync + 'static,
    {
        self.action(ActionCreator::new(variant, reduce))
    }

    /// Re-chains every handler of `other` on top of this reducer.
    ///
    /// Kinds handled by both end up with `other`'s handler. The result
    /// starts from `other`'s empty state.
    pub fn mixin(&self, other: &Self) -> Self {
        let mut merged = Self {
            empty: Arc::clone(&other.empty),
            handlers: Arc::clone(&self.handlers),
        };
        for handler in other.handlers.iter() {
            merged = merged.with_handler(handler.clone());
        }
        merged
    }

    fn with_handler(&self, handler: Handler<S, A>) -> Self {
        let mut handlers: Vec<Handler<S, A>> = self
            .handlers
            .iter()
            .filter(|existing| existing.kind != handler.kind)
            .cloned()
            .collect();

        if handlers.len() != self.handlers.len() {
            tracing::debug!(kind = ?handler.kind, "Handler shadows an earlier registration");
        }

        handlers.push(handler);
        Self {
            empty: Arc::clone(&self.empty),
            handlers: handlers.into(),
        }
    }

    /// Whether some handler is registered for `kind`.
    pub fn handles(&self, kind: A::Kind) -> bool {
        self.handlers.iter().any(|handler| handler.kind == kind)
    }

    /// Registered kinds, most recently registered first.
    pub fn kinds(&self) -> impl Iterator<Item = A::Kind> + '_ {
        self.handlers.iter().rev().map(|handler| handler.kind)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Applies `action` to `state`.
    pub fn apply(&self, state: S, action: A) -> S {
        let kind = action.kind();
        match self.handlers.iter().rev().find(|handler| handler.kind == kind) {
            Some(handler) => handler.definition.apply(state, action),
            None => {
                tracing::trace!(kind = ?kind, "No handler for action, state unchanged");
                state
            }
        }
    }
}

impl<S: Clone + 'static, A: Action> Reducer<S, A> {
    /// Applies `action`, substituting the empty state when `state` is absent.
    pub fn reduce(&self, state: Option<S>, action: A) -> S {
        let state = state.unwrap_or_else(|| S::clone(&self.empty));
        self.apply(state, action)
    }
}

impl<S: State, A: Action> Reducer<S, A> {
    /// Creates an in-memory store driven by this reducer, starting from the
    /// empty state.
    pub fn store(&self) -> Arc<MemoryStore<S, A>> {
        self.store_with(&StoreConfig::default())
    }

    pub fn store_with(&self, config: &StoreConfig) -> Arc<MemoryStore<S, A>> {
        Arc::new(MemoryStore::new(self.clone(), config))
    }
}

impl<S, A: Action> Clone for Reducer<S, A> {
    fn clone(&self) -> Self {
        Self {
            empty: Arc::clone(&self.empty),
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<S: 'static, A: Action> fmt::Debug for Reducer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
