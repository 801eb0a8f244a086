//! Action definitions: what a reducer registers per kind.

use std::fmt;
use std::sync::Arc;

use super::{Action, Variant};

/// Something a [`Reducer`](crate::Reducer) can register under one action
/// kind.
///
/// Implemented by [`ActionCreator`] for plain state transitions and by the
/// collection adapters for nested updates.
pub trait ActionDefinition<S, A: Action>: Send + Sync + 'static {
    /// The kind this definition handles.
    fn kind(&self) -> A::Kind;

    /// Applies an action of [`kind`](Self::kind) to `state`.
    ///
    /// Only called with actions whose kind matches.
    fn apply(&self, state: S, action: A) -> S;
}

/// A variant paired with the pure function that reduces its payload.
pub struct ActionCreator<S, A: Action, P> {
    variant: Variant<A, P>,
    reduce: Arc<dyn Fn(S, P) -> S + Send + Sync>,
}

impl<S, A: Action, P> ActionCreator<S, A, P> {
    pub fn new<F>(variant: Variant<A, P>, reduce: F) -> Self
    where
        F: Fn(S, P) -> S + Send + Sync + 'static,
    {
        Self {
            variant,
            reduce: Arc::new(reduce),
        }
    }

    /// Builds an action carrying `payload`.
    pub fn create(&self, payload: P) -> A {
        self.variant.create(payload)
    }

    pub fn variant(&self) -> Variant<A, P> {
        self.variant
    }
}

impl<S, A: Action, P> Clone for ActionCreator<S, A, P> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            reduce: Arc::clone(&self.reduce),
        }
    }
}

impl<S, A: Action, P> fmt::Debug for ActionCreator<S, A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("kind", &self.variant.kind())
            .finish_non_exhaustive()
    }
}

impl<S, A, P> ActionDefinition<S, A> for ActionCreator<S, A, P>
where
    S: 'static,
    A: Action,
    P: 'static,
{
    fn kind(&self) -> A::Kind {
        self.variant.kind()
    }

    fn apply(&self, state: S, action: A) -> S {
        match self.variant.extract(action) {
            Some(payload) => (self.reduce)(state, payload),
            None => {
                tracing::warn!(
                    kind = ?self.variant.kind(),
                    "Action routed to a handler of another kind, state unchanged"
                );
                state
            }
        }
    }
}

/// Defines an action for later inclusion in a reducer.
///
/// ```
/// use immuto::{action, actions, reducer, variant};
///
/// actions! {
///     pub enum NameAction => NameKind {
///         Set(String),
///     }
/// }
///
/// let set = action(variant!(NameAction::Set => NameKind::Set), |_old: String, new: String| new);
/// let names = reducer(String::new()).action(set.clone());
/// assert_eq!(names.reduce(None, set.create("Ada".into())), "Ada");
/// ```
pub fn action<S, A, P, F>(variant: Variant<A, P>, reduce: F) -> ActionCreator<S, A, P>
where
    A: Action,
    F: Fn(S, P) -> S + Send + Sync + 'static,
{
    ActionCreator::new(variant, reduce)
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::actions! {
        enum Meter => MeterKind {
            Add(u32),
            Clear(()),
        }
    }

    fn add() -> ActionCreator<u32, Meter, u32> {
        action(crate::variant!(Meter::Add => MeterKind::Add), |total: u32, n: u32| {
            total + n
        })
    }

    #[test]
    fn apply_reduces_payload() {
        let add = add();
        assert_eq!(add.apply(2, add.create(3)), 5);
        assert_eq!(ActionDefinition::<u32, Meter>::kind(&add), MeterKind::Add);
    }

    #[test]
    fn apply_ignores_foreign_kind() {
        let add = add();
        assert_eq!(add.apply(2, Meter::Clear(())), 2);
    }
}
