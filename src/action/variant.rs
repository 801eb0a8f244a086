//! One variant of an action enum, as a first-class value.

use std::fmt;

use super::Action;

/// A single variant of an action enum: its kind, how to build it from a
/// payload and how to get the payload back out.
///
/// Built with the [`variant!`](crate::variant) macro.
pub struct Variant<A: Action, P> {
    kind: A::Kind,
    make: fn(P) -> A,
    take: fn(A) -> Option<P>,
}

impl<A: Action, P> Variant<A, P> {
    /// Creates a variant from its parts.
    ///
    /// `make(p).kind()` must equal `kind`, and `take` must return `Some`
    /// exactly for actions of that kind.
    pub fn new(kind: A::Kind, make: fn(P) -> A, take: fn(A) -> Option<P>) -> Self {
        Self { kind, make, take }
    }

    pub fn kind(&self) -> A::Kind {
        self.kind
    }

    /// Wraps a payload into an action of this kind.
    pub fn create(&self, payload: P) -> A {
        let action = (self.make)(payload);
        debug_assert_eq!(
            action.kind(),
            self.kind,
            "variant constructor disagrees with its registered kind"
        );
        action
    }

    /// Returns the payload if `action` is of this kind.
    pub fn extract(&self, action: A) -> Option<P> {
        (self.take)(action)
    }
}

impl<A: Action, P> Clone for Variant<A, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Action, P> Copy for Variant<A, P> {}

impl<A: Action, P> fmt::Debug for Variant<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("kind", &self.kind).finish()
    }
}
