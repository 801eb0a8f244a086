//! A single nested state with its own reducer.

use std::fmt;

use super::{Collection, SlotOps, Update};
use crate::action::{Action, ActionDefinition, Variant};
use crate::cursor::Cursor;
use crate::field::Field;
use crate::reducer::{Reducer, State};

/// A collection of exactly one always-present item, addressed by `()`.
///
/// Used when an owner state embeds another state that has a reducer of
/// its own, e.g. a founder owning a shop.
pub struct Reference<S, A: Action, I, IA: Action> {
    slot: Collection<S, A, I, (), I, IA>,
}

impl<S, A, I, IA> Reference<S, A, I, IA>
where
    S: State,
    A: Action,
    I: State,
    IA: Action,
{
    pub fn new(
        variant: Variant<A, Update<(), IA>>,
        items: Reducer<I, IA>,
        field: Field<S, I>,
    ) -> Self {
        Self {
            slot: Collection::new(variant, items, SlotOps, field),
        }
    }

    /// The referenced state's reducer.
    pub fn items(&self) -> &Reducer<I, IA> {
        self.slot.items()
    }

    /// An owner action applying `action` to the referenced state.
    pub fn update(&self, action: IA) -> A {
        self.slot.update((), action)
    }

    /// A snapshot cursor over the referenced state.
    pub fn cursor(&self, outer: &Cursor<S, A>) -> Cursor<I, IA> {
        self.slot.derivation().at(outer, ())
    }

    /// A live cursor over the referenced state.
    pub fn live_cursor(&self, outer: &Cursor<S, A>) -> Cursor<I, IA> {
        self.slot.derivation().live(outer, ())
    }
}

impl<S, A, I, IA> ActionDefinition<S, A> for Reference<S, A, I, IA>
where
    S: State,
    A: Action,
    I: State,
    IA: Action,
{
    fn kind(&self) -> A::Kind {
        self.slot.kind()
    }

    fn apply(&self, state: S, action: A) -> S {
        self.slot.apply(state, action)
    }
}

impl<S, A: Action, I, IA: Action> Clone for Reference<S, A, I, IA> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<S, A: Action, I: 'static, IA: Action> fmt::Debug for Reference<S, A, I, IA> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference").field("slot", &self.slot).finish()
    }
}
