//! The trivial "replace the whole value" reducer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::{Action, Variant};
use crate::cursor::Cursor;
use crate::reducer::{reducer, Reducer, State};

/// Replaces a value wholesale. The only action of a [`replace`] reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replace<P>(pub P);

/// Kind of [`Replace`]; there is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplaceKind;

impl<P> Action for Replace<P>
where
    P: fmt::Debug + Clone + Send + Sync + 'static,
{
    type Kind = ReplaceKind;

    fn kind(&self) -> ReplaceKind {
        ReplaceKind
    }
}

/// A reducer for scalar values that have no finer-grained updates.
pub fn replace<P>(empty: P) -> Reducer<P, Replace<P>>
where
    P: State + fmt::Debug,
{
    let variant = Variant::new(ReplaceKind, Replace, |Replace(value)| Some(value));
    reducer(empty).on(variant, |_old: P, value: P| value)
}

impl<P> Cursor<P, Replace<P>>
where
    P: State + fmt::Debug,
{
    /// Dispatches a replacement of the whole value.
    pub fn set(&self, value: P) -> Self {
        self.dispatch(Replace(value))
    }
}
