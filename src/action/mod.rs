//! Actions: tagged, immutable records that reducers consume.
//!
//! Every reducer owns a closed action enum. Each variant carries exactly
//! one payload and has a matching entry in a fieldless kind enum, so
//! dispatch compares small `Copy` discriminators instead of strings and a
//! forgotten variant is a compile error inside [`Action::kind`].
//!
//! ```
//! use immuto::{actions, variant};
//!
//! actions! {
//!     pub enum CounterAction => CounterKind {
//!         Add(i64),
//!         Reset(()),
//!     }
//! }
//!
//! let add = variant!(CounterAction::Add => CounterKind::Add);
//! assert_eq!(add.create(2), CounterAction::Add(2));
//! ```

mod creator;
mod macros;
mod variant;

use std::fmt;
use std::hash::Hash;

pub use creator::{action, ActionCreator, ActionDefinition};
pub use variant::Variant;

/// An action that a [`Reducer`](crate::Reducer) can dispatch on.
///
/// Usually implemented by the [`actions!`](crate::actions) macro rather
/// than by hand.
pub trait Action: fmt::Debug + Clone + Send + Sync + 'static {
    /// Discriminator, unique per variant.
    type Kind: fmt::Debug + Copy + Eq + Hash + Send + Sync + 'static;

    /// The kind of this action.
    fn kind(&self) -> Self::Kind;
}
