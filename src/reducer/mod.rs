//! Reducer composition.
//!
//! A [`Reducer`] maps `(state, action)` to a new state. It is built by
//! chaining handlers, one per action kind, onto an empty state:
//!
//! ```text
//! reducer(empty) ──.action(a)──→ [a] ──.action(b)──→ [a, b] ──.mixin(r)──→ [a, b, r...]
//! ```
//!
//! Reducers are immutable: every extension returns a new value that shares
//! the existing handlers.

mod chain;
mod replace;
mod state;

pub use chain::{reducer, Reducer};
pub use replace::{replace, Replace, ReplaceKind};
pub use state::State;
