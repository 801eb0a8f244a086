//! Typed reducer composition and cursors over immutable state trees.
//!
//! # Architecture
//!
//! ```text
//! leaf action ──wrap──→ Update ──wrap──→ ... ──→ Store ──→ new root state
//!      ↑                                                     │
//!      └──────── Cursor::dispatch returns fresh cursors ─────┘
//! ```
//!
//! - **Reducer**: an ordered list of handlers keyed by action kind
//! - **Cursor**: a frozen (or live) view of a sub-state plus a dispatch
//!   function that wraps actions for every enclosing level
//! - **Collection / Reference / Property**: adapters that turn an item
//!   reducer into a handler of the owning state and derive item cursors
//! - **Store**: the one mutable cell; [`store::MemoryStore`] is the bundled
//!   implementation

pub mod action;
pub mod collection;
pub mod config;
pub mod cursor;
pub mod demo;
pub mod field;
pub mod logging;
pub mod reducer;
pub mod store;

pub use action::{action, Action, ActionCreator, ActionDefinition, Variant};
pub use collection::{
    BTreeMapOps, Collection, HashMapOps, ItemCursor, ItemOp, Operations, Property, Reference,
    SlotOps, Update,
};
pub use cursor::{derive, Addressing, Cursor, Derivation, Fetched, Pipe};
pub use field::Field;
pub use reducer::{reducer, replace, Reducer, Replace, State};
pub use store::{live, snapshot, MemoryStore, Store, Subscription};
