//! Collection adapters: nested reducers addressed by key.
//!
//! A [`Collection`] turns a reducer for an item type into a handler of the
//! state that owns the container, plus a way to derive item cursors. A
//! [`Reference`] is a collection with exactly one unkeyed slot, and a
//! [`Property`] is a reference whose only update replaces the value.
//!
//! The action payload of a collection is an [`Update`]:
//!
//! ```text
//! ShopAction::Shelves(Update { key: "ADV", op: Apply(
//!     ShelfAction::Books(Update { key: 1002, op: Apply(
//!         BookAction::SetPrice(4.99)) })) })
//! ```

mod keyed;
mod operations;
mod property;
mod reference;
mod update;

pub use keyed::{Collection, ItemCursor};
pub use operations::{BTreeMapOps, HashMapOps, Operations, SlotOps};
pub use property::Property;
pub use reference::Reference;
pub use update::{ItemOp, Update};
