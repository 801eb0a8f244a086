//! The payload carried by collection actions.

use serde::{Deserialize, Serialize};

/// What to do with the item at a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOp<U> {
    /// Make sure the key exists, inserting the item reducer's empty value
    /// if it does not. Existing items are left alone.
    Ensure,
    /// Apply an item action, creating the item from empty first if needed.
    Apply(U),
    /// Remove the key. Removing a missing key does nothing.
    Remove,
}

/// Payload of a collection action: a key and an operation on its item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update<K, U> {
    pub key: K,
    pub op: ItemOp<U>,
}

impl<K, U> Update<K, U> {
    pub fn ensure(key: K) -> Self {
        Self {
            key,
            op: ItemOp::Ensure,
        }
    }

    pub fn apply(key: K, action: U) -> Self {
        Self {
            key,
            op: ItemOp::Apply(action),
        }
    }

    pub fn remove(key: K) -> Self {
        Self {
            key,
            op: ItemOp::Remove,
        }
    }
}
