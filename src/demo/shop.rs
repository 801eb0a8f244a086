//! Shops hold shelves keyed by code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::shelf::{shelf, Shelf, ShelfAction};
use crate::collection::{BTreeMapOps, Collection, Update};
use crate::reducer::{reducer, Reducer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub shelves: BTreeMap<String, Shelf>,
}

crate::actions! {
    #[derive(Serialize, Deserialize)]
    pub enum ShopAction => ShopKind {
        SetName(String),
        Shelves(Update<String, ShelfAction>),
    }
}

pub type Shelves =
    Collection<Shop, ShopAction, BTreeMap<String, Shelf>, String, Shelf, ShelfAction>;

pub fn shelves() -> Shelves {
    Collection::new(
        crate::variant!(ShopAction::Shelves => ShopKind::Shelves),
        shelf(),
        BTreeMapOps,
        crate::field!(Shop, shelves),
    )
}

pub fn shop() -> Reducer<Shop, ShopAction> {
    reducer(Shop::default())
        .on(
            crate::variant!(ShopAction::SetName => ShopKind::SetName),
            |shop: Shop, name| Shop { name, ..shop },
        )
        .action(shelves())
}
