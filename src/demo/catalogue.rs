//! A flat catalogue of items keyed by number, stored in a `HashMap`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::book::{book, Book, BookAction};
use crate::collection::{Collection, HashMapOps, Property, Update};
use crate::reducer::{reducer, Reducer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalogue {
    pub name: String,
    pub items: HashMap<u32, Book>,
}

crate::actions! {
    #[derive(Serialize, Deserialize)]
    pub enum CatalogueAction => CatalogueKind {
        SetName(String),
        Items(Update<u32, BookAction>),
    }
}

pub type Items =
    Collection<Catalogue, CatalogueAction, HashMap<u32, Book>, u32, Book, BookAction>;

pub fn name() -> Property<Catalogue, CatalogueAction, String> {
    Property::new(
        crate::variant!(CatalogueAction::SetName => CatalogueKind::SetName),
        crate::field!(Catalogue, name),
    )
}

pub fn items() -> Items {
    Collection::new(
        crate::variant!(CatalogueAction::Items => CatalogueKind::Items),
        book(),
        HashMapOps,
        crate::field!(Catalogue, items),
    )
}

pub fn catalogue() -> Reducer<Catalogue, CatalogueAction> {
    reducer(Catalogue::default()).action(name()).action(items())
}
