//! Shelves hold books keyed by number.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::book::{book, Book, BookAction};
use crate::collection::{BTreeMapOps, Collection, Update};
use crate::reducer::{reducer, Reducer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shelf {
    pub description: String,
    pub books: BTreeMap<u32, Book>,
}

crate::actions! {
    #[derive(Serialize, Deserialize)]
    pub enum ShelfAction => ShelfKind {
        SetDescription(String),
        Books(Update<u32, BookAction>),
    }
}

pub type Books = Collection<Shelf, ShelfAction, BTreeMap<u32, Book>, u32, Book, BookAction>;

pub fn books() -> Books {
    Collection::new(
        crate::variant!(ShelfAction::Books => ShelfKind::Books),
        book(),
        BTreeMapOps,
        crate::field!(Shelf, books),
    )
}

pub fn shelf() -> Reducer<Shelf, ShelfAction> {
    reducer(Shelf::default())
        .on(
            crate::variant!(ShelfAction::SetDescription => ShelfKind::SetDescription),
            |shelf: Shelf, description| Shelf {
                description,
                ..shelf
            },
        )
        .action(books())
}
