//! Books: the leaf state of the demo model.

use serde::{Deserialize, Serialize};

use crate::action::Variant;
use crate::collection::Property;
use crate::reducer::{reducer, Reducer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub price: f64,
    pub authors: Vec<String>,
}

crate::actions! {
    #[derive(Serialize, Deserialize)]
    pub enum BookAction => BookKind {
        SetTitle(String),
        SetPrice(f64),
        AddAuthor(String),
    }
}

pub fn set_title() -> Variant<BookAction, String> {
    crate::variant!(BookAction::SetTitle => BookKind::SetTitle)
}

pub fn add_author() -> Variant<BookAction, String> {
    crate::variant!(BookAction::AddAuthor => BookKind::AddAuthor)
}

/// The price, replaced wholesale by `SetPrice`.
pub fn price() -> Property<Book, BookAction, f64> {
    Property::new(
        crate::variant!(BookAction::SetPrice => BookKind::SetPrice),
        crate::field!(Book, price),
    )
}

/// Handles pricing only; shared by anything sold.
pub fn priced() -> Reducer<Book, BookAction> {
    reducer(Book::default()).action(price())
}

pub fn book() -> Reducer<Book, BookAction> {
    let text = reducer(Book::default())
        .on(set_title(), |book: Book, title| Book { title, ..book })
        .on(add_author(), |mut book: Book, author| {
            book.authors.push(author);
            book
        });

    priced().mixin(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_book_serializes_blank() {
        let json = serde_json::to_string(book().empty()).unwrap();
        assert_eq!(json, r#"{"title":"","price":0.0,"authors":[]}"#);
    }

    #[test]
    fn mixin_keeps_pricing_handler() {
        let book = book();
        assert_eq!(book.handler_count(), 3);

        let state = book.reduce(None, BookAction::SetPrice(5.99));
        let state = book.apply(state, BookAction::SetTitle("1985".into()));
        let state = book.apply(state, BookAction::AddAuthor("Jim Orwell".into()));

        assert_eq!(state.price, 5.99);
        assert_eq!(state.title, "1985");
        assert_eq!(state.authors, vec!["Jim Orwell".to_string()]);
    }
}
