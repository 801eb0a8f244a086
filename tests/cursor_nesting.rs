//! Tests for cursors derived through several levels of collections and
//! references.

use immuto::demo::book::BookAction;
use immuto::demo::founder::{founder, owned_shop, FounderAction};
use immuto::demo::shelf::{books, ShelfAction};
use immuto::demo::shop::{shelves, shop, ShopAction};
use immuto::{snapshot, Pipe, Store};
use serde_json::json;

/// Dispatching through a cursor two collections deep gives the same root
/// state as dispatching the fully wrapped action at the root.
#[test]
fn test_nested_wrap_round_trip() {
    let shelves = shelves();
    let books = books();
    let action = BookAction::SetTitle("Indiana Smith".into());

    let via_cursor = shop().store();
    snapshot(&via_cursor)
        .pipe(|root| shelves.at(&root, "ADV".into()))
        .pipe(|shelf| books.at(&shelf, 1002))
        .dispatch(action.clone());

    let via_root = shop().store();
    via_root.dispatch(ShopAction::Shelves(immuto::Update::apply(
        "ADV".to_string(),
        ShelfAction::Books(immuto::Update::apply(1002, action)),
    )));

    assert_eq!(via_cursor.current_state(), via_root.current_state());
    assert_eq!(
        via_cursor.current_state().shelves["ADV"].books[&1002].title,
        "Indiana Smith"
    );
}

/// The nested shop walkthrough: name the shop, add a shelf, describe it,
/// add a book and then price and attribute it through the book cursor.
#[test]
fn test_nested_layers_of_cursors() {
    let store = shop().store();
    let shelves = shelves();
    let books = books();

    let shop1 = snapshot(&store);
    let shop2 = shop1.dispatch(ShopAction::SetName("Buy the Book, Inc.".into()));
    let shop3 = shop2.dispatch(shelves.add("ADV".into()));

    let adv1 = shelves.at(&shop3, "ADV".into());
    assert!(adv1.exists());
    assert_eq!(adv1.state().description, "");

    let adv2 = adv1.dispatch(ShelfAction::SetDescription("Adventure".into()));
    assert_eq!(adv2.state().description, "Adventure");

    let adv3 = adv2.dispatch(books.update(1002, BookAction::SetTitle("Indiana Smith".into())));
    assert_eq!(
        serde_json::to_value(&*store.current_state()).unwrap(),
        json!({
            "name": "Buy the Book, Inc.",
            "shelves": {"ADV": {"description": "Adventure", "books": {
                "1002": {"title": "Indiana Smith", "price": 0.0, "authors": []}
            }}}
        })
    );

    let book1 = books.at(&adv3, 1002);
    assert_eq!(book1.state().title, "Indiana Smith");

    let book2 = book1.dispatch(BookAction::SetPrice(4.99));
    let book3 = book2.dispatch(BookAction::AddAuthor("Jim Orwell".into()));

    assert_eq!(
        serde_json::to_value(&*store.current_state()).unwrap(),
        json!({
            "name": "Buy the Book, Inc.",
            "shelves": {"ADV": {"description": "Adventure", "books": {
                "1002": {"title": "Indiana Smith", "price": 4.99, "authors": ["Jim Orwell"]}
            }}}
        })
    );
    assert_eq!(book3.state().price, 4.99);
    assert_eq!(book3.state().authors.first().map(String::as_str), Some("Jim Orwell"));

    // earlier cursors stay frozen
    assert_eq!(book1.state().price, 0.0);
    assert_eq!(shop1.state().name, "");
}

/// A reference adds one more level: founder, shop, shelf, book.
#[test]
fn test_reference_chain_four_levels_deep() {
    let store = founder().store();
    let shelves = shelves();
    let books = books();

    let book = snapshot(&store)
        .dispatch(FounderAction::SetName("Ada".into()))
        .pipe(|founder| owned_shop().cursor(&founder))
        .pipe(|shop| shelves.at(&shop, "CLS".into()))
        .pipe(|shelf| books.at(&shelf, 7));
    assert!(!book.exists());

    let book = book.dispatch(BookAction::SetTitle("Middlemarch".into()));
    assert!(book.exists());

    let state = store.current_state();
    assert_eq!(state.name, "Ada");
    assert_eq!(state.shop.shelves["CLS"].books[&7].title, "Middlemarch");
}

/// Removing an item through its cursor hands back the owner cursor.
#[test]
fn test_item_cursor_remove_returns_owner() {
    let store = shop().store();
    let shelves = shelves();

    let shop = snapshot(&store)
        .dispatch(shelves.add("ADV".into()))
        .dispatch(shelves.add("SCI".into()));

    let shop = shelves.at(&shop, "ADV".into()).remove();
    assert_eq!(shop.state().shelves.len(), 1);
    assert!(store.current_state().shelves.contains_key("SCI"));
    assert!(!shelves.at(&shop, "ADV".into()).exists());
}

/// Live item cursors derived from a live root keep following the store.
#[test]
fn test_live_chain_follows_store() {
    let store = shop().store();
    let shelves = shelves();
    let books = books();

    let watching = books.live_at(&shelves.live_at(&immuto::live(&store), "ADV".into()), 1);
    assert!(!watching.exists());

    store.dispatch(shelves.update(
        "ADV".into(),
        books.update(1, BookAction::SetTitle("Live".into())),
    ));

    assert!(watching.exists());
    assert_eq!(watching.state().title, "Live");
}
