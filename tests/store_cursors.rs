//! Tests for root cursors over a memory store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use immuto::config::StoreConfig;
use immuto::demo::book::BookAction;
use immuto::demo::shelf::{books, shelf, ShelfAction};
use immuto::{live, snapshot, Store};

/// The cursor returned by dispatch observes the store's state right after
/// the dispatch, and the original cursor keeps its frozen state.
#[test]
fn test_snapshot_freshness() {
    let store = shelf().store();
    let c1 = snapshot(&store);
    let c2 = c1.dispatch(ShelfAction::SetDescription("Romance".into()));

    assert_eq!(*c2.state(), *store.current_state());
    assert_eq!(c1.state().description, "");
    assert_eq!(c2.state().description, "Romance");
}

/// The same snapshot cursor can be dispatched from twice; each dispatch
/// applies to the store's current state, not to the cursor's.
#[test]
fn test_dispatch_from_stale_cursor_applies_to_current_state() {
    let store = shelf().store();
    let books = books();
    let stale = snapshot(&store);

    stale.dispatch(books.update(1, BookAction::SetTitle("One".into())));
    let latest = stale.dispatch(books.update(2, BookAction::SetTitle("Two".into())));

    assert_eq!(latest.state().books.len(), 2);
    assert!(stale.state().books.is_empty());
}

/// A live root cursor follows dispatches made elsewhere, and freezing it
/// pins the current state.
#[test]
fn test_live_root_follows_store() {
    let store = shelf().store();
    let watching = live(&store);

    snapshot(&store).dispatch(ShelfAction::SetDescription("Poetry".into()));
    let frozen = watching.freeze();
    store.dispatch(ShelfAction::SetDescription("Drama".into()));

    assert_eq!(watching.state().description, "Drama");
    assert_eq!(frozen.state().description, "Poetry");
}

/// Listeners hear about dispatches made through cursors at any depth.
#[test]
fn test_listeners_see_nested_dispatches() {
    let store = shelf().store_with(&StoreConfig {
        history_capacity: 8,
    });
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let _subscription = store.subscribe(Arc::new(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    }));

    let books = books();
    books
        .at(&snapshot(&store), 5)
        .dispatch(BookAction::SetTitle("Five".into()))
        .dispatch(BookAction::SetPrice(1.5));

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(store.sequence(), 2);
    assert_eq!(store.history().len(), 2);
}
