//! A small bookshop model exercising every adapter, and the scripted
//! scenarios the `immuto` binary replays.
//!
//! ```text
//! Founder ──Reference──→ Shop ──Collection<String>──→ Shelf ──Collection<u32>──→ Book
//! ```

pub mod book;
pub mod catalogue;
pub mod founder;
pub mod shelf;
pub mod shop;

use std::sync::{Arc, Weak};

use clap::ValueEnum;
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

use crate::action::Action;
use crate::config::StoreConfig;
use crate::cursor::Pipe;
use crate::reducer::{Reducer, State};
use crate::store::{snapshot, MemoryStore, Store, Subscription};

use book::BookAction;
use catalogue::CatalogueAction;
use founder::FounderAction;
use shelf::ShelfAction;
use shop::ShopAction;

/// Errors that can occur while replaying a scenario.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Scripted walkthroughs of the demo model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Name a shop, add a shelf and price a book on it.
    Shop,
    /// The shop scenario, one reference further down from a founder.
    Founder,
    /// Add and remove an item from a flat catalogue.
    Catalogue,
}

/// What a replayed scenario produced.
#[derive(Debug, Clone, Serialize)]
pub struct Replay {
    /// Root state after each dispatch, in order.
    pub states: Vec<serde_json::Value>,
    pub dispatched: u64,
}

/// Replays `scenario` against a fresh store.
pub fn replay(scenario: Scenario, config: &StoreConfig) -> Result<Replay, DemoError> {
    tracing::info!(?scenario, "Replaying scenario");
    match scenario {
        Scenario::Shop => run(shop::shop(), config, shop_steps),
        Scenario::Founder => run(founder::founder(), config, founder_steps),
        Scenario::Catalogue => run(catalogue::catalogue(), config, catalogue_steps),
    }
}

fn run<S, A, F>(
    reducer: Reducer<S, A>,
    config: &StoreConfig,
    steps: F,
) -> Result<Replay, DemoError>
where
    S: State + Serialize,
    A: Action,
    F: FnOnce(&Arc<MemoryStore<S, A>>),
{
    let store = reducer.store_with(config);
    let (recorded, subscription) = record(&store);

    steps(&store);
    subscription.unsubscribe();

    let states = recorded
        .lock()
        .iter()
        .map(|state| serde_json::to_value(&**state))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Replay {
        states,
        dispatched: store.sequence(),
    })
}

/// Collects the store's state after every dispatch.
fn record<S, A>(store: &Arc<MemoryStore<S, A>>) -> (Arc<Mutex<Vec<Arc<S>>>>, Subscription)
where
    S: State,
    A: Action,
{
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let source: Weak<MemoryStore<S, A>> = Arc::downgrade(store);

    let subscription = store.subscribe(Arc::new(move || {
        if let Some(store) = source.upgrade() {
            sink.lock().push(store.current_state());
        }
    }));

    (recorded, subscription)
}

fn shop_steps(store: &Arc<MemoryStore<shop::Shop, ShopAction>>) {
    let shelves = shop::shelves();
    let books = shelf::books();

    let shop = snapshot(store)
        .dispatch(ShopAction::SetName("Buy the Book, Inc.".into()))
        .dispatch(shelves.add("ADV".into()));

    let adventure = shelves
        .at(&shop, "ADV".into())
        .dispatch(ShelfAction::SetDescription("Adventure".into()))
        .dispatch(books.update(1002, BookAction::SetTitle("Indiana Smith".into())));

    books
        .at(&adventure, 1002)
        .dispatch(BookAction::SetPrice(4.99))
        .dispatch(BookAction::AddAuthor("Jim Orwell".into()));
}

fn founder_steps(store: &Arc<MemoryStore<founder::Founder, FounderAction>>) {
    let shelves = shop::shelves();
    let books = shelf::books();

    let founder = snapshot(store).dispatch(FounderAction::SetName("Ada".into()));
    let shop = founder::owned_shop()
        .cursor(&founder)
        .dispatch(ShopAction::SetName("Ada's Books".into()));

    let classics = shelves.at(&shop, "CLS".into());
    books
        .at(&classics, 7)
        .dispatch(BookAction::SetTitle("Middlemarch".into()))
        .dispatch(BookAction::AddAuthor("George Eliot".into()));
}

fn catalogue_steps(store: &Arc<MemoryStore<catalogue::Catalogue, CatalogueAction>>) {
    let items = catalogue::items();

    snapshot(store)
        .dispatch(catalogue::name().update("Store".into()))
        .dispatch(items.update(1, BookAction::SetTitle("Alpha".into())))
        .pipe(|root| items.at(&root, 1).remove());
}
