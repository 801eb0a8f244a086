//! Keyed collections of items that each have their own reducer.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use super::{ItemOp, Operations, Update};
use crate::action::{Action, ActionDefinition, Variant};
use crate::cursor::{derive, Cursor, Derivation, Fetched};
use crate::field::Field;
use crate::reducer::{Reducer, State};

/// Adapts an item reducer into a handler of the state that owns the
/// container.
///
/// `S`/`A` are the owner's state and action, `C` the container stored in
/// field `field` of `S`, `K` the key and `I`/`IA` the item's state and
/// action. The owner action carrying [`Update`]s is described by `variant`.
///
/// Missing keys never fail: reading yields the item reducer's empty value
/// and applying an item action to a missing key creates the item first.
pub struct Collection<S, A: Action, C, K, I, IA: Action> {
    variant: Variant<A, Update<K, IA>>,
    items: Reducer<I, IA>,
    operations: Arc<dyn Operations<C, K, I>>,
    field: Field<S, C>,
}

impl<S, A, C, K, I, IA> Collection<S, A, C, K, I, IA>
where
    S: State,
    A: Action,
    C: Clone + Send + Sync + 'static,
    K: Clone + fmt::Debug + Send + Sync + 'static,
    I: State,
    IA: Action,
{
    pub fn new<O>(
        variant: Variant<A, Update<K, IA>>,
        items: Reducer<I, IA>,
        operations: O,
        field: Field<S, C>,
    ) -> Self
    where
        O: Operations<C, K, I>,
    {
        Self {
            variant,
            items,
            operations: Arc::new(operations),
            field,
        }
    }

    /// The item reducer.
    pub fn items(&self) -> &Reducer<I, IA> {
        &self.items
    }

    pub fn field(&self) -> &Field<S, C> {
        &self.field
    }

    /// An owner action applying `action` to the item at `key`.
    pub fn update(&self, key: K, action: IA) -> A {
        self.variant.create(Update::apply(key, action))
    }

    /// An owner action inserting an empty item at `key` unless one exists.
    pub fn add(&self, key: K) -> A {
        self.variant.create(Update::ensure(key))
    }

    /// An owner action removing the item at `key`.
    pub fn remove(&self, key: K) -> A {
        self.variant.create(Update::remove(key))
    }

    /// The item at `key` in `state`, or the item reducer's empty value.
    ///
    /// The item is cloned out of the container, and every cursor derived
    /// through this collection pays that clone on each read. Keep large
    /// item states behind an `Arc` when that matters.
    pub fn fetch(&self, state: &S, key: &K) -> Fetched<I> {
        let container = self.field.get(state);
        match self.operations.get(&*container, key) {
            Some(item) => Fetched::present(item.clone()),
            None => Fetched::missing(self.items.empty().clone()),
        }
    }

    /// The address derivation for items of this collection.
    pub fn derivation(&self) -> Derivation<S, A, K, I, IA> {
        let collection = self.clone();
        let variant = self.variant;
        derive(
            move |state: &S, key: &K| collection.fetch(state, key),
            move |key: &K, action: IA| variant.create(Update::apply(key.clone(), action)),
        )
    }

    /// A snapshot cursor over the item at `key`.
    pub fn at(&self, outer: &Cursor<S, A>, key: K) -> ItemCursor<I, IA, S, A> {
        ItemCursor {
            cursor: self.derivation().at(outer, key.clone()),
            outer: outer.clone(),
            removal: self.remove(key),
        }
    }

    /// A live cursor over the item at `key`.
    pub fn live_at(&self, outer: &Cursor<S, A>, key: K) -> ItemCursor<I, IA, S, A> {
        ItemCursor {
            cursor: self.derivation().live(outer, key.clone()),
            outer: outer.clone(),
            removal: self.remove(key),
        }
    }

    fn reduce_update(&self, state: S, update: Update<K, IA>) -> S {
        let Update { key, op } = update;

        let container = {
            let current = self.field.get(&state);
            match op {
                ItemOp::Ensure if self.operations.has(&*current, &key) => {
                    tracing::trace!(field = self.field.name(), ?key, "Item already present");
                    None
                }
                ItemOp::Ensure => {
                    let empty = self.items.empty().clone();
                    Some(self.operations.set(current.into_owned(), key, empty))
                }
                ItemOp::Apply(action) => {
                    let item = match self.operations.get(&*current, &key) {
                        Some(item) => item.clone(),
                        None => self.items.empty().clone(),
                    };
                    let item = self.items.apply(item, action);
                    Some(self.operations.set(current.into_owned(), key, item))
                }
                ItemOp::Remove if !self.operations.has(&*current, &key) => {
                    tracing::trace!(field = self.field.name(), ?key, "Removing missing item");
                    None
                }
                ItemOp::Remove => Some(self.operations.remove(current.into_owned(), &key)),
            }
        };

        match container {
            Some(container) => self.field.set(state, container),
            None => state,
        }
    }
}

impl<S, A, C, K, I, IA> ActionDefinition<S, A> for Collection<S, A, C, K, I, IA>
where
    S: State,
    A: Action,
    C: Clone + Send + Sync + 'static,
    K: Clone + fmt::Debug + Send + Sync + 'static,
    I: State,
    IA: Action,
{
    fn kind(&self) -> A::Kind {
        self.variant.kind()
    }

    fn apply(&self, state: S, action: A) -> S {
        match self.variant.extract(action) {
            Some(update) => self.reduce_update(state, update),
            None => {
                tracing::warn!(
                    kind = ?self.variant.kind(),
                    field = self.field.name(),
                    "Action routed to a collection of another kind, state unchanged"
                );
                state
            }
        }
    }
}

impl<S, A: Action, C, K, I, IA: Action> Clone for Collection<S, A, C, K, I, IA> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            items: self.items.clone(),
            operations: Arc::clone(&self.operations),
            field: self.field.clone(),
        }
    }
}

impl<S, A: Action, C, K, I: 'static, IA: Action> fmt::Debug for Collection<S, A, C, K, I, IA> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &self.variant.kind())
            .field("field", &self.field.name())
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// A cursor over one item of a collection that can also remove the item.
///
/// Derefs to the item [`Cursor`].
pub struct ItemCursor<I, IA, S, A> {
    cursor: Cursor<I, IA>,
    outer: Cursor<S, A>,
    removal: A,
}

impl<I, IA, S, A: Clone> ItemCursor<I, IA, S, A> {
    /// Removes the item through the owner cursor this one was derived
    /// from, returning the owner cursor after removal.
    pub fn remove(&self) -> Cursor<S, A> {
        self.outer.dispatch(self.removal.clone())
    }

    pub fn outer(&self) -> &Cursor<S, A> {
        &self.outer
    }

    pub fn into_cursor(self) -> Cursor<I, IA> {
        self.cursor
    }
}

impl<I, IA, S, A> Deref for ItemCursor<I, IA, S, A> {
    type Target = Cursor<I, IA>;

    fn deref(&self) -> &Cursor<I, IA> {
        &self.cursor
    }
}

impl<I, IA, S, A: Clone> Clone for ItemCursor<I, IA, S, A> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            outer: self.outer.clone(),
            removal: self.removal.clone(),
        }
    }
}

impl<I: fmt::Debug, IA, S, A: fmt::Debug> fmt::Debug for ItemCursor<I, IA, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCursor")
            .field("cursor", &self.cursor)
            .field("removal", &self.removal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::BTreeMapOps;
    use crate::reducer::reducer;
    use crate::store::snapshot;
    use std::collections::BTreeMap;

    crate::actions! {
        enum TallyAction => TallyKind {
            Bump(u32),
        }
    }

    crate::actions! {
        enum BoardAction => BoardKind {
            Tallies(Update<String, TallyAction>),
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Board {
        tallies: BTreeMap<String, u32>,
    }

    type Tallies = Collection<Board, BoardAction, BTreeMap<String, u32>, String, u32, TallyAction>;

    fn tallies() -> Tallies {
        let bump = crate::variant!(TallyAction::Bump => TallyKind::Bump);
        Collection::new(
            crate::variant!(BoardAction::Tallies => BoardKind::Tallies),
            reducer(0_u32).on(bump, |total, n| total + n),
            BTreeMapOps,
            crate::field!(Board, tallies),
        )
    }

    fn board() -> Reducer<Board, BoardAction> {
        reducer(Board::default()).action(tallies())
    }

    #[test]
    fn update_on_missing_key_creates_item_from_empty() {
        let tallies = tallies();
        let state = board().reduce(None, tallies.update("a".into(), TallyAction::Bump(2)));
        assert_eq!(state.tallies.get("a"), Some(&2));
    }

    #[test]
    fn add_only_inserts_missing_keys() {
        let tallies = tallies();
        let board = board();
        let state = board.reduce(None, tallies.add("a".into()));
        assert_eq!(state.tallies.get("a"), Some(&0));

        let state = board.apply(state, tallies.update("a".into(), TallyAction::Bump(5)));
        let state = board.apply(state, tallies.add("a".into()));
        assert_eq!(state.tallies.get("a"), Some(&5));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let tallies = tallies();
        let state = board().reduce(None, tallies.remove("ghost".into()));
        assert_eq!(state, Board::default());
    }

    #[test]
    fn fetch_reports_existence() {
        let tallies = tallies();
        let state = board().reduce(None, tallies.update("a".into(), TallyAction::Bump(1)));

        let present = tallies.fetch(&state, &"a".to_string());
        assert!(present.exists);
        assert_eq!(*present.state, 1);

        let missing = tallies.fetch(&state, &"b".to_string());
        assert!(!missing.exists);
        assert_eq!(*missing.state, 0);
    }

    #[test]
    fn debug_lists_field_and_item_kinds() {
        let rendered = format!("{:?}", tallies());
        assert!(rendered.contains("\"tallies\""));
        assert!(rendered.contains("Bump"));

        let store = board().store();
        let rendered = format!("{:?}", store);
        assert!(rendered.starts_with("MemoryStore"));
        assert!(rendered.contains("Tallies"));
    }

    #[test]
    fn item_cursor_dispatches_and_removes() {
        let tallies = tallies();
        let store = board().store();

        let a = tallies.at(&snapshot(&store), "a".to_string());
        assert!(!a.exists());

        let a = a.dispatch(TallyAction::Bump(3));
        assert!(a.exists());
        assert_eq!(*a.state(), 3);

        let a = tallies.at(&snapshot(&store), "a".to_string());
        let after = a.remove();
        assert!(after.state().tallies.is_empty());
        assert!(!tallies.at(&after, "a".to_string()).exists());
    }

    #[test]
    fn live_item_cursor_follows_store() {
        let tallies = tallies();
        let store = board().store();
        let live = tallies.live_at(&crate::store::live(&store), "a".to_string());

        tallies.at(&snapshot(&store), "a".to_string()).dispatch(TallyAction::Bump(4));
        assert_eq!(*live.state(), 4);
        assert!(live.exists());
    }
}
