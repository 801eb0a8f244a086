//! Deriving inner cursors from outer cursors.

use std::fmt;
use std::sync::Arc;

use super::{Cursor, Fetched};

type FetchFn<OS, K, IS> = Arc<dyn Fn(&OS, &K) -> Fetched<IS> + Send + Sync>;
type WrapFn<K, IA, OA> = Arc<dyn Fn(&K, IA) -> OA + Send + Sync>;

/// How a derived cursor observes the outer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Addressing {
    /// Fetch once, when the cursor is created.
    #[default]
    Snapshot,
    /// Re-fetch from the outer cursor on every read.
    Live,
}

/// Makes inner cursors, given an outer cursor and a key that identifies a
/// smaller portion of the outer state.
///
/// Consists of a function fetching the inner state and a function turning
/// an inner action into an outer one.
pub struct Derivation<OS, OA, K, IS, IA> {
    fetch: FetchFn<OS, K, IS>,
    wrap: WrapFn<K, IA, OA>,
}

/// Builds a [`Derivation`] from its fetch and wrap functions.
///
/// ```
/// use immuto::{derive, Cursor, Fetched};
///
/// // An outer cursor over a pair that accepts (index, delta) actions.
/// fn pair(state: (i32, i32)) -> Cursor<(i32, i32), (usize, i32)> {
///     Cursor::new(Fetched::present(state), move |(index, delta)| {
///         let mut next = state;
///         if index == 0 { next.0 += delta } else { next.1 += delta }
///         pair(next)
///     })
/// }
///
/// let element = derive(
///     |outer: &(i32, i32), index: &usize| {
///         Fetched::present(if *index == 0 { outer.0 } else { outer.1 })
///     },
///     |index: &usize, delta: i32| (*index, delta),
/// );
///
/// let second = element.at(&pair((1, 2)), 1);
/// assert_eq!(*second.dispatch(10).state(), 12);
/// ```
pub fn derive<OS, OA, K, IS, IA, F, W>(fetch: F, wrap: W) -> Derivation<OS, OA, K, IS, IA>
where
    F: Fn(&OS, &K) -> Fetched<IS> + Send + Sync + 'static,
    W: Fn(&K, IA) -> OA + Send + Sync + 'static,
{
    Derivation {
        fetch: Arc::new(fetch),
        wrap: Arc::new(wrap),
    }
}

impl<OS, OA, K, IS, IA> Derivation<OS, OA, K, IS, IA>
where
    OS: Send + Sync + 'static,
    OA: 'static,
    K: Clone + Send + Sync + 'static,
    IS: Send + Sync + 'static,
    IA: 'static,
{
    /// The inner state at `key`.
    pub fn fetch(&self, outer: &OS, key: &K) -> Fetched<IS> {
        (self.fetch)(outer, key)
    }

    /// The outer action that carries `action` to `key`.
    pub fn wrap(&self, key: &K, action: IA) -> OA {
        (self.wrap)(key, action)
    }

    /// Derives a cursor with the requested addressing.
    pub fn cursor(
        &self,
        outer: &Cursor<OS, OA>,
        key: K,
        addressing: Addressing,
    ) -> Cursor<IS, IA> {
        match addressing {
            Addressing::Snapshot => self.at(outer, key),
            Addressing::Live => self.live(outer, key),
        }
    }

    /// Derives a cursor whose state is fixed at creation.
    ///
    /// Dispatching wraps the action, dispatches it on `outer` and derives
    /// again from the cursor that dispatch returned.
    pub fn at(&self, outer: &Cursor<OS, OA>, key: K) -> Cursor<IS, IA> {
        let outer_state = outer.state();
        let fetched = self.fetch(&outer_state, &key);

        let derivation = self.clone();
        let outer = outer.clone();
        Cursor::new(fetched, move |action| {
            let next = outer.dispatch(derivation.wrap(&key, action));
            derivation.at(&next, key.clone())
        })
    }

    /// Derives a cursor that re-fetches from `outer` on every read.
    ///
    /// Only as live as `outer`: deriving from a snapshot cursor re-reads
    /// the same frozen outer state.
    pub fn live(&self, outer: &Cursor<OS, OA>, key: K) -> Cursor<IS, IA> {
        let read = {
            let derivation = self.clone();
            let outer = outer.clone();
            let key = key.clone();
            move || {
                let outer_state = outer.state();
                derivation.fetch(&outer_state, &key)
            }
        };

        let derivation = self.clone();
        let outer = outer.clone();
        Cursor::live(read, move |action| {
            let next = outer.dispatch(derivation.wrap(&key, action));
            derivation.live(&next, key.clone())
        })
    }
}

impl<OS, OA, K, IS, IA> Clone for Derivation<OS, OA, K, IS, IA> {
    fn clone(&self) -> Self {
        Self {
            fetch: Arc::clone(&self.fetch),
            wrap: Arc::clone(&self.wrap),
        }
    }
}

impl<OS, OA, K, IS, IA> fmt::Debug for Derivation<OS, OA, K, IS, IA> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derivation").finish_non_exhaustive()
    }
}
