//! The cursor value itself.

use std::fmt;
use std::sync::Arc;

type DispatchFn<S, A> = Arc<dyn Fn(A) -> Cursor<S, A> + Send + Sync>;
type ReadFn<S> = Arc<dyn Fn() -> Fetched<S> + Send + Sync>;

/// A state value together with whether it really exists.
///
/// A cursor may address an item that was removed or never created; its
/// state is then the item reducer's empty value and `exists` is false.
pub struct Fetched<S> {
    pub exists: bool,
    pub state: Arc<S>,
}

impl<S> Fetched<S> {
    pub fn present(state: S) -> Self {
        Self {
            exists: true,
            state: Arc::new(state),
        }
    }

    pub fn missing(empty: S) -> Self {
        Self {
            exists: false,
            state: Arc::new(empty),
        }
    }
}

impl<S> Clone for Fetched<S> {
    fn clone(&self) -> Self {
        Self {
            exists: self.exists,
            state: Arc::clone(&self.state),
        }
    }
}

enum View<S> {
    Snapshot(Fetched<S>),
    Live(ReadFn<S>),
}

impl<S> Clone for View<S> {
    fn clone(&self) -> Self {
        match self {
            View::Snapshot(fetched) => View::Snapshot(fetched.clone()),
            View::Live(read) => View::Live(Arc::clone(read)),
        }
    }
}

/// A pure reference to the state of a store or part of a store.
///
/// A snapshot cursor always observes the state it was created with.
/// Updating never mutates the cursor: [`dispatch`](Self::dispatch) sends an
/// action into the underlying store and returns a new cursor reflecting
/// the result.
///
/// A live cursor re-reads its state on every [`state`](Self::state) call.
pub struct Cursor<S, A> {
    view: View<S>,
    dispatcher: DispatchFn<S, A>,
}

impl<S, A> Cursor<S, A> {
    /// A snapshot cursor over `fetched`.
    pub fn new<F>(fetched: Fetched<S>, dispatch: F) -> Self
    where
        F: Fn(A) -> Cursor<S, A> + Send + Sync + 'static,
    {
        Self {
            view: View::Snapshot(fetched),
            dispatcher: Arc::new(dispatch),
        }
    }

    /// A live cursor that calls `read` whenever its state is requested.
    pub fn live<R, F>(read: R, dispatch: F) -> Self
    where
        R: Fn() -> Fetched<S> + Send + Sync + 'static,
        F: Fn(A) -> Cursor<S, A> + Send + Sync + 'static,
    {
        Self {
            view: View::Live(Arc::new(read)),
            dispatcher: Arc::new(dispatch),
        }
    }

    /// The state this cursor observes.
    pub fn state(&self) -> Arc<S> {
        self.fetch().state
    }

    /// Whether the addressed value exists (rather than being defaulted).
    pub fn exists(&self) -> bool {
        self.fetch().exists
    }

    pub fn fetch(&self) -> Fetched<S> {
        match &self.view {
            View::Snapshot(fetched) => fetched.clone(),
            View::Live(read) => read(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.view, View::Live(_))
    }

    /// A snapshot of what this cursor observes right now.
    ///
    /// Only the view is frozen; dispatching still follows the original
    /// addressing, so a frozen live cursor dispatches to live cursors.
    pub fn freeze(&self) -> Self {
        Self {
            view: View::Snapshot(self.fetch()),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }

    /// Sends `action` towards the store and returns a cursor over the
    /// resulting state. `self` keeps observing what it observed before.
    pub fn dispatch(&self, action: A) -> Cursor<S, A> {
        (self.dispatcher)(action)
    }
}

impl<S, A> Clone for Cursor<S, A> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Cursor<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fetched = self.fetch();
        f.debug_struct("Cursor")
            .field("state", &fetched.state)
            .field("exists", &fetched.exists)
            .field("live", &self.is_live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn counter(cell: Arc<Mutex<i32>>) -> Cursor<i32, i32> {
        let current = *cell.lock();
        Cursor::new(Fetched::present(current), move |delta| {
            *cell.lock() += delta;
            counter(Arc::clone(&cell))
        })
    }

    fn live_counter(cell: Arc<Mutex<i32>>) -> Cursor<i32, i32> {
        let read_cell = Arc::clone(&cell);
        Cursor::live(
            move || Fetched::present(*read_cell.lock()),
            move |delta| {
                *cell.lock() += delta;
                live_counter(Arc::clone(&cell))
            },
        )
    }

    #[test]
    fn dispatch_returns_fresh_cursor_and_keeps_receiver() {
        let cell = Arc::new(Mutex::new(1));
        let before = counter(Arc::clone(&cell));
        let after = before.dispatch(4);

        assert_eq!(*before.state(), 1);
        assert_eq!(*after.state(), 5);
        assert_eq!(*cell.lock(), 5);
    }

    #[test]
    fn live_cursor_observes_later_changes() {
        let cell = Arc::new(Mutex::new(0));
        let live = live_counter(Arc::clone(&cell));
        let frozen = live.freeze();

        *cell.lock() = 9;

        assert!(live.is_live());
        assert!(!frozen.is_live());
        assert_eq!(*live.state(), 9);
        assert_eq!(*frozen.state(), 0);
        assert!(live.dispatch(1).is_live());
    }

    #[test]
    fn missing_state_reports_non_existence() {
        let cursor: Cursor<String, ()> =
            Cursor::new(Fetched::missing(String::new()), |_| unreachable!("no dispatch"));
        assert!(!cursor.exists());
        assert_eq!(cursor.state().as_str(), "");
    }
}
