//! Field accessors: how an owner state exposes one of its parts.
//!
//! A [`Field`] pairs a reader with a "copy with this field replaced"
//! writer. The [`field!`](crate::field) macro writes both from a field
//! name at compile time, so a misspelt or mistyped field never gets as
//! far as a running store.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

trait Access<S, F>: Send + Sync {
    fn get<'a>(&self, owner: &'a S) -> Cow<'a, F>
    where
        F: Clone;

    fn set(&self, owner: S, value: F) -> S;
}

struct Direct<S, F> {
    get: fn(&S) -> &F,
    set: fn(S, F) -> S,
}

impl<S, F> Access<S, F> for Direct<S, F> {
    fn get<'a>(&self, owner: &'a S) -> Cow<'a, F>
    where
        F: Clone,
    {
        Cow::Borrowed((self.get)(owner))
    }

    fn set(&self, owner: S, value: F) -> S {
        (self.set)(owner, value)
    }
}

type GetFn<S, F> = Box<dyn Fn(&S) -> F + Send + Sync>;
type SetFn<S, F> = Box<dyn Fn(S, F) -> S + Send + Sync>;

struct Computed<S, F> {
    get: GetFn<S, F>,
    set: SetFn<S, F>,
}

impl<S, F> Access<S, F> for Computed<S, F> {
    fn get<'a>(&self, owner: &'a S) -> Cow<'a, F>
    where
        F: Clone,
    {
        Cow::Owned((self.get)(owner))
    }

    fn set(&self, owner: S, value: F) -> S {
        (self.set)(owner, value)
    }
}

/// Reads and replaces one part `F` of an owner state `S`.
///
/// Both halves are plain functions supplied by the caller, so reading and
/// writing cannot fail. A [`new`](Field::new) field borrows the part;
/// a [`computed`](Field::computed) one builds it on every read.
pub struct Field<S, F> {
    name: Cow<'static, str>,
    access: Arc<dyn Access<S, F>>,
}

impl<S, F> Field<S, F> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S: 'static, F: Clone + 'static> Field<S, F> {
    /// A field backed by a plain projection and a writer.
    ///
    /// See [`field!`](crate::field) for writing both from a field name.
    pub fn new(name: &'static str, get: fn(&S) -> &F, set: fn(S, F) -> S) -> Self {
        Self {
            name: Cow::Borrowed(name),
            access: Arc::new(Direct { get, set }),
        }
    }

    /// A field whose reader computes an owned value.
    pub fn computed<G, W>(name: impl Into<Cow<'static, str>>, get: G, set: W) -> Self
    where
        G: Fn(&S) -> F + Send + Sync + 'static,
        W: Fn(S, F) -> S + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            access: Arc::new(Computed {
                get: Box::new(get),
                set: Box::new(set),
            }),
        }
    }

    pub fn get<'a>(&self, owner: &'a S) -> Cow<'a, F> {
        self.access.get(owner)
    }

    /// `owner` with this field replaced by `value`.
    pub fn set(&self, owner: S, value: F) -> S {
        self.access.set(owner, value)
    }

    /// `owner` with this field replaced by `f(current)`.
    pub fn update(&self, owner: S, f: impl FnOnce(F) -> F) -> S {
        let current = self.get(&owner).into_owned();
        self.set(owner, f(current))
    }
}

impl<S, F> Clone for Field<S, F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            access: Arc::clone(&self.access),
        }
    }
}

impl<S, F> fmt::Debug for Field<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Builds a [`Field`] for a named struct field, generating the reader and
/// the copy-with-field-replaced writer.
///
/// ```
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let x = immuto::field!(Point, x);
/// assert_eq!(x.name(), "x");
/// assert_eq!(x.set(Point { x: 1, y: 2 }, 5), Point { x: 5, y: 2 });
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ident, $field:ident) => {
        $crate::Field::<$owner, _>::new(
            stringify!($field),
            |owner| &owner.$field,
            |owner, value| $owner {
                $field: value,
                ..owner
            },
        )
    };
}
