//! Left-to-right application.

/// Passes a value into a function, so derivation chains read left to right:
///
/// ```
/// use immuto::Pipe;
///
/// let len = "cursor".pipe(str::len).pipe(|n| n * 2);
/// assert_eq!(len, 12);
/// ```
pub trait Pipe: Sized {
    fn pipe<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
