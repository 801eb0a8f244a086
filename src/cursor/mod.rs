//! Cursors: frozen (or live) views of a sub-state that update by dispatch.
//!
//! A root cursor comes from a store ([`snapshot`](crate::snapshot) or
//! [`live`](crate::live)). Inner cursors are derived from an outer cursor
//! plus a key; dispatching through an inner cursor wraps the action for
//! every enclosing level, dispatches once at the root and re-derives the
//! whole chain from the fresh root.
//!
//! ```text
//! root ──derive(key)──→ shelf ──derive(key)──→ book
//!  ↑ dispatch(wrap(wrap(a)))       ↑ dispatch(wrap(a))      │ dispatch(a)
//!  └───────────────────────────────┴────────────────────────┘
//! ```

mod derive;
mod handle;
mod pipe;

pub use derive::{derive, Addressing, Derivation};
pub use handle::{Cursor, Fetched};
pub use pipe::Pipe;
