//! Zero-copy key/value views over a columnar store.
//!
//! A [`ColumnarStore`] keeps keys and values in two parallel columns. Reading a
//! pair back out can either copy it into an owned [`Pair`], or produce a *view*:
//! a small handle onto the key slot and the value slot that reads them in place.
//!
//! There are several views, which differ in what they hold:
//!
//! * [`RawKeyValue`] holds two untyped addresses and a [`Presence`] tag, and reads
//!   with unaligned loads. It is the only view that can be missing.
//! * [`BorrowedKeyValue`] holds two typed references and reads by dereferencing.
//! * [`IndexedKeyValue`] holds the store and an index, and re-indexes on each read.
//! * [`EagerKeyValue`] holds copies of the key and value. It is not zero-copy, and
//!   converts to and from [`Pair`].
//!
//! Views that borrow carry the lifetime of the store, so the borrow checker keeps
//! them from outliving it or overlapping a mutation of it. None of the views are
//! meant to be stored; build one per access and read it in the same expression.
//!
//! ```
//! use kvspan::{ColumnarStore, Pair, RawKeyValue};
//!
//! let store: ColumnarStore = ColumnarStore::new(5)?;
//! assert_eq!(store.get_pair(3)?, Pair::new(3, 3.0));
//!
//! let view: RawKeyValue<i64, f64> = store.get_view(3)?;
//! assert!(view.is_present());
//! assert_eq!(view.key() as f64 + view.value(), 6.0);
//! # Ok::<(), kvspan::Error>(())
//! ```

pub mod common;
pub mod primitive;
pub mod error;
pub mod presence;
pub mod pair;
pub mod store;
pub mod raw;
pub mod borrowed;
pub mod indexed;
pub mod eager;
pub mod verify;
mod logging;

pub use common::{Clear, HeapSize, Len, Push};
pub use primitive::Sequential;
pub use error::{Error, Result};
pub use presence::Presence;
pub use pair::Pair;
pub use store::{ColumnarStore, Views};
pub use raw::RawKeyValue;
pub use borrowed::BorrowedKeyValue;
pub use indexed::IndexedKeyValue;
pub use eager::EagerKeyValue;

/// A handle from which a key and a value can be read.
///
/// Implemented by every view, so code can be written once for all of them.
pub trait KeyValueView {
    type Key;
    type Value;
    fn key(&self) -> Self::Key;
    fn value(&self) -> Self::Value;
}

/// A view that can be built from references to one key slot and one value slot.
///
/// This is how [`ColumnarStore::get_view`] lets the caller choose the variant.
pub trait FromSlot<'a, K, V>: Sized {
    fn from_slot(key: &'a K, value: &'a V) -> Self;
}
