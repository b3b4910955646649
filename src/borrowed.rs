//! Views that hold typed references to a key slot and a value slot.
//!
//! The lean sibling of [`RawKeyValue`](crate::RawKeyValue): the reference types
//! guarantee natural alignment, so reads are plain dereferences, and there is no
//! presence tag because a reference cannot be missing.

use crate::{FromSlot, KeyValueView};

/// A key/value view over two borrowed references.
///
/// ```compile_fail
/// use kvspan::{BorrowedKeyValue, ColumnarStore};
///
/// let mut store: ColumnarStore = ColumnarStore::new(5).unwrap();
/// let view: BorrowedKeyValue<i64, f64> = store.get_view(3).unwrap();
/// *store.value_mut(3).unwrap() = 42.0; // the view still borrows the store
/// assert_eq!(view.value(), 42.0);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BorrowedKeyValue<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

impl<'a, K, V> Clone for BorrowedKeyValue<'a, K, V> {
    #[inline(always)] fn clone(&self) -> Self { *self }
}
impl<'a, K, V> Copy for BorrowedKeyValue<'a, K, V> { }

impl<'a, K, V> BorrowedKeyValue<'a, K, V> {
    #[inline(always)]
    pub fn new(key: &'a K, value: &'a V) -> Self {
        Self { key, value }
    }
    /// The key reference, valid for `'a` rather than for the borrow of `self`.
    #[inline(always)] pub fn key_ref(&self) -> &'a K { self.key }
    /// The value reference, valid for `'a` rather than for the borrow of `self`.
    #[inline(always)] pub fn value_ref(&self) -> &'a V { self.value }
}

impl<'a, K: Copy, V: Copy> BorrowedKeyValue<'a, K, V> {
    #[inline(always)] pub fn key(&self) -> K { *self.key }
    #[inline(always)] pub fn value(&self) -> V { *self.value }
}

impl<'a, K: Copy, V: Copy> KeyValueView for BorrowedKeyValue<'a, K, V> {
    type Key = K;
    type Value = V;
    #[inline(always)] fn key(&self) -> K { *self.key }
    #[inline(always)] fn value(&self) -> V { *self.value }
}

impl<'a, K: 'a, V: 'a> FromSlot<'a, K, V> for BorrowedKeyValue<'a, K, V> {
    #[inline(always)]
    fn from_slot(key: &'a K, value: &'a V) -> Self { Self::new(key, value) }
}
