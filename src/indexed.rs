//! Views that hold the store and an index, re-deriving the slot on every read.

use crate::{ColumnarStore, KeyValueView};

/// A key/value view over a borrowed store and a validated index.
///
/// Each read indexes the columns again. Compared with the pointer-holding views
/// this costs an extra indirection and a bounds check per read, in exchange for
/// never holding an address into a column.
#[derive(Debug)]
pub struct IndexedKeyValue<'a, K, V> {
    store: &'a ColumnarStore<K, V>,
    index: usize,
}

impl<'a, K, V> Clone for IndexedKeyValue<'a, K, V> {
    #[inline(always)] fn clone(&self) -> Self { *self }
}
impl<'a, K, V> Copy for IndexedKeyValue<'a, K, V> { }

impl<'a, K, V> IndexedKeyValue<'a, K, V> {
    /// Only the store hands these out, after checking `index`.
    #[inline(always)]
    pub(crate) fn new(store: &'a ColumnarStore<K, V>, index: usize) -> Self {
        Self { store, index }
    }
    #[inline(always)] pub fn index(&self) -> usize { self.index }
    #[inline(always)] pub fn key_ref(&self) -> &'a K { &self.store.keys()[self.index] }
    #[inline(always)] pub fn value_ref(&self) -> &'a V { &self.store.values()[self.index] }
}

impl<'a, K: Copy, V: Copy> IndexedKeyValue<'a, K, V> {
    #[inline(always)] pub fn key(&self) -> K { *self.key_ref() }
    #[inline(always)] pub fn value(&self) -> V { *self.value_ref() }
}

impl<'a, K: Copy, V: Copy> KeyValueView for IndexedKeyValue<'a, K, V> {
    type Key = K;
    type Value = V;
    #[inline(always)] fn key(&self) -> K { *self.key_ref() }
    #[inline(always)] fn value(&self) -> V { *self.value_ref() }
}

#[cfg(test)]
mod test {
    use crate::ColumnarStore;

    #[test]
    fn reads_through_store() {
        let store: ColumnarStore = ColumnarStore::new(5).unwrap();
        let view = store.indexed_view(4).unwrap();
        assert_eq!(view.index(), 4);
        assert_eq!(view.key(), 4);
        assert_eq!(view.value(), 4.0);
        assert!(std::ptr::eq(view.value_ref(), &store.values()[4]));
    }
}
