//! A key column and a value column, indexed in parallel.
//!
//! [`ColumnarStore`] is the sole owner of its pairs. Reads either copy a pair out
//! ([`ColumnarStore::get_pair`]) or hand out a view over one slot
//! ([`ColumnarStore::get_view`]); every indexed operation rejects indices outside
//! `0 .. len` with [`Error::OutOfRange`].

use std::marker::PhantomData;

use log::Level;

use crate::common::{Clear, HeapSize, Len, Push};
use crate::logging::kv_log;
use crate::primitive::Sequential;
use crate::{BorrowedKeyValue, EagerKeyValue, Error, FromSlot, IndexedKeyValue, Pair, RawKeyValue, Result};

/// Parallel key and value columns of equal length.
///
/// The default parameters match the benchmark layout: `i64` keys and `f64` values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Columns<K, V>"))]
pub struct ColumnarStore<K = i64, V = f64> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K: Sequential, V: Sequential> ColumnarStore<K, V> {
    /// A store of `count` pairs holding `i` as both key and value at slot `i`.
    ///
    /// Fails with [`Error::EmptyStore`] when `count` is zero.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            kv_log!(Level::Warn, "store_rejected", "reason=empty");
            return Err(Error::EmptyStore);
        }
        let keys = (0 .. count).map(K::from_index).collect();
        let values = (0 .. count).map(V::from_index).collect();
        kv_log!(Level::Debug, "store_built", "len={}", count);
        Ok(Self { keys, values })
    }
}

impl<K, V> ColumnarStore<K, V> {
    /// Adopts existing columns, which must have equal lengths.
    pub fn from_columns(keys: Vec<K>, values: Vec<V>) -> Result<Self> {
        if keys.len() != values.len() {
            kv_log!(Level::Warn, "store_rejected", "keys={} values={}", keys.len(), values.len());
            return Err(Error::ColumnLengthMismatch { keys: keys.len(), values: values.len() });
        }
        kv_log!(Level::Debug, "store_built", "len={}", keys.len());
        Ok(Self { keys, values })
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { keys: Vec::with_capacity(capacity), values: Vec::with_capacity(capacity) }
    }

    /// Returns the columns, in the order `(keys, values)`.
    pub fn into_columns(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }

    #[inline(always)] pub fn keys(&self) -> &[K] { &self.keys }
    #[inline(always)] pub fn values(&self) -> &[V] { &self.values }

    /// Returns `index` if it addresses a slot.
    #[inline(always)]
    fn check(&self, index: usize) -> Result<usize> {
        if index < self.keys.len() {
            Ok(index)
        } else {
            kv_log!(Level::Trace, "out_of_range", "index={} len={}", index, self.keys.len());
            Err(Error::OutOfRange { index, len: self.keys.len() })
        }
    }

    /// A view over slot `index`, of whichever variant the caller names.
    #[inline(always)]
    pub fn get_view<'a, W: FromSlot<'a, K, V>>(&'a self, index: usize) -> Result<W> {
        let index = self.check(index)?;
        Ok(W::from_slot(&self.keys[index], &self.values[index]))
    }
    #[inline(always)]
    pub fn raw_view(&self, index: usize) -> Result<RawKeyValue<'_, K, V>> {
        self.get_view(index)
    }
    #[inline(always)]
    pub fn borrowed_view(&self, index: usize) -> Result<BorrowedKeyValue<'_, K, V>> {
        self.get_view(index)
    }
    #[inline(always)]
    pub fn indexed_view(&self, index: usize) -> Result<IndexedKeyValue<'_, K, V>> {
        Ok(IndexedKeyValue::new(self, self.check(index)?))
    }

    /// One view per slot, in index order.
    pub fn views<'a, W: FromSlot<'a, K, V>>(&'a self) -> Views<'a, K, V, W> {
        Views { store: self, index: 0, _marker: PhantomData }
    }

    #[inline]
    pub fn key_mut(&mut self, index: usize) -> Result<&mut K> {
        let index = self.check(index)?;
        Ok(&mut self.keys[index])
    }
    #[inline]
    pub fn value_mut(&mut self, index: usize) -> Result<&mut V> {
        let index = self.check(index)?;
        Ok(&mut self.values[index])
    }
    /// Overwrites slot `index` with `pair`.
    pub fn set(&mut self, index: usize, pair: Pair<K, V>) -> Result<()> {
        let index = self.check(index)?;
        self.keys[index] = pair.key;
        self.values[index] = pair.value;
        Ok(())
    }

    /// Base pointers of the key and value columns, derived from one `&mut` borrow.
    ///
    /// Views built from these with [`RawKeyValue::from_raw_parts`] share provenance
    /// with writes made through them.
    pub fn as_mut_ptrs(&mut self) -> (*mut K, *mut V) {
        (self.keys.as_mut_ptr(), self.values.as_mut_ptr())
    }
}

impl<K: Copy, V: Copy> ColumnarStore<K, V> {
    /// Copies slot `index` into a pair independent of the store.
    #[inline(always)]
    pub fn get_pair(&self, index: usize) -> Result<Pair<K, V>> {
        let index = self.check(index)?;
        Ok(Pair::new(self.keys[index], self.values[index]))
    }
    #[inline(always)]
    pub fn eager_view(&self, index: usize) -> Result<EagerKeyValue<K, V>> {
        self.get_view(index)
    }
}

impl<K, V> Len for ColumnarStore<K, V> {
    #[inline(always)] fn len(&self) -> usize { self.keys.len() }
}
impl<K, V> Push<(K, V)> for ColumnarStore<K, V> {
    #[inline]
    fn push(&mut self, (key, value): (K, V)) {
        self.keys.push(key);
        self.values.push(value);
    }
}
impl<K, V> Push<Pair<K, V>> for ColumnarStore<K, V> {
    #[inline]
    fn push(&mut self, pair: Pair<K, V>) {
        self.push(pair.into_parts())
    }
}
impl<K, V> Clear for ColumnarStore<K, V> {
    fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}
impl<K: bytemuck::Pod, V: bytemuck::Pod> HeapSize for ColumnarStore<K, V> {
    fn heap_size(&self) -> (usize, usize) {
        let (l0, c0) = self.keys.heap_size();
        let (l1, c1) = self.values.heap_size();
        (l0 + l1, c0 + c1)
    }
}

impl<K, V> FromIterator<(K, V)> for ColumnarStore<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::default();
        Push::<(K, V)>::extend(&mut store, iter);
        store
    }
}
impl<K, V> FromIterator<Pair<K, V>> for ColumnarStore<K, V> {
    fn from_iter<I: IntoIterator<Item = Pair<K, V>>>(iter: I) -> Self {
        let mut store = Self::default();
        Push::<Pair<K, V>>::extend(&mut store, iter);
        store
    }
}

// Empty columns need no `K: Default` or `V: Default`.
impl<K, V> Default for ColumnarStore<K, V> {
    fn default() -> Self {
        Self { keys: Vec::new(), values: Vec::new() }
    }
}

/// Serialized form of a store, checked for equal column lengths on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Columns<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

#[cfg(feature = "serde")]
impl<K, V> TryFrom<Columns<K, V>> for ColumnarStore<K, V> {
    type Error = Error;
    fn try_from(columns: Columns<K, V>) -> Result<Self> {
        Self::from_columns(columns.keys, columns.values)
    }
}

/// An iterator over one view per slot of a store.
pub struct Views<'a, K, V, W> {
    store: &'a ColumnarStore<K, V>,
    index: usize,
    _marker: PhantomData<fn() -> W>,
}

impl<'a, K, V, W: FromSlot<'a, K, V>> Iterator for Views<'a, K, V, W> {
    type Item = W;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.store.keys.len() {
            let result = W::from_slot(&self.store.keys[self.index], &self.store.values[self.index]);
            self.index += 1;
            Some(result)
        } else {
            None
        }
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.keys.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, K, V, W: FromSlot<'a, K, V>> ExactSizeIterator for Views<'a, K, V, W> { }
