//! Views that copy the key and value into the handle.
//!
//! An [`EagerKeyValue`] gives up zero-copy reads: it is the baseline the borrowing
//! views are measured against, and the view-shaped twin of [`Pair`] for the
//! pair -> view -> pair round trip. Conversions in both directions are explicit
//! `From` impls and copy both fields.

use crate::{FromSlot, KeyValueView, Pair};

/// A key/value view holding its own copies. Always present.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EagerKeyValue<K, V> {
    key: K,
    value: V,
}

impl<K, V> EagerKeyValue<K, V> {
    #[inline(always)]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: Copy, V: Copy> EagerKeyValue<K, V> {
    #[inline(always)] pub fn key(&self) -> K { self.key }
    #[inline(always)] pub fn value(&self) -> V { self.value }
}

impl<K: Copy, V: Copy> KeyValueView for EagerKeyValue<K, V> {
    type Key = K;
    type Value = V;
    #[inline(always)] fn key(&self) -> K { self.key }
    #[inline(always)] fn value(&self) -> V { self.value }
}

impl<'a, K: Copy + 'a, V: Copy + 'a> FromSlot<'a, K, V> for EagerKeyValue<K, V> {
    #[inline(always)]
    fn from_slot(key: &'a K, value: &'a V) -> Self { Self::new(*key, *value) }
}

impl<K, V> From<Pair<K, V>> for EagerKeyValue<K, V> {
    #[inline(always)]
    fn from(pair: Pair<K, V>) -> Self { Self::new(pair.key, pair.value) }
}
impl<K, V> From<EagerKeyValue<K, V>> for Pair<K, V> {
    #[inline(always)]
    fn from(view: EagerKeyValue<K, V>) -> Self { Pair::new(view.key, view.value) }
}

#[cfg(test)]
mod test {
    use crate::{ColumnarStore, Pair};
    use super::EagerKeyValue;

    #[test]
    fn round_trip() {
        let pairs = [
            Pair::new(0i64, 0.0f64),
            Pair::new(i64::MIN, f64::MAX),
            Pair::new(i64::MAX, f64::MIN_POSITIVE),
            Pair::new(-1, -0.0),
            Pair::new(7, f64::INFINITY),
        ];
        for pair in pairs {
            let view = EagerKeyValue::from(pair);
            let back = Pair::from(view);
            assert_eq!(back.key, pair.key);
            assert_eq!(back.value.to_bits(), pair.value.to_bits());
        }
    }

    #[test]
    fn round_trip_nan_bits() {
        let value = f64::from_bits(0x7ff8_dead_beef_0001);
        let back: Pair<i64, f64> = EagerKeyValue::from(Pair::new(1, value)).into();
        assert_eq!(back.value.to_bits(), value.to_bits());
    }

    #[test]
    fn copies_at_construction() {
        let mut store: ColumnarStore = ColumnarStore::new(5).unwrap();
        let view: EagerKeyValue<i64, f64> = store.get_view(3).unwrap();
        *store.value_mut(3).unwrap() = 42.0;
        *store.key_mut(3).unwrap() = 99;
        assert_eq!(view.key(), 3);
        assert_eq!(view.value(), 3.0);
        assert_eq!(store.get_pair(3).unwrap(), Pair::new(99, 42.0));
    }
}
