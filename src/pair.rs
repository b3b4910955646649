//! Owned key/value pairs.

/// An independent copy of one key and one value.
///
/// Unlike the views, a `Pair` has no lifetime tie to the store it was read from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    #[inline(always)]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
    /// Splits the pair into its key and value.
    #[inline(always)]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    #[inline(always)] fn from((key, value): (K, V)) -> Self { Self { key, value } }
}
impl<K, V> From<Pair<K, V>> for (K, V) {
    #[inline(always)] fn from(pair: Pair<K, V>) -> Self { pair.into_parts() }
}

#[cfg(test)]
mod test {
    use super::Pair;

    #[test]
    fn tuple_conversions() {
        let pair: Pair<i64, f64> = (7, 0.5).into();
        assert_eq!(pair, Pair::new(7, 0.5));
        let (key, value): (i64, f64) = pair.into();
        assert_eq!((key, value), (7, 0.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json() {
        let pair = Pair::new(3i64, 3.0f64);
        let text = serde_json::to_string(&pair).unwrap();
        assert_eq!(text, r#"{"key":3,"value":3.0}"#);
        let back: Pair<i64, f64> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, pair);
    }
}
