//! Deterministic population for primitive column types.

/// A type whose `i`-th sequential value can be produced from the slot index.
///
/// Stores built with [`ColumnarStore::new`](crate::ColumnarStore::new) hold
/// `from_index(i)` in both the key and the value column at slot `i`.
pub trait Sequential: Sized {
    /// The value placed at slot `index`.
    fn from_index(index: usize) -> Self;
}

/// Sequential values for numeric types, via an `as` conversion.
///
/// Indices past a narrow type's range wrap, which is fine for reproducible fills.
macro_rules! implement_sequential {
    ($($index_type:ty),*) => { $(
        impl Sequential for $index_type {
            #[inline(always)]
            fn from_index(index: usize) -> Self { index as $index_type }
        }
    )* }
}

implement_sequential!(u8, u16, u32, u64, u128, usize);
implement_sequential!(i8, i16, i32, i64, i128, isize);
implement_sequential!(f32, f64);

#[cfg(test)]
mod test {
    use super::Sequential;

    #[test]
    fn from_index() {
        assert_eq!(i64::from_index(3), 3);
        assert_eq!(f64::from_index(3), 3.0);
        assert_eq!(u8::from_index(257), 1);
    }
}
