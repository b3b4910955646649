//! Presence of the key and value slots behind a raw view.
//!
//! Sparse key/value layouts can lose either half of a pair independently, so the
//! tag reserves four states. Views built from store slots are always `BothPresent`
//! and [`RawKeyValue::missing`](crate::RawKeyValue::missing) is `BothMissing`; the
//! mixed states are only reachable through `RawKeyValue::from_raw_parts`.

/// Which halves of a key/value pair are present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Presence {
    BothPresent,
    KeyMissing,
    ValueMissing,
    BothMissing,
}

impl Presence {
    /// Presence implied by the nullness of a key address and a value address.
    #[inline(always)]
    pub const fn from_nulls(key_null: bool, value_null: bool) -> Self {
        match (key_null, value_null) {
            (false, false) => Presence::BothPresent,
            (true, false) => Presence::KeyMissing,
            (false, true) => Presence::ValueMissing,
            (true, true) => Presence::BothMissing,
        }
    }
    /// Whether the key half can be read.
    #[inline(always)]
    pub const fn has_key(self) -> bool {
        matches!(self, Presence::BothPresent | Presence::ValueMissing)
    }
    /// Whether the value half can be read.
    #[inline(always)]
    pub const fn has_value(self) -> bool {
        matches!(self, Presence::BothPresent | Presence::KeyMissing)
    }
    /// Whether the whole pair is absent.
    #[inline(always)]
    pub const fn is_missing(self) -> bool {
        matches!(self, Presence::BothMissing)
    }
    /// Negation of [`Presence::is_missing`]; mixed states count as present.
    #[inline(always)]
    pub const fn is_present(self) -> bool {
        !self.is_missing()
    }
}

#[cfg(test)]
mod test {
    use super::Presence;

    #[test]
    fn from_nulls_covers_all_states() {
        assert_eq!(Presence::from_nulls(false, false), Presence::BothPresent);
        assert_eq!(Presence::from_nulls(true, false), Presence::KeyMissing);
        assert_eq!(Presence::from_nulls(false, true), Presence::ValueMissing);
        assert_eq!(Presence::from_nulls(true, true), Presence::BothMissing);
    }

    #[test]
    fn present_and_missing_are_exclusive() {
        for presence in [Presence::BothPresent, Presence::KeyMissing, Presence::ValueMissing, Presence::BothMissing] {
            assert_ne!(presence.is_present(), presence.is_missing());
        }
        assert!(Presence::KeyMissing.has_value() && !Presence::KeyMissing.has_key());
        assert!(Presence::ValueMissing.has_key() && !Presence::ValueMissing.has_value());
    }
}
