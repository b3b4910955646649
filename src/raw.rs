//! Views that hold untyped addresses of a key slot and a value slot.
//!
//! A [`RawKeyValue`] records two `*const u8` addresses and a [`Presence`] tag when it
//! is built, and reads through them with unaligned loads. The addresses carry no
//! alignment promise once a view is embedded in a packed layout, and an unaligned
//! load of a `Pod` type is no slower than an aligned one on the targets we care
//! about, so every read goes through [`bytemuck::pod_read_unaligned`].
//!
//! The lifetime `'a` ties a view to the storage it was built from. Raw pointers make
//! the view neither `Send` nor `Sync`, which keeps it on the stack of the reader.

use std::marker::PhantomData;

use bytemuck::Pod;

use crate::verify::verify;
use crate::{Error, FromSlot, KeyValueView, Presence, Result};

/// A key/value view over two untyped addresses.
///
/// Reads require the half being read to be present. The safe accessors check this
/// and panic, the `try_` accessors report [`Error::MissingValueAccess`], and the
/// `_unchecked` accessors leave it to the caller outside of verification builds.
pub struct RawKeyValue<'a, K, V> {
    key: *const u8,
    value: *const u8,
    presence: Presence,
    _marker: PhantomData<(&'a K, &'a V)>,
}

// Manual impls: a view is copyable whether or not `K` and `V` are.
impl<'a, K, V> Clone for RawKeyValue<'a, K, V> {
    #[inline(always)] fn clone(&self) -> Self { *self }
}
impl<'a, K, V> Copy for RawKeyValue<'a, K, V> { }

impl<'a, K, V> RawKeyValue<'a, K, V> {
    /// A present view over `key` and `value`.
    #[inline(always)]
    pub fn new(key: &'a K, value: &'a V) -> Self {
        Self {
            key: (key as *const K).cast(),
            value: (value as *const V).cast(),
            presence: Presence::BothPresent,
            _marker: PhantomData,
        }
    }

    /// A view with neither a key nor a value.
    #[inline(always)]
    pub const fn missing() -> Self {
        Self {
            key: std::ptr::null(),
            value: std::ptr::null(),
            presence: Presence::BothMissing,
            _marker: PhantomData,
        }
    }

    /// Builds a view from raw addresses; a null address marks its half as missing.
    ///
    /// # Safety
    ///
    /// Each non-null address must be valid for reads of `size_of::<K>()` (resp.
    /// `size_of::<V>()`) bytes holding a valid `K` (resp. `V`) for all of `'a`, and
    /// must not be written through any other path while the view is read, except
    /// through pointers sharing its provenance. No alignment is required.
    #[inline(always)]
    pub unsafe fn from_raw_parts(key: *const u8, value: *const u8) -> Self {
        Self {
            key,
            value,
            presence: Presence::from_nulls(key.is_null(), value.is_null()),
            _marker: PhantomData,
        }
    }

    #[inline(always)] pub fn presence(&self) -> Presence { self.presence }
    /// True iff both addresses are null.
    #[inline(always)] pub fn is_missing(&self) -> bool { self.presence.is_missing() }
    #[inline(always)] pub fn is_present(&self) -> bool { self.presence.is_present() }

    /// The captured key address, null when the key is missing.
    #[inline(always)] pub fn key_addr(&self) -> *const u8 { self.key }
    /// The captured value address, null when the value is missing.
    #[inline(always)] pub fn value_addr(&self) -> *const u8 { self.value }
}

/// Loads a `T` from `addr` without assuming alignment.
///
/// # Safety
///
/// `addr` must be valid for reads of `size_of::<T>()` bytes.
#[inline(always)]
unsafe fn load<T: Pod>(addr: *const u8) -> T {
    let bytes = std::slice::from_raw_parts(addr, std::mem::size_of::<T>());
    bytemuck::pod_read_unaligned(bytes)
}

impl<'a, K: Pod, V: Pod> RawKeyValue<'a, K, V> {
    /// The key, or `MissingValueAccess` if the key half is missing.
    #[inline(always)]
    pub fn try_key(&self) -> Result<K> {
        if self.presence.has_key() {
            // SAFETY: present addresses are valid for `'a` by construction.
            Ok(unsafe { load(self.key) })
        } else {
            Err(Error::MissingValueAccess)
        }
    }
    /// The value, or `MissingValueAccess` if the value half is missing.
    #[inline(always)]
    pub fn try_value(&self) -> Result<V> {
        if self.presence.has_value() {
            // SAFETY: present addresses are valid for `'a` by construction.
            Ok(unsafe { load(self.value) })
        } else {
            Err(Error::MissingValueAccess)
        }
    }

    /// The key.
    ///
    /// # Panics
    ///
    /// Panics if the key half is missing.
    #[inline(always)]
    pub fn key(&self) -> K {
        match self.try_key() {
            Ok(key) => key,
            Err(err) => panic!("{}", err),
        }
    }
    /// The value.
    ///
    /// # Panics
    ///
    /// Panics if the value half is missing.
    #[inline(always)]
    pub fn value(&self) -> V {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// The key, with presence checked only in verification builds.
    ///
    /// # Safety
    ///
    /// The key half must be present (`presence().has_key()`).
    #[inline(always)]
    pub unsafe fn key_unchecked(&self) -> K {
        verify!(self.presence.has_key(), Error::MissingValueAccess);
        load(self.key)
    }
    /// The value, with presence checked only in verification builds.
    ///
    /// # Safety
    ///
    /// The value half must be present (`presence().has_value()`).
    #[inline(always)]
    pub unsafe fn value_unchecked(&self) -> V {
        verify!(self.presence.has_value(), Error::MissingValueAccess);
        load(self.value)
    }
}

impl<'a, K: Pod, V: Pod> std::fmt::Debug for RawKeyValue<'a, K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawKeyValue")
            .field("key", &self.try_key().ok())
            .field("value", &self.try_value().ok())
            .field("presence", &self.presence)
            .finish()
    }
}

impl<'a, K: Pod, V: Pod> KeyValueView for RawKeyValue<'a, K, V> {
    type Key = K;
    type Value = V;
    #[inline(always)] fn key(&self) -> K { RawKeyValue::key(self) }
    #[inline(always)] fn value(&self) -> V { RawKeyValue::value(self) }
}

impl<'a, K: 'a, V: 'a> FromSlot<'a, K, V> for RawKeyValue<'a, K, V> {
    #[inline(always)]
    fn from_slot(key: &'a K, value: &'a V) -> Self { Self::new(key, value) }
}
