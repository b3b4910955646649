//! Common container traits shared by the store and its columns.

/// A type with a length.
pub trait Len {
    /// The number of contained elements.
    fn len(&self) -> usize;
    /// Whether this contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
impl<L: Len + ?Sized> Len for &L {
    #[inline(always)] fn len(&self) -> usize { L::len(*self) }
}
impl<T> Len for Vec<T> {
    #[inline(always)] fn len(&self) -> usize { self.len() }
}
impl<T> Len for [T] {
    #[inline(always)] fn len(&self) -> usize { <[T]>::len(self) }
}

/// A type that can accept items of type `T`.
pub trait Push<T> {
    /// Pushes an item onto `self`.
    fn push(&mut self, item: T);
    /// Pushes elements of an iterator onto `self`.
    #[inline(always)] fn extend(&mut self, iter: impl IntoIterator<Item=T>) {
        for item in iter {
            self.push(item);
        }
    }
}

/// A type that can remove its contents and return to an empty state.
///
/// This does not release resources; capacity is kept for re-insertion.
pub trait Clear {
    /// Clears `self`, without changing its capacity.
    fn clear(&mut self);
}

pub trait HeapSize {
    /// Active (len) and allocated (cap) heap sizes in bytes.
    /// This should not include the size of `self` itself.
    fn heap_size(&self) -> (usize, usize) { (0, 0) }
}

// Column elements are plain data with nothing on the heap.
impl<T: bytemuck::Pod> HeapSize for Vec<T> {
    fn heap_size(&self) -> (usize, usize) {
        (std::mem::size_of::<T>() * self.len(), std::mem::size_of::<T>() * self.capacity())
    }
}
