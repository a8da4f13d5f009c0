use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use simplevec_array_ptr::ArrayPtr;
use simplevec_common::{Error, Result, verify_index};

/// A growable array with explicit size and capacity.
///
/// Elements `[0, len())` are live. The buffer always holds exactly
/// `capacity()` elements; the tail past `len()` keeps whatever was last
/// written there and is unreachable through the public API.
///
/// Growth doubles the capacity (starting from 1), so `push_back` is
/// amortized O(1). Shrinking operations (`clear`, `pop_back`, `resize`
/// to a smaller size) never reallocate.
///
/// # Examples
///
/// ```
/// use simplevec::SimpleVector;
///
/// let mut v = SimpleVector::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// assert_eq!(v.capacity(), 4);
///
/// let pos = v.insert(1, 99);
/// assert_eq!(v, [1, 99, 2, 3]);
/// v.erase(pos);
/// assert_eq!(v, [1, 2, 3]);
///
/// assert!(v.at(3).is_err());
/// ```
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
    capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::new(),
            size: 0,
            capacity: 0,
        }
    }

    /// Creates a vector holding `len` clones of `value`. Capacity equals `len`.
    pub fn from_value(len: usize, value: T) -> SimpleVector<T>
    where
        T: Clone,
    {
        SimpleVector::from(vec![value; len])
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of elements the buffer holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns a raw pointer to the buffer, or null if nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns a reference to the element at `index`, or an `OutOfRange`
    /// error when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.size);
        Ok(&self.items[index])
    }

    /// Mutable counterpart of [`SimpleVector::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.size);
        Ok(&mut self.items[index])
    }

    /// Sets the size to zero. Capacity and buffer contents are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the live range.
    ///
    /// The element stays in the buffer until it is overwritten or the
    /// vector is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Like [`SimpleVector::pop_back`], but fails instead of panicking on an
    /// empty vector.
    pub fn try_pop_back(&mut self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::invalid_operation("pop_back on an empty SimpleVector"));
        }
        self.size -= 1;
        Ok(())
    }

    /// Removes the element at `index`, shifting everything after it one slot
    /// to the left.
    ///
    /// Returns `index`, which now refers to the element that followed the
    /// erased one (or equals `len()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.size,
            "erase position {index} is out of bounds for size {}",
            self.size
        );
        self.items.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Like [`SimpleVector::erase`], but reports an invalid position as an
    /// `OutOfRange` error.
    pub fn try_erase(&mut self, index: usize) -> Result<usize> {
        verify_index!(index, self.size);
        Ok(self.erase(index))
    }

    /// Exchanges buffers, sizes and capacities with `other` in O(1).
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the contents out into a new vector, leaving `self` with size
    /// and capacity zero.
    pub fn take(&mut self) -> SimpleVector<T> {
        SimpleVector {
            items: self.items.take(),
            size: std::mem::take(&mut self.size),
            capacity: std::mem::take(&mut self.capacity),
        }
    }

    /// Consumes the vector, returning its buffer and the number of live
    /// elements at the front of it.
    pub fn into_array_ptr(self) -> (ArrayPtr<T>, usize) {
        (self.items, self.size)
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `len` default values. Capacity equals `len`.
    ///
    /// ```
    /// use simplevec::SimpleVector;
    ///
    /// let v = SimpleVector::<i32>::with_size(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn with_size(len: usize) -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::with_len(len),
            size: len,
            capacity: len,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// ```
    /// use simplevec::SimpleVector;
    ///
    /// let v = SimpleVector::<String>::with_capacity(10);
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        let mut v = SimpleVector::new();
        v.reserve(capacity);
        v
    }

    /// Changes the size to `new_size`.
    ///
    /// Shrinking only moves the size. Growing within capacity assigns
    /// `T::default()` to the newly exposed slots. Growing past capacity
    /// reallocates to `max(new_size, 2 * capacity)`.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
            return;
        }

        if new_size <= self.capacity {
            self.items.as_mut_slice()[self.size..new_size].fill_with(T::default);
        } else {
            let doubled = self.capacity.checked_mul(2).expect("capacity overflow");
            self.reallocate(new_size.max(doubled));
        }
        self.size = new_size;
    }

    /// Appends `value` to the end, doubling the capacity when full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity {
            self.reallocate(self.grown_capacity());
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting the elements at and after it one
    /// slot to the right.
    ///
    /// Returns the position of the inserted element, which is `index`. Any
    /// pointer obtained before the call is invalidated if the buffer grew.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.size,
            "insert position {index} is out of bounds for size {}",
            self.size
        );

        if self.size < self.capacity {
            let slots = &mut self.items.as_mut_slice()[index..=self.size];
            slots.rotate_right(1);
            slots[0] = value;
        } else {
            let new_capacity = self.grown_capacity();
            log::trace!(
                "SimpleVector: insert at {index} grows capacity {} -> {new_capacity}",
                self.capacity
            );
            let mut items = ArrayPtr::with_len(new_capacity);
            let (old, new) = (
                &mut self.items.as_mut_slice()[..self.size],
                items.as_mut_slice(),
            );
            new[..index].swap_with_slice(&mut old[..index]);
            new[index] = value;
            new[index + 1..=self.size].swap_with_slice(&mut old[index..]);
            self.items.swap(&mut items);
            self.capacity = new_capacity;
        }
        self.size += 1;
        index
    }

    /// Like [`SimpleVector::insert`], but reports a position past `len()` as
    /// an `OutOfRange` error instead of panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize> {
        if index > self.size {
            return Err(Error::out_of_range(index, self.size));
        }
        Ok(self.insert(index, value))
    }

    /// Grows the buffer to exactly `new_capacity` if it is currently smaller.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.reallocate(new_capacity);
        }
    }

    /// Appends clones of every element of `values`.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        for value in values {
            self.push_back(value.clone());
        }
    }

    #[inline]
    fn grown_capacity(&self) -> usize {
        if self.capacity == 0 {
            1
        } else {
            self.capacity.checked_mul(2).expect("capacity overflow")
        }
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` default
    /// values and replaces the current buffer with it.
    #[cold]
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        log::trace!(
            "SimpleVector: reallocating capacity {} -> {new_capacity} (size {})",
            self.capacity,
            self.size
        );
        let mut items = ArrayPtr::with_len(new_capacity);
        items.as_mut_slice()[..self.size]
            .swap_with_slice(&mut self.items.as_mut_slice()[..self.size]);
        self.items.swap(&mut items);
        self.capacity = new_capacity;
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy into an independent buffer sized to the live elements.
    fn clone(&self) -> SimpleVector<T> {
        SimpleVector::from(self.as_slice())
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> SimpleVector<T> {
        let size = values.len();
        SimpleVector {
            items: ArrayPtr::from(values),
            size,
            capacity: size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> SimpleVector<T> {
        SimpleVector::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> SimpleVector<T> {
        SimpleVector::from(values.to_vec())
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SimpleVector<T> {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &SimpleVector<T>) -> bool {
        std::ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for SimpleVector<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &SimpleVector<T>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &SimpleVector<T>) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
