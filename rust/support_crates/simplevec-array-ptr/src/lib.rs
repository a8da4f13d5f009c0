//! Exclusive owner of a heap-allocated array.
//!
//! [`ArrayPtr`] holds either nothing or a single boxed slice. It cannot be
//! cloned: the allocation has exactly one owner, and ownership moves with the
//! value (or is handed out explicitly via [`ArrayPtr::release`]).

use std::ops::{Index, IndexMut};
use std::slice::SliceIndex;

/// A move-only handle to a contiguous heap array of `T`.
///
/// The empty state carries no allocation. A non-empty `ArrayPtr` always owns
/// at least one element; requesting a zero-length array yields the empty state.
///
/// # Examples
///
/// ```
/// use simplevec_array_ptr::ArrayPtr;
///
/// let mut a = ArrayPtr::<u32>::with_len(3);
/// a[1] = 7;
/// assert_eq!(a.as_slice(), &[0, 7, 0]);
///
/// let b = a.take();
/// assert!(!a.is_allocated());
/// assert!(b.is_allocated());
/// ```
pub struct ArrayPtr<T> {
    items: Option<Box<[T]>>,
}

impl<T> ArrayPtr<T> {
    /// Creates an empty handle with no allocation.
    pub const fn new() -> ArrayPtr<T> {
        ArrayPtr { items: None }
    }

    /// Allocates `len` default-constructed elements.
    ///
    /// `len == 0` allocates nothing and is equivalent to [`ArrayPtr::new`].
    pub fn with_len(len: usize) -> ArrayPtr<T>
    where
        T: Default,
    {
        if len == 0 {
            return ArrayPtr::new();
        }
        let items = std::iter::repeat_with(T::default)
            .take(len)
            .collect::<Box<[T]>>();
        ArrayPtr { items: Some(items) }
    }

    /// Adopts an existing allocation. An empty slice yields the empty state.
    pub fn from_boxed_slice(items: Box<[T]>) -> ArrayPtr<T> {
        if items.is_empty() {
            return ArrayPtr::new();
        }
        log::trace!("ArrayPtr: adopted allocation of {} elements", items.len());
        ArrayPtr { items: Some(items) }
    }

    /// Gives up ownership of the held allocation, leaving `self` empty.
    ///
    /// The caller becomes responsible for the returned array.
    #[must_use = "dropping the released allocation discards the elements"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        let items = self.items.take();
        if let Some(items) = &items {
            log::trace!("ArrayPtr: released allocation of {} elements", items.len());
        }
        items
    }

    /// Moves the allocation out into a new handle, leaving `self` empty.
    pub fn take(&mut self) -> ArrayPtr<T> {
        ArrayPtr {
            items: self.items.take(),
        }
    }

    /// Returns `true` if this handle currently owns an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.items.is_some()
    }

    /// Exchanges the held allocations of two handles without allocating.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(&mut self.items, &mut other.items);
    }

    /// Number of allocated elements (zero when empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the whole allocated extent as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Returns the whole allocated extent as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.items.as_deref_mut().unwrap_or(&mut [])
    }

    /// Returns a raw pointer to the first element, or null when empty.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items
            .as_ref()
            .map_or(std::ptr::null(), |items| items.as_ptr())
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::len`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for ArrayPtr<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(items: Box<[T]>) -> ArrayPtr<T> {
        ArrayPtr::from_boxed_slice(items)
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(items: Vec<T>) -> ArrayPtr<T> {
        ArrayPtr::from_boxed_slice(items.into_boxed_slice())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("values", &self.as_slice())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many instances have been dropped.
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counted(counter: &Rc<Cell<usize>>, n: usize) -> Vec<DropCounter> {
        (0..n).map(|_| DropCounter(counter.clone())).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let p = ArrayPtr::<i32>::new();
        assert!(!p.is_allocated());
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert!(p.as_ptr().is_null());
        assert_eq!(p.as_slice(), &[] as &[i32]);
    }

    #[test]
    fn test_with_len_default_fills() {
        let p = ArrayPtr::<i32>::with_len(4);
        assert!(p.is_allocated());
        assert_eq!(p.len(), 4);
        assert_eq!(p.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_with_len_zero_is_empty() {
        let p = ArrayPtr::<String>::with_len(0);
        assert!(!p.is_allocated());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_adopt_boxed_slice() {
        let p = ArrayPtr::from(vec![1, 2, 3].into_boxed_slice());
        assert!(p.is_allocated());
        assert_eq!(p.as_slice(), &[1, 2, 3]);

        let empty = ArrayPtr::<u8>::from(Vec::new());
        assert!(!empty.is_allocated());
    }

    #[test]
    fn test_index_read_write() {
        let mut p = ArrayPtr::<u64>::with_len(3);
        p[0] = 10;
        p[2] = 30;
        assert_eq!(p[0], 10);
        assert_eq!(p[1], 0);
        assert_eq!(p[2], 30);
    }

    #[test]
    #[should_panic]
    fn test_index_past_allocation_panics() {
        let p = ArrayPtr::<u8>::with_len(2);
        let _ = p[2];
    }

    #[test]
    fn test_get_unchecked() {
        let mut p = ArrayPtr::from(vec![5, 6, 7]);
        unsafe {
            *p.get_unchecked_mut(1) = 60;
            assert_eq!(*p.get_unchecked(1), 60);
        }
    }

    #[test]
    fn test_release_leaves_empty() {
        let mut p = ArrayPtr::from(vec![1, 2]);
        let ptr = p.as_ptr();
        let items = p.release().unwrap();
        assert_eq!(items.as_ptr(), ptr);
        assert_eq!(&*items, &[1, 2]);
        assert!(!p.is_allocated());
        assert!(p.release().is_none());
    }

    #[test]
    fn test_take_transfers_ownership() {
        let mut a = ArrayPtr::from(vec!['a', 'b']);
        let ptr = a.as_ptr();
        let b = a.take();
        assert!(!a.is_allocated());
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(b.as_slice(), &['a', 'b']);
    }

    #[test]
    fn test_swap_exchanges_handles() {
        let mut a = ArrayPtr::from(vec![1, 2, 3]);
        let mut b = ArrayPtr::new();
        let ptr = a.as_ptr();
        a.swap(&mut b);
        assert!(!a.is_allocated());
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_drop_releases_elements_once() {
        let counter = Rc::new(Cell::new(0));
        let mut a = ArrayPtr::from(counted(&counter, 3));
        let b = a.take();
        drop(a);
        assert_eq!(counter.get(), 0);
        drop(b);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_released_allocation_outlives_handle() {
        let counter = Rc::new(Cell::new(0));
        let mut a = ArrayPtr::from(counted(&counter, 2));
        let items = a.release();
        drop(a);
        assert_eq!(counter.get(), 0);
        drop(items);
        assert_eq!(counter.get(), 2);
    }
}
