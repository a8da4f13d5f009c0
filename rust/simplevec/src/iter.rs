//! Owning iteration over a [`SimpleVector`].

use std::iter::FusedIterator;

use crate::SimpleVector;

/// An iterator that moves the live elements out of a [`SimpleVector`].
///
/// Elements in the spare capacity are dropped together with the buffer and
/// never yielded.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (mut items, size) = self.into_array_ptr();
        let mut values = items.release().map(Vec::from).unwrap_or_default();
        values.truncate(size);
        IntoIter {
            inner: values.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::SimpleVector;

    #[test]
    fn test_into_iter_yields_live_range_only() {
        let mut v = SimpleVector::<String>::with_capacity(8);
        v.extend([String::from("a"), String::from("b"), String::from("c")]);
        v.pop_back();
        let values: Vec<String> = v.into_iter().collect();
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let v = SimpleVector::from([1, 2, 3, 4]);
        let mut it = v.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_into_iter_empty() {
        let v = SimpleVector::<u32>::new();
        assert_eq!(v.into_iter().next(), None);
    }
}
