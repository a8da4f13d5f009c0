//! A growable, contiguous sequence container built on a single-owner heap
//! array.
//!
//! [`SimpleVector`] keeps a `(size, capacity, buffer)` triple. Slots past
//! `size` stay allocated but are never exposed; growth allocates a fresh
//! [`ArrayPtr`], moves the live elements into it and swaps the handles.
//!
//! Element access comes in two flavors: indexing (`v[i]`), which treats an
//! out-of-range index as a caller bug and panics, and [`SimpleVector::at`],
//! which reports the failure as an [`Error`].

pub mod iter;
pub mod reserve;
pub mod vector;


pub use iter::IntoIter;
pub use reserve::{ReserveRequest, reserve};
pub use simplevec_array_ptr::ArrayPtr;
pub use simplevec_common::{Error, ErrorKind, Result};
pub use vector::SimpleVector;

/// Creates a [`SimpleVector`] from a list of elements, or from a value and a count.
///
/// The resulting capacity equals the number of elements.
///
/// ```
/// use simplevec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
