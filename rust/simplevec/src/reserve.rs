//! Capacity reservation requests.
//!
//! `SimpleVector::with_capacity` is the primary way to pre-size a vector.
//! [`reserve`] builds the same vector through a conversion, for call sites
//! that pass the request around before the element type is known:
//!
//! ```
//! use simplevec::{SimpleVector, reserve};
//!
//! let v: SimpleVector<i32> = reserve(16).into();
//! assert_eq!(v.len(), 0);
//! assert_eq!(v.capacity(), 16);
//! ```

use crate::SimpleVector;

/// A requested capacity, consumed by `SimpleVector::from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    pub fn new(capacity: usize) -> ReserveRequest {
        ReserveRequest { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a request for a vector with room for `capacity` elements.
pub fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
    fn from(request: ReserveRequest) -> SimpleVector<T> {
        SimpleVector::with_capacity(request.capacity())
    }
}
