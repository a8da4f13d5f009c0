//! Test utilities for the simplevec crates.
//!
//! - [`data_gen`]: seeded generation of random operation scripts
//! - [`model`]: replays a script against `SimpleVector` and `std::vec::Vec`
//!   and reports the first step where they disagree

pub mod data_gen;
pub mod model;
