//! Allocator-aware contiguous vector.
//!
//! [`Vector<T, A>`] owns a single block obtained from an [`Allocator`] and
//! keeps a precise count of constructed elements through every operation, so
//! that failing element constructors never leak and never leave
//! uninitialized slots counted as live. Positions inside a vector are
//! expressed with [`Cursor`].
//!
//! ```
//! use rivet_mem::{vector, Vector};
//!
//! let mut v = vector![1, 2, 4].unwrap();
//! let pos = v.begin() + 2;
//! v.emplace(pos, || Ok::<_, ()>(3)).unwrap();
//! assert_eq!(v, [1, 2, 3, 4]);
//! assert!(v.at(4).is_err());
//! ```

mod macros;
mod allocator;
mod capacity_error;
mod global_alloc;

pub mod vec_types;

pub use allocator::Allocator;
pub use capacity_error::CapacityError;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use vec_types::{Cursor, Vector, VecError};

#[cfg(test)]
mod tests;
