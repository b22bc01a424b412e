//! This crate provides the [`SimpleVec`] data structure,
//! a contiguous growable array type that keeps the length of the array
//! and the capacity of its buffer as two separate quantities.
//!
//! ## Basic usage
//!
//! A `SimpleVec` can be created empty (without allocating),
//! from a list of elements, or with a given capacity.
//! ```rust
//! use simple_vec::{SimpleVec, simple_vec};
//!
//! let mut v = simple_vec![1, 2, 3];
//! v.push(4);
//! assert_eq!(v, [1, 2, 3, 4]);
//! assert_eq!(v.capacity(), 6); // the buffer doubled.
//! ```
//!
//! Elements are stored in a [`RawBuffer`](raw::RawBuffer) in which every slot
//! is initialized: removing elements only shrinks the length of the array,
//! and growing the array fills the new slots with `T::default()`.
//! ```rust
//! # use simple_vec::simple_vec;
//! let mut v = simple_vec![1, 2, 3];
//! v.pop_back();
//! v.pop_back();
//! assert_eq!(v, [1]);
//! assert_eq!(v.capacity(), 3); // capacity is untouched.
//!
//! v.resize(3);
//! assert_eq!(v, [1, 0, 0]);
//! ```
//!
//! Capacity can be requested upfront, in which case no reallocation happens
//! until it is exceeded:
//! ```rust
//! # use simple_vec::{SimpleVec, reserve};
//! let mut v: SimpleVec<u32> = reserve(10).into();
//! for i in 0..10 {
//! 	v.push(i);
//! }
//! assert_eq!(v.capacity(), 10);
//! ```
//!
//! Checked accesses report an [`OutOfRange`] error instead of panicking:
//! ```rust
//! # use simple_vec::simple_vec;
//! let v = simple_vec![1, 2, 3];
//! assert!(v.at(3).is_err());
//! ```
pub mod error;
pub mod raw;
pub mod vec;

pub use error::{
	OutOfRange,
	TryReserveError
};
pub use vec::{
	SimpleVec,
	IntoIter,
	Reserve,
	reserve,
	grown_capacity
};

/// Creates a [`SimpleVec`] containing the arguments.
///
/// - Create a [`SimpleVec`] containing a given list of elements:
/// ```
/// # use simple_vec::simple_vec;
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// ```
/// - Create a [`SimpleVec`] from a given element and size:
/// ```
/// # use simple_vec::simple_vec;
/// let v = simple_vec![1; 3];
/// assert_eq!(v, [1, 1, 1]);
/// ```
#[macro_export]
macro_rules! simple_vec {
	() => (
		$crate::SimpleVec::new()
	);
	($elem:expr; $n:expr) => (
		$crate::SimpleVec::from_elem($n, $elem)
	);
	($($x:expr),+ $(,)?) => (
		$crate::SimpleVec::from([$($x),+])
	);
}
