use core::{
	alloc::Layout,
	fmt
};

/// Error returned by checked accesses when the index is not smaller than the
/// length of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
	/// The requested index.
	pub index: usize,

	/// Length of the array at the time of the access.
	pub len: usize
}

impl fmt::Display for OutOfRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "index out of range (is {}) should be < len (is {})", self.index, self.len)
	}
}

impl std::error::Error for OutOfRange {}

/// The error type for `try_reserve` and other fallible allocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryReserveError {
	/// The computed capacity exceeded the maximum allocation size.
	CapacityOverflow,

	/// The memory allocator returned an error.
	AllocError {
		/// The layout of the allocation request that failed.
		layout: Layout
	}
}

impl fmt::Display for TryReserveError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("memory allocation failed")?;
		match self {
			TryReserveError::CapacityOverflow => f.write_str(" because the computed capacity exceeded the collection's maximum"),
			TryReserveError::AllocError { layout } => write!(f, " because the memory allocator returned an error (size {}, align {})", layout.size(), layout.align())
		}
	}
}

impl std::error::Error for TryReserveError {}
