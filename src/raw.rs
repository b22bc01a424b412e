use core::{
	alloc::Layout,
	marker::PhantomData,
	mem,
	ptr::{
		self,
		NonNull
	},
	slice,
	fmt
};
use std::alloc::{
	self,
	handle_alloc_error
};
use crate::error::TryReserveError;

/// A low-level owner of a single heap allocation holding a fixed number of elements.
///
/// Unlike the standard `RawVec`, every slot of a `RawBuffer` is initialized at all times:
/// the buffer is filled on construction and all its elements are dropped along with it.
/// It has no notion of length; it is up to the user of `RawBuffer` to decide which of
/// the slots are meaningful.
///
/// The buffer can only be moved around (see [`RawBuffer::take`]) or exchanged with
/// another buffer (see [`RawBuffer::swap`]), never copied.
pub struct RawBuffer<T> {
	/// Pointer to the first slot.
	///
	/// Dangling if `len` is 0 or if `T` is zero-sized.
	ptr: NonNull<T>,

	/// Number of allocated (and initialized) slots.
	len: usize,

	/// The buffer owns values of type `T`.
	marker: PhantomData<T>
}

// SAFETY: `RawBuffer<T>` uniquely owns its elements.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared references to a `RawBuffer<T>` only hand out `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> Drop for RawBuffer<T> {
	fn drop(&mut self) {
		unsafe {
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
			deallocate(self.ptr, self.len)
		}
	}
}

impl<T> RawBuffer<T> {
	/// Creates an empty buffer.
	///
	/// This does not allocate.
	#[inline]
	pub const fn empty() -> Self {
		RawBuffer {
			ptr: NonNull::dangling(),
			len: 0,
			marker: PhantomData
		}
	}

	/// Allocates a buffer of `len` slots, initializing the slot `i` with `f(i)`.
	///
	/// # Panics
	///
	/// Panics if the required size overflows, and calls [`handle_alloc_error`] if the
	/// allocation fails.
	#[inline]
	pub fn from_fn<F: FnMut(usize) -> T>(len: usize, f: F) -> Self {
		handle_reserve(Self::try_from_fn(len, f))
	}

	/// The same as `from_fn`, but returns on errors instead of panicking or aborting.
	///
	/// If `f` panics, the slots initialized so far are dropped and the memory is released.
	pub fn try_from_fn<F: FnMut(usize) -> T>(len: usize, mut f: F) -> Result<Self, TryReserveError> {
		if len == 0 {
			return Ok(Self::empty())
		}

		let ptr = allocate::<T>(len)?;

		/// Cleans up a partially initialized allocation on unwind.
		struct DropGuard<T> {
			ptr: NonNull<T>,
			len: usize,
			num_init: usize
		}

		impl<T> Drop for DropGuard<T> {
			fn drop(&mut self) {
				// SAFETY: exactly `num_init` slots have been written.
				unsafe {
					ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.num_init));
					deallocate(self.ptr, self.len)
				}
			}
		}

		let mut guard = DropGuard { ptr, len, num_init: 0 };
		while guard.num_init < len {
			let value = f(guard.num_init);
			// SAFETY: `num_init < len`, so the slot lies inside the allocation.
			unsafe {
				ptr::write(ptr.as_ptr().add(guard.num_init), value);
			}
			guard.num_init += 1;
		}
		mem::forget(guard);

		Ok(RawBuffer {
			ptr,
			len,
			marker: PhantomData
		})
	}

	/// Returns the number of slots of the buffer.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the buffer has no slot (and hence no allocation).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns a raw pointer to the first slot, or a null pointer if the buffer is empty.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		if self.len == 0 {
			ptr::null()
		} else {
			self.ptr.as_ptr()
		}
	}

	/// Returns an unsafe mutable pointer to the first slot, or a null pointer if the buffer
	/// is empty.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		if self.len == 0 {
			ptr::null_mut()
		} else {
			self.ptr.as_ptr()
		}
	}

	/// Every slot of the buffer.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.ptr.as_ptr(), self.len)
		}
	}

	/// Every slot of the buffer, mutably.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len)
		}
	}

	/// Returns a reference to the slot at `index`, without bounds checking.
	///
	/// ## Safety
	///
	/// `index` must be smaller than [`len`](RawBuffer::len).
	#[inline]
	pub unsafe fn get_unchecked(&self, index: usize) -> &T {
		debug_assert!(index < self.len, "unchecked buffer access out of bounds");
		&*self.ptr.as_ptr().add(index)
	}

	/// Returns a mutable reference to the slot at `index`, without bounds checking.
	///
	/// ## Safety
	///
	/// `index` must be smaller than [`len`](RawBuffer::len).
	#[inline]
	pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
		debug_assert!(index < self.len, "unchecked buffer access out of bounds");
		&mut *self.ptr.as_ptr().add(index)
	}

	/// Exchanges the allocations of the two buffers.
	///
	/// No memory is allocated and no element is moved.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(&mut self.ptr, &mut other.ptr);
		mem::swap(&mut self.len, &mut other.len);
	}

	/// Moves the allocation out of this buffer, leaving it empty.
	#[inline]
	pub fn take(&mut self) -> Self {
		mem::replace(self, Self::empty())
	}
}

impl<T: Default> RawBuffer<T> {
	/// Allocates a buffer of `len` default-initialized slots.
	///
	/// No allocation is performed if `len` is 0.
	#[inline]
	pub fn new(len: usize) -> Self {
		Self::from_fn(len, |_| T::default())
	}

	/// The same as `new`, but returns on errors instead of panicking or aborting.
	#[inline]
	pub fn try_new(len: usize) -> Result<Self, TryReserveError> {
		Self::try_from_fn(len, |_| T::default())
	}
}

impl<T> Default for RawBuffer<T> {
	#[inline]
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: fmt::Debug> fmt::Debug for RawBuffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_slice(), f)
	}
}

/// Allocates uninitialized memory for `len` values of type `T`.
///
/// Zero-sized types get a dangling pointer.
fn allocate<T>(len: usize) -> Result<NonNull<T>, TryReserveError> {
	if mem::size_of::<T>() == 0 {
		return Ok(NonNull::dangling())
	}

	let layout = Layout::array::<T>(len).map_err(|_| TryReserveError::CapacityOverflow)?;
	alloc_guard(layout.size())?;

	// SAFETY: `layout` has a non-zero size since `len > 0` and `T` is not zero-sized.
	let ptr = unsafe { alloc::alloc(layout) };
	NonNull::new(ptr.cast::<T>()).ok_or(TryReserveError::AllocError { layout })
}

/// Releases memory obtained from `allocate`.
///
/// ## Safety
///
/// `ptr` must come from `allocate::<T>(len)`, or be dangling with `len == 0`.
unsafe fn deallocate<T>(ptr: NonNull<T>, len: usize) {
	if len == 0 || mem::size_of::<T>() == 0 {
		return
	}

	// We have an allocated chunk of memory, so we can bypass runtime
	// checks to get our current layout.
	let layout = Layout::from_size_align_unchecked(mem::size_of::<T>() * len, mem::align_of::<T>());
	alloc::dealloc(ptr.as_ptr().cast(), layout)
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<T>(result: Result<T, TryReserveError>) -> T {
	match result {
		Err(TryReserveError::CapacityOverflow) => capacity_overflow(),
		Err(TryReserveError::AllocError { layout }) => handle_alloc_error(layout),
		Ok(t) => t
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), TryReserveError> {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		Err(TryReserveError::CapacityOverflow)
	} else {
		Ok(())
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
pub(crate) fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
