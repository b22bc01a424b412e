use core::{
	borrow::{
		Borrow,
		BorrowMut
	},
	cmp::{
		self,
		Ordering
	},
	hash::{
		Hash,
		Hasher
	},
	iter::FusedIterator,
	mem,
	ops::{
		Deref,
		DerefMut
	},
	fmt
};
use crate::{
	error::{
		OutOfRange,
		TryReserveError
	},
	raw::{
		RawBuffer,
		capacity_overflow,
		handle_reserve
	}
};

/// Capacity request consumed by [`SimpleVec::with_reserve`].
///
/// Created with the [`reserve`] function:
/// ```
/// # use simple_vec::{SimpleVec, reserve};
/// let v: SimpleVec<u32> = reserve(10).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserve {
	capacity: usize
}

impl Reserve {
	/// Requested capacity.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}
}

/// Creates a capacity request to build a [`SimpleVec`] from.
#[inline]
pub fn reserve(capacity: usize) -> Reserve {
	Reserve { capacity }
}

/// Capacity to allocate when `required` slots are needed but only `capacity` are available.
///
/// The capacity doubles, unless more than twice the current capacity is required at once.
/// Starting from an empty buffer, this is `required`.
#[inline]
pub fn grown_capacity(capacity: usize, required: usize) -> usize {
	cmp::max(required, capacity.saturating_mul(2))
}

/// Length after adding one element.
///
/// Only reachable with zero-sized elements, whose capacity is not bounded by memory.
#[inline]
fn increment_len(len: usize) -> usize {
	len.checked_add(1).unwrap_or_else(|| capacity_overflow())
}

/// Contiguous growable array type.
///
/// A `SimpleVec` owns a single [`RawBuffer`] whose slots are all initialized.
/// The first [`len`](SimpleVec::len) slots are the elements of the array,
/// while the remaining slots (up to the [`capacity`](SimpleVec::capacity)) hold
/// default or stale values that are not part of the array.
/// In particular, removing elements (with [`pop_back`](SimpleVec::pop_back),
/// [`clear`](SimpleVec::clear), etc.) does not drop them: they are dropped
/// when overwritten or when the buffer is released.
///
/// When more capacity is needed the buffer is replaced by a new one,
/// following the policy given by [`grown_capacity`].
///
/// # Examples
///
/// ```
/// # use simple_vec::simple_vec;
/// let mut v = simple_vec![1, 2, 3];
/// v.push(4);
/// assert_eq!(v, [1, 2, 3, 4]);
///
/// assert_eq!(*v.insert(1, 99), 99);
/// assert_eq!(v, [1, 99, 2, 3, 4]);
///
/// v.erase(1);
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
pub struct SimpleVec<T> {
	/// Allocated slots.
	buf: RawBuffer<T>,

	/// Number of slots holding elements of the array.
	len: usize
}

impl<T> SimpleVec<T> {
	/// Creates a new empty `SimpleVec`.
	///
	/// The vector will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		SimpleVec {
			buf: RawBuffer::empty(),
			len: 0
		}
	}

	/// Creates a `SimpleVec` with `len` clones of `value`.
	///
	/// The capacity is exactly `len`.
	#[inline]
	pub fn from_elem(len: usize, value: T) -> Self where T: Clone {
		SimpleVec {
			buf: RawBuffer::from_fn(len, |_| value.clone()),
			len
		}
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the vector contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the number of allocated slots, whether they hold elements or not.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	/// Returns a raw pointer to the vector's buffer,
	/// or a null pointer if nothing is allocated.
	///
	/// Modifying the vector may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the vector's buffer,
	/// or a null pointer if nothing is allocated.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.as_mut_ptr()
	}

	/// Extracts a slice containing the entire vector.
	///
	/// Equivalent to `&s[..]`.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.buf.as_slice()[..self.len]
	}

	/// Extracts a mutable slice of the entire vector.
	///
	/// Equivalent to `&mut s[..]`.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		let len = self.len;
		&mut self.buf.as_mut_slice()[..len]
	}

	/// Returns a reference to the element at `index`, or an error if `index >= len`.
	///
	/// ```
	/// # use simple_vec::{simple_vec, OutOfRange};
	/// let v = simple_vec![1, 2];
	/// assert_eq!(v.at(1), Ok(&2));
	/// assert_eq!(v.at(2), Err(OutOfRange { index: 2, len: 2 }));
	/// ```
	#[inline]
	pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
		self.as_slice().get(index).ok_or(OutOfRange { index, len: self.len })
	}

	/// Returns a mutable reference to the element at `index`, or an error if `index >= len`.
	#[inline]
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
		let len = self.len;
		self.as_mut_slice().get_mut(index).ok_or(OutOfRange { index, len })
	}

	/// Returns a reference to the element at `index`, without bounds checking.
	///
	/// For a safe alternative see [`at`](SimpleVec::at), or the `Index` operator.
	///
	/// ## Safety
	///
	/// Calling this method with `index >= len` is *undefined behavior*
	/// even if the resulting reference is not used.
	#[inline]
	pub unsafe fn get_unchecked(&self, index: usize) -> &T {
		debug_assert!(index < self.len, "unchecked access out of bounds (index {} >= len {})", index, self.len);
		self.buf.get_unchecked(index)
	}

	/// Returns a mutable reference to the element at `index`, without bounds checking.
	///
	/// ## Safety
	///
	/// Calling this method with `index >= len` is *undefined behavior*
	/// even if the resulting reference is not used.
	#[inline]
	pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
		debug_assert!(index < self.len, "unchecked access out of bounds (index {} >= len {})", index, self.len);
		self.buf.get_unchecked_mut(index)
	}

	/// Removes the last element of the vector.
	///
	/// The element is not dropped: its slot is left untouched and simply stops being
	/// part of the vector. A reference to it is returned, or `None` if the vector was
	/// already empty (in which case nothing happens).
	#[inline]
	pub fn pop_back(&mut self) -> Option<&T> {
		if self.len == 0 {
			None
		} else {
			self.len -= 1;
			Some(&self.buf.as_slice()[self.len])
		}
	}

	/// Shortens the vector, keeping the first `len` elements.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect. The slots of the removed elements are left untouched.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		if len < self.len {
			self.len = len
		}
	}

	/// Clears the vector, removing all values.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn clear(&mut self) {
		self.len = 0
	}

	/// Removes the element at position `index`, shifting all elements after it to the left.
	///
	/// Returns the element now located at `index` (the one that followed the removed
	/// element), or `None` if the removed element was the last one.
	/// If the vector is empty, nothing happens and `None` is returned.
	///
	/// `index` may be equal to `len` (the end position), in which case the last element
	/// is removed and `None` is returned.
	///
	/// The removed element is moved to the first slot past the end of the vector.
	///
	/// # Panics
	///
	/// Panics if the vector is not empty and `index > len`.
	pub fn erase(&mut self, index: usize) -> Option<&mut T> {
		let len = self.len;
		if len == 0 {
			return None
		}

		if index > len {
			panic!("removal index (is {}) should be <= len (is {})", index, len);
		}

		if index < len {
			self.buf.as_mut_slice()[index..len].rotate_left(1);
		}
		self.len = len - 1;
		self.as_mut_slice().get_mut(index)
	}

	/// Exchanges the contents of the two vectors.
	///
	/// No memory is allocated and no element is moved.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.buf.swap(&mut other.buf);
		mem::swap(&mut self.len, &mut other.len);
	}
}

impl<T: Default> SimpleVec<T> {
	/// Creates a `SimpleVec` of `len` default values.
	///
	/// The capacity is exactly `len`.
	#[inline]
	pub fn with_len(len: usize) -> Self {
		SimpleVec {
			buf: RawBuffer::new(len),
			len
		}
	}

	/// Creates a new empty `SimpleVec` with exactly the given capacity.
	///
	/// The buffer is allocated immediately, so the first `capacity` pushes never reallocate.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		SimpleVec {
			buf: RawBuffer::new(capacity),
			len: 0
		}
	}

	/// Creates a new empty `SimpleVec` from a [`Reserve`] request.
	///
	/// Same as [`with_capacity`](SimpleVec::with_capacity).
	#[inline]
	pub fn with_reserve(request: Reserve) -> Self {
		Self::with_capacity(request.capacity)
	}

	/// Replaces the buffer by a new one of exactly `capacity` slots,
	/// moving the elements of the vector into it.
	///
	/// The new buffer is fully built before the current one is touched,
	/// so the vector is left unchanged on error.
	fn try_relocate(&mut self, capacity: usize) -> Result<(), TryReserveError> {
		debug_assert!(capacity >= self.len);
		let len = self.len;
		let mut buf = RawBuffer::try_new(capacity)?;
		buf.as_mut_slice()[..len].swap_with_slice(&mut self.buf.as_mut_slice()[..len]);
		self.buf.swap(&mut buf);
		Ok(())
	}

	/// Makes room for at least `required` slots, following the growth policy.
	#[inline]
	fn grow_to(&mut self, required: usize) {
		let capacity = grown_capacity(self.capacity(), required);
		handle_reserve(self.try_relocate(capacity))
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	///
	/// On error the vector is left unchanged.
	pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
		if new_capacity > self.capacity() {
			self.try_relocate(new_capacity)
		} else {
			Ok(())
		}
	}

	/// Makes sure the vector has a capacity of at least `new_capacity`.
	///
	/// If the current capacity is smaller, a buffer of exactly `new_capacity` slots
	/// is allocated and the elements are moved into it.
	/// Does nothing if the capacity is already sufficient.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows.
	pub fn reserve(&mut self, new_capacity: usize) {
		handle_reserve(self.try_reserve(new_capacity))
	}

	/// Appends an element to the back of the vector.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows.
	#[inline]
	pub fn push(&mut self, value: T) {
		let len = self.len;
		let new_len = increment_len(len);
		if len == self.capacity() {
			self.grow_to(new_len);
		}

		self.buf.as_mut_slice()[len] = value;
		self.len = new_len;
	}

	/// Inserts an element at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// Returns a reference to the inserted element.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert(&mut self, index: usize, value: T) -> &mut T {
		let len = self.len;
		if index > len {
			panic!("insertion index (is {}) should be <= len (is {})", index, len);
		}

		let new_len = increment_len(len);
		if len == self.capacity() {
			let mut buf = RawBuffer::new(grown_capacity(len, new_len));
			{
				let (dst, src) = (buf.as_mut_slice(), self.buf.as_mut_slice());
				dst[..index].swap_with_slice(&mut src[..index]);
				dst[(index + 1)..=len].swap_with_slice(&mut src[index..len]);
				dst[index] = value;
			}
			self.buf.swap(&mut buf);
		} else {
			// Write past the end then rotate it into place.
			let slots = &mut self.buf.as_mut_slice()[index..=len];
			slots[len - index] = value;
			slots.rotate_right(1);
		}

		self.len = new_len;
		&mut self.buf.as_mut_slice()[index]
	}

	/// Resizes the vector in-place so that `len` is equal to `new_len`.
	///
	/// If `new_len` is greater than `len`, the vector is extended by the
	/// difference, with each additional slot filled with `T::default()`.
	/// If `new_len` is less than `len`, the vector is simply truncated.
	pub fn resize(&mut self, new_len: usize) {
		let len = self.len;
		if new_len > self.capacity() {
			// Slots past `len` in the new buffer are fresh default values.
			self.grow_to(new_len)
		} else if new_len > len {
			for slot in &mut self.buf.as_mut_slice()[len..new_len] {
				*slot = T::default()
			}
		}

		self.len = new_len
	}

	/// Clones and appends all elements in a slice to the vector.
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		self.extend(other.iter().cloned())
	}
}

impl<T> Default for SimpleVec<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone + Default> Clone for SimpleVec<T> {
	/// Clones the elements of the vector into a new buffer of exactly `len` slots.
	fn clone(&self) -> Self {
		self.as_slice().into()
	}

	/// Replaces the content of `self` by a copy of `source`.
	///
	/// If `source` is empty, `self` is cleared and keeps its buffer.
	/// Otherwise `self` gets a new buffer with the same capacity as `source`.
	fn clone_from(&mut self, source: &Self) {
		if source.is_empty() {
			self.clear();
			return
		}

		let elements = source.as_slice();
		let mut tmp = SimpleVec {
			buf: RawBuffer::from_fn(source.capacity(), |i| {
				elements.get(i).cloned().unwrap_or_default()
			}),
			len: source.len
		};
		self.swap(&mut tmp);
	}
}

impl<T> Deref for SimpleVec<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> DerefMut for SimpleVec<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T> AsRef<[T]> for SimpleVec<T> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T> AsMut<[T]> for SimpleVec<T> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T> Borrow<[T]> for SimpleVec<T> {
	#[inline]
	fn borrow(&self) -> &[T] {
		self
	}
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
	#[inline]
	fn borrow_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<T: Hash> Hash for SimpleVec<T> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&**self, state)
	}
}

impl<'v, T> IntoIterator for &'v SimpleVec<T> {
	type Item = &'v T;
	type IntoIter = std::slice::Iter<'v, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'v, T> IntoIterator for &'v mut SimpleVec<T> {
	type Item = &'v mut T;
	type IntoIter = std::slice::IterMut<'v, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

/// An iterator that moves out of a vector.
///
/// Each element is taken out of its slot, leaving a default value behind.
pub struct IntoIter<T> {
	buf: RawBuffer<T>,
	front: usize,
	back: usize
}

impl<T: Default> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		if self.front < self.back {
			let value = mem::take(&mut self.buf.as_mut_slice()[self.front]);
			self.front += 1;
			Some(value)
		} else {
			None
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.back - self.front;
		(len, Some(len))
	}
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		if self.front < self.back {
			self.back -= 1;
			Some(mem::take(&mut self.buf.as_mut_slice()[self.back]))
		} else {
			None
		}
	}
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&&self.buf.as_slice()[self.front..self.back]).finish()
	}
}

impl<T: Default> IntoIterator for SimpleVec<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	#[inline]
	fn into_iter(mut self) -> IntoIter<T> {
		IntoIter {
			buf: self.buf.take(),
			front: 0,
			back: self.len
		}
	}
}

impl<T: Default> Extend<T> for SimpleVec<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
		let iterator = iterator.into_iter();
		let (lower, _) = iterator.size_hint();
		if self.len.saturating_add(lower) > self.capacity() {
			self.grow_to(self.len.saturating_add(lower))
		}

		for element in iterator {
			self.push(element)
		}
	}
}

impl<'a, T: 'a + Copy + Default> Extend<&'a T> for SimpleVec<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iterator: I) {
		self.extend(iterator.into_iter().copied())
	}
}

impl<T: Default> FromIterator<T> for SimpleVec<T> {
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
		let mut vec = SimpleVec::new();
		vec.extend(iterator);
		vec
	}
}

impl<T: Default, const N: usize> From<[T; N]> for SimpleVec<T> {
	#[inline]
	fn from(array: [T; N]) -> Self {
		array.into_iter().collect()
	}
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
	#[inline]
	fn from(slice: &[T]) -> Self {
		SimpleVec {
			buf: RawBuffer::from_fn(slice.len(), |i| slice[i].clone()),
			len: slice.len()
		}
	}
}

impl<T: Default> From<Vec<T>> for SimpleVec<T> {
	#[inline]
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<T: Default> From<Reserve> for SimpleVec<T> {
	#[inline]
	fn from(request: Reserve) -> Self {
		Self::with_reserve(request)
	}
}

impl<T: Default> From<SimpleVec<T>> for Vec<T> {
	#[inline]
	fn from(vec: SimpleVec<T>) -> Vec<T> {
		vec.into_iter().collect()
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		/// Element-wise equality. Arrays of different lengths are never equal, even when one is a prefix of the other.
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U] SimpleVec<T>, SimpleVec<U> }
impl_slice_eq1! { [T, U] SimpleVec<T>, Vec<U> }
impl_slice_eq1! { [T, U] Vec<T>, SimpleVec<U> }
impl_slice_eq1! { [T, U] SimpleVec<T>, [U] }
impl_slice_eq1! { [T, U] SimpleVec<T>, &[U] }
impl_slice_eq1! { [T, U] SimpleVec<T>, &mut [U] }
impl_slice_eq1! { [T, U] &[T], SimpleVec<U> }
impl_slice_eq1! { [T, U, const N: usize] SimpleVec<T>, [U; N] }
impl_slice_eq1! { [T, U, const N: usize] SimpleVec<T>, &[U; N] }
impl_slice_eq1! { [T, U, const N: usize] [T; N], SimpleVec<U> }

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		PartialOrd::partial_cmp(&**self, &**other)
	}
}

impl<T: Ord> Ord for SimpleVec<T> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		Ord::cmp(&**self, &**other)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{
		cell::Cell,
		rc::Rc
	};

	#[derive(Default)]
	struct DropCounter(Option<Rc<Cell<usize>>>);

	impl Drop for DropCounter {
		fn drop(&mut self) {
			if let Some(count) = &self.0 {
				count.set(count.get() + 1)
			}
		}
	}

	#[test]
	fn growth_policy() {
		assert_eq!(grown_capacity(0, 1), 1);
		assert_eq!(grown_capacity(1, 2), 2);
		assert_eq!(grown_capacity(4, 5), 8);
		assert_eq!(grown_capacity(4, 20), 20);
		assert_eq!(grown_capacity(usize::MAX, usize::MAX), usize::MAX);
	}

	#[test]
	fn new_does_not_allocate() {
		let v: SimpleVec<u8> = SimpleVec::new();
		assert_eq!(v.len(), 0);
		assert_eq!(v.capacity(), 0);
		assert!(v.as_ptr().is_null());
	}

	#[test]
	fn push_doubles_capacity() {
		let mut v = SimpleVec::new();
		let mut capacities = Vec::new();
		for i in 0..9 {
			v.push(i);
			capacities.push(v.capacity());
		}
		assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
		assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
	}

	#[test]
	fn with_len_and_from_elem() {
		let v: SimpleVec<i32> = SimpleVec::with_len(3);
		assert_eq!(v, [0, 0, 0]);
		assert_eq!(v.capacity(), 3);

		let v = SimpleVec::from_elem(2, String::from("x"));
		assert_eq!(v, ["x", "x"]);
		assert_eq!(v.capacity(), 2);
	}

	#[test]
	fn reserve_request_allocates_immediately() {
		let mut v: SimpleVec<i32> = SimpleVec::from(reserve(4));
		assert_eq!(v.len(), 0);
		assert_eq!(v.capacity(), 4);
		assert!(!v.as_ptr().is_null());

		let ptr = v.as_ptr();
		for i in 0..4 {
			v.push(i);
		}
		assert_eq!(v.as_ptr(), ptr);
	}

	#[test]
	fn reserve_is_exact_and_never_shrinks() {
		let mut v = SimpleVec::from([1, 2, 3]);
		v.reserve(10);
		assert_eq!(v.capacity(), 10);
		v.reserve(5);
		assert_eq!(v.capacity(), 10);
		assert_eq!(v, [1, 2, 3]);
	}

	#[test]
	fn try_reserve_overflow_leaves_vector_untouched() {
		let mut v = SimpleVec::from([1u64, 2]);
		let capacity = v.capacity();
		assert_eq!(v.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
		assert_eq!(v, [1, 2]);
		assert_eq!(v.capacity(), capacity);
	}

	#[test]
	fn pop_back_keeps_slot() {
		let mut v = SimpleVec::from([1, 2, 3]);
		assert_eq!(v.pop_back(), Some(&3));
		assert_eq!(v.len(), 2);
		assert_eq!(v.capacity(), 3);

		v.clear();
		assert_eq!(v.pop_back(), None);
		assert_eq!(v.len(), 0);
	}

	#[test]
	fn resize_three_cases() {
		let mut v = SimpleVec::from([1, 2, 3, 4]);
		v.reserve(6);

		v.resize(2);
		assert_eq!(v, [1, 2]);
		assert_eq!(v.capacity(), 6);

		// Stale slots are reset when exposed again.
		v.resize(5);
		assert_eq!(v, [1, 2, 0, 0, 0]);
		assert_eq!(v.capacity(), 6);

		v.resize(7);
		assert_eq!(v, [1, 2, 0, 0, 0, 0, 0]);
		assert_eq!(v.capacity(), 12);

		v.resize(30);
		assert_eq!(v.len(), 30);
		assert_eq!(v.capacity(), 30);
	}

	#[test]
	fn insert_in_place_and_with_growth() {
		let mut v = SimpleVec::with_capacity(4);
		v.push(1);
		v.push(3);

		assert_eq!(*v.insert(1, 2), 2);
		assert_eq!(v, [1, 2, 3]);
		assert_eq!(v.capacity(), 4);

		v.insert(3, 4);
		assert_eq!(v, [1, 2, 3, 4]);

		// full: reallocation.
		assert_eq!(*v.insert(0, 0), 0);
		assert_eq!(v, [0, 1, 2, 3, 4]);
		assert_eq!(v.capacity(), 8);
	}

	#[test]
	fn insert_into_empty() {
		let mut v = SimpleVec::new();
		assert_eq!(*v.insert(0, 'a'), 'a');
		assert_eq!(v.capacity(), 1);
		assert_eq!(v, ['a']);
	}

	#[test]
	#[should_panic(expected = "insertion index")]
	fn insert_past_end_panics() {
		let mut v = SimpleVec::from([1]);
		v.insert(2, 0);
	}

	#[test]
	fn erase_returns_following_element() {
		let mut v = SimpleVec::from([1, 2, 3]);
		assert_eq!(v.erase(0).copied(), Some(2));
		assert_eq!(v, [2, 3]);
		assert_eq!(v.erase(1), None);
		assert_eq!(v, [2]);
		assert_eq!(v.capacity(), 3);
	}

	#[test]
	fn erase_at_end_removes_last() {
		let mut v = SimpleVec::from([1, 2, 3]);
		let len = v.len();
		assert_eq!(v.erase(len), None);
		assert_eq!(v, [1, 2]);
		assert_eq!(v.capacity(), 3);

		assert_eq!(v.erase(1), None);
		assert_eq!(v, [1]);
	}

	#[test]
	#[should_panic(expected = "removal index")]
	fn erase_past_end_panics() {
		let mut v = SimpleVec::from([1, 2]);
		v.erase(3);
	}

	#[test]
	#[should_panic(expected = "capacity overflow")]
	fn length_overflow_is_capacity_overflow() {
		increment_len(usize::MAX);
	}

	#[test]
	fn erase_on_empty_is_noop() {
		let mut v: SimpleVec<i32> = SimpleVec::new();
		assert_eq!(v.erase(0), None);
		assert!(v.is_empty());
	}

	#[test]
	fn checked_access() {
		let mut v = SimpleVec::from([5, 6]);
		assert_eq!(v.at(0), Ok(&5));
		assert_eq!(v.at(2), Err(OutOfRange { index: 2, len: 2 }));
		*v.at_mut(1).unwrap() = 7;
		assert_eq!(v, [5, 7]);

		v.pop_back();
		assert!(v.at(1).is_err());
		assert_eq!(unsafe { *v.get_unchecked(0) }, 5);
	}

	#[test]
	fn swap_is_shallow() {
		let mut a = SimpleVec::from([1, 2, 3]);
		let mut b = SimpleVec::with_capacity(10);
		b.push(9);
		let (pa, pb) = (a.as_ptr(), b.as_ptr());

		a.swap(&mut b);
		assert_eq!(a, [9]);
		assert_eq!(a.capacity(), 10);
		assert_eq!(b, [1, 2, 3]);
		assert_eq!(a.as_ptr(), pb);
		assert_eq!(b.as_ptr(), pa);
	}

	#[test]
	fn clone_from_copies_capacity() {
		let mut source = SimpleVec::with_capacity(8);
		source.extend_from_slice(&[1, 2, 3]);

		let mut target = SimpleVec::from([7, 7]);
		target.clone_from(&source);
		assert_eq!(target, [1, 2, 3]);
		assert_eq!(target.capacity(), 8);

		let clone = source.clone();
		assert_eq!(clone, source);
		assert_eq!(clone.capacity(), 3);
		assert_ne!(clone.as_ptr(), source.as_ptr());
	}

	#[test]
	fn clone_from_empty_clears() {
		let mut target = SimpleVec::from([1, 2, 3]);
		target.clone_from(&SimpleVec::new());
		assert!(target.is_empty());
		assert_eq!(target.capacity(), 3);
	}

	#[test]
	fn into_iter_moves_elements() {
		let v = SimpleVec::from([String::from("a"), String::from("b"), String::from("c")]);
		let mut iter = v.into_iter();
		assert_eq!(iter.len(), 3);
		assert_eq!(iter.next_back().as_deref(), Some("c"));
		assert_eq!(iter.next().as_deref(), Some("a"));
		assert_eq!(iter.next().as_deref(), Some("b"));
		assert_eq!(iter.next(), None);
	}

	#[test]
	fn into_vec_keeps_only_live_elements() {
		let mut v = SimpleVec::from([1, 2, 3]);
		v.pop_back();
		let vec: Vec<i32> = v.into();
		assert_eq!(vec, [1, 2]);
	}

	#[test]
	fn every_slot_dropped_once() {
		let drops = Rc::new(Cell::new(0));
		{
			let mut v = SimpleVec::new();
			for _ in 0..5 {
				v.push(DropCounter(Some(drops.clone())));
			}
			// 5 elements in 8 slots: the 3 defaults do not count.
			v.pop_back();
			v.clear();
			assert_eq!(drops.get(), 0);
		}
		assert_eq!(drops.get(), 5);
	}

	#[test]
	fn overwritten_stale_slot_is_dropped() {
		let drops = Rc::new(Cell::new(0));
		let mut v = SimpleVec::new();
		v.push(DropCounter(Some(drops.clone())));
		v.pop_back();
		v.push(DropCounter(None));
		assert_eq!(drops.get(), 1);
	}

	#[test]
	fn ordering() {
		let a = SimpleVec::from([1, 2, 3]);
		let b = SimpleVec::from([1, 2, 4]);
		let c = SimpleVec::from([1, 2]);
		assert!(a < b);
		assert!(c < a);
		assert!(a <= a.clone());
		assert!(b > a);
		assert!(b >= a);
		assert_eq!(a.cmp(&b), Ordering::Less);
	}

	#[test]
	fn different_lengths_are_not_equal() {
		let a = SimpleVec::from([1, 2]);
		let b = SimpleVec::from([1, 2, 3]);
		assert_ne!(a, b);
		assert_ne!(b, a);
		assert_ne!(a, [1, 2, 3]);
		assert_ne!(b, vec![1, 2]);
	}

	#[test]
	fn zero_sized_elements() {
		let mut v = SimpleVec::new();
		for _ in 0..100 {
			v.push(());
		}
		assert_eq!(v.len(), 100);
		v.insert(50, ());
		v.erase(0);
		assert_eq!(v.len(), 100);
	}
}
