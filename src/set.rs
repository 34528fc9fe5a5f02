//! A module containing [`IntervalSet`].

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::slice::ChunksExact;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::interval::Interval;
use crate::utils::{is_odd, locate, query_span, splice_span};

/// The number of boundaries (two per interval) stored inline before the
/// set spills onto the heap.
const INLINE_BOUNDARIES: usize = 4;

type Boundaries<T> = SmallVec<[T; INLINE_BOUNDARIES]>;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouldn't need to implement this yourself.
pub trait PointType: Ord + Clone {}
impl<T> PointType for T where T: Ord + Clone {}

/// An ordered set of disjoint, non-touching half-open intervals.
///
/// Internally the set is a single strictly increasing sequence of
/// boundaries `b[0] < b[1] < ... < b[2n-1]`, and the represented values are
/// the union of `[b[2i], b[2i+1])`. Every point-set has exactly one such
/// sequence, so two sets are equal exactly when their boundaries are.
///
/// `T` is the generic type parameter for the [`Ord`] type the intervals are
/// over.
///
/// # Examples
/// ```
/// use boundset::interval::ie;
/// use boundset::IntervalSet;
///
/// let mut set = IntervalSet::new();
///
/// set.add(ie(0, 10));
/// set.add(ie(20, 30));
/// set.add(ie(10, 15));
///
/// assert_eq!(set.intervals(), [ie(0, 15), ie(20, 30)]);
/// assert_eq!(set.contains_all(ie(2, 12)), true);
/// assert_eq!(set.contains_any(ie(15, 20)), false);
///
/// set.remove(ie(5, 25));
///
/// assert_eq!(set.to_string(), "[[0 5] [25 30]]");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
	pub(crate) boundaries: Boundaries<T>,
}

/// The error returned when building an [`IntervalSet`] from a boundary
/// sequence which is not in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBoundariesError {
	/// The sequence has an odd number of boundaries, so the last interval
	/// has no end.
	OddLength {
		/// The length of the rejected sequence.
		len: usize,
	},
	/// The boundary at `index` is not strictly greater than the one
	/// before it.
	NotIncreasing {
		/// The index of the first offending boundary.
		index: usize,
	},
}

impl fmt::Display for InvalidBoundariesError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			InvalidBoundariesError::OddLength { len } => {
				write!(f, "boundary sequence has odd length {len}")
			}
			InvalidBoundariesError::NotIncreasing { index } => {
				write!(f, "boundary at index {index} is not strictly increasing")
			}
		}
	}
}

impl core::error::Error for InvalidBoundariesError {}

impl<T> IntervalSet<T>
where
	T: PointType,
{
	/// Adds `[begin, end)` to the set, merging it with every interval it
	/// overlaps or touches.
	///
	/// Adding a degenerate interval does nothing.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let mut set = IntervalSet::from([ie(0, 4), ie(8, 12)]);
	///
	/// set.add(ie(4, 8));
	/// assert_eq!(set.intervals(), [ie(0, 12)]);
	///
	/// set.add(ie(20, 10));
	/// assert_eq!(set.intervals(), [ie(0, 12)]);
	/// ```
	pub fn add(&mut self, interval: Interval<T>) {
		if interval.is_degenerate() {
			return;
		}

		let (left, right) = splice_span(&self.boundaries, &interval);
		self.boundaries.drain(left..right);

		match (is_odd(left), is_odd(right)) {
			(false, false) => self
				.boundaries
				.insert_many(left, [interval.begin, interval.end]),
			(false, true) => self.boundaries.insert(left, interval.begin),
			(true, false) => self.boundaries.insert(left, interval.end),
			// both ends were already covered
			(true, true) => {}
		}
	}

	/// Removes `[begin, end)` from the set, trimming or splitting every
	/// interval it overlaps.
	///
	/// Removing a degenerate interval does nothing.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let mut set = IntervalSet::from([ie(0, 10), ie(20, 30)]);
	///
	/// set.remove(ie(4, 6));
	/// assert_eq!(set.intervals(), [ie(0, 4), ie(6, 10), ie(20, 30)]);
	///
	/// set.remove(ie(5, 25));
	/// assert_eq!(set.intervals(), [ie(0, 4), ie(25, 30)]);
	/// ```
	pub fn remove(&mut self, interval: Interval<T>) {
		if interval.is_degenerate() {
			return;
		}

		let (left, right) = splice_span(&self.boundaries, &interval);
		self.boundaries.drain(left..right);

		match (is_odd(left), is_odd(right)) {
			(true, true) => self
				.boundaries
				.insert_many(left, [interval.begin, interval.end]),
			(true, false) => self.boundaries.insert(left, interval.begin),
			(false, true) => self.boundaries.insert(left, interval.end),
			// both ends were already in gaps
			(false, false) => {}
		}
	}

	/// Returns `true` if every value of `[begin, end)` is in the set.
	///
	/// A degenerate interval holds no values and so is always contained.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let set = IntervalSet::from([ie(0, 10), ie(20, 30)]);
	///
	/// assert_eq!(set.contains_all(ie(0, 10)), true);
	/// assert_eq!(set.contains_all(ie(5, 25)), false);
	/// assert_eq!(set.contains_all(ie(15, 15)), true);
	/// ```
	pub fn contains_all(&self, interval: Interval<T>) -> bool {
		if interval.is_degenerate() {
			return true;
		}

		let (left, right) = query_span(&self.boundaries, &interval);

		left == right && is_odd(left)
	}

	/// Returns `true` if at least one value of `[begin, end)` is in the
	/// set.
	///
	/// A degenerate interval holds no values and so never overlaps the set.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let set = IntervalSet::from([ie(0, 10), ie(20, 30)]);
	///
	/// assert_eq!(set.contains_any(ie(15, 25)), true);
	/// assert_eq!(set.contains_any(ie(10, 20)), false);
	/// assert_eq!(set.contains_any(ie(5, 5)), false);
	/// ```
	pub fn contains_any(&self, interval: Interval<T>) -> bool {
		if interval.is_degenerate() {
			return false;
		}

		let (left, right) = query_span(&self.boundaries, &interval);

		left < right || is_odd(left)
	}

	/// Returns `true` if `point` is in the set.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let set = IntervalSet::from([ie(0, 10)]);
	///
	/// assert_eq!(set.contains_point(&0), true);
	/// assert_eq!(set.contains_point(&9), true);
	/// assert_eq!(set.contains_point(&10), false);
	/// ```
	pub fn contains_point(&self, point: &T) -> bool {
		let location = locate(&self.boundaries, point);

		// an exact match at an even position is an interval's begin,
		// at an odd one it is an (excluded) end
		location.exact != location.is_inside()
	}

	/// Decodes the set into its intervals in ascending order.
	pub fn intervals(&self) -> Vec<Interval<T>> {
		self.iter().collect()
	}

	/// Returns an iterator over the intervals of the set in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let set = IntervalSet::from([ie(20, 30), ie(0, 10)]);
	///
	/// let mut iter = set.iter();
	///
	/// assert_eq!(iter.len(), 2);
	/// assert_eq!(iter.next(), Some(ie(0, 10)));
	/// assert_eq!(iter.next_back(), Some(ie(20, 30)));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			inner: self.boundaries.chunks_exact(2),
		}
	}

	/// Returns the lowest interval of the set, if any.
	pub fn first(&self) -> Option<Interval<T>> {
		self.iter().next()
	}

	/// Returns the highest interval of the set, if any.
	pub fn last(&self) -> Option<Interval<T>> {
		self.iter().next_back()
	}

	/// Builds a set directly from a boundary sequence.
	///
	/// The sequence must already be in canonical form: an even number of
	/// strictly increasing values.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::{IntervalSet, InvalidBoundariesError};
	///
	/// let set = IntervalSet::from_boundaries([0, 10, 20, 30]).unwrap();
	/// assert_eq!(set.intervals(), [ie(0, 10), ie(20, 30)]);
	///
	/// assert_eq!(
	/// 	IntervalSet::from_boundaries([0, 10, 20]),
	/// 	Err(InvalidBoundariesError::OddLength { len: 3 })
	/// );
	/// assert_eq!(
	/// 	IntervalSet::from_boundaries([0, 10, 10, 30]),
	/// 	Err(InvalidBoundariesError::NotIncreasing { index: 2 })
	/// );
	/// ```
	pub fn from_boundaries(
		boundaries: impl IntoIterator<Item = T>,
	) -> Result<Self, InvalidBoundariesError> {
		let boundaries: Boundaries<T> = boundaries.into_iter().collect();

		if is_odd(boundaries.len()) {
			return Err(InvalidBoundariesError::OddLength {
				len: boundaries.len(),
			});
		}
		if let Some(index) = boundaries
			.iter()
			.tuple_windows::<(&T, &T)>()
			.position(|(previous, next)| previous >= next)
		{
			return Err(InvalidBoundariesError::NotIncreasing {
				index: index + 1,
			});
		}

		return Ok(IntervalSet { boundaries });
	}
}

impl<T> IntervalSet<T> {
	/// Makes a new, empty `IntervalSet`.
	pub fn new() -> Self {
		IntervalSet {
			boundaries: SmallVec::new(),
		}
	}

	/// Returns the number of disjoint intervals in the set.
	pub fn len(&self) -> usize {
		self.boundaries.len() / 2
	}

	/// Returns `true` if the set contains no values.
	pub fn is_empty(&self) -> bool {
		self.boundaries.is_empty()
	}

	/// Removes every interval from the set.
	pub fn clear(&mut self) {
		self.boundaries.clear();
	}

	/// Returns the raw boundary sequence of the set.
	pub fn boundaries(&self) -> &[T] {
		&self.boundaries
	}

	/// Consumes the set, returning its raw boundary sequence.
	pub fn into_boundaries(self) -> Vec<T> {
		self.boundaries.into_vec()
	}
}

// Trait Impls ==========================

impl<T> Default for IntervalSet<T> {
	fn default() -> Self {
		IntervalSet::new()
	}
}

impl<T> fmt::Debug for IntervalSet<T>
where
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set()
			.entries(self.boundaries.chunks_exact(2).map(|pair| Interval {
				begin: &pair[0],
				end: &pair[1],
			}))
			.finish()
	}
}

impl<T> fmt::Display for IntervalSet<T>
where
	T: PointType + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.iter().format(" "))
	}
}

impl<T> TryFrom<Vec<T>> for IntervalSet<T>
where
	T: PointType,
{
	type Error = InvalidBoundariesError;

	fn try_from(boundaries: Vec<T>) -> Result<Self, Self::Error> {
		IntervalSet::from_boundaries(boundaries)
	}
}

impl<T, const N: usize> From<[Interval<T>; N]> for IntervalSet<T>
where
	T: PointType,
{
	fn from(intervals: [Interval<T>; N]) -> Self {
		intervals.into_iter().collect()
	}
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T>
where
	T: PointType,
{
	fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
		let mut set = IntervalSet::new();
		set.extend(iter);
		return set;
	}
}

impl<T> Extend<Interval<T>> for IntervalSet<T>
where
	T: PointType,
{
	fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
		for interval in iter {
			self.add(interval);
		}
	}
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
where
	T: PointType,
{
	type Item = Interval<T>;
	type IntoIter = Iter<'a, T>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T> IntoIterator for IntervalSet<T> {
	type Item = Interval<T>;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.boundaries.into_iter(),
		};
	}
}

/// An iterator over the intervals of an [`IntervalSet`].
///
/// This `struct` is created by the [`iter`] method on [`IntervalSet`]. See
/// its documentation for more.
///
/// [`iter`]: IntervalSet::iter
pub struct Iter<'a, T> {
	inner: ChunksExact<'a, T>,
}
impl<T> Iterator for Iter<'_, T>
where
	T: Clone,
{
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(decode_pair)
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<T> DoubleEndedIterator for Iter<'_, T>
where
	T: Clone,
{
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(decode_pair)
	}
}
impl<T> ExactSizeIterator for Iter<'_, T> where T: Clone {}
impl<T> FusedIterator for Iter<'_, T> where T: Clone {}

/// An owning iterator over the intervals of an [`IntervalSet`].
///
/// This `struct` is created by the [`into_iter`] method on [`IntervalSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for
/// more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: smallvec::IntoIter<[T; INLINE_BOUNDARIES]>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = Interval<T>;
	fn next(&mut self) -> Option<Self::Item> {
		let begin = self.inner.next()?;
		let end = self.inner.next()?;
		Some(Interval { begin, end })
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.inner.len() / 2;
		(len, Some(len))
	}
}
impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		let end = self.inner.next_back()?;
		let begin = self.inner.next_back()?;
		Some(Interval { begin, end })
	}
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

// Helper Functions ==========================

fn decode_pair<T>(pair: &[T]) -> Interval<T>
where
	T: Clone,
{
	Interval {
		begin: pair[0].clone(),
		end: pair[1].clone(),
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Interval, IntervalSet, PointType};

	impl<T> Serialize for IntervalSet<T>
	where
		T: PointType + Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for interval in self.iter() {
				seq.serialize_element(&interval)?;
			}
			seq.end()
		}
	}

	impl<'de, T> Deserialize<'de> for IntervalSet<T>
	where
		T: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalSetVisitor { t: PhantomData })
		}
	}

	struct IntervalSetVisitor<T> {
		t: PhantomData<T>,
	}

	impl<'de, T> Visitor<'de> for IntervalSetVisitor<T>
	where
		T: PointType + Deserialize<'de>,
	{
		type Value = IntervalSet<T>;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("a sequence of intervals")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			// non-canonical input is merged rather than rejected
			let mut set = IntervalSet::new();
			while let Some(interval) = access.next_element::<Interval<T>>()? {
				set.add(interval);
			}
			Ok(set)
		}
	}
}
