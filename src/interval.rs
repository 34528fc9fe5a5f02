//! A module containing [`Interval`] and its constructor function [`ie()`].

use core::fmt;
use core::ops::{Bound, Range, RangeBounds};

/// A half-open interval `[begin, end)` over an [`Ord`] type.
///
/// `begin` is included and `end` is excluded. An interval whose `begin`
/// is not strictly less than its `end` is degenerate and contains no
/// values; degenerate intervals are still valid to construct and pass
/// around, they just represent the empty range.
///
/// # Examples
/// ```
/// use boundset::interval::{ie, Interval};
///
/// let interval = Interval { begin: 2, end: 6 };
///
/// assert_eq!(interval, ie(2, 6));
/// assert_eq!(interval.contains(&2), true);
/// assert_eq!(interval.contains(&6), false);
/// assert_eq!(ie(6, 2).is_degenerate(), true);
/// assert_eq!(interval.to_string(), "[2 6]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
	/// The start of the interval, inclusive.
	pub begin: T,
	/// The end of the interval, exclusive.
	pub end: T,
}

impl<T> Interval<T>
where
	T: Ord,
{
	/// Returns `true` if the interval contains no values, that is when
	/// `begin >= end`.
	pub fn is_degenerate(&self) -> bool {
		self.begin >= self.end
	}

	/// Returns `true` if `point` lies within `[begin, end)`.
	pub fn contains(&self, point: &T) -> bool {
		*point >= self.begin && *point < self.end
	}

	/// Returns `true` if the two intervals share at least one value.
	///
	/// Degenerate intervals never overlap anything.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	///
	/// assert_eq!(ie(0, 4).overlaps(&ie(3, 8)), true);
	/// assert_eq!(ie(0, 4).overlaps(&ie(4, 8)), false);
	/// assert_eq!(ie(0, 4).overlaps(&ie(2, 2)), false);
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		!self.is_degenerate()
			&& !other.is_degenerate()
			&& self.begin < other.end
			&& other.begin < self.end
	}
}

/// Shorthand for an [`Interval`] from `begin` (included) to `end`
/// (excluded).
pub fn ie<T>(begin: T, end: T) -> Interval<T> {
	Interval { begin, end }
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{} {}]", self.begin, self.end)
	}
}

impl<T> RangeBounds<T> for Interval<T> {
	fn start_bound(&self) -> Bound<&T> {
		Bound::Included(&self.begin)
	}

	fn end_bound(&self) -> Bound<&T> {
		Bound::Excluded(&self.end)
	}
}

impl<T> From<Range<T>> for Interval<T> {
	fn from(range: Range<T>) -> Self {
		Interval {
			begin: range.start,
			end: range.end,
		}
	}
}

impl<T> From<Interval<T>> for Range<T> {
	fn from(interval: Interval<T>) -> Self {
		interval.begin..interval.end
	}
}
