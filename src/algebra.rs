//! A module containing the set operations on [`IntervalSet`].
//!
//! [`union()`] and [`difference()`] replay the intervals of one operand
//! through [`add()`] and [`remove()`] on a copy of the other, while
//! [`intersect()`] sweeps both operands at once.
//!
//! The operators `|`, `&`, `-` and `^` are implemented on references
//! in the same way as for [`BTreeSet`].
//!
//! [`union()`]: IntervalSet::union
//! [`difference()`]: IntervalSet::difference
//! [`intersect()`]: IntervalSet::intersect
//! [`add()`]: IntervalSet::add
//! [`remove()`]: IntervalSet::remove
//! [`BTreeSet`]: alloc::collections::BTreeSet

use core::cmp::{max, min};
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::interval::Interval;
use crate::{IntervalSet, PointType};

impl<T> IntervalSet<T>
where
	T: PointType,
{
	/// Returns a new set holding every value in `self` or `other`.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let a = IntervalSet::from([ie(0, 10), ie(20, 30)]);
	/// let b = IntervalSet::from([ie(5, 20), ie(40, 50)]);
	///
	/// assert_eq!(a.union(&b).intervals(), [ie(0, 30), ie(40, 50)]);
	/// assert_eq!(a.union(&b), &a | &b);
	/// ```
	pub fn union(&self, other: &Self) -> Self {
		let mut result = self.clone();
		result.union_with(other);
		return result;
	}

	/// Adds every interval of `other` to `self`.
	pub fn union_with(&mut self, other: &Self) {
		for interval in other.iter() {
			self.add(interval);
		}
	}

	/// Returns a new set holding every value in `self` but not in `other`.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let a = IntervalSet::from([ie(0, 10), ie(20, 30)]);
	/// let b = IntervalSet::from([ie(5, 25)]);
	///
	/// assert_eq!(a.difference(&b).intervals(), [ie(0, 5), ie(25, 30)]);
	/// assert_eq!(a.difference(&b), &a - &b);
	/// ```
	pub fn difference(&self, other: &Self) -> Self {
		let mut result = self.clone();
		result.difference_with(other);
		return result;
	}

	/// Removes every interval of `other` from `self`.
	pub fn difference_with(&mut self, other: &Self) {
		for interval in other.iter() {
			self.remove(interval);
		}
	}

	/// Returns a new set holding every value in both `self` and `other`.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let a = IntervalSet::from([ie(0, 10), ie(20, 30)]);
	/// let b = IntervalSet::from([ie(5, 25), ie(28, 40)]);
	///
	/// assert_eq!(
	/// 	a.intersect(&b).intervals(),
	/// 	[ie(5, 10), ie(20, 25), ie(28, 30)]
	/// );
	/// assert_eq!(a.intersect(&b), &a & &b);
	/// ```
	pub fn intersect(&self, other: &Self) -> Self {
		let mut result = IntervalSet::new();

		let mut ours = self.iter().peekable();
		let mut theirs = other.iter().peekable();

		while let (Some(a), Some(b)) = (ours.peek(), theirs.peek()) {
			if a.overlaps(b) {
				result.add(Interval {
					begin: max(&a.begin, &b.begin).clone(),
					end: min(&a.end, &b.end).clone(),
				});
			}
			// whichever ends first can't overlap anything later in the
			// other set
			let advance_ours = a.end < b.end;

			if advance_ours {
				ours.next();
			} else {
				theirs.next();
			}
		}

		return result;
	}

	/// Returns a new set holding every value in exactly one of `self` and
	/// `other`.
	///
	/// # Examples
	/// ```
	/// use boundset::interval::ie;
	/// use boundset::IntervalSet;
	///
	/// let a = IntervalSet::from([ie(0, 10)]);
	/// let b = IntervalSet::from([ie(5, 15)]);
	///
	/// assert_eq!(
	/// 	a.symmetric_difference(&b).intervals(),
	/// 	[ie(0, 5), ie(10, 15)]
	/// );
	/// ```
	pub fn symmetric_difference(&self, other: &Self) -> Self {
		let mut result = self.difference(other);
		result.union_with(&other.difference(self));
		return result;
	}

	/// Returns `true` if every value in `self` is also in `other`.
	pub fn is_subset(&self, other: &Self) -> bool {
		self.iter().all(|interval| other.contains_all(interval))
	}

	/// Returns `true` if `self` and `other` share no values.
	pub fn is_disjoint(&self, other: &Self) -> bool {
		!self.iter().any(|interval| other.contains_any(interval))
	}
}

impl<T> BitOr<&IntervalSet<T>> for &IntervalSet<T>
where
	T: PointType,
{
	type Output = IntervalSet<T>;

	fn bitor(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
		self.union(rhs)
	}
}

impl<T> BitAnd<&IntervalSet<T>> for &IntervalSet<T>
where
	T: PointType,
{
	type Output = IntervalSet<T>;

	fn bitand(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
		self.intersect(rhs)
	}
}

impl<T> Sub<&IntervalSet<T>> for &IntervalSet<T>
where
	T: PointType,
{
	type Output = IntervalSet<T>;

	fn sub(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
		self.difference(rhs)
	}
}

impl<T> BitXor<&IntervalSet<T>> for &IntervalSet<T>
where
	T: PointType,
{
	type Output = IntervalSet<T>;

	fn bitxor(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
		self.symmetric_difference(rhs)
	}
}
