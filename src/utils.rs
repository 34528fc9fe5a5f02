use crate::interval::Interval;

/// The result of a binary search over a boundary sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
	/// The insertion point for the searched value.
	pub(crate) position: usize,
	/// Whether a boundary equal to the searched value already exists at
	/// `position`.
	pub(crate) exact: bool,
}

impl Location {
	/// An odd position lies strictly inside a maintained interval, an even
	/// one lies in a gap (or before the first / after the last interval).
	pub(crate) fn is_inside(&self) -> bool {
		is_odd(self.position)
	}
}

pub(crate) fn locate<T>(boundaries: &[T], value: &T) -> Location
where
	T: Ord,
{
	match boundaries.binary_search(value) {
		Ok(position) => Location {
			position,
			exact: true,
		},
		Err(position) => Location {
			position,
			exact: false,
		},
	}
}

/// Locates both ends of `interval`, returning the `(left, right)` span of
/// boundaries that lie inside it.
///
/// A boundary exactly equal to `interval.end` is included in the span so
/// that whatever starts at `end` is merged with (or split from) the
/// interval.
pub(crate) fn splice_span<T>(
	boundaries: &[T],
	interval: &Interval<T>,
) -> (usize, usize)
where
	T: Ord,
{
	let left = locate(boundaries, &interval.begin).position;
	let right = locate(boundaries, &interval.end);

	(left, right.position + usize::from(right.exact))
}

/// Locates both ends of `interval` for the containment queries, skipping
/// over a boundary exactly equal to `interval.begin`.
pub(crate) fn query_span<T>(
	boundaries: &[T],
	interval: &Interval<T>,
) -> (usize, usize)
where
	T: Ord,
{
	let left = locate(boundaries, &interval.begin);
	let right = locate(boundaries, &interval.end).position;

	(left.position + usize::from(left.exact), right)
}

pub(crate) fn is_odd(position: usize) -> bool {
	position % 2 == 1
}
