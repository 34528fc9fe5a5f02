use alloc::collections::BTreeSet;
use core::fmt::Debug;

use itertools::Itertools;

use crate::{IntervalSet, PointType};

/// Every value covered by `set`, for comparing against a plain point-set
/// model.
pub(crate) fn points(set: &IntervalSet<i8>) -> BTreeSet<i8> {
	set.iter()
		.flat_map(|interval| interval.begin..interval.end)
		.collect()
}

pub(crate) fn assert_canonical<T>(set: &IntervalSet<T>)
where
	T: PointType + Debug,
{
	let boundaries = set.boundaries();
	if boundaries.len() % 2 != 0 {
		panic!("odd number of boundaries in {set:?}");
	}
	for (previous, next) in boundaries.iter().tuple_windows::<(&T, &T)>() {
		if previous >= next {
			panic!("boundaries not strictly increasing in {set:?}");
		}
	}
	for interval in set.iter() {
		assert!(!interval.is_degenerate());
	}
}
