//! This crate provides [`IntervalSet`], an ordered set of half-open
//! intervals `[begin, end)` over any [`Ord`] type, stored as a single
//! sorted sequence of boundaries.
//!
//! ## Example
//!
//! ```rust
//! use boundset::interval::ie;
//! use boundset::IntervalSet;
//!
//! let mut set = IntervalSet::new();
//!
//! set.add(ie(0, 10));
//! set.add(ie(20, 30));
//! set.add(ie(40, 50));
//! set.add(ie(60, 70));
//!
//! assert_eq!(set.contains_all(ie(5, 8)), true);
//! assert_eq!(set.contains_all(ie(5, 25)), false);
//! assert_eq!(set.contains_any(ie(15, 25)), true);
//! assert_eq!(set.to_string(), "[[0 10] [20 30] [40 50] [60 70]]");
//!
//! let hole = IntervalSet::from([ie(5, 65)]);
//!
//! assert_eq!((&set - &hole).intervals(), [ie(0, 5), ie(65, 70)]);
//! assert_eq!((&set & &hole).intervals(), [ie(5, 10), ie(20, 30), ie(40, 50), ie(60, 65)]);
//! assert_eq!((&set | &hole).intervals(), [ie(0, 70)]);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Boundaries
//!
//! An [`IntervalSet`] does not store intervals, it stores the points where
//! membership flips. The boundaries `[0, 10, 20, 30]` mean "in from 0,
//! out from 10, in from 20, out from 30", that is the intervals `[0, 10)`
//! and `[20, 30)`. The sequence is always strictly increasing and of even
//! length, so a binary search for any value tells you whether it is inside
//! the set from the parity of its insertion point alone.
//!
//! Every mutation is a binary search for each end of the interval followed
//! by one splice of the boundaries between them, so no operation ever
//! rescans the whole set.
//!
//! ### Canonical Form
//!
//! Intervals which overlap or touch are always merged, so `[0, 5)` and
//! `[5, 10)` are stored as `[0, 10)`. Each set of values therefore has
//! exactly one boundary sequence, and two sets are equal exactly when
//! their boundaries are.
//!
//! ### Degenerate Intervals
//!
//! An interval whose `begin` is not less than its `end`, such as `4..4` or
//! `9..2`, contains no values. Such intervals are never rejected:
//! [`add()`](IntervalSet::add) and [`remove()`](IntervalSet::remove)
//! ignore them, [`contains_all()`](IntervalSet::contains_all) is always
//! `true` for them and [`contains_any()`](IntervalSet::contains_any) is
//! always `false`.
//!
//! ### Continuity
//!
//! Unlike a discrete interval set, nothing here assumes values have a
//! successor, so `[1, 2)` and `[3, 4)` are not merged even for integers.
//! Any [`Ord`] type works, including [`String`]s.
//!
//! [`String`]: alloc::string::String
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Interval`] and
//!   [`IntervalSet`]. A set is written as a sequence of intervals and read
//!   back through [`add()`](IntervalSet::add), so unsorted or overlapping
//!   input is merged on the way in.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub mod interval;
pub(crate) mod utils;

pub mod algebra;
pub mod set;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use crate::interval::Interval;
pub use crate::set::{
	IntervalSet, IntoIter, InvalidBoundariesError, Iter, PointType,
};
