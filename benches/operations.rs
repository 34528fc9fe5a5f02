#![feature(test)]

extern crate test;
use test::Bencher;

extern crate boundset;
use boundset::interval::ie;
use boundset::IntervalSet;

/// linear multiplier for work done by benchmarks
const REPEAT: u32 = 120;

/// utility for constructing a set of n disjoint [4i, 4i+2) intervals
fn build_striped_set(n: u32) -> IntervalSet<u32> {
	(0..n).map(|i| ie(4 * i, 4 * i + 2)).collect()
}

#[bench]
fn bench_add_disjoint(b: &mut Bencher) {
	b.iter(|| {
		let mut set = IntervalSet::new();
		for i in 0..REPEAT {
			set.add(ie(4 * i, 4 * i + 2));
		}
		set
	});
}

#[bench]
fn bench_add_merging(b: &mut Bencher) {
	let set = build_striped_set(REPEAT);
	b.iter(|| {
		let mut set = set.clone();
		for i in 0..REPEAT / 2 {
			set.add(ie(8 * i + 1, 8 * i + 5));
		}
		set
	});
}

#[bench]
fn bench_remove(b: &mut Bencher) {
	let set = build_striped_set(REPEAT);
	b.iter(|| {
		let mut set = set.clone();
		for i in 0..REPEAT {
			set.remove(ie(4 * i + 1, 4 * i + 3));
		}
		set
	});
}

#[bench]
fn bench_contains_any(b: &mut Bencher) {
	let set = build_striped_set(REPEAT);
	b.iter(|| (0..4 * REPEAT).filter(|i| set.contains_any(ie(*i, i + 1))).count())
}

#[bench]
fn bench_union(b: &mut Bencher) {
	let left = build_striped_set(REPEAT);
	let right: IntervalSet<u32> =
		(0..REPEAT).map(|i| ie(4 * i + 1, 4 * i + 3)).collect();
	b.iter(|| left.union(&right))
}

#[bench]
fn bench_intersect(b: &mut Bencher) {
	let left = build_striped_set(REPEAT);
	let right: IntervalSet<u32> =
		(0..REPEAT).map(|i| ie(4 * i + 1, 4 * i + 3)).collect();
	b.iter(|| left.intersect(&right))
}

#[bench]
fn bench_difference(b: &mut Bencher) {
	let left = build_striped_set(REPEAT);
	let right: IntervalSet<u32> =
		(0..REPEAT).map(|i| ie(4 * i + 1, 4 * i + 3)).collect();
	b.iter(|| left.difference(&right))
}
