use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use finset::{FinSet, Handle, Registry, declare_universe};

declare_universe! {
	Slot => u32;
}

fn universe(size: u32) -> Arc<Registry<Slot>> {
	let mut reg = Registry::declare("bench");
	for n in 0..size {
		reg.register(n, None).expect("open registry");
	}
	reg.seal().expect("first seal");
	Arc::new(reg)
}

fn every(reg: &Arc<Registry<Slot>>, step: u32) -> FinSet<Slot> {
	let handles = (0..reg.len() as u32).step_by(step as usize).map(Handle::from_raw);
	FinSet::from_handles(reg, handles).expect("handles in range")
}

fn bench_algebra(c: &mut Criterion) {
	let mut group = c.benchmark_group("algebra");
	for size in [64u32, 1_024, 16_384] {
		let reg = universe(size);
		let twos = every(&reg, 2);
		let threes = every(&reg, 3);

		group.bench_with_input(BenchmarkId::new("union", size), &size, |b, _| {
			b.iter(|| black_box(&twos).union(black_box(&threes)))
		});
		group.bench_with_input(BenchmarkId::new("subset", size), &size, |b, _| {
			b.iter(|| black_box(&twos).subset(black_box(&threes)))
		});
		group.bench_with_input(BenchmarkId::new("cardinality", size), &size, |b, _| {
			b.iter(|| black_box(&twos).cardinality())
		});
		group.bench_with_input(BenchmarkId::new("add", size), &size, |b, _| {
			b.iter(|| black_box(&twos).add(Handle::from_raw(1)))
		});
	}
	group.finish();
}

fn bench_register(c: &mut Criterion) {
	c.bench_function("register_and_seal_16k", |b| b.iter(|| universe(black_box(16_384))));
}

criterion_group!(benches, bench_algebra, bench_register);
criterion_main!(benches);
