//! End-to-end walk through the public API: declare, register, seal, then
//! combine sets over the sealed universe.

use std::sync::Arc;

use finset::{FinSet, Registry, RegistryError, declare_universe};
use pretty_assertions::assert_eq;

declare_universe! {
	/// Single-letter names.
	Letter => &'static str;
}

#[test]
fn letters_scenario() {
	let mut reg = Registry::<Letter>::declare("letters");
	let a = reg.register("A", Some("A")).unwrap();
	let b = reg.register("B", Some("B")).unwrap();
	let c = reg.register("C", Some("C")).unwrap();
	assert_eq!([a.index(), b.index(), c.index()], [0, 1, 2]);
	reg.seal().unwrap();
	assert_eq!(
		reg.register("D", None).unwrap_err(),
		RegistryError::Sealed { tag: "letters".into() }
	);
	let reg = Arc::new(reg);

	let empty = FinSet::empty(&reg).unwrap();
	let only_b = empty.add(b).unwrap();
	assert!(empty.is_empty());
	assert_eq!(only_b.cardinality(), 1);
	assert!(!only_b.mem(c).unwrap());

	let only_c = FinSet::from_handles(&reg, [c]).unwrap();
	let union = only_b.union(&only_c).unwrap();
	let mut visited = Vec::new();
	union.for_each(|v| visited.push(*v));
	assert_eq!(visited, vec!["B", "C"]);

	let not_b = only_b.complement();
	assert_eq!(not_b.cardinality(), 2);
	assert_eq!(not_b.values().copied().collect::<Vec<_>>(), vec!["A", "C"]);
	assert_eq!(not_b.display().to_string(), "{A, C}");
	assert_eq!(reg.find("C"), Some(c));
}

#[test]
fn sealed_sets_are_read_across_threads() {
	let mut reg = Registry::<Letter>::declare("threads");
	let handles: Vec<_> = ["A", "B", "C", "D"]
		.into_iter()
		.map(|s| reg.register(s, Some(s)).unwrap())
		.collect();
	reg.seal().unwrap();
	let reg = Arc::new(reg);
	let evens = Arc::new(FinSet::from_handles(&reg, [handles[0], handles[2]]).unwrap());

	let workers: Vec<_> = handles
		.iter()
		.map(|&h| {
			let evens = Arc::clone(&evens);
			std::thread::spawn(move || evens.add(h).unwrap().cardinality())
		})
		.collect();
	let sizes: Vec<usize> = workers.into_iter().map(|w| w.join().unwrap()).collect();

	assert_eq!(sizes, vec![2, 3, 2, 3]);
	assert_eq!(evens.cardinality(), 2, "shared set is never mutated");
}
