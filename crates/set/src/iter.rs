use core::iter::FusedIterator;
use core::marker::PhantomData;

use bitvec::order::Lsb0;
use bitvec::slice::IterOnes;
use finset_universe::{Handle, Registry, Universe};

/// Member handles of a [`FinSet`](crate::FinSet), ascending.
pub struct Iter<'a, U: Universe> {
	ones: IterOnes<'a, u64, Lsb0>,
	_universe: PhantomData<fn() -> U>,
}

impl<'a, U: Universe> Iter<'a, U> {
	pub(crate) fn new(ones: IterOnes<'a, u64, Lsb0>) -> Self {
		Self {
			ones,
			_universe: PhantomData,
		}
	}
}

impl<U: Universe> Iterator for Iter<'_, U> {
	type Item = Handle<U>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		// Bit positions are bounded by the registry length, which fits in u32.
		self.ones.next().map(|index| Handle::from_raw(index as u32))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.ones.size_hint()
	}
}

impl<U: Universe> DoubleEndedIterator for Iter<'_, U> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.ones.next_back().map(|index| Handle::from_raw(index as u32))
	}
}

impl<U: Universe> FusedIterator for Iter<'_, U> {}

/// Member values of a [`FinSet`](crate::FinSet), in registration order.
pub struct Values<'a, U: Universe> {
	registry: &'a Registry<U>,
	handles: Iter<'a, U>,
}

impl<'a, U: Universe> Values<'a, U> {
	pub(crate) fn new(registry: &'a Registry<U>, handles: Iter<'a, U>) -> Self {
		Self { registry, handles }
	}
}

impl<'a, U: Universe> Iterator for Values<'a, U> {
	type Item = &'a U::Value;

	fn next(&mut self) -> Option<Self::Item> {
		let registry = self.registry;
		self.handles.find_map(|handle| registry.value(handle).ok())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.handles.size_hint()
	}
}

impl<U: Universe> FusedIterator for Values<'_, U> {}
