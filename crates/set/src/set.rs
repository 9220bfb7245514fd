//! The set type and its checked operations.
//!
//! # Invariants
//!
//! - `bits.len()` equals the sealed registry's `len()` for the lifetime of the set.
//! - Binary operations only combine sets whose registries are the same `Arc`.
//!
//! Bits past `len()` in the last storage word are never read, so word-wise
//! operations are free to leave garbage there.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use finset_universe::{Handle, Registry, Universe};

use crate::SetError;
use crate::iter::{Iter, Values};

type Bits = BitVec<u64, Lsb0>;

/// A subset of the universe `U`, one bit per registered value.
pub struct FinSet<U: Universe> {
	registry: Arc<Registry<U>>,
	bits: Bits,
}

impl<U: Universe> FinSet<U> {
	/// Creates a set over `registry` with every bit set to `initial`.
	///
	/// Fails with [`finset_universe::RegistryError::NotSealed`] while the
	/// registry is open.
	pub fn new(registry: &Arc<Registry<U>>, initial: bool) -> Result<Self, SetError> {
		registry.ensure_sealed()?;
		Ok(Self {
			registry: Arc::clone(registry),
			bits: Bits::repeat(initial, registry.len()),
		})
	}

	/// Creates the empty set.
	pub fn empty(registry: &Arc<Registry<U>>) -> Result<Self, SetError> {
		Self::new(registry, false)
	}

	/// Creates the set of every registered value.
	pub fn full(registry: &Arc<Registry<U>>) -> Result<Self, SetError> {
		Self::new(registry, true)
	}

	/// Creates a set holding exactly `handles`.
	pub fn from_handles<I>(registry: &Arc<Registry<U>>, handles: I) -> Result<Self, SetError>
	where
		I: IntoIterator<Item = Handle<U>>,
	{
		let mut set = Self::empty(registry)?;
		for handle in handles {
			set.set_bit(handle, true)?;
		}
		Ok(set)
	}

	/// Returns the registry this set is bound to.
	#[inline]
	pub fn registry(&self) -> &Arc<Registry<U>> {
		&self.registry
	}

	/// Sets or clears the bit of `handle` in place.
	pub fn set_bit(&mut self, handle: Handle<U>, value: bool) -> Result<(), SetError> {
		let index = self.registry.check(handle)?;
		self.bits.set(index, value);
		Ok(())
	}

	/// Reads the bit of `handle`.
	pub fn get_bit(&self, handle: Handle<U>) -> Result<bool, SetError> {
		let index = self.registry.check(handle)?;
		Ok(self.bits[index])
	}

	/// Sets the bit of `handle` in place. Returns true if it was clear before.
	pub fn insert(&mut self, handle: Handle<U>) -> Result<bool, SetError> {
		let index = self.registry.check(handle)?;
		Ok(!self.bits.replace(index, true))
	}

	/// Clears the bit of `handle` in place. Returns true if it was set before.
	pub fn unset(&mut self, handle: Handle<U>) -> Result<bool, SetError> {
		let index = self.registry.check(handle)?;
		Ok(self.bits.replace(index, false))
	}

	/// Returns a copy of this set with `handle` added.
	///
	/// Always copies, even when `handle` is already a member. Use
	/// [`FinSet::insert`] for amortized in-place updates.
	pub fn add(&self, handle: Handle<U>) -> Result<Self, SetError> {
		self.with_bit(handle, true)
	}

	/// Returns a copy of this set with `handle` removed.
	pub fn remove(&self, handle: Handle<U>) -> Result<Self, SetError> {
		self.with_bit(handle, false)
	}

	/// Membership test; same as [`FinSet::get_bit`].
	#[inline]
	pub fn mem(&self, handle: Handle<U>) -> Result<bool, SetError> {
		self.get_bit(handle)
	}

	fn with_bit(&self, handle: Handle<U>, value: bool) -> Result<Self, SetError> {
		let index = self.registry.check(handle)?;
		let mut out = self.clone();
		out.bits.set(index, value);
		Ok(out)
	}

	/// Adds every member of `other` in place.
	pub fn union_with(&mut self, other: &Self) -> Result<(), SetError> {
		self.zip_words(other, |a, b| a | b)
	}

	/// Keeps only members shared with `other`, in place.
	pub fn intersect_with(&mut self, other: &Self) -> Result<(), SetError> {
		self.zip_words(other, |a, b| a & b)
	}

	/// Drops every member of `other`, in place.
	pub fn subtract(&mut self, other: &Self) -> Result<(), SetError> {
		self.zip_words(other, |a, b| a & !b)
	}

	pub fn union(&self, other: &Self) -> Result<Self, SetError> {
		self.check_same(other)?;
		let mut out = self.clone();
		out.union_with(other)?;
		Ok(out)
	}

	pub fn intersection(&self, other: &Self) -> Result<Self, SetError> {
		self.check_same(other)?;
		let mut out = self.clone();
		out.intersect_with(other)?;
		Ok(out)
	}

	/// Members of `self` that are not members of `other`.
	pub fn difference(&self, other: &Self) -> Result<Self, SetError> {
		self.check_same(other)?;
		let mut out = self.clone();
		out.subtract(other)?;
		Ok(out)
	}

	/// Every registered value not in this set.
	pub fn complement(&self) -> Self {
		Self {
			registry: Arc::clone(&self.registry),
			bits: !self.bits.clone(),
		}
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.bits.not_any()
	}

	/// Returns true if every registered value is a member.
	#[inline]
	pub fn is_full(&self) -> bool {
		self.bits.all()
	}

	/// Bitwise equality of two sets over the same registry.
	pub fn equal(&self, other: &Self) -> Result<bool, SetError> {
		self.check_same(other)?;
		Ok(self.bits == other.bits)
	}

	/// Total order over the bit pattern, lexicographic from index 0.
	pub fn compare(&self, other: &Self) -> Result<Ordering, SetError> {
		self.check_same(other)?;
		Ok(self.bits.cmp(&other.bits))
	}

	/// True if every member of `self` is a member of `other`.
	pub fn subset(&self, other: &Self) -> Result<bool, SetError> {
		let shared = self.intersection(other)?;
		shared.equal(self)
	}

	/// True if `self` and `other` have no member in common.
	pub fn is_disjoint(&self, other: &Self) -> Result<bool, SetError> {
		Ok(self.intersection(other)?.is_empty())
	}

	/// Number of members (population count).
	#[inline]
	pub fn cardinality(&self) -> usize {
		self.bits.count_ones()
	}

	/// Member handles in ascending index order.
	pub fn iter(&self) -> Iter<'_, U> {
		Iter::new(self.bits.iter_ones())
	}

	/// Member values in ascending index order, which is registration order.
	pub fn values(&self) -> Values<'_, U> {
		Values::new(&self.registry, self.iter())
	}

	/// Calls `visit` with the value of every member, lowest index first.
	pub fn for_each<F>(&self, visit: F)
	where
		F: FnMut(&U::Value),
	{
		self.values().for_each(visit);
	}

	/// Folds the member values, lowest index first.
	pub fn fold<B, F>(&self, init: B, combine: F) -> B
	where
		F: FnMut(B, &U::Value) -> B,
	{
		self.values().fold(init, combine)
	}

	/// Returns a [`fmt::Display`] adapter rendering members by label.
	pub fn display(&self) -> DisplaySet<'_, U> {
		DisplaySet(self)
	}

	fn check_same(&self, other: &Self) -> Result<(), SetError> {
		if Arc::ptr_eq(&self.registry, &other.registry) {
			return Ok(());
		}
		tracing::debug!(
			left = self.registry.tag(),
			right = other.registry.tag(),
			"universe mismatch"
		);
		Err(SetError::UniverseMismatch {
			left: self.registry.tag().into(),
			right: other.registry.tag().into(),
		})
	}

	fn zip_words(&mut self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Result<(), SetError> {
		self.check_same(other)?;
		let rhs = other.bits.as_raw_slice();
		for (word, &other_word) in self.bits.as_raw_mut_slice().iter_mut().zip(rhs) {
			*word = op(*word, other_word);
		}
		Ok(())
	}
}

impl<U: Universe> Clone for FinSet<U> {
	fn clone(&self) -> Self {
		Self {
			registry: Arc::clone(&self.registry),
			bits: self.bits.clone(),
		}
	}
}

impl<U: Universe> PartialEq for FinSet<U> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.registry, &other.registry) && self.bits == other.bits
	}
}

impl<U: Universe> Eq for FinSet<U> {}

impl<U: Universe> PartialOrd for FinSet<U> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Orders by bit pattern; sets over different registries fall back to
/// registry address so the order stays consistent with [`Eq`].
impl<U: Universe> Ord for FinSet<U> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.bits
			.cmp(&other.bits)
			.then_with(|| Arc::as_ptr(&self.registry).cmp(&Arc::as_ptr(&other.registry)))
	}
}

impl<U: Universe> Hash for FinSet<U> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.bits.hash(state);
	}
}

impl<'a, U: Universe> IntoIterator for &'a FinSet<U> {
	type Item = Handle<U>;
	type IntoIter = Iter<'a, U>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Renders a member by label, or `#index` when it has none.
struct Member<'a, U: Universe> {
	registry: &'a Registry<U>,
	handle: Handle<U>,
}

impl<U: Universe> fmt::Debug for Member<'_, U> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.registry.label(self.handle) {
			Ok(Some(label)) => f.write_str(label),
			_ => write!(f, "#{}", self.handle.index()),
		}
	}
}

impl<U: Universe> fmt::Debug for FinSet<U> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let registry = &*self.registry;
		f.debug_set()
			.entries(self.iter().map(|handle| Member { registry, handle }))
			.finish()
	}
}

/// See [`FinSet::display`].
pub struct DisplaySet<'a, U: Universe>(&'a FinSet<U>);

impl<U: Universe> fmt::Display for DisplaySet<'_, U> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.0, f)
	}
}
