//! Open-then-sealed registry of universe members.
//!
//! # Role
//!
//! Assigns dense handles in registration order and resolves them back to
//! values and labels. Storage is a growable vector while open and a boxed
//! slice once sealed.
//!
//! # Invariants
//!
//! - Growth never renumbers: indices are append-only (see `tests::prop_index_stability`).
//! - Sealed capacity equals length (see `tests::prop_growth_then_seal`).

use core::fmt;
use core::iter::Enumerate;
use core::ops::Range;
use core::slice;

use rustc_hash::FxHashMap;

use crate::{Handle, RegistryError, Universe};

/// Smallest capacity allocated when an open registry grows.
pub const MIN_CAPACITY: usize = 64;

struct Entry<V> {
	value: V,
	label: Option<Box<str>>,
}

enum Storage<V> {
	Open(Vec<Entry<V>>),
	Sealed(Box<[Entry<V>]>),
}

/// Table of the members of universe `U`.
///
/// Created open by [`Registry::declare`], filled by [`Registry::register`],
/// then frozen by [`Registry::seal`]. Sets are only built over sealed
/// registries, usually shared behind an `Arc`.
pub struct Registry<U: Universe> {
	tag: Box<str>,
	storage: Storage<U::Value>,
	by_label: FxHashMap<Box<str>, Handle<U>>,
}

impl<U: Universe> Registry<U> {
	/// Creates an empty, open registry. `tag` only appears in diagnostics.
	pub fn declare(tag: impl Into<Box<str>>) -> Self {
		Self {
			tag: tag.into(),
			storage: Storage::Open(Vec::new()),
			by_label: FxHashMap::default(),
		}
	}

	/// Appends `value` and returns its handle.
	///
	/// The handle index is the number of values registered before this one.
	/// When the backing storage is full its capacity becomes
	/// `max(MIN_CAPACITY, 2 * capacity)`.
	pub fn register(
		&mut self,
		value: U::Value,
		label: Option<&str>,
	) -> Result<Handle<U>, RegistryError> {
		let Storage::Open(entries) = &mut self.storage else {
			return Err(RegistryError::Sealed {
				tag: self.tag.clone(),
			});
		};
		let Some(index) = u32::try_from(entries.len()).ok().filter(|&i| i < u32::MAX) else {
			return Err(RegistryError::Exhausted {
				tag: self.tag.clone(),
			});
		};

		if entries.len() == entries.capacity() {
			let old_capacity = entries.capacity();
			let target = MIN_CAPACITY.max(old_capacity.saturating_mul(2));
			entries.reserve_exact(target - entries.len());
			tracing::debug!(
				universe = &*self.tag,
				old_capacity,
				new_capacity = entries.capacity(),
				"universe storage grew"
			);
		}

		let handle = Handle::from_raw(index);
		let label: Option<Box<str>> = label.map(Box::from);
		if let Some(label) = &label {
			if self.by_label.contains_key(label) {
				tracing::warn!(
					universe = &*self.tag,
					label = &**label,
					index,
					"duplicate label; lookup keeps the first registration"
				);
			} else {
				self.by_label.insert(label.clone(), handle);
			}
		}
		tracing::trace!(universe = &*self.tag, index, label = label.as_deref(), "registered");
		entries.push(Entry { value, label });
		Ok(handle)
	}

	/// Freezes the registry. Sealing twice is an error.
	pub fn seal(&mut self) -> Result<(), RegistryError> {
		let Storage::Open(entries) = &mut self.storage else {
			return Err(RegistryError::Sealed {
				tag: self.tag.clone(),
			});
		};
		let entries = core::mem::take(entries).into_boxed_slice();
		tracing::debug!(universe = &*self.tag, size = entries.len(), "universe sealed");
		self.storage = Storage::Sealed(entries);
		self.by_label.shrink_to_fit();
		Ok(())
	}

	/// Returns the diagnostic tag given to [`Registry::declare`].
	#[inline]
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the number of registered values.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries().len()
	}

	/// Returns true if nothing has been registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries().is_empty()
	}

	/// Returns the number of entries the storage holds without growing.
	///
	/// Equal to [`Registry::len`] once sealed.
	pub fn capacity(&self) -> usize {
		match &self.storage {
			Storage::Open(entries) => entries.capacity(),
			Storage::Sealed(entries) => entries.len(),
		}
	}

	#[inline]
	pub fn is_sealed(&self) -> bool {
		matches!(self.storage, Storage::Sealed(_))
	}

	/// Fails with [`RegistryError::NotSealed`] while the registry is open.
	pub fn ensure_sealed(&self) -> Result<(), RegistryError> {
		if self.is_sealed() {
			Ok(())
		} else {
			Err(RegistryError::NotSealed {
				tag: self.tag.clone(),
			})
		}
	}

	/// Returns the index of `handle` if it lies in `[0, len)`.
	#[inline]
	pub fn check(&self, handle: Handle<U>) -> Result<usize, RegistryError> {
		let index = handle.index();
		let size = self.len();
		if index < size {
			Ok(index)
		} else {
			Err(RegistryError::IndexOutOfRange {
				tag: self.tag.clone(),
				index,
				size,
			})
		}
	}

	/// Converts a raw index into a handle, checking the range.
	pub fn handle(&self, index: usize) -> Result<Handle<U>, RegistryError> {
		match u32::try_from(index) {
			Ok(raw) if index < self.len() => Ok(Handle::from_raw(raw)),
			_ => Err(RegistryError::IndexOutOfRange {
				tag: self.tag.clone(),
				index,
				size: self.len(),
			}),
		}
	}

	/// Returns the value registered under `handle`.
	pub fn value(&self, handle: Handle<U>) -> Result<&U::Value, RegistryError> {
		let index = self.check(handle)?;
		Ok(&self.entries()[index].value)
	}

	/// Returns the label registered under `handle`, if one was given.
	pub fn label(&self, handle: Handle<U>) -> Result<Option<&str>, RegistryError> {
		let index = self.check(handle)?;
		Ok(self.entries()[index].label.as_deref())
	}

	/// Finds the first handle registered with `label`.
	pub fn find(&self, label: &str) -> Option<Handle<U>> {
		self.by_label.get(label).copied()
	}

	/// Returns every issued handle in index order.
	pub fn handles(&self) -> Handles<U> {
		Handles {
			range: 0..self.len() as u32,
			_universe: core::marker::PhantomData,
		}
	}

	/// Returns `(handle, value)` pairs in index order.
	pub fn iter(&self) -> Iter<'_, U> {
		Iter {
			inner: self.entries().iter().enumerate(),
		}
	}

	fn entries(&self) -> &[Entry<U::Value>] {
		match &self.storage {
			Storage::Open(entries) => entries,
			Storage::Sealed(entries) => entries,
		}
	}
}

impl<U: Universe> fmt::Debug for Registry<U> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("tag", &self.tag)
			.field("len", &self.len())
			.field("sealed", &self.is_sealed())
			.finish()
	}
}

impl<'a, U: Universe> IntoIterator for &'a Registry<U> {
	type Item = (Handle<U>, &'a U::Value);
	type IntoIter = Iter<'a, U>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the handles of a registry. See [`Registry::handles`].
pub struct Handles<U: Universe> {
	range: Range<u32>,
	_universe: core::marker::PhantomData<fn() -> U>,
}

impl<U: Universe> Iterator for Handles<U> {
	type Item = Handle<U>;

	fn next(&mut self) -> Option<Self::Item> {
		self.range.next().map(Handle::from_raw)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.range.size_hint()
	}
}

impl<U: Universe> DoubleEndedIterator for Handles<U> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.range.next_back().map(Handle::from_raw)
	}
}

impl<U: Universe> ExactSizeIterator for Handles<U> {}

/// Iterator over `(handle, value)` pairs. See [`Registry::iter`].
pub struct Iter<'a, U: Universe> {
	inner: Enumerate<slice::Iter<'a, Entry<U::Value>>>,
}

impl<'a, U: Universe> Iterator for Iter<'a, U> {
	type Item = (Handle<U>, &'a U::Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|(index, entry)| (Handle::from_raw(index as u32), &entry.value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<U: Universe> ExactSizeIterator for Iter<'_, U> {}
