use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::Universe;

/// Dense index of a value registered in a universe `U`.
///
/// A handle is a bare `u32`; the universe lives only in the type. It does not
/// know which registry instance issued it, so value and label lookups take the
/// handle together with its [`Registry`](crate::Registry), and range checks
/// happen there.
pub struct Handle<U: Universe> {
	index: u32,
	_universe: PhantomData<fn() -> U>,
}

impl<U: Universe> Handle<U> {
	/// Builds a handle from a raw index without any range check.
	///
	/// Lookups through [`Registry`](crate::Registry) still validate the index.
	#[inline]
	pub const fn from_raw(index: u32) -> Self {
		Self {
			index,
			_universe: PhantomData,
		}
	}

	/// Returns the index as a `u32`.
	#[inline]
	pub const fn as_u32(self) -> u32 {
		self.index
	}

	/// Returns the index, which is also the bit position in every set.
	#[inline]
	pub const fn index(self) -> usize {
		self.index as usize
	}
}

impl<U: Universe> Clone for Handle<U> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<U: Universe> Copy for Handle<U> {}

impl<U: Universe> PartialEq for Handle<U> {
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index
	}
}

impl<U: Universe> Eq for Handle<U> {}

impl<U: Universe> PartialOrd for Handle<U> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<U: Universe> Ord for Handle<U> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.index.cmp(&other.index)
	}
}

impl<U: Universe> Hash for Handle<U> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.index.hash(state);
	}
}

impl<U: Universe> fmt::Debug for Handle<U> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Handle").field(&self.index).finish()
	}
}

#[cfg(feature = "serde")]
impl<U: Universe> serde::Serialize for Handle<U> {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u32(self.index)
	}
}

#[cfg(feature = "serde")]
impl<'de, U: Universe> serde::Deserialize<'de> for Handle<U> {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		u32::deserialize(deserializer).map(Self::from_raw)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	crate::declare_universe! {
		Digits => u8;
		Letters => char;
	}

	#[test]
	fn handle_is_one_word_fraction() {
		assert_eq!(size_of::<Handle<Digits>>(), size_of::<u32>());
		assert_eq!(size_of::<Option<Handle<Letters>>>(), 2 * size_of::<u32>());
	}

	#[test]
	fn ordering_follows_index() {
		let a = Handle::<Digits>::from_raw(1);
		let b = Handle::<Digits>::from_raw(7);
		assert!(a < b);
		assert_eq!(a, Handle::from_raw(1));
		assert_eq!(format!("{b:?}"), "Handle(7)");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serializes_as_bare_index() {
		let h = Handle::<Letters>::from_raw(3);
		let json = serde_json::to_string(&h).unwrap();
		assert_eq!(json, "3");
		let back: Handle<Letters> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, h);
	}
}
