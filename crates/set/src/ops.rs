//! Operator sugar over the checked set algebra.
//!
//! The binary operators panic when the operands belong to different
//! registries. Call the [`FinSet`] methods directly to get a [`SetError`]
//! instead.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign};

use finset_universe::Universe;

use crate::{FinSet, SetError};

#[track_caller]
fn unwrap_algebra<T>(result: Result<T, SetError>) -> T {
	match result {
		Ok(value) => value,
		Err(e) => panic!("set algebra: {e}"),
	}
}

impl<U: Universe> BitOr for &FinSet<U> {
	type Output = FinSet<U>;

	/// # Panics
	///
	/// If the operands belong to different registries.
	fn bitor(self, rhs: Self) -> FinSet<U> {
		unwrap_algebra(self.union(rhs))
	}
}

impl<U: Universe> BitAnd for &FinSet<U> {
	type Output = FinSet<U>;

	/// # Panics
	///
	/// If the operands belong to different registries.
	fn bitand(self, rhs: Self) -> FinSet<U> {
		unwrap_algebra(self.intersection(rhs))
	}
}

impl<U: Universe> Sub for &FinSet<U> {
	type Output = FinSet<U>;

	/// # Panics
	///
	/// If the operands belong to different registries.
	fn sub(self, rhs: Self) -> FinSet<U> {
		unwrap_algebra(self.difference(rhs))
	}
}

impl<U: Universe> Not for &FinSet<U> {
	type Output = FinSet<U>;

	fn not(self) -> FinSet<U> {
		self.complement()
	}
}

impl<U: Universe> Not for FinSet<U> {
	type Output = FinSet<U>;

	fn not(self) -> FinSet<U> {
		self.complement()
	}
}

impl<U: Universe> BitOrAssign<&FinSet<U>> for FinSet<U> {
	fn bitor_assign(&mut self, rhs: &FinSet<U>) {
		unwrap_algebra(self.union_with(rhs));
	}
}

impl<U: Universe> BitAndAssign<&FinSet<U>> for FinSet<U> {
	fn bitand_assign(&mut self, rhs: &FinSet<U>) {
		unwrap_algebra(self.intersect_with(rhs));
	}
}

impl<U: Universe> SubAssign<&FinSet<U>> for FinSet<U> {
	fn sub_assign(&mut self, rhs: &FinSet<U>) {
		unwrap_algebra(self.subtract(rhs));
	}
}
