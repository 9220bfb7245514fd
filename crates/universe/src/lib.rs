//! Sealed registries for finite universes.
//!
//! A universe is a finite, enumerable domain known up front: the members of a
//! symbol table, the flags of a configuration, the states of a lattice. This
//! crate assigns each member a dense [`Handle`] so that sets over the universe
//! can be stored as bit vectors (see the `finset` crate).
//!
//! # Mental Model
//!
//! 1. **Declare:** [`declare_universe!`] introduces a zero-sized marker type
//!    naming the universe and its value type. [`Registry::declare`] creates an
//!    empty, open registry for that marker.
//! 2. **Register:** [`Registry::register`] appends a value (and optional label)
//!    and returns its handle. The handle index is the registration order.
//! 3. **Seal:** [`Registry::seal`] freezes the registry. Its size never changes
//!    again, which is what lets every set over the universe share one bit length.
//! 4. **Look up:** [`Registry::value`] and [`Registry::label`] resolve a handle
//!    presented together with the registry that issued it.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Universe`] | Marker trait tying a handle to its universe at the type level. |
//! | [`Handle`] | Dense `u32` index of one registered value. |
//! | [`Registry`] | Open-then-sealed table of values and labels. |
//! | [`RegistryError`] | Lifecycle and range violations. |
//!
//! # Invariants
//!
//! - Handle indices equal registration order and never change.
//!   - Enforced in: [`Registry::register`] (append-only, growth never renumbers).
//!   - Tested by: `registry::tests::prop_index_stability`
//! - A sealed registry never grows and holds exactly `len` entries.
//!   - Enforced in: [`Registry::seal`].
//!   - Tested by: `registry::tests::test_seal_is_final`
//! - Handles of different universes never mix.
//!   - Enforced in: the type parameter of [`Handle`]; no runtime cost.

mod error;
mod handle;
mod registry;
mod universe;

pub use error::RegistryError;
pub use handle::Handle;
pub use registry::{Handles, Iter, MIN_CAPACITY, Registry};
pub use universe::Universe;
