//! Bit-vector sets over sealed finite universes.
//!
//! A [`FinSet`] stores membership of the values of a sealed
//! [`Registry`] as one bit per registered value, indexed by [`Handle`].
//! The registry is shared through an `Arc`; every set built over it has the
//! same bit length.
//!
//! # Mutation Styles
//!
//! - **Imperative:** [`FinSet::set_bit`], [`FinSet::insert`], [`FinSet::union_with`]
//!   and friends mutate in place in O(1) or O(n / 64).
//! - **Persistent:** [`FinSet::add`], [`FinSet::remove`] and the algebra
//!   ([`FinSet::union`], [`FinSet::intersection`], [`FinSet::difference`],
//!   [`FinSet::complement`]) return a new set and never touch their operands.
//!   Sets that are only used persistently can be shared freely across threads.
//!
//! # Universe Identity
//!
//! Handles and sets of different universe markers cannot be mixed; that is a
//! type error. Two registries declared with the same marker are told apart at
//! runtime by `Arc` identity, and binary operations across them fail with
//! [`SetError::UniverseMismatch`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use finset::{FinSet, Registry, declare_universe};
//!
//! declare_universe! {
//! 	Letter => char;
//! }
//!
//! let mut letters = Registry::<Letter>::declare("letters");
//! let a = letters.register('A', Some("A")).unwrap();
//! let b = letters.register('B', Some("B")).unwrap();
//! letters.seal().unwrap();
//! let letters = Arc::new(letters);
//!
//! let only_a = FinSet::empty(&letters).unwrap().add(a).unwrap();
//! let not_a = only_a.complement();
//! assert!(not_a.mem(b).unwrap());
//! assert_eq!(format!("{not_a:?}"), "{B}");
//! ```

mod error;
mod iter;
mod ops;
mod set;

pub use error::SetError;
pub use finset_universe::{Handle, Registry, RegistryError, Universe, declare_universe};
pub use iter::{Iter, Values};
pub use set::{DisplaySet, FinSet};
