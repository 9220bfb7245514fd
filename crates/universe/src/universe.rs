/// Type-level identity of a finite universe.
///
/// Implementors are zero-sized markers, usually uninhabited enums produced by
/// [`declare_universe!`](crate::declare_universe). The marker never exists at
/// runtime; it only parameterizes [`Handle`](crate::Handle) and
/// [`Registry`](crate::Registry) so that handles from different universes
/// cannot be combined.
pub trait Universe: 'static {
	/// Domain values stored in the registry. Treated as opaque.
	type Value;
}

/// Declares a universe marker type.
///
/// ```
/// use finset_universe::{Registry, declare_universe};
///
/// declare_universe! {
/// 	/// Primary colours.
/// 	pub Colour => &'static str;
/// }
///
/// let mut colours = Registry::<Colour>::declare("colour");
/// let red = colours.register("red", Some("R")).unwrap();
/// assert_eq!(red.index(), 0);
/// ```
#[macro_export]
macro_rules! declare_universe {
	($($(#[$attr:meta])* $vis:vis $name:ident => $value:ty;)+) => {
		$(
			$(#[$attr])*
			#[derive(Debug)]
			$vis enum $name {}

			impl $crate::Universe for $name {
				type Value = $value;
			}
		)+
	};
}
