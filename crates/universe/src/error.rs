/// Lifecycle and range violations on a [`Registry`](crate::Registry).
///
/// Every variant is a programming error. Nothing here is transient, so callers
/// should surface these rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// `register` or `seal` called on a sealed registry.
	#[error("universe `{tag}` is sealed")]
	Sealed { tag: Box<str> },

	/// A sealed registry was required but this one is still open.
	#[error("universe `{tag}` is not sealed yet")]
	NotSealed { tag: Box<str> },

	/// The universe already holds `u32::MAX` entries.
	#[error("universe `{tag}` has no handle indices left")]
	Exhausted { tag: Box<str> },

	/// A handle index outside `[0, size)`.
	#[error("index {index} out of range for universe `{tag}` of size {size}")]
	IndexOutOfRange {
		tag: Box<str>,
		index: usize,
		size: usize,
	},
}
