use finset_universe::RegistryError;

/// Set engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// A binary operation received sets built over different registries.
	#[error("universe mismatch: `{left}` and `{right}` are different registries")]
	UniverseMismatch { left: Box<str>, right: Box<str> },
}
