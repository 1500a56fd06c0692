use thiserror::Error;

/// Result alias for sortinator operations.
pub type Result<T> = std::result::Result<T, SortinatorError>;

/// Reasons a sortinator rejects a call.
///
/// A rejected call never mutates the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortinatorError {
	/// `add` was called during the extracting phase.
	#[error("not in an accepting state")]
	NotAccepting,
	/// `remove_smallest` was called during the accepting phase.
	#[error("cannot remove while the sortinator is accepting new elements")]
	StillAccepting,
	/// `remove_smallest` was called on an empty sortinator.
	#[error("sortinator is empty")]
	Empty,
}
