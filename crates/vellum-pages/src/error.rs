//! Serialization error types.

/// Result type for node serialization.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while serializing a node tree.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
	/// An element carries both explicit children and raw inner HTML.
	#[error("<{tag}> can only set one of `children` or raw inner HTML")]
	ConflictingContent {
		/// Tag of the offending element.
		tag: String,
	},
}
