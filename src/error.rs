//! Error taxonomy shared by the normalisers and the source-root lookup.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Failures that abort a normalisation call. There are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
  /// An asset declaration violates a placement constraint.
  #[error(transparent)]
  ConstraintViolation(#[from] ConstraintViolation),

  /// The workspace does not declare a source root for the project.
  #[error("{project} does not have a sourceRoot. Please define one.")]
  MissingConfiguration {
    /// Project identifier that was looked up.
    project: String,
  },

  /// The file/directory classification of an asset path failed.
  #[error("failed to inspect {}: {source}", path.display())]
  Io {
    /// Path that was being classified.
    path: PathBuf,
    /// Underlying filesystem error.
    source: std::io::Error,
  },
}

/// Placement rules an asset declaration can break.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
  /// A plain asset path resolved outside the project's source root.
  #[error("The {path} asset path must start with the project source root: {source_root}")]
  OutsideSourceRoot {
    /// Resolved absolute asset path.
    path: String,
    /// Source root as declared by the project.
    source_root: String,
  },

  /// A structured asset declared an output above the output root.
  #[error("An asset cannot be written to a location outside of the output path: {output}")]
  OutputEscapesOutputRoot {
    /// Output path as declared by the author.
    output: String,
  },
}

impl NormalizeError {
  /// Returns the placement violation when this error is one.
  pub fn constraint_violation(&self) -> Option<&ConstraintViolation> {
    match self {
      Self::ConstraintViolation(violation) => Some(violation),
      _ => None,
    }
  }
}
