use std::path::Path;

use super::classify::{PathClassifier, PathKind};
use crate::error::{ConstraintViolation, NormalizeError, NormalizeResult};
use crate::models::{NormalizedAsset, Passthrough};
use crate::path_resolver::{
  base_name, normalize_separators, parent_directory, relative_to, starts_with_root, to_absolute,
};

/// Glob copying a directory's whole tree.
pub const DIRECTORY_GLOB: &str = "**/*";

/// Normalise a plain path asset declaration.
///
/// The path must resolve inside the project's source root. Directories are copied whole;
/// a single file is expressed as its parent directory plus a glob matching only its name.
/// `output` keeps the source-root-relative layout of whatever is copied.
pub fn normalize_path_asset<C: PathClassifier>(
  asset: &str,
  root: &str,
  source_root: &str,
  classifier: &C,
) -> NormalizeResult<NormalizedAsset> {
  let asset_path = normalize_separators(asset);
  let resolved_asset_path = to_absolute(root, &asset_path);
  let resolved_source_root = to_absolute(root, source_root);

  if !starts_with_root(&resolved_asset_path, &resolved_source_root) {
    return Err(
      ConstraintViolation::OutsideSourceRoot {
        path: resolved_asset_path,
        source_root: source_root.to_string(),
      }
      .into(),
    );
  }

  let kind = classifier
    .classify(Path::new(&resolved_asset_path))
    .map_err(|source| NormalizeError::Io {
      path: resolved_asset_path.clone().into(),
      source,
    })?;

  let (input, glob) = match kind {
    PathKind::Directory => (resolved_asset_path, DIRECTORY_GLOB.to_string()),
    PathKind::File => (
      parent_directory(&resolved_asset_path),
      base_name(&resolved_asset_path),
    ),
  };
  let output = relative_to(&resolved_source_root, &to_absolute(root, &input));

  Ok(NormalizedAsset {
    input,
    output,
    glob: Some(glob),
    extra: Passthrough::new(),
  })
}
