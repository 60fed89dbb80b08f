//! Normalisation of the `assets` option into uniform `{ input, output, glob }` entries.
//!
//! Plain path declarations and structured declarations follow separate rules, kept in their
//! own submodules so each can be tested on its own. The only filesystem access of the whole
//! pipeline goes through [`PathClassifier`], which tests replace with an in-memory fake.

mod classify;
mod path_string;
mod structured;

pub use classify::{FsClassifier, PathClassifier, PathKind};
pub use path_string::{DIRECTORY_GLOB, normalize_path_asset};
pub use structured::normalize_structured_asset;

use crate::error::NormalizeResult;
use crate::models::{AssetDeclaration, NormalizedAsset};

/// Normalise every asset declaration, keeping declaration order.
///
/// The first failing declaration aborts the whole call.
pub fn normalize_assets<C: PathClassifier>(
  assets: Vec<AssetDeclaration>,
  root: &str,
  source_root: &str,
  classifier: &C,
) -> NormalizeResult<Vec<NormalizedAsset>> {
  assets
    .into_iter()
    .map(|asset| match asset {
      AssetDeclaration::Path(path) => normalize_path_asset(&path, root, source_root, classifier),
      AssetDeclaration::Structured(asset) => normalize_structured_asset(asset, root),
    })
    .collect()
}
