//! Field-by-field resolution of build and packaging options.

use crate::asset_paths::{PathClassifier, normalize_assets};
use crate::error::NormalizeResult;
use crate::models::{
  FileReplacement, NormalizedBuildConfig, NormalizedPackagingConfig, PackagingConfig, Passthrough,
  RawBuildConfig, RootScoped,
};
use crate::path_resolver::to_absolute;

/// Keys owned by the attached root context; passthrough copies are discarded.
const ROOT_CONTEXT_KEYS: [&str; 2] = ["root", "sourceRoot"];

/// Resolve every path of `options` against `root` and attach the root context.
///
/// `webpackConfig` is only resolved when set to a non-empty value; otherwise it is passed
/// through as declared. Options the normaliser does not know are forwarded unchanged, except
/// `root` and `sourceRoot`, which always come from the arguments.
pub fn normalize_build_options<C: PathClassifier>(
  options: RawBuildConfig,
  root: &str,
  source_root: &str,
  classifier: &C,
) -> NormalizeResult<NormalizedBuildConfig> {
  let RawBuildConfig {
    main,
    output_path,
    ts_config,
    file_replacements,
    assets,
    webpack_config,
    mut extra,
  } = options;
  strip_root_context(&mut extra);

  Ok(NormalizedBuildConfig {
    root: root.to_string(),
    source_root: source_root.to_string(),
    main: to_absolute(root, &main),
    output_path: to_absolute(root, &output_path),
    ts_config: to_absolute(root, &ts_config),
    file_replacements: normalize_file_replacements(root, file_replacements),
    assets: normalize_assets(assets, root, source_root, classifier)?,
    webpack_config: webpack_config.map(|config| {
      if config.is_empty() {
        config
      } else {
        to_absolute(root, &config)
      }
    }),
    extra,
  })
}

/// Attach `root` and `sourceRoot` to packaging options, leaving every other key untouched.
pub fn normalize_packaging_options(
  mut options: PackagingConfig,
  root: &str,
  source_root: &str,
) -> NormalizedPackagingConfig {
  strip_root_context(&mut options);
  RootScoped {
    root: root.to_string(),
    source_root: source_root.to_string(),
    options,
  }
}

fn strip_root_context(options: &mut Passthrough) {
  for key in ROOT_CONTEXT_KEYS {
    options.remove(key);
  }
}

/// Resolve both sides of every replacement, keeping order.
pub fn normalize_file_replacements(
  root: &str,
  replacements: Vec<FileReplacement>,
) -> Vec<FileReplacement> {
  replacements
    .into_iter()
    .map(|replacement| FileReplacement {
      replace: to_absolute(root, &replacement.replace),
      with: to_absolute(root, &replacement.with),
    })
    .collect()
}
