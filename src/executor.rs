//! Executor-facing orchestration: look up the source root, then normalise every option set.

use serde::Serialize;

use crate::asset_paths::PathClassifier;
use crate::error::NormalizeResult;
use crate::models::{
  NormalizedBuildConfig, NormalizedPackagingConfig, PackagingConfig, RawBuildConfig,
};
use crate::normalize::{normalize_build_options, normalize_packaging_options};
use crate::workspace::SourceRootLookup;

/// Status reported back to the host running the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStatus {
  /// Nothing has been prepared yet.
  #[default]
  Pending,
  /// Options were normalised successfully.
  Ready,
  /// Preparation failed; the build must abort.
  Error,
}

/// What the host tells the executor about the project being built.
pub struct ExecutorContext<'a> {
  /// Absolute workspace root.
  pub root: &'a str,
  /// Name of the project being built.
  pub project_name: &'a str,
  /// Source of the project's declared source root.
  pub workspace: &'a dyn SourceRootLookup,
}

/// Fully normalised options handed to the bundler and packager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedBuild {
  /// Normalised build options.
  pub build: NormalizedBuildConfig,
  /// Packaging options with root context, when packaging was requested.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub packaging: Option<NormalizedPackagingConfig>,
}

/// Prepares build and packaging options for a single executor invocation.
pub struct BuildExecutor<'a> {
  context: ExecutorContext<'a>,
  status: BuildStatus,
}

impl<'a> BuildExecutor<'a> {
  /// Create an executor for the provided context.
  pub fn new(context: ExecutorContext<'a>) -> Self {
    Self {
      context,
      status: BuildStatus::Pending,
    }
  }

  /// Status after the last call to [`BuildExecutor::prepare`].
  pub fn status(&self) -> BuildStatus {
    self.status
  }

  /// Resolve the project's source root and normalise the provided options against it.
  ///
  /// Any failure marks the executor as [`BuildStatus::Error`] and is returned unchanged.
  pub fn prepare<C: PathClassifier>(
    &mut self,
    options: RawBuildConfig,
    packaging: Option<PackagingConfig>,
    classifier: &C,
  ) -> NormalizeResult<PreparedBuild> {
    let result = self.normalize(options, packaging, classifier);
    self.status = if result.is_ok() {
      BuildStatus::Ready
    } else {
      BuildStatus::Error
    };
    result
  }

  fn normalize<C: PathClassifier>(
    &self,
    options: RawBuildConfig,
    packaging: Option<PackagingConfig>,
    classifier: &C,
  ) -> NormalizeResult<PreparedBuild> {
    let root = self.context.root;
    let source_root = self.context.workspace.source_root(self.context.project_name)?;

    let build = normalize_build_options(options, root, &source_root, classifier)?;
    let packaging =
      packaging.map(|packaging| normalize_packaging_options(packaging, root, &source_root));

    Ok(PreparedBuild { build, packaging })
  }
}
