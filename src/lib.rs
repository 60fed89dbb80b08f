#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod executor;
pub mod models;
pub mod normalize;
pub mod path_resolver;
pub mod workspace;

pub use asset_paths::{FsClassifier, PathClassifier, PathKind, normalize_assets};
pub use error::{ConstraintViolation, NormalizeError, NormalizeResult};
pub use executor::{BuildExecutor, BuildStatus, ExecutorContext, PreparedBuild};
pub use models::{
  AssetDeclaration, FileReplacement, NormalizedAsset, NormalizedBuildConfig,
  NormalizedPackagingConfig, PackagingConfig, RawBuildConfig, RootScoped, StructuredAsset,
};
pub use normalize::{
  normalize_build_options, normalize_file_replacements, normalize_packaging_options,
};
pub use workspace::{ProjectDescriptor, SourceRootLookup, WorkspaceDescriptor};
