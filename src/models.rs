//! Data structures describing raw and normalised build executor options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields the normaliser does not interpret, preserved verbatim.
pub type Passthrough = Map<String, Value>;

/// Build options as authored by the user, with paths relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBuildConfig {
  /// Entry module of the application.
  pub main: String,
  /// Directory receiving the build output.
  pub output_path: String,
  /// TypeScript configuration used for compilation.
  pub ts_config: String,
  /// Source files swapped for alternatives at build time.
  #[serde(default)]
  pub file_replacements: Vec<FileReplacement>,
  /// Asset declarations copied into the output.
  #[serde(default)]
  pub assets: Vec<AssetDeclaration>,
  /// Optional custom webpack configuration.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub webpack_config: Option<String>,
  /// Any other option, forwarded untouched.
  #[serde(flatten)]
  pub extra: Passthrough,
}

/// A `{ replace, with }` pair swapping one source file for another.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileReplacement {
  /// File being replaced.
  pub replace: String,
  /// File used in its place.
  pub with: String,
}

/// One entry of the `assets` option.
///
/// Plain strings are paths under the project's source root, objects carry an explicit
/// input and output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AssetDeclaration {
  /// File or directory relative to the workspace root, required to lie in the source root.
  Path(String),
  /// Explicit input/output mapping with optional metadata.
  Structured(StructuredAsset),
}

/// Structured asset declaration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StructuredAsset {
  /// Input directory relative to the workspace root.
  pub input: String,
  /// Destination relative to the output root.
  pub output: String,
  /// Optional glob selecting files below `input`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub glob: Option<String>,
  /// Other metadata (`ignore`, ...) forwarded to the copy step.
  #[serde(flatten)]
  pub extra: Passthrough,
}

/// Uniform asset entry consumed by the downstream copy step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizedAsset {
  /// Absolute directory the copy step reads from.
  pub input: String,
  /// Destination relative to the output root, without a leading separator.
  pub output: String,
  /// Pattern selecting files below `input`. Always set for plain path declarations.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub glob: Option<String>,
  /// Metadata carried over from a structured declaration.
  #[serde(flatten)]
  pub extra: Passthrough,
}

/// Build options with every path resolved and the root context attached.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBuildConfig {
  /// Workspace root every relative path was resolved against.
  pub root: String,
  /// Project source root as declared in the workspace.
  pub source_root: String,
  /// Absolute entry module.
  pub main: String,
  /// Absolute output directory.
  pub output_path: String,
  /// Absolute TypeScript configuration.
  pub ts_config: String,
  /// File replacements with both sides absolute.
  pub file_replacements: Vec<FileReplacement>,
  /// Normalised assets in declaration order.
  pub assets: Vec<NormalizedAsset>,
  /// Absolute webpack configuration, when one was declared.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub webpack_config: Option<String>,
  /// Options forwarded from the raw configuration.
  #[serde(flatten)]
  pub extra: Passthrough,
}

/// Any options value decorated with the root context of the project it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootScoped<T> {
  /// Workspace root.
  pub root: String,
  /// Project source root.
  pub source_root: String,
  /// Wrapped options, serialised alongside the root context.
  #[serde(flatten)]
  pub options: T,
}

/// Packaging options are opaque to the normaliser.
pub type PackagingConfig = Passthrough;

/// Packaging options with `root` and `sourceRoot` attached.
pub type NormalizedPackagingConfig = RootScoped<PackagingConfig>;
