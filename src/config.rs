//! Loaders for the JSON files feeding the executor.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{PackagingConfig, RawBuildConfig};
use crate::workspace::WorkspaceDescriptor;

/// File name searched for by [`WorkspaceDescriptor::discover`].
pub const DEFAULT_WORKSPACE_FILE: &str = "workspace.json";

impl WorkspaceDescriptor {
  /// Read the workspace descriptor from `workspace.json` in the provided directory.
  pub fn discover(workspace_dir: &Path) -> Result<Self> {
    Self::from_path(&workspace_dir.join(DEFAULT_WORKSPACE_FILE))
  }

  /// Read the workspace descriptor from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    read_json(path, "workspace descriptor")
  }
}

/// Load raw build options from a JSON file.
pub fn load_build_options(path: &Path) -> Result<RawBuildConfig> {
  read_json(path, "build options")
}

/// Load packaging options from a JSON file.
pub fn load_packaging_options(path: &Path) -> Result<PackagingConfig> {
  read_json(path, "packaging options")
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("{what} not found at {}", path.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("failed to parse {what} JSON at {}", path.display()))
}
