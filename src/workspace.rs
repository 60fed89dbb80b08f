//! Workspace descriptor and the source-root lookup built on it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{NormalizeError, NormalizeResult};
use crate::models::Passthrough;

/// Resolves the declared source root of a project.
pub trait SourceRootLookup {
  /// Return the project's source root, or [`NormalizeError::MissingConfiguration`] when the
  /// project declares none.
  fn source_root(&self, project: &str) -> NormalizeResult<String>;
}

/// Projects declared by a workspace, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkspaceDescriptor {
  /// Project configurations keyed by project name.
  #[serde(default)]
  pub projects: BTreeMap<String, ProjectDescriptor>,
}

/// A single project entry of the workspace descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
  /// Project directory relative to the workspace root.
  #[serde(default)]
  pub root: String,
  /// Directory holding the project's authored sources.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_root: Option<String>,
  /// Remaining project settings (targets, tags, ...).
  #[serde(flatten)]
  pub extra: Passthrough,
}

impl WorkspaceDescriptor {
  /// Look up a project by name.
  pub fn project(&self, name: &str) -> Option<&ProjectDescriptor> {
    self.projects.get(name)
  }
}

impl SourceRootLookup for WorkspaceDescriptor {
  fn source_root(&self, project: &str) -> NormalizeResult<String> {
    self
      .project(project)
      .and_then(|descriptor| descriptor.source_root.as_deref())
      // An empty sourceRoot is as good as none.
      .filter(|source_root| !source_root.is_empty())
      .map(str::to_string)
      .ok_or_else(|| NormalizeError::MissingConfiguration {
        project: project.to_string(),
      })
  }
}
