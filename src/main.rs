//! Command-line wrapper normalising a project's build options.
//!
//! Usage: build-options --workspace <FILE> --project <NAME> --options <FILE>

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use build_options::config::{load_build_options, load_packaging_options};
use build_options::{BuildExecutor, ExecutorContext, FsClassifier, WorkspaceDescriptor};

/// Normalise build executor options into absolute, bundler-ready configuration
#[derive(Parser, Debug)]
#[command(name = "build-options")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Workspace descriptor declaring the project
  #[arg(short, long, default_value = "workspace.json")]
  workspace: PathBuf,

  /// Project to build
  #[arg(short, long)]
  project: String,

  /// Raw build options JSON
  #[arg(short, long)]
  options: PathBuf,

  /// Packaging options JSON to scope with the project's root context
  #[arg(long)]
  packaging: Option<PathBuf>,

  /// Workspace root (defaults to the directory holding the workspace descriptor)
  #[arg(long)]
  root: Option<PathBuf>,

  /// Report progress on stderr
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("[ERROR] {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<()> {
  let workspace = WorkspaceDescriptor::from_path(&cli.workspace)?;
  let root = workspace_root(&cli.workspace, cli.root.as_deref())?;
  let root = root.to_string_lossy();
  if cli.verbose {
    eprintln!("[INFO] workspace root: {root}");
  }

  let options = load_build_options(&cli.options)?;
  let packaging = cli
    .packaging
    .as_deref()
    .map(load_packaging_options)
    .transpose()?;

  let mut executor = BuildExecutor::new(ExecutorContext {
    root: &root,
    project_name: &cli.project,
    workspace: &workspace,
  });
  let prepared = executor
    .prepare(options, packaging, &FsClassifier)
    .with_context(|| format!("failed to normalise options for {}", cli.project))?;

  if cli.verbose {
    eprintln!(
      "[INFO] {}: {} asset(s), source root {}",
      cli.project,
      prepared.build.assets.len(),
      prepared.build.source_root
    );
  }

  println!("{}", serde_json::to_string_pretty(&prepared)?);
  Ok(())
}

/// Absolute workspace root: the explicit `--root`, else the workspace descriptor's directory.
fn workspace_root(workspace: &Path, root: Option<&Path>) -> Result<PathBuf> {
  let root = match root {
    Some(root) => root.to_path_buf(),
    None => workspace
      .parent()
      .filter(|parent| !parent.as_os_str().is_empty())
      .unwrap_or(Path::new("."))
      .to_path_buf(),
  };
  std::path::absolute(&root)
    .with_context(|| format!("failed to resolve workspace root {}", root.display()))
}
