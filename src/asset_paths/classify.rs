use std::fs;
use std::io;
use std::path::Path;

/// What a resolved asset path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
  /// A directory whose whole tree is copied.
  Directory,
  /// Anything else; only the file itself is copied.
  File,
}

/// Capability answering the single filesystem question asked during asset normalisation.
pub trait PathClassifier {
  /// Classify `path`, following symbolic links.
  fn classify(&self, path: &Path) -> io::Result<PathKind>;
}

/// Classifier backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsClassifier;

impl PathClassifier for FsClassifier {
  fn classify(&self, path: &Path) -> io::Result<PathKind> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
      Ok(PathKind::Directory)
    } else {
      Ok(PathKind::File)
    }
  }
}

impl<C: PathClassifier + ?Sized> PathClassifier for &C {
  fn classify(&self, path: &Path) -> io::Result<PathKind> {
    (**self).classify(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn distinguishes_files_from_directories() -> io::Result<()> {
    let temp = tempdir()?;
    let dir = temp.path().join("assets");
    fs::create_dir_all(&dir)?;
    let file = dir.join("logo.png");
    fs::write(&file, b"png")?;

    assert_eq!(FsClassifier.classify(&dir)?, PathKind::Directory);
    assert_eq!(FsClassifier.classify(&file)?, PathKind::File);
    Ok(())
  }

  #[test]
  fn propagates_missing_paths() {
    let temp = tempdir().unwrap();
    let err = FsClassifier
      .classify(&temp.path().join("missing"))
      .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }

  #[cfg(unix)]
  #[test]
  fn follows_symbolic_links() -> io::Result<()> {
    let temp = tempdir()?;
    let target = temp.path().join("real");
    fs::create_dir_all(&target)?;
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(&target, &link)?;

    assert_eq!(FsClassifier.classify(&link)?, PathKind::Directory);
    Ok(())
  }
}
