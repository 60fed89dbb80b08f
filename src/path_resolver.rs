//! Lexical path arithmetic shared by every normaliser in the crate.
//!
//! Paths are handled as strings using forward slashes as the internal separator so that the
//! normalised configuration is identical on every platform. None of the helpers touch the
//! filesystem, and malformed input is passed through rather than rejected.

/// Separator used for every path emitted by the crate.
pub const SEPARATOR: char = '/';

/// Canonicalise path separators to forward slashes.
pub fn normalize_separators(path: &str) -> String {
  path.replace('\\', "/")
}

/// Returns `true` for rooted paths (`/app`) and drive-qualified paths (`C:/app`).
pub fn is_absolute(path: &str) -> bool {
  let path = normalize_separators(path);
  if path.starts_with(SEPARATOR) {
    return true;
  }

  let (drive, rest) = split_drive(&path);
  !drive.is_empty() && rest.starts_with(SEPARATOR)
}

/// Resolve `path` against `root`, returning absolute paths as they are (lexically cleaned).
pub fn to_absolute(root: &str, path: &str) -> String {
  let path = normalize_separators(path);
  if is_absolute(&path) {
    return clean(&path);
  }

  let root = normalize_separators(root);
  if path.is_empty() {
    return clean(&root);
  }
  clean(&format!("{}{SEPARATOR}{}", root.trim_end_matches(SEPARATOR), path))
}

/// Compute the path of `target` relative to `base` without requiring either to exist.
///
/// Identical paths produce an empty string. When the two paths live on different drives
/// there is no relative form and the cleaned `target` is returned.
pub fn relative_to(base: &str, target: &str) -> String {
  let base = clean(&normalize_separators(base));
  let target = clean(&normalize_separators(target));

  let (base_drive, base_rest) = split_drive(&base);
  let (target_drive, target_rest) = split_drive(&target);
  if !base_drive.eq_ignore_ascii_case(target_drive) {
    return target;
  }

  let base_segments = segments(base_rest);
  let target_segments = segments(target_rest);
  let shared = base_segments
    .iter()
    .zip(&target_segments)
    .take_while(|(left, right)| left == right)
    .count();

  let mut parts: Vec<&str> = vec![".."; base_segments.len() - shared];
  parts.extend(&target_segments[shared..]);
  parts.join("/")
}

/// Directory portion of `path`, mirroring `dirname` semantics.
pub fn parent_directory(path: &str) -> String {
  let path = clean(&normalize_separators(path));
  let (drive, rest) = split_drive(&path);

  match rest.rfind(SEPARATOR) {
    Some(0) => format!("{drive}{SEPARATOR}"),
    Some(index) => format!("{drive}{}", &rest[..index]),
    None if drive.is_empty() => ".".to_string(),
    None => drive.to_string(),
  }
}

/// Final segment of `path`, or an empty string for a filesystem root.
pub fn base_name(path: &str) -> String {
  let path = clean(&normalize_separators(path));
  let (_, rest) = split_drive(&path);
  rest
    .rsplit(SEPARATOR)
    .next()
    .unwrap_or_default()
    .to_string()
}

/// Plain string-prefix containment test between two already resolved paths.
///
/// This deliberately does not respect segment boundaries: `/proj/src2` starts with
/// `/proj/src`.
pub fn starts_with_root(path: &str, root: &str) -> bool {
  path.starts_with(root)
}

/// Collapse empty, `.` and `..` segments without consulting the filesystem.
///
/// `..` never climbs above the root of an absolute path; leading `..` segments of a relative
/// path are kept.
pub fn clean(path: &str) -> String {
  let (drive, rest) = split_drive(path);
  let rooted = rest.starts_with(SEPARATOR);

  let mut stack: Vec<&str> = Vec::new();
  for segment in rest.split(SEPARATOR) {
    match segment {
      "" | "." => {}
      ".." => match stack.last() {
        Some(&last) if last != ".." => {
          stack.pop();
        }
        _ if rooted => {}
        _ => stack.push(".."),
      },
      other => stack.push(other),
    }
  }

  let joined = stack.join("/");
  match (rooted, joined.is_empty()) {
    (true, _) => format!("{drive}{SEPARATOR}{joined}"),
    (false, true) if drive.is_empty() => ".".to_string(),
    (false, _) => format!("{drive}{joined}"),
  }
}

fn split_drive(path: &str) -> (&str, &str) {
  let bytes = path.as_bytes();
  if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
    path.split_at(2)
  } else {
    ("", path)
  }
}

fn segments(path: &str) -> Vec<&str> {
  path
    .split(SEPARATOR)
    .filter(|segment| !segment.is_empty())
    .collect()
}
