use crate::error::{ConstraintViolation, NormalizeResult};
use crate::models::{NormalizedAsset, StructuredAsset};
use crate::path_resolver::{SEPARATOR, normalize_separators, to_absolute};

/// Normalise an explicit `{ input, output }` asset declaration.
///
/// The output is checked before anything else so an escaping output is reported even when
/// the input is unusable. A single leading separator on the output is dropped so that it is
/// placed relative to the output root. Metadata fields are carried over as declared.
pub fn normalize_structured_asset(
  asset: StructuredAsset,
  root: &str,
) -> NormalizeResult<NormalizedAsset> {
  if asset.output.starts_with("..") {
    return Err(
      ConstraintViolation::OutputEscapesOutputRoot {
        output: asset.output,
      }
      .into(),
    );
  }

  let StructuredAsset {
    input,
    output,
    glob,
    extra,
  } = asset;

  let input = to_absolute(root, &normalize_separators(&input));
  let output = output
    .strip_prefix(SEPARATOR)
    .map(str::to_string)
    .unwrap_or(output);

  Ok(NormalizedAsset {
    input,
    output,
    glob,
    extra,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn structured(input: &str, output: &str) -> StructuredAsset {
    StructuredAsset {
      input: input.into(),
      output: output.into(),
      glob: None,
      extra: Default::default(),
    }
  }

  #[test]
  fn resolves_input_against_root() {
    let asset = normalize_structured_asset(structured("libs/shared/icons", "icons"), "/proj").unwrap();
    assert_eq!(asset.input, "/proj/libs/shared/icons");
    assert_eq!(asset.output, "icons");
    assert_eq!(asset.glob, None);
  }

  #[test]
  fn strips_exactly_one_leading_separator() {
    let asset = normalize_structured_asset(structured("shared", "/public/icons"), "/proj").unwrap();
    assert_eq!(asset.output, "public/icons");

    let asset = normalize_structured_asset(structured("shared", "//public"), "/proj").unwrap();
    assert_eq!(asset.output, "/public");
  }

  #[test]
  fn rejects_outputs_escaping_the_output_root() {
    let err =
      normalize_structured_asset(structured("shared/icon.png", "../outside"), "/proj").unwrap_err();
    assert_eq!(
      err.constraint_violation(),
      Some(&ConstraintViolation::OutputEscapesOutputRoot {
        output: "../outside".into(),
      })
    );
  }

  #[test]
  fn escape_check_ignores_input_validity() {
    let err = normalize_structured_asset(structured("", ".."), "").unwrap_err();
    assert!(err.constraint_violation().is_some());
  }

  #[test]
  fn keeps_metadata_fields() {
    let mut asset = structured(r"node_modules\pkg\dist", "/vendor");
    asset.glob = Some("**/*.js".into());
    asset.extra.insert("ignore".into(), json!(["**/*.map"]));

    let normalized = normalize_structured_asset(asset, "/proj").unwrap();
    assert_eq!(normalized.input, "/proj/node_modules/pkg/dist");
    assert_eq!(normalized.output, "vendor");
    assert_eq!(normalized.glob.as_deref(), Some("**/*.js"));
    assert_eq!(normalized.extra.get("ignore"), Some(&json!(["**/*.map"])));
  }
}
