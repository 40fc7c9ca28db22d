use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use datamint_core::metadata::form::{PublishForm, PublishType};
use datamint_publish::drafts::DraftStore;
use serde_json::Value;

pub fn parse_kind(kind: Option<&str>) -> Result<Option<PublishType>> {
    kind.map(|k| PublishType::parse(k).map_err(|e| anyhow!("{e}")))
        .transpose()
}

/// Read a form file. The `publishType` discriminator may come from the file
/// or from `kind`; when both are present they must agree.
pub fn read_form_file<P: AsRef<Path>>(path: P, kind: Option<PublishType>) -> Result<PublishForm> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut v: Value = serde_json::from_str(&raw).map_err(|e| anyhow!("invalid json: {e}"))?;
    let obj = v
        .as_object_mut()
        .ok_or_else(|| anyhow!("form must be a JSON object"))?;

    // Drafts are stored as { "initialValues": {...} }.
    if let Some(inner) = obj.remove("initialValues") {
        let mut inner = inner;
        let inner_obj = inner
            .as_object_mut()
            .ok_or_else(|| anyhow!("initialValues must be a JSON object"))?;
        std::mem::swap(obj, inner_obj);
    }

    match (obj.get("publishType").and_then(Value::as_str), kind) {
        (Some(found), Some(k)) if found != k.as_str() => {
            return Err(anyhow!("form publishType {found:?} conflicts with --kind {k}"));
        }
        (None, Some(k)) => {
            obj.insert("publishType".to_string(), Value::String(k.as_str().to_string()));
        }
        (None, None) => return Err(anyhow!("form has no publishType; pass --kind dataset|algorithm")),
        _ => {}
    }

    serde_json::from_value(v).map_err(|e| anyhow!("invalid form: {e}"))
}

/// Form from `--form`, or else the stored draft for `kind` (dataset by default).
pub fn resolve_form(store: &DraftStore, form: Option<&str>, kind: Option<&str>) -> Result<PublishForm> {
    let kind = parse_kind(kind)?;
    match form {
        Some(path) => read_form_file(path, kind),
        None => Ok(store.load(kind.unwrap_or(PublishType::Dataset))?),
    }
}

pub fn read_svg<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let svg = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    if !svg.contains("<svg") {
        return Err(anyhow!("{} does not look like SVG markup", path.display()));
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_fills_missing_discriminator() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("form.json");
        fs::write(&p, r#"{"name":"Weather"}"#).unwrap();
        let form = read_form_file(&p, Some(PublishType::Dataset)).unwrap();
        assert_eq!(form.publish_type(), PublishType::Dataset);
        assert_eq!(form.name(), "Weather");
    }

    #[test]
    fn draft_envelope_is_unwrapped() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("draft.json");
        fs::write(&p, r#"{"initialValues":{"name":"Solver"}}"#).unwrap();
        let form = read_form_file(&p, Some(PublishType::Algorithm)).unwrap();
        assert_eq!(form.publish_type(), PublishType::Algorithm);
    }

    #[test]
    fn conflicting_kind_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("form.json");
        fs::write(&p, r#"{"publishType":"dataset"}"#).unwrap();
        assert!(read_form_file(&p, Some(PublishType::Algorithm)).is_err());
        assert!(read_form_file(&p, None).is_ok());
    }
}
