use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Metadata;
use crate::error::{MetadataUpdateError, Result};

/// File name of the release metadata document inside the repository root
pub const METADATA_FILE: &str = "metadata.yaml";

/// Returns the path of `metadata.yaml` under `repo_dir`.
pub fn metadata_path(repo_dir: impl AsRef<Path>) -> PathBuf {
    repo_dir.as_ref().join(METADATA_FILE)
}

/// Loads the metadata document from `path`.
///
/// Unknown keys are ignored and missing keys fall back to empty values. An
/// empty file loads as an empty document.
///
/// # Returns
/// * `Ok(Metadata)` - Parsed document
/// * `Err(Io)` - If the file cannot be read
/// * `Err(Format)` - If the content is not a YAML document of the expected shape
pub fn load_metadata(path: impl AsRef<Path>) -> Result<Metadata> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| MetadataUpdateError::io(path, e))?;

    if content.trim().is_empty() {
        return Ok(Metadata::default());
    }

    serde_yaml::from_str(&content).map_err(|e| MetadataUpdateError::format(path, e))
}

/// Serializes `metadata` and overwrites the file at `path`.
pub fn save_metadata(path: impl AsRef<Path>, metadata: &Metadata) -> Result<()> {
    let path = path.as_ref();
    let rendered = render_metadata(metadata).map_err(|e| MetadataUpdateError::format(path, e))?;
    fs::write(path, rendered).map_err(|e| MetadataUpdateError::io(path, e))
}

/// Renders `metadata` as YAML with two-space indentation.
///
/// Key order follows the struct declarations: `apiVersion` then
/// `releaseSeries`, and `major`, `minor`, `contract` inside each entry.
pub fn render_metadata(metadata: &Metadata) -> std::result::Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(metadata)?;
    Ok(indent_sequences(&yaml))
}

/// serde_yaml writes block sequences flush with their parent key; shift them
/// (and every continuation line of their items) right by two spaces.
fn indent_sequences(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len() * 2);
    let mut in_sequence = false;

    for line in yaml.lines() {
        if line == "-" || line.starts_with("- ") {
            in_sequence = true;
        } else if !line.is_empty() && !line.starts_with(' ') {
            in_sequence = false;
        }

        if in_sequence && !line.is_empty() {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}
