//! Conversion entry points: in-memory tree-to-document, and file-to-file
//! with output-path selection.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::diagnostics::Diagnostic;
use crate::emitter::XmlEmitter;
use crate::handler::{HandlerRegistry, SchemaHandler};

/// Outcome of a file-level conversion, handed to the caller for display.
pub struct ConversionReport {
    pub output_path: PathBuf,
    /// Set when the preferred output path already existed and a numbered
    /// fallback was chosen instead.
    pub collided_with: Option<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert an in-memory YAML tree into an XML document string.
pub fn yaml_to_xml(yaml: &Value, handler: &dyn SchemaHandler) -> (String, Vec<Diagnostic>) {
    let mut xml = XmlEmitter::new();
    let diagnostics = handler.handle(yaml, &mut xml);
    (xml.finish(), diagnostics)
}

/// Convert a YAML file into an XML file.
///
/// This reads the input (from disk or HTTP), resolves the handler for
/// `requested_type` (case-insensitive; an unknown type is a terminal error
/// naming the supported types, and no output file is created), picks an
/// output path next to the input unless one is given, and writes the
/// converted document prefixed with a comment naming the source file.
///
/// # Arguments
/// * `input` - Path or URL of the YAML input.
/// * `requested_type` - Schema type of the input (`resource` or `service`).
/// * `output` - Optional explicit output path; defaults to the input path
///   with an `.xml` extension, appending `_1`, `_2`, … while the target
///   already exists.
///
/// # Returns
/// The output path, any collision note, and the handler's diagnostics, or
/// an error string if the conversion could not run at all.
pub fn convert_yaml_to_xml(
    input: &str,
    requested_type: &str,
    output: Option<&str>,
) -> Result<ConversionReport, String> {
    let content = if input.starts_with("http") {
        reqwest::blocking::get(input)
            .map_err(|e| format!("HTTP fetch failed: {e}"))?
            .text()
            .map_err(|e| format!("Invalid response body: {e}"))?
    } else {
        fs::read_to_string(input).map_err(|e| format!("Failed to read yaml file {input}: {e}"))?
    };

    let yaml: Value = serde_yaml::from_str(&content).map_err(|e| format!("Invalid yaml: {e}"))?;

    let registry = HandlerRegistry::with_default_handlers();
    let handler = registry
        .find(&requested_type.to_lowercase())
        .map_err(|e| e.to_string())?;

    let (output_path, collided_with) = match output {
        Some(path) => (PathBuf::from(path), None),
        None => pick_output_path(Path::new(input)),
    };

    let mut xml = XmlEmitter::new();
    let basename = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());
    xml.write_comment(&format!("Converted from {basename}"));
    let diagnostics = handler.handle(&yaml, &mut xml);

    fs::write(&output_path, xml.finish())
        .map_err(|e| format!("Failed to write {}: {e}", output_path.display()))?;

    Ok(ConversionReport {
        output_path,
        collided_with,
        diagnostics,
    })
}

/// Place the output next to the input with an `.xml` extension, numbering
/// the stem while the target already exists.
fn pick_output_path(input: &Path) -> (PathBuf, Option<PathBuf>) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let dir = input.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));

    let preferred = dir.join(format!("{stem}.xml"));
    let mut candidate = preferred.clone();
    let mut suffix = 0;
    while candidate.exists() {
        suffix += 1;
        candidate = dir.join(format!("{stem}_{suffix}.xml"));
    }

    if suffix > 0 {
        (candidate, Some(preferred))
    } else {
        (candidate, None)
    }
}
