//! Model identifiers on the filesystem.
//!
//! Model names like `yasserrmd/Nanonets-OCR-s:latest` double as output
//! directory names, so `/` and `:` are mapped to `_` before touching disk.

use std::path::{Path, PathBuf};

/// Replace path-hostile characters in a model identifier.
pub fn sanitize_model_name(model: &str) -> String {
    model.replace('/', "_").replace(':', "_")
}

/// Directory holding one text file per processed image for `model`.
pub fn model_output_dir(base: &Path, model: &str) -> PathBuf {
    base.join(sanitize_model_name(model))
}

/// Output file for a given (model, image stem) pair.
pub fn output_file(base: &Path, model: &str, stem: &str) -> PathBuf {
    model_output_dir(base, model).join(format!("{stem}.txt"))
}
