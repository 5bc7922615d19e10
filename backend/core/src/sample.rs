//! Image sample enumeration.
//!
//! The sample list is computed once per run and handed to both the OCR
//! runner and the report generator, so the two phases always agree on
//! which images were sampled. Entries are sorted by file name to keep the
//! subset stable across runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Extensions accepted as OCR input images.
const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png"];

/// One input image selected for a run.
#[derive(Debug, Clone)]
pub struct ImageSample {
    pub path: PathBuf,
    /// File name without extension; names the output file and report entry.
    pub stem: String,
}

/// List the first `count` image files under `dir`, sorted by file name.
///
/// An empty directory is not an error at this layer; callers decide how to
/// treat a run with nothing to process.
pub fn list_samples(dir: &Path, count: usize) -> Result<Vec<ImageSample>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading image directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    files.sort();
    files.truncate(count);

    let samples: Vec<ImageSample> = files
        .into_iter()
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?.to_string();
            Some(ImageSample { path, stem })
        })
        .collect();

    debug!(dir = %dir.display(), samples = samples.len(), "Enumerated image samples");
    Ok(samples)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn filters_by_extension_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.png", "d.jpeg", "c.txt", "e.jpg"] {
            touch(dir.path(), name);
        }

        let samples = list_samples(dir.path(), 3).unwrap();
        let stems: Vec<&str> = samples.iter().map(|s| s.stem.as_str()).collect();
        assert_eq!(stems, vec!["a", "b", "d"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "scan.PNG");

        let samples = list_samples(dir.path(), 10).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].stem, "scan");
    }

    #[test]
    fn enumeration_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["r3.jpg", "r1.jpg", "r2.jpg"] {
            touch(dir.path(), name);
        }

        let first = list_samples(dir.path(), 2).unwrap();
        let second = list_samples(dir.path(), 2).unwrap();
        let stems = |v: &[ImageSample]| v.iter().map(|s| s.stem.clone()).collect::<Vec<_>>();
        assert_eq!(stems(&first), vec!["r1", "r2"]);
        assert_eq!(stems(&first), stems(&second));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(list_samples(&gone, 3).is_err());
    }

    #[test]
    fn empty_directory_yields_no_samples() {
        let dir = tempfile::tempdir().unwrap();
        let samples = list_samples(dir.path(), 3).unwrap();
        assert!(samples.is_empty());
    }
}
