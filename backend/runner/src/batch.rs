use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use ocrforge_core::{model_output_dir, ImageSample, OcrRequest, VisionProvider};

/// Prompt sent with every image.
pub const EXTRACTION_PROMPT: &str =
    "Extract all text from this image. Provide only the extracted text.";

/// Run one model over the sampled images, writing one text file per image.
///
/// Per-image failures (unreadable file, provider error, write error) are
/// logged and skipped; the batch never aborts early. Returns `false` if any
/// image failed or the sample list was empty, `true` otherwise. The only
/// hard error is failing to create the model's output directory.
pub async fn run_model(
    provider: &dyn VisionProvider,
    model: &str,
    samples: &[ImageSample],
    output_dir: &Path,
) -> Result<bool> {
    let model_dir = model_output_dir(output_dir, model);
    tokio::fs::create_dir_all(&model_dir)
        .await
        .with_context(|| format!("creating model output directory {}", model_dir.display()))?;

    if samples.is_empty() {
        warn!(model, "No sample images to process");
        return Ok(false);
    }

    info!(model, samples = samples.len(), "Running OCR batch");

    let mut success_all = true;
    for sample in samples {
        let image = match tokio::fs::read(&sample.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(image = %sample.path.display(), error = %e, "Failed to read image");
                success_all = false;
                continue;
            }
        };

        let request = OcrRequest {
            model: model.to_string(),
            prompt: EXTRACTION_PROMPT.to_string(),
            image,
        };

        info!(model, image = %sample.stem, "Requesting text extraction");
        let text = match provider.extract_text(&request).await {
            Ok(text) => text,
            Err(e) => {
                error!(model, image = %sample.stem, error = %e, "Extraction failed");
                success_all = false;
                continue;
            }
        };

        let out_path = model_dir.join(format!("{}.txt", sample.stem));
        if let Err(e) = tokio::fs::write(&out_path, text.trim()).await {
            error!(path = %out_path.display(), error = %e, "Failed to write OCR output");
            success_all = false;
            continue;
        }
        info!(image = %sample.stem, path = %out_path.display(), "Saved OCR output");
    }

    Ok(success_all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ocrforge_core::{list_samples, OcrError};

    /// Echoes the image bytes back as text; fails on a configurable payload.
    struct EchoVision {
        fail_on: Option<Vec<u8>>,
    }

    #[async_trait]
    impl VisionProvider for EchoVision {
        fn name(&self) -> &str {
            "echo"
        }

        async fn extract_text(&self, request: &OcrRequest) -> Result<String, OcrError> {
            if self.fail_on.as_deref() == Some(request.image.as_slice()) {
                return Err(OcrError::Transport("connection refused".to_string()));
            }
            Ok(format!("  read: {}  ", String::from_utf8_lossy(&request.image)))
        }
    }

    fn write_images(dir: &Path, names: &[&str]) {
        for name in names {
            let stem = name.split('.').next().unwrap();
            std::fs::write(dir.join(name), stem.as_bytes()).unwrap();
        }
    }

    #[tokio::test]
    async fn writes_one_trimmed_file_per_sample() {
        let images = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_images(images.path(), &["a.jpg", "b.png", "c.jpeg", "notes.txt", "e.jpg"]);

        let samples = list_samples(images.path(), 3).unwrap();
        let provider = EchoVision { fail_on: None };

        let ok = run_model(&provider, "echo/model:v1", &samples, out.path())
            .await
            .unwrap();
        assert!(ok);

        let model_dir = out.path().join("echo_model_v1");
        let mut written: Vec<String> = std::fs::read_dir(&model_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        written.sort();
        assert_eq!(written, vec!["a.txt", "b.txt", "c.txt"]);

        let text = std::fs::read_to_string(model_dir.join("a.txt")).unwrap();
        assert_eq!(text, "read: a");
    }

    #[tokio::test]
    async fn provider_failure_skips_file_and_continues() {
        let images = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_images(images.path(), &["a.jpg", "b.jpg", "c.jpg"]);

        let samples = list_samples(images.path(), 3).unwrap();
        let provider = EchoVision {
            fail_on: Some(b"b".to_vec()),
        };

        let ok = run_model(&provider, "m", &samples, out.path()).await.unwrap();
        assert!(!ok);

        let model_dir = out.path().join("m");
        assert!(model_dir.join("a.txt").exists());
        assert!(!model_dir.join("b.txt").exists());
        assert!(model_dir.join("c.txt").exists());
    }

    #[tokio::test]
    async fn empty_sample_list_is_a_failed_run() {
        let out = tempfile::tempdir().unwrap();
        let provider = EchoVision { fail_on: None };

        let ok = run_model(&provider, "m", &[], out.path()).await.unwrap();
        assert!(!ok);
        // The model directory is still created, just left empty.
        assert!(out.path().join("m").is_dir());
    }

    #[tokio::test]
    async fn unreadable_image_is_skipped() {
        let images = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_images(images.path(), &["a.jpg", "b.jpg"]);

        let samples = list_samples(images.path(), 2).unwrap();
        // Delete one image between sampling and the run.
        std::fs::remove_file(&samples[0].path).unwrap();

        let provider = EchoVision { fail_on: None };
        let ok = run_model(&provider, "m", &samples, out.path()).await.unwrap();
        assert!(!ok);
        assert!(!out.path().join("m").join("a.txt").exists());
        assert!(out.path().join("m").join("b.txt").exists());
    }
}
