use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use ocrforge_core::{model_output_dir, output_file, ImageSample};

/// Assemble the markdown comparison report and write it to `report_path`.
///
/// One section per model, in input order. Each section embeds the saved
/// text per sample image, or an explicit marker when the output is empty
/// or missing. `samples` must be the same list the runner consumed.
pub async fn generate_report(
    models: &[String],
    output_dir: &Path,
    report_path: &Path,
    samples: &[ImageSample],
) -> Result<()> {
    info!(report = %report_path.display(), "Generating comparison report");

    let mut doc = String::new();
    doc.push_str("### 📝 **Ollama OCR model comparison**\n\n");
    doc.push_str("Side-by-side text extraction results from the configured local OCR models.\n\n");
    doc.push_str(&format!("_Generated: {}_\n\n", Utc::now().to_rfc3339()));

    if samples.is_empty() {
        doc.push_str("No sample images processed to include in report.\n");
    } else {
        for model in models {
            render_model_section(&mut doc, model, output_dir, samples).await;
        }
        doc.push_str("**Overall summary:**\n");
        doc.push_str(
            "Each model's detailed evaluation is manual, using the per-image results above. \
             Overall quality should be judged on the amount and accuracy of the extracted text. 🌟\n",
        );
    }

    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    tokio::fs::write(report_path, &doc)
        .await
        .with_context(|| format!("writing report to {}", report_path.display()))?;

    info!(report = %report_path.display(), bytes = doc.len(), "Comparison report written");
    Ok(())
}

async fn render_model_section(
    doc: &mut String,
    model: &str,
    output_dir: &Path,
    samples: &[ImageSample],
) {
    doc.push_str(&format!("#### **{model}** ✨\n"));

    if !model_output_dir(output_dir, model).exists() {
        doc.push_str("**Status:** OCR run failed or output directory not found. 😞\n\n");
        return;
    }

    for sample in samples {
        doc.push_str(&format!("##### **Image: {}**\n", sample.stem));

        let out_path = output_file(output_dir, model, &sample.stem);
        match tokio::fs::read_to_string(&out_path).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    doc.push_str("**Extracted text:** (empty)\n");
                } else {
                    doc.push_str("**Extracted text:**\n```\n");
                    doc.push_str(text);
                    doc.push_str("\n```\n");
                }
                doc.push_str(
                    "**Evaluation:** manual review needed. \
                     Check how well this model read the text in this image. 🤔\n\n",
                );
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                doc.push_str("**Extracted text:** (file not found)\n");
                doc.push_str(
                    "**Evaluation:** no OCR output for this image. \
                     The model may have failed or never processed it. ❌\n\n",
                );
            }
            Err(e) => {
                doc.push_str(&format!(
                    "**Error reading OCR output for {}:** {}\n\n",
                    sample.stem, e
                ));
            }
        }
    }

    doc.push_str("---\n\n");
}
