use std::path::PathBuf;

/// Models compared when none are given on the command line.
const DEFAULT_MODELS: &[&str] = &[
    "yasserrmd/Nanonets-OCR-s:latest",
    "MedAIBase/PaddleOCR-VL:0.9b",
    "deepseek-ocr:latest",
];

/// ocrforge runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for input images
    pub image_dir: PathBuf,
    /// Root directory for per-model OCR outputs
    pub output_dir: PathBuf,
    /// Path of the generated markdown report
    pub report_path: PathBuf,
    /// Number of leading images processed per run
    pub sample_count: usize,
    /// Models compared in a run
    pub models: Vec<String>,
    /// Ollama base URL
    pub ollama_url: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("resources/receipts"),
            output_dir: PathBuf::from("result/ocr_outputs"),
            report_path: PathBuf::from("result/ollama_ocr_comparison_results.md"),
            sample_count: 3,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            ollama_url: "http://localhost:11434".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            image_dir: std::env::var("OCRFORGE_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            output_dir: std::env::var("OCRFORGE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            report_path: std::env::var("OCRFORGE_REPORT")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_path),
            sample_count: std::env::var("OCRFORGE_SAMPLES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.sample_count),
            models: std::env::var("OCRFORGE_MODELS")
                .ok()
                .map(|raw| parse_models(&raw))
                .filter(|models| !models.is_empty())
                .unwrap_or(defaults.models),
            ollama_url: std::env::var("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

/// Parse a comma-separated model list.
pub fn parse_models(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
