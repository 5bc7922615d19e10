mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};

use ocrforge_core::{list_samples, ImageSample};
use ocrforge_report::generate_report;
use ocrforge_runner::run_model;
use ocrforge_vision::OllamaVision;

use config::{parse_models, Config};

#[derive(Parser)]
#[command(name = "ocrforge")]
#[command(about = "ocrforge — compare local OCR models through Ollama")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run OCR for every configured model, then generate the comparison report
    Run(PipelineArgs),
    /// Rebuild the comparison report from existing OCR outputs
    Report(PipelineArgs),
}

#[derive(Args)]
struct PipelineArgs {
    /// Directory of input images
    #[arg(long)]
    image_dir: Option<PathBuf>,
    /// Root directory for per-model OCR outputs
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Path of the generated markdown report
    #[arg(long)]
    report: Option<PathBuf>,
    /// Number of images sampled from the input directory
    #[arg(long)]
    samples: Option<usize>,
    /// Comma-separated model list, overriding the built-in set
    #[arg(long)]
    models: Option<String>,
    /// Ollama base URL
    #[arg(long)]
    ollama_url: Option<String>,
}

impl PipelineArgs {
    /// Flag overrides win over env vars and defaults.
    fn apply(self, config: Config) -> Config {
        Config {
            image_dir: self.image_dir.unwrap_or(config.image_dir),
            output_dir: self.output_dir.unwrap_or(config.output_dir),
            report_path: self.report.unwrap_or(config.report_path),
            sample_count: self.samples.unwrap_or(config.sample_count),
            models: self
                .models
                .map(|raw| parse_models(&raw))
                .filter(|models| !models.is_empty())
                .unwrap_or(config.models),
            ollama_url: self.ollama_url.unwrap_or(config.ollama_url),
            log_level: config.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_pipeline(args.apply(config)).await?,
        Commands::Report(args) => rebuild_report(args.apply(config)).await?,
    }

    Ok(())
}

async fn run_pipeline(config: Config) -> Result<()> {
    info!(
        image_dir = %config.image_dir.display(),
        output_dir = %config.output_dir.display(),
        models = config.models.len(),
        samples = config.sample_count,
        "Starting OCR comparison run"
    );

    let samples = enumerate_samples(&config)?;
    let provider = OllamaVision::new().with_base_url(&config.ollama_url);

    let mut hard_failures = 0;
    for model in &config.models {
        match run_model(&provider, model, &samples, &config.output_dir).await {
            Ok(true) => info!(model = %model, "Model batch completed"),
            Ok(false) => warn!(model = %model, "Model batch completed with failures"),
            Err(e) => {
                error!(model = %model, error = %e, "Model batch aborted");
                hard_failures += 1;
            }
        }
    }

    generate_report(
        &config.models,
        &config.output_dir,
        &config.report_path,
        &samples,
    )
    .await?;

    if !config.models.is_empty() && hard_failures == config.models.len() {
        anyhow::bail!("every model batch aborted; see the log above");
    }

    info!(report = %config.report_path.display(), "Done");
    Ok(())
}

async fn rebuild_report(config: Config) -> Result<()> {
    let samples = enumerate_samples(&config)?;
    generate_report(
        &config.models,
        &config.output_dir,
        &config.report_path,
        &samples,
    )
    .await
}

fn enumerate_samples(config: &Config) -> Result<Vec<ImageSample>> {
    let samples = list_samples(&config.image_dir, config.sample_count)?;
    if samples.is_empty() {
        warn!(dir = %config.image_dir.display(), "No image files found");
    }
    Ok(samples)
}
