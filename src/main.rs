use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use label_ingredients::images_to_text::OcrEngineFactory;
use label_ingredients::{
    pipelines, save_report, AppConfig, EngineKind, ExtractError, ExtractOptions, OcrConfig,
    OcrEngine,
};

#[derive(Parser, Debug)]
#[command(name = "label-ingredients")]
#[command(version, about = "Extract active and inactive ingredients from a product label image", long_about = None)]
struct Cli {
    /// Label image to recognize (or a text file with --text)
    input: PathBuf,

    /// Treat the input as already recognized text instead of an image
    #[arg(long)]
    text: bool,

    /// Show the raw recognized text and the located sections
    #[arg(short, long)]
    debug: bool,

    /// Save the report to a file (default path comes from configuration)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    save: Option<Option<PathBuf>>,

    /// OCR engine, overrides the configured one
    #[arg(short, long, value_enum)]
    engine: Option<Engine>,

    /// Path to the tesseract executable
    #[arg(long, value_name = "PATH")]
    tesseract_cmd: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Engine {
    Tesseract,
    GoogleVision,
}

impl From<Engine> for EngineKind {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Tesseract => EngineKind::Tesseract,
            Engine::GoogleVision => EngineKind::GoogleVision,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", fatal_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// The one line printed to stderr when the run aborts
fn fatal_message(e: &dyn std::error::Error) -> String {
    format!("Error: {}", e)
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load()?;
    if let Some(engine) = cli.engine {
        config.ocr.engine = engine.into();
    }
    if let Some(cmd) = cli.tesseract_cmd {
        config.ocr.tesseract_cmd = cmd;
    }
    debug!("{:#?}", config);

    let options = ExtractOptions { debug: cli.debug };

    let outcome = if cli.text {
        let text = tokio::fs::read_to_string(&cli.input).await?;
        pipelines::text::process(&text, &options)
    } else {
        let engine = match check_engine(&config.ocr).await {
            Ok(engine) => engine,
            Err(e) => {
                print_engine_guidance(config.ocr.engine);
                return Err(e.into());
            }
        };

        if cli.format == Format::Text {
            println!("Processing image. Please wait...");
        }
        pipelines::image::process(engine.as_ref(), &cli.input, &options).await?
    };

    match cli.format {
        Format::Text => {
            println!("\nExtracted Ingredients:");
            println!("{}", outcome);
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    if let Some(path) = cli.save {
        let path = path.unwrap_or_else(|| PathBuf::from(&config.output.default_path));
        save_report(&outcome, &path).await?;
        eprintln!("Ingredients saved to {}", path.display());
    }

    Ok(())
}

async fn check_engine(config: &OcrConfig) -> Result<Box<dyn OcrEngine>, ExtractError> {
    let engine = OcrEngineFactory::from_config(config)?;
    let version = engine.version().await?;
    info!("{} version: {}", engine.engine_name(), version);
    Ok(engine)
}

fn print_engine_guidance(engine: EngineKind) {
    match engine {
        EngineKind::Tesseract => {
            eprintln!("Error: Tesseract OCR is not installed or not in PATH.");
            eprintln!("Please install Tesseract OCR and ensure it's in your system PATH.");
            eprintln!("Or point to the executable with --tesseract-cmd or in label_ingredients.toml:");
            eprintln!("  [ocr]");
            eprintln!("  tesseract_cmd = 'C:\\Program Files\\Tesseract-OCR\\tesseract.exe'");
        }
        EngineKind::GoogleVision => {
            eprintln!("Error: Google Vision is not configured or rejected the API key.");
            eprintln!("Set GOOGLE_API_KEY or LABEL_INGREDIENTS__OCR__API_KEY.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_message_names_the_error_once() {
        let e = ExtractError::ImageNotFound(PathBuf::from("label.png"));
        let message = fatal_message(&e);
        assert_eq!(message, "Error: File 'label.png' not found");
        assert_eq!(message.matches("not found").count(), 1);
    }

    #[test]
    fn test_cli_flags() {
        let args = ["label-ingredients", "label.png", "-s", "-e", "google-vision"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.save, Some(None));
        assert_eq!(cli.engine, Some(Engine::GoogleVision));
        assert_eq!(cli.format, Format::Text);
    }
}
