// Category CLI: Paste Cleaner
//
// Runs the paste handler over clipboard payloads stored in files, for
// inspecting what an editor would receive for a given copy source.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use kodegen_tools_paste_cleaner::{PasteConfig, PasteEvent, PasteHandler, PasteMode, PasteOutcome};

#[derive(Debug, Parser)]
#[command(
    name = "kodegen-paste-clean",
    version,
    about = "Normalize clipboard HTML the way the editor paste handler does"
)]
struct Cli {
    /// File holding the text/html clipboard payload ("-" for stdin)
    #[arg(long)]
    html: Option<PathBuf>,

    /// File holding the text/plain clipboard payload
    #[arg(long)]
    text: Option<PathBuf>,

    /// Cleaning mode: plainText, cleanHtml or smartClean (overrides --config)
    #[arg(long)]
    mode: Option<PasteMode>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every paste decision
    #[arg(long)]
    debug: bool,

    /// Print the outcome as JSON instead of the inserted content
    #[arg(long)]
    json: bool,
}

fn read_payload(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(cli: &Cli) -> Result<PasteConfig> {
    let base = match &cli.config {
        Some(path) => PasteConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PasteConfig::default(),
    };
    let mode = cli.mode.unwrap_or(base.mode());
    PasteConfig::builder()
        .mode(mode)
        .debug(cli.debug || base.debug())
        .max_markup_bytes(base.max_markup_bytes())
        .max_depth(base.max_depth())
        .build()
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(&cli)?;
    let event = PasteEvent::new(
        cli.html.as_ref().map(read_payload).transpose()?,
        cli.text.as_ref().map(read_payload).transpose()?,
    );

    let outcome = PasteHandler::new(config).handle(&event);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            PasteOutcome::InsertMarkup(markup) => println!("{markup}"),
            PasteOutcome::InsertText(text) => println!("{text}"),
            PasteOutcome::Declined => eprintln!("Paste declined; host default handling applies"),
        }
    }

    Ok(if outcome.is_handled() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
