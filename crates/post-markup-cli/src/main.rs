use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use post_markup_config::{Config, OutputFormat};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

mod output;
mod terminal;
mod viewer;

#[derive(Parser, Debug)]
#[command(name = "post-markup")]
#[command(about = "Format post bodies written in post-markup", version)]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output format: html, json, text, preview or tree
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/post-markup/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Character budget for preview output
    #[arg(long)]
    preview_chars: Option<usize>,

    /// Open the formatted post in an interactive terminal viewer
    #[arg(long, conflicts_with_all = ["format", "output"])]
    view: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let raw = read_input(cli.input.as_deref())?;
    let blocks = post_markup_engine::format(&raw);
    info!(
        "Formatted {} bytes into {} blocks",
        raw.len(),
        blocks.len()
    );

    if cli.view {
        let title = input_label(cli.input.as_deref());
        return viewer::run(viewer::Viewer::new(title, &blocks));
    }

    let rendered = output::render_output(&raw, &blocks, &config)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} output to {}", config.format, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Loads the config file and applies command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path);
            debug!("Loading config from {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?
        }
        None => match Config::load()? {
            Some(config) => {
                debug!("Loaded config from {}", Config::config_path().display());
                config
            }
            None => {
                debug!("No config file, using defaults");
                Config::default()
            }
        },
    };

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(chars) = cli.preview_chars {
        config.preview_chars = chars;
    }
    debug!("Output format: {}", config.format);
    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!("Reading {}", path.display());
            if !path.exists() {
                bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            debug!("Reading stdin");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn input_label(input: Option<&Path>) -> String {
    match input {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}
