//! Command-line interface for the Wex design tokens
//!
//! Usage:
//!   wex-tokens build `<tokens.json>`              - Write the colour dictionary next to the token file
//!   wex-tokens css `<tokens.json>` [--out `<file>`] - Emit CSS custom properties for every mode
//!   wex-tokens convert `<value>`                  - Convert an `H S% L%` value to hex
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wex_design_tokens_core::{hsl_to_hex, TokenSet};

use config::TransformConfig;

#[derive(Parser)]
#[command(name = "wex-tokens", version, about = "Transforms Wex design tokens")]
struct Cli {
    /// Transform settings (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the colour dictionary for native platform emitters
    Build {
        /// Token file
        input: PathBuf,
    },
    /// Emit CSS custom properties for every mode
    Css {
        /// Token file
        input: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Convert a single value
    Convert {
        /// e.g. "210 40% 96%"
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TransformConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { input } => cmd_build(&config, &input),
        Commands::Css { input, out } => cmd_css(&input, out.as_deref()),
        Commands::Convert { value } => {
            println!("{}", hsl_to_hex(&value));
            Ok(())
        }
    }
}

fn cmd_build(config: &TransformConfig, input: &Path) -> Result<()> {
    let tokens = TokenSet::load(input)?;
    let dictionary = tokens.color_dictionary(&config.color_options());
    let output = config.output_path(input);
    dictionary
        .write(&output)
        .with_context(|| format!("Failed to write colour dictionary for {}", input.display()))?;
    info!(
        colors = dictionary.len(),
        mode = %config.mode,
        output = %output.display(),
        "wrote colour dictionary"
    );
    Ok(())
}

fn cmd_css(input: &Path, out: Option<&Path>) -> Result<()> {
    let tokens = TokenSet::load(input)?;
    let css = tokens.to_css();
    match out {
        Some(path) => {
            fs::write(path, format!("{css}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(output = %path.display(), "wrote stylesheet");
        }
        None => println!("{css}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wex_design_tokens_core::ColorDictionary;

    #[test]
    fn build_writes_dictionary_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        fs::write(
            &input,
            r#"{ "light": { "--wex-primary-500": "0 100% 50%", "--wex-radius": "1rem" } }"#,
        )
        .unwrap();

        cmd_build(&TransformConfig::default(), &input).unwrap();

        let written = fs::read_to_string(dir.path().join("colors.tokens.json")).unwrap();
        let dictionary: ColorDictionary = serde_json::from_str(&written).unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("primary_500"), Some("#ff0000"));
    }

    #[test]
    fn build_fails_on_unreadable_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        fs::write(&input, "{ not json").unwrap();
        assert!(cmd_build(&TransformConfig::default(), &input).is_err());
        assert!(!dir.path().join("colors.tokens.json").exists());
    }

    #[test]
    fn css_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let out = dir.path().join("wex.css");
        fs::write(&input, r#"{ "dark": { "--wex-primary": "0 0% 0%" } }"#).unwrap();

        cmd_css(&input, Some(out.as_path())).unwrap();

        assert_eq!(
            fs::read_to_string(out).unwrap(),
            ".dark {\n  --wex-primary: 0 0% 0%;\n}\n"
        );
    }
}
