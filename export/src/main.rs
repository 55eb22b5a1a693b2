//! # anamnese-export
//!
//! Renders the Anamnese Cristã sales page to one self-contained HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Default: dist/index.html with the production checkout link
//! anamnese-export
//!
//! # Staging checkout, custom output
//! anamnese-export --checkout-url https://staging.example.com/pay --out public/index.html
//!
//! # From a config file (flags still win)
//! anamnese-export --config anamnese.toml
//! ```

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anamnese_page::{PageConfig, render_page};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug, info};

use config::FileConfig;

const DEFAULT_OUT: &str = "dist/index.html";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "anamnese-export")]
#[command(about = "Render the Anamnese Cristã sales page to static HTML")]
#[command(version)]
struct Args {
    /// Output file (default: dist/index.html)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// TOML config file (checkout_url, out, log_level)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the checkout link used by every CTA
    #[arg(long)]
    checkout_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Settings after merging flags, config file and defaults.
#[derive(Debug, Clone)]
struct ResolvedParams {
    out: PathBuf,
    log_level: Level,
    page: PageConfig,
}

/// Flag, then config file, then built-in default.
fn resolve_params(args: Args, file: FileConfig) -> Result<ResolvedParams> {
    let out = args
        .out
        .or(file.out)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    let log_level = match args.log_level.or(file.log_level) {
        Some(raw) => parse_log_level(&raw)?,
        None => DEFAULT_LOG_LEVEL,
    };

    let page = match args.checkout_url.or(file.checkout_url) {
        Some(url) => PageConfig::default().with_checkout_url(&url)?,
        None => PageConfig::default(),
    };

    Ok(ResolvedParams {
        out,
        log_level,
        page,
    })
}

/// Parse a log level name. Unknown words are an error, not a target directive.
fn parse_log_level(raw: &str) -> Result<Level> {
    raw.trim().parse::<Level>().with_context(|| {
        format!("invalid log level '{raw}' (expected trace, debug, info, warn or error)")
    })
}

/// Render the page and write it to `out`, creating parent directories.
/// Returns the number of bytes written.
fn write_page(out: &Path, page: &PageConfig) -> Result<usize> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let html = render_page(page);
    fs::write(out, &html).with_context(|| format!("failed to write page: {}", out.display()))?;
    Ok(html.len())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file = FileConfig::load_optional(args.config.as_deref())?;
    let params = resolve_params(args, file)?;

    // Logs go to stderr so the binary can sit in a pipeline
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    let level = params.log_level.as_str().to_ascii_lowercase();
                    tracing_subscriber::EnvFilter::new(level)
                }),
        )
        .init();

    info!("anamnese-export v{}", env!("CARGO_PKG_VERSION"));
    debug!(checkout = %params.page.checkout_url, year = params.page.year, "resolved page config");

    let bytes = write_page(&params.out, &params.page)?;
    info!(out = %params.out.display(), bytes, "page written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anamnese_page::CHECKOUT_URL;
    use pretty_assertions::assert_eq;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("anamnese-export").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let params = resolve_params(args(&[]), FileConfig::default()).unwrap();

        assert_eq!(params.out, PathBuf::from(DEFAULT_OUT));
        assert_eq!(params.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(params.page.checkout_url, CHECKOUT_URL);
    }

    #[test]
    fn file_fills_missing_flags() {
        let file = FileConfig {
            checkout_url: Some("https://pay.example.com/file".into()),
            out: Some(PathBuf::from("public/index.html")),
            log_level: Some("warn".into()),
        };
        let params = resolve_params(args(&[]), file).unwrap();

        assert_eq!(params.out, PathBuf::from("public/index.html"));
        assert_eq!(params.log_level, Level::WARN);
        assert_eq!(params.page.checkout_url, "https://pay.example.com/file");
    }

    #[test]
    fn flags_win_over_file() {
        let file = FileConfig {
            checkout_url: Some("https://pay.example.com/file".into()),
            out: Some(PathBuf::from("public/index.html")),
            log_level: Some("warn".into()),
        };
        let params = resolve_params(
            args(&[
                "--out",
                "site/offer.html",
                "--checkout-url",
                "https://pay.example.com/flag",
                "--log-level",
                "debug",
            ]),
            file,
        )
        .unwrap();

        assert_eq!(params.out, PathBuf::from("site/offer.html"));
        assert_eq!(params.log_level, Level::DEBUG);
        assert_eq!(params.page.checkout_url, "https://pay.example.com/flag");
    }

    #[test]
    fn invalid_checkout_url_is_rejected() {
        let err = resolve_params(args(&["--checkout-url", "not a url"]), FileConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("invalid checkout URL"));
    }

    #[test]
    fn misspelled_log_level_is_rejected() {
        let err = resolve_params(args(&["--log-level", "inf"]), FileConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("invalid log level 'inf'"));

        let file = FileConfig {
            log_level: Some("verbose".into()),
            ..FileConfig::default()
        };
        assert!(resolve_params(args(&[]), file).is_err());
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let params = resolve_params(args(&["--log-level", "WARN"]), FileConfig::default()).unwrap();
        assert_eq!(params.log_level, Level::WARN);
    }

    #[test]
    fn writes_page_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("index.html");
        let page = PageConfig::default().with_year(2030);

        let bytes = write_page(&out, &page).unwrap();
        let written = fs::read_to_string(&out).unwrap();

        assert_eq!(bytes, written.len());
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("© 2030 Tony Robert"));
        assert!(written.contains(CHECKOUT_URL));
    }
}
