//! # Webide - a small code-editing workbench
//!
//! Files, an editor pane, a live HTML/CSS/JS preview and a toy terminal,
//! all held in memory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start with the sample project
//! cargo run
//!
//! # Start empty, writing previews to ./preview.html
//! cargo run -- --empty --preview-out preview.html
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webide_shell::{run, Flags};

/// Webide - files, editor, preview and a toy terminal
#[derive(Parser, Debug)]
#[command(name = "webide")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// File the preview page is written to
    #[arg(long, value_name = "FILE")]
    preview_out: Option<PathBuf>,

    /// Start without the sample documents
    #[arg(long)]
    empty: bool,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Logs go to stderr so they don't interleave with the shell's output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Webide v{}", env!("CARGO_PKG_VERSION"));

    let flags = Flags {
        config: args.config,
        preview_out: args.preview_out,
        empty: args.empty,
        light: args.light,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(run(flags))
        .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["webide"]);
        assert!(args.config.is_none());
        assert!(!args.empty);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_flags() {
        let args = Args::parse_from(["webide", "--empty", "--preview-out", "p.html", "-vv"]);
        assert!(args.empty);
        assert_eq!(args.preview_out, Some(PathBuf::from("p.html")));
        assert_eq!(args.verbose, 2);
    }
}
