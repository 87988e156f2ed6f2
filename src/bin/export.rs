//! Static export tool for the portfolio page.
//!
//! Renders the page exactly once and writes the result to disk, so the site
//! can be hosted as plain files without running the server.
//!
//! # Usage
//!
//! ```bash
//! # Write dist/index.html
//! cargo run --bin export -- --out dist
//!
//! # Print the rendered page to stdout
//! cargo run --bin export -- --stdout
//!
//! # Overwrite an existing export without confirmation
//! cargo run --bin export -- --out dist --yes
//! ```
//!
//! The resume document is not copied; place it next to `index.html` so the
//! `/resume.pdf` link resolves on the static host.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Confirm;

use portfolio::content;
use portfolio::web::handlers::render_home;

/// CLI tool for exporting the portfolio page as static files.
#[derive(Parser)]
#[command(name = "export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for index.html
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Print the rendered page to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Skip confirmation prompt when overwriting an existing export
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let profile = content::profile();
    profile
        .validate()
        .context("portfolio content failed validation")?;

    let html = render_home(Arc::new(profile)).context("failed to render page")?;

    if cli.stdout {
        println!("{html}");
        return Ok(());
    }

    let index = cli.out.join("index.html");

    if index.exists() && !cli.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", index.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create {}", cli.out.display()))?;
    fs::write(&index, &html).with_context(|| format!("failed to write {}", index.display()))?;

    println!("{} {}", "Exported".green().bold(), index.display());
    println!("  {} bytes", html.len().to_string().bright_white());
    println!();
    println!(
        "Place {} in the same directory so the resume link resolves.",
        "resume.pdf".cyan()
    );

    Ok(())
}
