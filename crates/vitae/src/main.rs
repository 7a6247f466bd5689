use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitae::artifact::{cover_letter_artifact, resume_artifact, RenderedArtifact};
use vitae::models::{CoverLetterDocument, ResumeDocument};
use vitae::render::{render_cover_letter, render_resume};
use vitae::validation::{validate_cover_letter, validate_resume};

/// Renders résumé and cover-letter JSON documents to XeLaTeX source.
#[derive(Parser)]
#[command(name = "vitae", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a résumé document.
    Resume {
        /// Path to the résumé JSON file.
        input: PathBuf,
        /// Directory the .tex artifact is written to.
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
        /// Print the source to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },
    /// Render a cover letter document.
    Letter {
        /// Path to the cover-letter JSON file.
        input: PathBuf,
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
        #[arg(long)]
        stdout: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Resume {
            input,
            out_dir,
            stdout,
        } => {
            let doc: ResumeDocument = read_document(&input)?;
            validate_resume(&doc).context("resume failed validation")?;
            info!(
                name = %doc.contact.name,
                style = doc.style.code(),
                language = doc.language.code(),
                "rendering resume"
            );
            let artifact = resume_artifact(&doc, render_resume(&doc));
            deliver(artifact, &out_dir, stdout)
        }
        Command::Letter {
            input,
            out_dir,
            stdout,
        } => {
            let doc: CoverLetterDocument = read_document(&input)?;
            validate_cover_letter(&doc).context("cover letter failed validation")?;
            info!(
                name = %doc.contact.name,
                language = doc.language.code(),
                "rendering cover letter"
            );
            let artifact = cover_letter_artifact(&doc, render_cover_letter(&doc));
            deliver(artifact, &out_dir, stdout)
        }
    }
}

fn read_document<T: serde::de::DeserializeOwned>(input: &Path) -> Result<T> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid document", input.display()))
}

fn deliver(artifact: RenderedArtifact, out_dir: &Path, stdout: bool) -> Result<()> {
    if stdout {
        print!("{}", artifact.content);
        return Ok(());
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join(&artifact.filename);
    fs::write(&path, &artifact.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(file = %path.display(), bytes = artifact.content.len(), "wrote document source");
    Ok(())
}
