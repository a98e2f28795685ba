// src/cli.rs
use anyhow::{Context as _, Result, anyhow, bail};
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::config::Settings;
use crate::session::{TagSession, Workspace};
use crate::utils::absolutize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder to scan, repeat for several (current directory when neither
    /// folders nor files are given)
    #[arg(short = 'd', long = "directory")]
    pub directories: Vec<PathBuf>,

    /// Single file to scan as if open in the editor, repeatable
    #[arg(short = 'f', long = "file")]
    pub files: Vec<PathBuf>,

    /// Settings file (defaults to the nearest .tagify.toml above the first folder)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tag anchor overriding the settings (e.g. "#@")
    #[arg(short, long)]
    pub anchor: Option<String>,

    /// List tag names instead of printing the summary
    #[arg(short, long)]
    pub tags: bool,

    /// Print the file position behind a summary label (e.g. "notes/a.md:3")
    #[arg(short, long)]
    pub jump: Option<String>,

    /// Print scan counters after the output
    #[arg(short, long)]
    pub stats: bool,
}

/// Runs the command and returns what it would print.
///
/// # Errors
///
/// This function may return an error if:
/// * An explicit settings file cannot be read
/// * The anchor override is empty
/// * The scan cannot compile the anchor
/// * `--jump` names a label the summary does not contain
pub fn execute(args: &Args) -> Result<String> {
    let settings = load_settings(args)?;
    let mut session = TagSession::new(settings);
    let roots = if args.directories.is_empty() && args.files.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.directories.clone()
    };
    let workspace = Workspace::new(roots, args.files.clone());

    let index = session
        .scan(&workspace)
        .context("Failed to scan for tags")?;

    let mut out = String::new();
    if args.tags {
        for tag in session.tag_menu() {
            writeln!(out, "{tag}")?;
        }
    } else if let Some(label) = &args.jump {
        session.summarize(&index);
        let occurrence = session
            .navigate(label)
            .ok_or_else(|| anyhow!("No tag occurrence labelled '{label}'"))?;
        writeln!(out, "{}", occurrence.encoded_position())?;
    } else {
        out.push_str(&session.summarize(&index).text);
    }

    if args.stats {
        let stats = session.last_stats();
        writeln!(out, "Files seen: {}", stats.files_seen)?;
        writeln!(out, "Files scanned: {}", stats.files_scanned)?;
        writeln!(out, "Files skipped: {}", stats.files_skipped)?;
        writeln!(out, "Scanned: {:.1}%", stats.scanned_percentage())?;
        writeln!(out, "Tags: {}", index.len())?;
        writeln!(out, "Occurrences: {}", index.occurrence_count())?;
    }

    Ok(out)
}

/// Runs the command, printing its output.
///
/// # Errors
///
/// See [`execute`].
pub fn run(args: Args) -> Result<()> {
    let out = execute(&args)?;
    print!("{out}");
    Ok(())
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = if let Some(path) = &args.config {
        Settings::load(path)?
    } else {
        let start = args
            .directories
            .first()
            .cloned()
            .or_else(|| {
                args.files
                    .first()
                    .and_then(|file| file.parent())
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from("."));
        let start = absolutize(&start)
            .with_context(|| format!("Failed to resolve directory: {}", start.display()))?;
        Settings::discover(&start)?
    };

    if let Some(anchor) = &args.anchor {
        if anchor.is_empty() {
            bail!("Tag anchor must not be empty");
        }
        settings.tag_anchor.clone_from(anchor);
    }

    Ok(settings)
}
