//! filelens - inspect local files from the terminal.
//!
//! Usage:
//!   flens [PATH]               Launch interactive TUI
//!   flens list [PATHS]...      Print a metadata row per file
//!   flens thumbs [PATHS]...    Render image thumbnails as data URLs
//!   flens range PATH           Read a byte range of a file
//!   flens read PATH            Progress-tracked read (Ctrl-C cancels)
//!   flens --help               Show help

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use humansize::{DECIMAL, format_size};

use filelens_core::{ByteRange, ReadConfig, ReadRequest, ReadSession};
use filelens_read::{
    ReadEvent, ReadOutput, list_metadata, probe, probe_all, render_thumbnails, start_read,
};

#[derive(Parser)]
#[command(
    name = "filelens",
    version,
    about = "Inspect local files: metadata, thumbnails, byte ranges, cancellable reads",
    long_about = "filelens lets you look at local files the way a preview pane would:\n\
                  metadata rows, image thumbnails as data URLs, byte-range reads, and\n\
                  progress-tracked reads you can cancel.\n\n\
                  Launch the interactive TUI by running `flens [PATH]`, or use\n\
                  subcommands for quick operations."
)]
struct Cli {
    /// Path to inspect (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a metadata row for each file
    List {
        /// Files to list
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Render image thumbnails as base64 data URLs
    Thumbs {
        /// Files to consider (non-images are ignored)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write an HTML gallery instead of printing to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a byte range of a file and report it
    Range {
        /// File to read from
        path: PathBuf,

        /// First byte offset (inclusive); non-numeric means start of file
        #[arg(short, long, default_value = "")]
        start: String,

        /// Last byte offset (inclusive); non-numeric means end of file
        #[arg(short, long, default_value = "")]
        end: String,
    },

    /// Read a whole file with progress reporting (Ctrl-C cancels)
    Read {
        /// File to read
        path: PathBuf,

        /// Bytes per read step
        #[arg(long)]
        chunk_size: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        None => {
            let paths = collect_paths(&cli.path)?;
            filelens_tui::run(paths)
        }
        Some(command) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_command(command))
        }
    }
}

/// Expand the TUI's default path argument into a file selection.
fn collect_paths(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

async fn run_command(command: Command) -> Result<()> {
    match command {
        Command::List { paths, format } => run_list(paths, format).await,
        Command::Thumbs { paths, output } => run_thumbs(paths, output).await,
        Command::Range { path, start, end } => run_range(path, &start, &end).await,
        Command::Read { path, chunk_size } => run_read(path, chunk_size).await,
    }
}

async fn run_list(paths: Vec<PathBuf>, format: OutputFormat) -> Result<()> {
    let files = probe_all(paths).await?;
    let rows = list_metadata(&files);

    match format {
        OutputFormat::Text => {
            for row in &rows {
                println!("{row}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

async fn run_thumbs(paths: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let files = probe_all(paths).await?;

    let mut rx = render_thumbnails(&files, &ReadConfig::default());
    let mut thumbnails = Vec::new();
    while let Some(thumbnail) = rx.recv().await {
        thumbnails.push(thumbnail);
    }

    match output {
        Some(path) => {
            let mut html = String::from("<!doctype html>\n<ul>\n");
            for thumbnail in &thumbnails {
                html.push_str(&format!(
                    "  <li><img class=\"thumb\" src=\"{}\" title=\"{}\"></li>\n",
                    thumbnail.data_url, thumbnail.name
                ));
            }
            html.push_str("</ul>\n");
            tokio::fs::write(&path, html)
                .await
                .with_context(|| format!("Failed to write gallery {}", path.display()))?;
            println!("Wrote {} thumbnails to {}", thumbnails.len(), path.display());
        }
        None => {
            for thumbnail in &thumbnails {
                println!("{}\t{}", thumbnail.name, thumbnail.data_url);
            }
        }
    }
    Ok(())
}

async fn run_range(path: PathBuf, start: &str, end: &str) -> Result<()> {
    let file = probe(&path).await?;
    let range = ByteRange::parse(start, end, file.size);

    let mut task = start_read(&file, ReadRequest::Range(range), &ReadConfig::default());
    while let Some(event) = task.events.recv().await {
        match event {
            ReadEvent::Complete(ReadOutput::Bytes(_)) => {
                println!("{}", range.summary(file.size));
            }
            ReadEvent::Failed(err) => return Err(err.into()),
            _ => {}
        }
    }
    Ok(())
}

async fn run_read(path: PathBuf, chunk_size: Option<usize>) -> Result<()> {
    let file = probe(&path).await?;

    let mut builder = ReadConfig::builder();
    if let Some(chunk_size) = chunk_size {
        builder.chunk_size(chunk_size);
    }
    let config = builder.build()?;

    let mut task = start_read(&file, ReadRequest::Full, &config);
    let mut session = ReadSession::new();
    let mut last_rendered = None;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut cancel_requested = false;

    loop {
        tokio::select! {
            _ = &mut ctrl_c, if !cancel_requested => {
                task.cancel();
                cancel_requested = true;
            }

            event = task.events.recv() => {
                let Some(event) = event else { break };
                match event {
                    ReadEvent::Started { bytes_total } => {
                        session.start(bytes_total);
                        eprintln!("Reading {}...", file.name);
                    }
                    ReadEvent::Progress(progress) => {
                        session.record(progress.bytes_loaded);
                        if let Some(pct) = session.display_percent() {
                            if last_rendered != Some(pct) {
                                eprint!("\r{pct}%");
                                std::io::stderr().flush().ok();
                                last_rendered = Some(pct);
                            }
                        }
                    }
                    ReadEvent::Complete(ReadOutput::Bytes(bytes)) => {
                        session.complete();
                        eprintln!("\r100%");
                        println!(
                            "Read {} ({} bytes) from {}.",
                            format_size(bytes.len() as u64, DECIMAL),
                            bytes.len(),
                            file.name
                        );
                    }
                    ReadEvent::Complete(_) => {
                        session.complete();
                    }
                    ReadEvent::Failed(err) => {
                        eprintln!();
                        return Err(err.into());
                    }
                    ReadEvent::Aborted => {
                        session.abort();
                        eprintln!();
                        println!("File read cancelled.");
                    }
                }
            }
        }
    }

    Ok(())
}
