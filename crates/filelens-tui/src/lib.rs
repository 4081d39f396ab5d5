//! Terminal user interface for filelens.
//!
//! This crate provides an interactive surface for inspecting local files,
//! built with ratatui.
//!
//! # Overview
//!
//! The UI shows the selected files as metadata rows and lets the user
//! trigger reads against the highlighted file:
//!
//! - **Progress read** - read the whole file with a live progress gauge
//! - **Range reads** - preset byte-range reads with a summary line
//! - **Thumbnails** - render every image file as a base64 data URL
//!
//! # Keyboard
//!
//! - `j`/`k` - Move down/up
//! - `Enter` - Read the selected file with progress
//! - `c`/`Esc` - Cancel the in-flight read
//! - `1`-`4` - Preset byte-range reads
//! - `t` - Render thumbnails
//! - `?` - Help
//! - `q` - Quit

mod app;
mod event;
mod ui;

pub use app::{App, AppResult};

/// Run the TUI application over the given files.
pub fn run(paths: Vec<std::path::PathBuf>) -> AppResult<()> {
    // Create tokio runtime for async reads
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(async {
        let app = App::new(paths).await?;
        app.run(terminal).await
    });
    ratatui::restore();

    // Shutdown runtime immediately to cancel background reads
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
