//! Main application state and logic.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use compact_str::CompactString;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;

use filelens_core::{ByteRange, FileHandle, ReadConfig, ReadRequest, ReadSession};
use filelens_read::{
    MetadataRow, ReadEvent, ReadOutput, ReadTask, Thumbnail, list_metadata, probe_all,
    render_thumbnails, start_read,
};

use crate::event::KeyAction;
use crate::ui;

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Tick interval driving transient-state cleanup.
const TICK_INTERVAL_MS: u64 = 250;

/// How long the loading visual stays after completion.
const LOADING_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// (start, stop) metadata carried by the range keys 1-4.
///
/// The last pair is intentionally non-numeric and therefore falls back
/// to the whole file.
pub const RANGE_PRESETS: [(&str, &str); 4] = [("0", "4"), ("5", "14"), ("6", "7"), ("", "")];

/// What the status line currently reports.
#[derive(Debug, Clone, Default)]
pub enum StatusLine {
    #[default]
    Empty,
    /// Byte-range read summary.
    Summary(String),
    /// Informational message. Cancellations land here, not in `Error`.
    Info(String),
    /// Failure message.
    Error(String),
}

/// Main application state.
pub struct App {
    /// Selected files, in input order.
    pub(crate) files: Vec<FileHandle>,
    /// Projected metadata rows (same order as `files`).
    pub(crate) rows: Vec<MetadataRow>,
    /// Currently highlighted row.
    pub(crate) selected: usize,
    /// Read configuration shared by all reads.
    config: ReadConfig,
    /// Progress session mirrored from the primary read's events.
    pub(crate) session: ReadSession,
    /// Name of the file the primary read targets.
    pub(crate) reading: Option<CompactString>,
    /// The in-flight primary read, if any.
    read_task: Option<ReadTask>,
    /// Byte-range request awaiting completion, for the summary line.
    pending_range: Option<(ByteRange, u64)>,
    /// Receiver for thumbnail completions.
    thumb_rx: Option<mpsc::Receiver<Thumbnail>>,
    /// Thumbnails rendered so far, in completion order.
    pub(crate) thumbnails: Vec<Thumbnail>,
    /// Status line contents.
    pub(crate) status: StatusLine,
    /// Whether the loading visual is shown.
    pub(crate) loading: bool,
    /// When to drop the transient loading visual.
    loading_clear_at: Option<Instant>,
    /// Whether the help overlay is shown.
    pub(crate) show_help: bool,
    /// Flag indicating UI needs redraw.
    needs_redraw: bool,
    quit: bool,
}

impl App {
    /// Probe the given paths and build the initial state.
    pub async fn new(paths: Vec<PathBuf>) -> AppResult<Self> {
        let files = probe_all(paths).await?;
        let rows = list_metadata(&files);

        Ok(Self {
            files,
            rows,
            selected: 0,
            config: ReadConfig::default(),
            session: ReadSession::new(),
            reading: None,
            read_task: None,
            pending_range: None,
            thumb_rx: None,
            thumbnails: Vec::new(),
            status: StatusLine::Empty,
            loading: false,
            loading_clear_at: None,
            show_help: false,
            needs_redraw: true,
            quit: false,
        })
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while !self.quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            let action = KeyAction::from_key_event(key_event);
                            self.handle_action(action);
                        }
                    }
                    self.needs_redraw = true;
                }

                Some(event) = next_read_event(&mut self.read_task) => {
                    self.handle_read_event(event);
                    self.needs_redraw = true;
                }

                Some(thumbnail) = next_thumbnail(&mut self.thumb_rx) => {
                    self.thumbnails.push(thumbnail);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {
                    if self
                        .loading_clear_at
                        .is_some_and(|clear_at| Instant::now() >= clear_at)
                    {
                        self.loading = false;
                        self.loading_clear_at = None;
                        self.needs_redraw = true;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        ui::draw(frame, self);
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit = true,
            KeyAction::MoveDown => {
                if !self.files.is_empty() {
                    self.selected = (self.selected + 1).min(self.files.len() - 1);
                }
            }
            KeyAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyAction::JumpToTop => self.selected = 0,
            KeyAction::JumpToBottom => {
                self.selected = self.files.len().saturating_sub(1);
            }
            KeyAction::StartRead => self.start_primary_read(None),
            KeyAction::RangePreset(index) => {
                let Some(file) = self.files.get(self.selected) else {
                    self.status = StatusLine::Error("Please select a file!".to_string());
                    return;
                };
                let (start, stop) = RANGE_PRESETS[index];
                let range = ByteRange::parse(start, stop, file.size);
                let size = file.size;
                self.start_primary_read(Some((range, size)));
            }
            KeyAction::Thumbnails => {
                self.thumbnails.clear();
                self.thumb_rx = Some(render_thumbnails(&self.files, &self.config));
            }
            KeyAction::CancelRead => {
                // No-op when nothing is in flight
                if let Some(task) = &self.read_task {
                    task.cancel();
                }
            }
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::None => {}
        }
    }

    /// Start a fresh primary read of the selected file.
    ///
    /// A superseded read can no longer update the UI, so it is cancelled
    /// outright when a new one begins.
    fn start_primary_read(&mut self, range: Option<(ByteRange, u64)>) {
        let Some(file) = self.files.get(self.selected) else {
            self.status = StatusLine::Error("Please select a file!".to_string());
            return;
        };

        if let Some(old) = self.read_task.take() {
            old.cancel();
        }

        let request = match range {
            Some((range, _)) => ReadRequest::Range(range),
            None => ReadRequest::Full,
        };

        self.session = ReadSession::new();
        self.reading = Some(file.name.clone());
        self.pending_range = range;
        self.status = StatusLine::Empty;
        self.loading = false;
        self.loading_clear_at = None;
        self.read_task = Some(start_read(file, request, &self.config));
    }

    fn handle_read_event(&mut self, event: ReadEvent) {
        match event {
            ReadEvent::Started { bytes_total } => {
                self.session.start(bytes_total);
                self.loading = true;
            }
            ReadEvent::Progress(progress) => {
                self.session.record(progress.bytes_loaded);
            }
            ReadEvent::Complete(output) => {
                self.session.complete();
                self.loading_clear_at = Some(Instant::now() + LOADING_CLEAR_DELAY);
                self.status = match (self.pending_range.take(), output) {
                    (Some((range, size)), _) => StatusLine::Summary(range.summary(size)),
                    (None, ReadOutput::Bytes(bytes)) => {
                        let name = self.reading.as_deref().unwrap_or("file");
                        StatusLine::Info(format!("Read {} bytes from {name}.", bytes.len()))
                    }
                    (None, ReadOutput::DataUrl(url)) => {
                        StatusLine::Info(format!("Encoded {} characters.", url.len()))
                    }
                };
                self.read_task = None;
            }
            ReadEvent::Failed(err) => {
                self.session.fail();
                self.loading = false;
                self.pending_range = None;
                self.status = if err.is_abort() {
                    StatusLine::Info(err.to_string())
                } else {
                    StatusLine::Error(err.to_string())
                };
                self.read_task = None;
            }
            ReadEvent::Aborted => {
                self.session.abort();
                self.loading = false;
                self.pending_range = None;
                self.status = StatusLine::Info("File read cancelled.".to_string());
                self.read_task = None;
            }
        }
    }
}

async fn next_read_event(task: &mut Option<ReadTask>) -> Option<ReadEvent> {
    match task {
        Some(task) => task.events.recv().await,
        None => std::future::pending().await,
    }
}

async fn next_thumbnail(rx: &mut Option<mpsc::Receiver<Thumbnail>>) -> Option<Thumbnail> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
