//! Session facade — the entry point the presentation layer drives.
//!
//! `MetadataSession` is the explicit context object owning all mutable
//! application state: credential, active platform, file list, settings,
//! the generation engine with its result list and pause flag, preview
//! handles and the history store. Methods here perform parameter checks
//! and forward to the `services` layer; no generation logic lives in this
//! module. Observers learn about every change through the session's event
//! channel and read-only snapshots.

pub mod intake;

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::api::simulated::{SimulatedMetadataApi, SIMULATED_LATENCY_MS};
use crate::error::AppError;
use crate::export::csv::{self as csv_export, CsvExport};
use crate::models::file::FileEntry;
use crate::models::history::HistoryRecord;
use crate::models::metadata::{MetadataResult, ResultUpdate};
use crate::models::platform::StockPlatform;
use crate::models::settings::GenerationSettings;
use crate::services::events::{EventSink, SessionEvent};
use crate::services::generation_engine::{BatchOutcome, GenerationEngine};
use crate::services::preview::PreviewRegistry;
use crate::storage::history::HistoryStore;
use crate::storage::settings::SettingsStore;

pub struct MetadataSession {
    api_key: String,
    platform: StockPlatform,
    files: Vec<FileEntry>,
    settings: SettingsStore,
    history: HistoryStore,
    previews: PreviewRegistry,
    engine: GenerationEngine,
    sink: EventSink,
    generation_latency: Duration,
}

impl MetadataSession {
    /// Create a session together with the event stream its observers
    /// drain.
    pub fn new() -> (Self, UnboundedReceiver<SessionEvent>) {
        let (sink, rx) = EventSink::channel();
        let session = Self {
            api_key: String::new(),
            platform: StockPlatform::default(),
            files: Vec::new(),
            settings: SettingsStore::new(),
            history: HistoryStore::new(),
            previews: PreviewRegistry::new(),
            engine: GenerationEngine::new(sink.clone()),
            sink,
            generation_latency: Duration::from_millis(SIMULATED_LATENCY_MS),
        };
        (session, rx)
    }

    /// Store the API key for the session. Held in memory only; the core
    /// never transmits it.
    pub fn set_api_key(&mut self, key: &str) {
        self.api_key = key.trim().to_string();
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn set_platform(&mut self, platform: StockPlatform) {
        self.platform = platform;
    }

    pub fn platform(&self) -> StockPlatform {
        self.platform
    }

    /// Resolve dropped paths and append the resulting entries. Returns
    /// how many files were added.
    pub async fn add_dropped_paths(&mut self, paths: Vec<String>) -> crate::error::Result<usize> {
        let entries = intake::resolve_dropped_paths(paths).await?;
        let added = entries.len();
        self.files.extend(entries);
        Ok(added)
    }

    /// Append an already-resolved entry (the file-selection surface).
    pub fn add_file(&mut self, entry: FileEntry) {
        self.files.push(entry);
    }

    /// Remove the file at `index`; `None` when out of range.
    pub fn remove_file(&mut self, index: usize) -> Option<FileEntry> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Clear files and results, release every preview handle and reset
    /// progress and status.
    pub async fn clear(&mut self) {
        self.files.clear();
        self.previews.release_all();
        self.engine.clear().await;
        self.sink.progress(0);
        self.sink.status("Ready.");
    }

    pub fn settings(&self) -> GenerationSettings {
        self.settings.get_settings()
    }

    pub fn save_settings(&mut self, settings: GenerationSettings) {
        self.settings.save_settings(settings);
    }

    /// Start a new batch over the current file list.
    ///
    /// Fails fast with a notice — and without touching any result state —
    /// when the credential is missing or the file list is empty.
    pub async fn start_generation(&mut self) -> crate::error::Result<BatchOutcome> {
        let api = match self.build_api() {
            Ok(api) => api,
            Err(err) => {
                self.sink.notice(
                    "API Key Required",
                    "Please set your API key to generate metadata.",
                );
                return Err(err);
            }
        };
        if self.files.is_empty() {
            self.sink
                .notice("No Files", "Please upload files to generate metadata.");
            return Err(AppError::Input("No files to process".into()));
        }

        self.engine.begin_batch(&self.files, &mut self.previews).await?;
        self.run_to_outcome(&api).await
    }

    /// Resume a paused batch from the first pending file.
    pub async fn resume_generation(&mut self) -> crate::error::Result<BatchOutcome> {
        if !self.engine.has_batch().await {
            return Err(AppError::Input("No batch has been started".into()));
        }
        let api = self.build_api()?;
        self.engine.set_paused(false);
        self.run_to_outcome(&api).await
    }

    /// Request a pause; takes effect at the next file boundary.
    pub fn pause(&self) {
        self.engine.set_paused(true);
    }

    pub fn is_paused(&self) -> bool {
        self.engine.is_paused()
    }

    pub async fn results(&self) -> Vec<MetadataResult> {
        self.engine.results().await
    }

    /// Apply an inline edit to one result.
    pub async fn update_result(
        &self,
        id: &str,
        update: ResultUpdate,
    ) -> crate::error::Result<()> {
        self.engine.update_result(id, update).await
    }

    fn build_api(&self) -> crate::error::Result<SimulatedMetadataApi> {
        SimulatedMetadataApi::with_latency(&self.api_key, self.generation_latency)
    }

    async fn run_to_outcome(
        &mut self,
        api: &SimulatedMetadataApi,
    ) -> crate::error::Result<BatchOutcome> {
        let settings = self.settings.get_settings();
        let outcome = self.engine.process(api, &settings).await?;
        if let BatchOutcome::Completed { completed, errored } = outcome {
            let total = completed + errored;
            self.sink.notice(
                "Generation Complete",
                &format!("Processed {} files.", total),
            );
            self.history
                .add_record(HistoryRecord::new(total, self.platform.label()));
        }
        Ok(outcome)
    }

    /// Render the current results as a CSV document for the download
    /// surface.
    pub async fn export_csv(&self) -> crate::error::Result<CsvExport> {
        let results = self.engine.results().await;
        if results.is_empty() {
            self.sink
                .notice("No Results", "Generate metadata first before exporting.");
            return Err(AppError::Input("No results to export".into()));
        }
        let document = csv_export::export(&results)?;
        self.sink.notice("Export Complete", "CSV file ready.");
        Ok(document)
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.get_all()
    }

    pub fn delete_history(&mut self, id: &str) {
        self.history.delete_record(id);
        self.sink.notice("Deleted", "History item removed.");
    }

    /// Acknowledge a history entry. Restoring its results is not
    /// supported; the entry is only looked up and announced.
    pub fn load_history(&self, id: &str) -> crate::error::Result<()> {
        match self.history.get(id) {
            Some(record) => {
                self.sink
                    .notice("History Loaded", &format!("Loaded history {}", record.id));
                Ok(())
            }
            None => Err(AppError::Input(format!("No history entry with id: {}", id))),
        }
    }

    /// Tune the simulated generation latency (tests and demos).
    pub fn set_generation_latency(&mut self, latency: Duration) {
        self.generation_latency = latency;
    }
}
