//! Generation engine — drives one batch of files through the metadata
//! pipeline, strictly sequentially and in input order.
//!
//! Each file's generation call is a suspension point; the pause flag is
//! checked only at file boundaries, so an in-flight file is never
//! interrupted. Every per-result mutation happens fully under one lock
//! acquisition and is republished as a cloned snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::api::{GenerationRequest, MetadataApi};
use crate::error::AppError;
use crate::models::file::FileEntry;
use crate::models::metadata::{MetadataResult, ResultStatus};
use crate::models::settings::GenerationSettings;
use crate::services::events::{EventSink, SessionEvent};
use crate::services::preview::PreviewRegistry;

/// Upper bound on a single generation call. Expiry is recorded as a
/// per-file error, not a batch failure.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a processing pass ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every file reached a terminal status.
    Completed { completed: usize, errored: usize },
    /// The pause flag was set; files from `resume_index` on are still
    /// pending and a later pass picks up exactly there.
    Paused { resume_index: usize },
}

#[derive(Default)]
struct BatchState {
    files: Vec<FileEntry>,
    results: Vec<MetadataResult>,
}

pub struct GenerationEngine {
    state: Arc<Mutex<BatchState>>,
    paused: Arc<AtomicBool>,
    sink: EventSink,
    timeout: Duration,
}

impl GenerationEngine {
    pub fn new(sink: EventSink) -> Self {
        Self {
            state: Arc::new(Mutex::new(BatchState::default())),
            paused: Arc::new(AtomicBool::new(false)),
            sink,
            timeout: GENERATION_TIMEOUT,
        }
    }

    /// Same engine with a custom per-file timeout.
    pub fn with_timeout(sink: EventSink, timeout: Duration) -> Self {
        let mut engine = Self::new(sink);
        engine.timeout = timeout;
        engine
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Snapshot of the current result list.
    pub async fn results(&self) -> Vec<MetadataResult> {
        self.state.lock().await.results.clone()
    }

    pub async fn has_batch(&self) -> bool {
        !self.state.lock().await.results.is_empty()
    }

    /// Initialize a batch: one pending result per file, preview handles
    /// for image-kind files. Fails on an empty input with no state
    /// mutation. Handles from a replaced batch are released first.
    pub async fn begin_batch(
        &self,
        files: &[FileEntry],
        previews: &mut PreviewRegistry,
    ) -> crate::error::Result<()> {
        if files.is_empty() {
            return Err(AppError::Input("No files to process".into()));
        }

        previews.release_all();
        let results: Vec<MetadataResult> = files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                MetadataResult::pending(index, &file.file_name, previews.acquire(file))
            })
            .collect();

        let mut state = self.state.lock().await;
        state.files = files.to_vec();
        state.results = results;

        self.sink.progress(0);
        self.sink.emit(SessionEvent::BatchStarted {
            total: state.files.len(),
        });
        Ok(())
    }

    /// Drop the current batch. The caller is responsible for releasing
    /// preview handles alongside.
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.files.clear();
        state.results.clear();
        self.set_paused(false);
    }

    /// Apply a partial edit to the result with the given id and republish
    /// it. Fails for an unknown id.
    pub async fn update_result(
        &self,
        id: &str,
        update: crate::models::metadata::ResultUpdate,
    ) -> crate::error::Result<()> {
        let mut state = self.state.lock().await;
        let index = state
            .results
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::Input(format!("No result with id: {}", id)))?;

        let result = &mut state.results[index];
        if let Some(title) = update.title {
            result.title = title;
        }
        if let Some(description) = update.description {
            result.description = description;
        }
        if let Some(keywords) = update.keywords {
            result.keywords = keywords;
        }
        self.sink.result_changed(index, state.results[index].clone());
        Ok(())
    }

    /// Process the batch from the first pending file onward.
    ///
    /// Called both for a fresh batch and to resume a paused one; earlier
    /// files keep their terminal statuses and are never reprocessed.
    pub async fn process<A: MetadataApi>(
        &self,
        api: &A,
        settings: &GenerationSettings,
    ) -> crate::error::Result<BatchOutcome> {
        let (total, start) = {
            let state = self.state.lock().await;
            let start = state
                .results
                .iter()
                .position(|r| r.status == ResultStatus::Pending)
                .unwrap_or(state.results.len());
            (state.results.len(), start)
        };
        if total == 0 {
            return Err(AppError::Input("No batch has been started".into()));
        }

        self.sink.status("Processing...");

        for index in start..total {
            if self.is_paused() {
                self.sink.status("Paused");
                return Ok(BatchOutcome::Paused {
                    resume_index: index,
                });
            }

            let request = {
                let mut state = self.state.lock().await;
                state.results[index].status = ResultStatus::Processing;
                self.sink.result_changed(index, state.results[index].clone());
                let file = &state.files[index];
                GenerationRequest {
                    file_name: file.file_name.clone(),
                    media_kind: file.media_kind,
                    settings: settings.clone(),
                }
            };

            let generated = match tokio::time::timeout(self.timeout, api.generate(request)).await {
                Ok(result) => result,
                Err(_) => Err(AppError::Generation(format!(
                    "generation timed out after {:?}",
                    self.timeout
                ))),
            };

            {
                let mut state = self.state.lock().await;
                let result = &mut state.results[index];
                match generated {
                    Ok(meta) => {
                        result.title = meta.title;
                        result.description = meta.description;
                        result.keywords = meta.keywords;
                        result.status = ResultStatus::Completed;
                    }
                    Err(err) => {
                        log::warn!(
                            "generation failed for '{}' (index {}): {}",
                            result.file_name,
                            index,
                            err
                        );
                        result.status = ResultStatus::Error;
                    }
                }
                self.sink.result_changed(index, state.results[index].clone());
            }

            let percent = (((index + 1) as f64 / total as f64) * 100.0).round() as u8;
            self.sink.progress(percent);
        }

        let (completed, errored) = {
            let state = self.state.lock().await;
            let completed = state
                .results
                .iter()
                .filter(|r| r.status == ResultStatus::Completed)
                .count();
            let errored = state
                .results
                .iter()
                .filter(|r| r.status == ResultStatus::Error)
                .count();
            (completed, errored)
        };

        self.sink.status("Complete!");
        self.sink.emit(SessionEvent::BatchFinished {
            processed: completed,
            errored,
        });
        Ok(BatchOutcome::Completed { completed, errored })
    }
}
