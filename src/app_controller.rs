use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::{FileManager, FileType};
use crate::vtt_cleaner::{CleanReport, CleanStats, VttCleaner};

// @module: Application controller for caption cleaning

/// Result of handling a single caption file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Transcript written to `path`
    Written { path: PathBuf, stats: CleanStats },
    /// Transcript already existed and overwrite was not requested
    Skipped { path: PathBuf },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Written { path, .. } | FileOutcome::Skipped { path } => path,
        }
    }
}

/// Counts reported at the end of a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller: reads captions, cleans them, writes transcripts
#[derive(Debug, Clone)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Cleaner built from config.cleaner
    cleaner: VttCleaner,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new() -> Self {
        let config = Config::default();
        let cleaner = VttCleaner::new(config.cleaner.clone());
        Self { config, cleaner }
    }

    // @method: Create a new controller with the given (validated) configuration
    pub fn with_config(config: Config) -> std::result::Result<Self, AppError> {
        config.validate()?;
        let cleaner = VttCleaner::new(config.cleaner.clone());
        Ok(Self { config, cleaner })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clean caption text held in memory. A leading byte order mark is dropped
    /// so it cannot hide the `WEBVTT` header.
    pub fn clean_text(&self, vtt_content: &str) -> CleanReport {
        self.cleaner.clean_with_stats(FileManager::strip_bom(vtt_content))
    }

    /// Transcript path for a caption file
    pub fn output_path_for(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(input_file, output_dir, &self.config.output.extension)
    }

    /// Clean one caption file into `output_dir`
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<FileOutcome> {
        let start_time = Instant::now();

        let outcome = self.process_file(&input_file, &output_dir, force_overwrite)?;

        if let FileOutcome::Written { path, .. } = &outcome {
            info!("Success: {} ({})", path.display(), Self::format_duration(start_time.elapsed()));
        }

        Ok(outcome)
    }

    /// Read, clean and write a single file. Synchronous so it can run on a
    /// blocking worker in folder mode.
    pub fn process_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(AppError::File(format!("Input file does not exist: {:?}", input_file)).into());
        }

        let output_path = self.output_path_for(input_file, output_dir);
        if output_path == input_file {
            return Err(AppError::File(format!(
                "Output path would overwrite the input file: {:?} (change the output extension)",
                input_file
            ))
            .into());
        }

        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, transcript already exists (use -f to force overwrite)", input_file);
            return Ok(FileOutcome::Skipped { path: output_path });
        }

        if FileManager::detect_file_type(input_file)? == FileType::Unknown {
            warn!("{:?} does not look like a WebVTT file, cleaning it anyway", input_file);
        }

        let content = FileManager::read_to_string(input_file)?;
        let report = self.clean_text(&content);
        debug!("{}: {}", input_file.display(), report.stats);

        let mut transcript = report.transcript;
        if !transcript.is_empty() {
            transcript.push('\n');
        }
        FileManager::write_to_file(&output_path, &transcript)?;

        Ok(FileOutcome::Written {
            path: output_path,
            stats: report.stats,
        })
    }

    /// Clean every `.vtt` file under `input_dir`.
    ///
    /// Transcripts go next to their caption file, or under `output_dir` at the
    /// same relative location. Per-file failures are logged and counted, not
    /// returned.
    pub async fn run_folder(&self, input_dir: PathBuf, output_dir: Option<PathBuf>, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let caption_files = FileManager::find_files(&input_dir, "vtt")?;
        if caption_files.is_empty() {
            return Err(anyhow!("No .vtt files found in directory: {:?}", input_dir));
        }

        info!("Found {} caption file(s) in {:?}", caption_files.len(), input_dir);

        let folder_pb = ProgressBar::new(caption_files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style.progress_chars("█▓▒░"));
        folder_pb.set_message("Cleaning captions");

        let mut results = stream::iter(caption_files.into_iter().enumerate())
            .map(|(index, caption_file)| {
                let controller = self.clone();
                let target_dir = Self::target_dir_for(&caption_file, &input_dir, output_dir.as_deref());
                let pb = folder_pb.clone();

                async move {
                    let task_file = caption_file.clone();
                    let result = tokio::task::spawn_blocking(move || {
                        controller.process_file(&task_file, &target_dir, force_overwrite)
                    })
                    .await
                    .map_err(|e| anyhow::Error::from(AppError::Unknown(format!("Cleaning task failed: {}", e))))
                    .and_then(|result| result);

                    pb.inc(1);
                    (index, caption_file, result)
                }
            })
            .buffer_unordered(self.config.output.concurrent_files)
            .collect::<Vec<_>>()
            .await;

        folder_pb.finish_and_clear();

        // Report in directory order, not completion order
        results.sort_by_key(|(index, _, _)| *index);

        let mut summary = FolderSummary::default();
        for (_, caption_file, result) in results {
            match result {
                Ok(FileOutcome::Written { path, stats }) => {
                    debug!("{} -> {} ({})", caption_file.display(), path.display(), stats);
                    summary.processed += 1;
                }
                Ok(FileOutcome::Skipped { .. }) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", caption_file.display(), e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Folder processing completed: {} processed, {} skipped, {} errors in {}",
            summary.processed,
            summary.skipped,
            summary.failed,
            Self::format_duration(start_time.elapsed())
        );

        Ok(summary)
    }

    // Output directory for one file found during a folder run
    fn target_dir_for(caption_file: &Path, input_dir: &Path, output_dir: Option<&Path>) -> PathBuf {
        let parent = caption_file.parent().unwrap_or(input_dir);

        match output_dir {
            None => parent.to_path_buf(),
            Some(root) => match parent.strip_prefix(input_dir) {
                Ok(relative) => root.join(relative),
                Err(_) => root.to_path_buf(),
            },
        }
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
