/*!
 * # vttscrub - readable transcripts from auto-generated WebVTT captions
 *
 * Automatic captioning emits overlapping cues: the same words show up again
 * and again as the captioner refines what it heard. This library turns such
 * a caption file into a plain transcript with each utterance kept once, in
 * its longest observed form.
 *
 * ## Features
 *
 * - Skips headers, timing lines, cue numbers and blank lines
 * - Strips inline `<...>` markup such as word timestamps and color classes
 * - Collapses exact repeats and growing prefixes/suffixes within a
 *   configurable recency window (20 lines by default)
 * - Cleans single files, whole directories, or stdin
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `vtt_cleaner`: the pure cleaning pipeline:
 *   - `vtt_cleaner::classifier`: line classification
 *   - `vtt_cleaner::stripper`: tag stripping
 *   - `vtt_cleaner::dedup`: the dedup engine
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Single file and folder runs
 * - `errors`: Custom error types for the application
 *
 * ## Example
 *
 * ```
 * let raw = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello world\n\n\
 *            00:00:01.000 --> 00:00:03.000\nHello world there\n";
 * assert_eq!(vttscrub::clean_vtt_content(raw), "Hello world there");
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod vtt_cleaner;

// Re-export main types for easier usage
pub use app_config::{CleanerConfig, Config};
pub use app_controller::{Controller, FileOutcome, FolderSummary};
pub use errors::{AppError, ConfigError};
pub use vtt_cleaner::{clean_vtt_content, CleanReport, CleanStats, VttCleaner};
