/*!
 * Common test utilities for the vttscrub test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Rolling captions as produced by automatic captioning, with word timing tags
pub const ROLLING_CAPTIONS: &str = "WEBVTT
Kind: captions
Language: en

00:00:00.000 --> 00:00:02.070 align:start position:0%

so<00:00:00.320><c> today</c><00:00:00.640><c> we're</c><00:00:00.960><c> going</c>

00:00:02.070 --> 00:00:02.080 align:start position:0%
so today we're going


00:00:02.080 --> 00:00:04.950 align:start position:0%
so today we're going
to<00:00:02.399><c> talk</c><00:00:02.720><c> about</c><00:00:03.040><c> rust</c>

00:00:04.950 --> 00:00:04.960 align:start position:0%
to talk about rust


00:00:04.960 --> 00:00:07.000 align:start position:0%
to talk about rust
and<c> why</c><c> it</c><c> matters</c>
";

/// Expected transcript for `ROLLING_CAPTIONS`
pub const ROLLING_TRANSCRIPT: &str = "so today we're going\nto talk about rust\nand why it matters";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample caption file for testing
pub fn create_test_captions(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, ROLLING_CAPTIONS)
}

/// Builds a VTT document with one numbered cue per text line
pub fn build_vtt(lines: &[&str]) -> String {
    let mut vtt = String::from("WEBVTT\n\n");
    for (i, line) in lines.iter().enumerate() {
        let start = i % 50;
        vtt.push_str(&format!(
            "{}\n00:00:{:02}.000 --> 00:00:{:02}.500\n{}\n\n",
            i + 1,
            start,
            start,
            line
        ));
    }
    vtt
}
