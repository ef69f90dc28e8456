/*!
 * Tests for the application controller lifecycle
 */

use anyhow::Result;
use vttscrub::app_config::Config;
use vttscrub::app_controller::{Controller, FileOutcome, FolderSummary};
use vttscrub::errors::AppError;
use vttscrub::file_utils::FileManager;
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

/// Test that an invalid config is rejected up front
#[test]
fn test_controller_initialization_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.cleaner.recency_window = 0;

    let result = Controller::with_config(config);
    assert!(matches!(result, Err(AppError::Config(_))));
}

/// Test a single file run followed by a second run without force
#[test]
fn test_run_withExistingTranscript_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let captions = common::create_test_captions(temp_dir.path(), "talk.vtt")?;
    let output_dir = temp_dir.path().to_path_buf();
    let controller = Controller::new();

    let first = tokio_test::block_on(controller.run(captions.clone(), output_dir.clone(), false))?;
    assert!(matches!(first, FileOutcome::Written { .. }));

    // Tamper with the transcript so an overwrite is observable
    FileManager::write_to_file(first.path(), "stale")?;

    let second = tokio_test::block_on(controller.run(captions.clone(), output_dir.clone(), false))?;
    assert!(matches!(second, FileOutcome::Skipped { .. }));
    assert_eq!(FileManager::read_to_string(second.path())?, "stale");

    let third = tokio_test::block_on(controller.run(captions, output_dir, true))?;
    assert!(matches!(third, FileOutcome::Written { .. }));
    assert_eq!(
        FileManager::read_to_string(third.path())?,
        format!("{}\n", common::ROLLING_TRANSCRIPT)
    );

    Ok(())
}

/// Test that a missing input file is an error
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new();

    let result = tokio_test::block_on(controller.run(
        temp_dir.path().join("nope.vtt"),
        temp_dir.path().to_path_buf(),
        false,
    ));
    let err = result.expect_err("missing input must fail");
    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::File(_))));

    Ok(())
}

/// Test folder processing with nested directories and an existing transcript
#[tokio::test]
async fn test_run_folder_withSeveralFiles_shouldCleanEachOnce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_captions(temp_dir.path(), "a.vtt")?;
    common::create_test_captions(temp_dir.path(), "season1/b.vtt")?;
    common::create_test_file(temp_dir.path(), "season1/c.vtt", &common::build_vtt(&["Hi", "Hi there"]))?;
    common::create_test_file(temp_dir.path(), "season1/c.txt", "already cleaned")?;
    common::create_test_file(temp_dir.path(), "notes.md", "ignored")?;

    let controller = Controller::new();
    let summary = controller
        .run_folder(temp_dir.path().to_path_buf(), None, false)
        .await?;

    assert_eq!(summary, FolderSummary { processed: 2, skipped: 1, failed: 0 });
    assert_eq!(
        FileManager::read_to_string(temp_dir.path().join("season1/b.txt"))?,
        format!("{}\n", common::ROLLING_TRANSCRIPT)
    );
    assert_eq!(
        FileManager::read_to_string(temp_dir.path().join("season1/c.txt"))?,
        "already cleaned"
    );

    Ok(())
}

/// Test folder processing into a separate output directory
#[tokio::test]
async fn test_run_folder_withOutputDir_shouldMirrorLayout() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_file(input_dir.path(), "x/one.vtt", &common::build_vtt(&["Hello", "Hello world"]))?;
    common::create_test_file(input_dir.path(), "y/one.vtt", &common::build_vtt(&["Bye"]))?;

    let mut config = Config::default();
    config.output.concurrent_files = 1;
    let controller = Controller::with_config(config)?;

    let summary = controller
        .run_folder(input_dir.path().to_path_buf(), Some(output_dir.path().to_path_buf()), false)
        .await?;

    assert_eq!(summary.processed, 2);
    assert_eq!(FileManager::read_to_string(output_dir.path().join("x/one.txt"))?, "Hello world\n");
    assert_eq!(FileManager::read_to_string(output_dir.path().join("y/one.txt"))?, "Bye\n");
    assert!(!input_dir.path().join("x/one.txt").exists());

    Ok(())
}

/// Test that a folder without captions is an error
#[tokio::test]
async fn test_run_folder_withNoCaptionFiles_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "readme.txt", "nothing here")?;

    let result = Controller::new()
        .run_folder(temp_dir.path().to_path_buf(), None, false)
        .await;
    assert!(result.is_err());

    Ok(())
}
