// Integration test for logging to rotated files
// Installs a global subscriber, so it lives in its own test binary.

use helix_runner::infrastructure::logging::{
    LogConfig, LogFormat, LoggerImpl, RotationPolicy, SecretScrubber,
};
use std::fs;
use tempfile::TempDir;
use tracing::{info, instrument};

#[test]
fn test_file_logging() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        enable_stderr: false,
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    assert!(logger.has_file_output());

    info!("Test message 1");
    let scrubber = SecretScrubber::new().with_secret("hl-topsecret");
    info!(
        command = %scrubber.scrub_message("docker run -e HELIX_API_KEY=hl-topsecret ubuntu"),
        "Test message with fields"
    );
    assert_eq!(instrumented_add(5, 7), 12);

    // A second global subscriber cannot be installed
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());

    // Dropping the logger flushes the non-blocking writer
    drop(logger);

    let log_file = temp_dir.path().join("helix-runner.log");
    let contents = fs::read_to_string(&log_file).unwrap();

    assert!(contents.contains("Test message 1"));
    assert!(contents.contains("Test message with fields"));
    assert!(contents.contains("entering instrumented function"));
    assert!(!contents.contains("hl-topsecret"));
}

#[instrument]
fn instrumented_add(a: i32, b: i32) -> i32 {
    info!("entering instrumented function");
    a + b
}
