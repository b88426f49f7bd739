//! Configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::HistoryOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// User configuration for the rewind binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Initial order of the move list.
    #[serde(default)]
    history_order: HistoryOrder,

    /// File receiving logs while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            history_order: HistoryOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    ///
    /// Runs before logging is set up, since the log destination comes
    /// from here. Call [`RewindConfig::log_loaded`] once it is.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Logs which configuration the session runs with.
    pub fn log_loaded(&self, path: &Path) {
        info!(
            path = %path.display(),
            from_file = path.exists(),
            order = ?self.history_order,
            log_filter = %self.log_filter,
            "Config loaded"
        );
    }

    /// Returns a copy with the move list order replaced.
    pub fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            let bytes = self.0.lock().expect("log lock").clone();
            String::from_utf8(bytes).expect("utf8 log")
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
history_order = "descending"
log_file = "/tmp/rewind-test.log"
log_filter = "debug"
"#,
        );
        let config = RewindConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.history_order(), HistoryOrder::Descending);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = write_config("history_order = \"descending\"\n");
        let config = RewindConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.history_order(), HistoryOrder::Descending);
        assert_eq!(config.log_file(), &default_log_file());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_invalid_order_rejected() {
        let file = write_config("history_order = \"sideways\"\n");
        let err = RewindConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let config = RewindConfig::load_or_default(&path).expect("defaults");
        assert_eq!(config, RewindConfig::default());
    }

    #[test]
    fn test_loaded_config_reaches_installed_subscriber() {
        let file = write_config("history_order = \"descending\"\n");
        let config = RewindConfig::load_or_default(file.path()).expect("valid config");

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || config.log_loaded(file.path()));

        let output = log.contents();
        assert!(output.contains("Config loaded"), "log was: {output}");
        assert!(output.contains("order=Descending"), "log was: {output}");
        assert!(output.contains("from_file=true"), "log was: {output}");
    }
}
