//! Configuration loading and parsing.
//!
//! An optional `kilo.toml` in the working directory (or an explicit path)
//! tunes the quit guard, the status message lifetime and file logging. A
//! missing or unparsable file yields defaults; configuration never stops the
//! editor from starting. Unknown fields are ignored.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const FILE_NAME: &str = "kilo.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Consecutive Ctrl-Q presses required to quit a dirty document.
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u32,
    #[serde(default = "EditorConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_times: Self::default_quit_times(),
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl EditorConfig {
    const fn default_quit_times() -> u32 {
        3
    }
    const fn default_message_timeout_secs() -> u64 {
        5
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file path; logging is off when absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "LogConfig::default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: Self::default_filter(),
        }
    }
}

impl LogConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Local working directory only; the editor keeps no state elsewhere.
pub fn discover() -> PathBuf {
    PathBuf::from(FILE_NAME)
}

pub fn load_from(path: Option<&Path>) -> Config {
    let path = path.map(Path::to_path_buf).unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str::<Config>(&content) {
        Ok(cfg) => {
            info!(target: "config", path = %path.display(), quit_times = cfg.editor.quit_times, "loaded");
            cfg
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "parse_failed_using_defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(Path::new("__nonexistent_hopefully__.toml")));
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.editor.quit_times, 3);
        assert_eq!(cfg.editor.message_timeout(), Duration::from_secs(5));
        assert!(cfg.log.file.is_none());
        assert_eq!(cfg.log.filter, "info");
    }

    #[test]
    fn parses_all_sections() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[editor]\nquit_times = 1\nmessage_timeout_secs = 2\n[log]\nfile = \"k.log\"\nfilter = \"debug\"\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path()));
        assert_eq!(cfg.editor.quit_times, 1);
        assert_eq!(cfg.editor.message_timeout_secs, 2);
        assert_eq!(cfg.log.file.as_deref(), Some(Path::new("k.log")));
        assert_eq!(cfg.log.filter, "debug");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[editor]\nquit_times = 5\nunknown = true\n").unwrap();
        let cfg = load_from(Some(tmp.path()));
        assert_eq!(cfg.editor.quit_times, 5);
        assert_eq!(cfg.editor.message_timeout_secs, 5);
        assert_eq!(cfg.log, LogConfig::default());
    }

    #[test]
    fn parse_error_falls_back_and_logs() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[editor\nquit_times = ").unwrap();
        let buf = SharedBuf::default();
        let sink = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_writer(move || sink.clone())
            .finish();

        let cfg = tracing::subscriber::with_default(subscriber, || load_from(Some(tmp.path())));

        assert_eq!(cfg, Config::default());
        let log_output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("parse_failed_using_defaults"));
    }
}
