//! Configuration loading and parsing.
//!
//! `gridcraft.toml` (or an override path provided by the binary) seeds the
//! initial grid, the selected output syntax and the status message lifetime:
//!
//! ```toml
//! [grid]
//! columns = 4
//! rows = 3
//! column_gap = 4
//! row_gap = 4
//! [output]
//! syntax = "tailwind"
//! [ui]
//! status_ttl_ms = 1500
//! ```
//!
//! Loading never fails the program. A missing file yields defaults silently;
//! an unreadable or malformed file yields defaults plus a warning. Grid values
//! go through the same coercion as the on-screen fields, so an out-of-range
//! `columns = 40` becomes the field fallback rather than an error. Unknown
//! keys are ignored.

use anyhow::Result;
use core_codegen::Syntax;
use core_grid::config::{DEFAULT_COLUMNS, DEFAULT_GAP, DEFAULT_ROWS};
use core_grid::{GridConfiguration, GridField};
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "gridcraft.toml";
pub const DEFAULT_STATUS_TTL_MS: u64 = 1500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// `[grid]`. Values are signed so negative input reaches coercion instead of
/// failing the whole parse.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GridSection {
    #[serde(default = "GridSection::default_columns")]
    pub columns: i64,
    #[serde(default = "GridSection::default_rows")]
    pub rows: i64,
    #[serde(default = "GridSection::default_gap")]
    pub column_gap: i64,
    #[serde(default = "GridSection::default_gap")]
    pub row_gap: i64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            columns: Self::default_columns(),
            rows: Self::default_rows(),
            column_gap: Self::default_gap(),
            row_gap: Self::default_gap(),
        }
    }
}

impl GridSection {
    const fn default_columns() -> i64 {
        DEFAULT_COLUMNS as i64
    }
    const fn default_rows() -> i64 {
        DEFAULT_ROWS as i64
    }
    const fn default_gap() -> i64 {
        DEFAULT_GAP as i64
    }

    fn raw(&self, field: GridField) -> i64 {
        match field {
            GridField::Columns => self.columns,
            GridField::Rows => self.rows,
            GridField::ColumnGap => self.column_gap,
            GridField::RowGap => self.row_gap,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutputSection {
    #[serde(default)]
    pub syntax: Syntax,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct UiSection {
    #[serde(default = "UiSection::default_status_ttl_ms")]
    pub status_ttl_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            status_ttl_ms: Self::default_status_ttl_ms(),
        }
    }
}

impl UiSection {
    const fn default_status_ttl_ms() -> u64 {
        DEFAULT_STATUS_TTL_MS
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub grid: GridSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// File the values came from; `None` when defaults were used.
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("gridcraft").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Read and parse one file without any fallback.
pub fn read_config(path: &Path) -> std::result::Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = toml::from_str::<ConfigFile>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Config {
        source: Some(path.to_path_buf()),
        file,
    })
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    match read_config(&path) {
        Ok(cfg) => {
            debug!(target: "config", path = %path.display(), "config_loaded");
            Ok(cfg)
        }
        Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            debug!(target: "config", path = %path.display(), "config_missing_using_defaults");
            Ok(Config::default())
        }
        Err(err) => {
            warn!(target: "config", error = %err, "config_invalid_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Initial grid, each value coerced like field input.
    pub fn grid_configuration(&self) -> GridConfiguration {
        let mut grid = GridConfiguration::default();
        for field in GridField::ALL {
            let raw = self.file.grid.raw(field);
            let value = field.coerce_value(raw);
            if i64::from(value) != raw {
                warn!(
                    target: "config",
                    field = field.label(),
                    raw,
                    coerced = value,
                    "grid_value_coerced"
                );
            }
            grid.set(field, value);
        }
        grid
    }

    pub fn syntax(&self) -> Syntax {
        self.file.output.syntax
    }

    pub fn status_ttl(&self) -> Duration {
        Duration::from_millis(self.file.ui.status_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();
        let out = with_default(subscriber, f);
        let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        (out, logs)
    }

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), text).unwrap();
        tmp
    }

    #[test]
    fn default_config_when_missing_file() {
        let (cfg, logs) =
            capture(|| load_from(Some(PathBuf::from("__nonexistent_gridcraft__.toml"))).unwrap());
        assert!(cfg.source.is_none());
        assert_eq!(cfg.grid_configuration(), GridConfiguration::default());
        assert_eq!(cfg.syntax(), Syntax::Tailwind);
        assert_eq!(cfg.status_ttl(), Duration::from_millis(1500));
        assert!(!logs.contains("WARN"));
    }

    #[test]
    fn parses_all_sections() {
        let tmp = write_config(
            "[grid]\ncolumns = 6\nrows = 2\ncolumn_gap = 0\nrow_gap = 8\n\
             [output]\nsyntax = \"css\"\n[ui]\nstatus_ttl_ms = 300\n",
        );
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.source.as_deref(), Some(tmp.path()));
        assert_eq!(
            cfg.grid_configuration(),
            GridConfiguration {
                columns: 6,
                rows: 2,
                column_gap: 0,
                row_gap: 8,
            }
        );
        assert_eq!(cfg.syntax(), Syntax::Css);
        assert_eq!(cfg.status_ttl(), Duration::from_millis(300));
    }

    #[test]
    fn missing_keys_default_and_unknown_keys_ignored() {
        let tmp = write_config("[grid]\nrows = 5\ntheme = \"dark\"\n[plugins]\nenabled = true\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let grid = cfg.grid_configuration();
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.columns, DEFAULT_COLUMNS);
        assert_eq!(grid.column_gap, DEFAULT_GAP);
        assert_eq!(cfg.syntax(), Syntax::Tailwind);
    }

    #[test]
    fn out_of_range_grid_values_coerce_with_warning() {
        let tmp = write_config("[grid]\ncolumns = 40\nrows = -2\nrow_gap = 17\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let (grid, logs) = capture(|| cfg.grid_configuration());
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 1);
        assert_eq!(grid.row_gap, 0);
        assert_eq!(grid.column_gap, DEFAULT_GAP);
        assert!(logs.contains("WARN config:"));
        assert_eq!(logs.matches("grid_value_coerced").count(), 3);
    }

    #[test]
    fn malformed_file_falls_back_with_warning() {
        let tmp = write_config("[grid\ncolumns = = 3\n");
        let (cfg, logs) = capture(|| load_from(Some(tmp.path().to_path_buf())).unwrap());
        assert!(cfg.source.is_none());
        assert_eq!(cfg.grid_configuration(), GridConfiguration::default());
        assert!(logs.contains("WARN config:"));
        assert!(logs.contains("config_invalid_using_defaults"));
    }

    #[test]
    fn unknown_syntax_is_a_parse_error() {
        let tmp = write_config("[output]\nsyntax = \"scss\"\n");
        let err = read_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.syntax(), Syntax::Tailwind);
    }

    #[test]
    fn read_error_names_the_path() {
        let err = read_config(Path::new("__nonexistent_gridcraft__.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("__nonexistent_gridcraft__.toml"));
    }
}
