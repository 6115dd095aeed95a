//! Flat-file session log
//!
//! One record per line: `subject,duration_ms,timestamp_ms`. Lines with the
//! wrong number of fields are skipped; numeric fields that fail to parse
//! abort the whole load.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::consts::{DELIMITER, FIELD_COUNT};
use crate::core::types::Session;
use crate::error::StoreError;

/// Owns the session log file
#[derive(Debug, Clone)]
pub(crate) struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty log.
    pub(crate) fn load(&self) -> Result<Vec<Session>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No session log yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut sessions = Vec::new();
        let mut skipped = 0usize;
        for (idx, line) in content.lines().enumerate() {
            match parse_line(line, idx + 1)? {
                Some(session) => sessions.push(session),
                None => {
                    skipped += 1;
                    tracing::debug!(line = idx + 1, content = line, "Skipping malformed session line");
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            loaded = sessions.len(),
            skipped,
            "Loaded session log"
        );
        Ok(sessions)
    }

    /// Replace the stored log with `records`.
    ///
    /// Called with the full in-memory log after a session is added. The
    /// content goes to a sibling temp file which is then renamed over the
    /// target, so readers see either the old or the new log.
    pub(crate) fn append(&self, records: &[Session]) -> Result<(), StoreError> {
        self.save(records)
    }

    pub(crate) fn save(&self, records: &[Session]) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut content = String::new();
        for record in records {
            content.push_str(&format_line(record));
            content.push('\n');
        }

        let tmp = self.temp_path();
        if let Err(source) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(source));
        }
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(source));
        }

        tracing::debug!(path = %self.path.display(), records = records.len(), "Saved session log");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serialize one record without the trailing newline
pub(crate) fn format_line(session: &Session) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        session.subject, session.duration_ms, session.timestamp_ms
    )
}

/// Parse one log line.
///
/// `Ok(None)` means the line does not have exactly three fields (or has a
/// blank subject) and should be skipped. Trailing empty fields are dropped
/// before counting, so `"Math,120,"` is a two-field line.
pub(crate) fn parse_line(line: &str, line_no: usize) -> Result<Option<Session>, StoreError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() != FIELD_COUNT {
        return Ok(None);
    }

    let subject = fields[0];
    if subject.trim().is_empty() {
        return Ok(None);
    }
    let duration_ms = fields[1]
        .parse::<u64>()
        .map_err(|_| StoreError::Parse {
            line: line_no,
            field: "duration",
            value: fields[1].to_string(),
        })?;
    let timestamp_ms = fields[2]
        .parse::<i64>()
        .map_err(|_| StoreError::Parse {
            line: line_no,
            field: "timestamp",
            value: fields[2].to_string(),
        })?;

    Ok(Some(Session::new(subject, duration_ms, timestamp_ms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("sessions.txt"))
    }

    fn sample() -> Vec<Session> {
        vec![
            Session::new("Math", 600_000, 1_690_000_000_000),
            Session::new("Organic Chemistry", 0, 1_690_000_100_000),
            Session::new("Bio", 60_000, -5),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = sample();
        store.append(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn load_twice_is_identical() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), store.load().unwrap());
    }

    #[test]
    fn writes_expected_format() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&[Session::new("Math", 120, 1_690_000_000_000)])
            .unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Math,120,1690000000000\n");
    }

    #[test]
    fn append_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();
        let shorter = vec![Session::new("History", 5, 10)];
        store.append(&shorter).unwrap();
        assert_eq!(store.load().unwrap(), shorter);
        assert!(!dir.path().join("sessions.txt.tmp").exists());
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("a").join("b").join("sessions.txt"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn save_to_directory_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir_all(target.join("child")).unwrap();
        let store = SessionStore::new(&target);
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn two_field_line_is_skipped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Math,120\nBio,60000,1690000000000\n").unwrap();
        let sessions = store.load().unwrap();
        assert_eq!(sessions, vec![Session::new("Bio", 60_000, 1_690_000_000_000)]);
    }

    #[test]
    fn non_numeric_duration_aborts_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Bio,60000,1690000000000\nMath,abc,1690000000000\n",
        )
        .unwrap();
        match store.load().unwrap_err() {
            StoreError::Parse { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "duration");
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_timestamp_aborts_load() {
        let err = parse_line("Math,120,yesterday", 7).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Parse {
                line: 7,
                field: "timestamp",
                ..
            }
        ));
    }

    #[test]
    fn negative_duration_is_parse_error() {
        assert!(parse_line("Math,-5,1690000000000", 1).is_err());
    }

    #[test]
    fn crlf_lines_load_like_lf() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Math,120,1690000000000\r\nBio,5,6\r\n").unwrap();
        assert_eq!(
            store.load().unwrap(),
            vec![
                Session::new("Math", 120, 1_690_000_000_000),
                Session::new("Bio", 5, 6)
            ]
        );
    }

    #[test]
    fn shape_checks_skip_without_error() {
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("Math", 1).unwrap(), None);
        assert_eq!(parse_line("Math,120,", 1).unwrap(), None);
        assert_eq!(parse_line("Math,1,2,3", 1).unwrap(), None);
        assert_eq!(parse_line("  ,1,2", 1).unwrap(), None);
    }

    #[test]
    fn subject_whitespace_is_preserved() {
        let session = parse_line(" Math ,1,2", 1).unwrap().unwrap();
        assert_eq!(session.subject, " Math ");
    }

    #[test]
    fn format_line_uses_delimiter() {
        let line = format_line(&Session::new("Math", 600_000, 1_690_000_000_000));
        assert_eq!(line, "Math,600000,1690000000000");
    }
}
