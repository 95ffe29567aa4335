//! CSV file adaptor.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use fs2::FileExt;
use tempfile::NamedTempFile;
use wd_core::{EventStore, Record};

use crate::StoreError;

const HEADER: [&str; 2] = ["timestamp", "label"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Persists records to a CSV file.
///
/// The file is rewritten in full on every store: rows go to a temporary file
/// beside the target which is then renamed over it, while an exclusive lock on
/// a sibling `.lock` file is held.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl EventStore for CsvStore {
    type Error = StoreError;

    fn retrieve(&self) -> Result<Vec<Record>, Self::Error> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no timesheet yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error(&self.path)(e)),
        };

        let mut records = Vec::new();
        for (line, fields) in parse_rows(&content)? {
            if line == 1 && fields == HEADER {
                continue;
            }
            records.push(parse_record(line, fields)?);
        }
        Ok(records)
    }

    fn store(&mut self, records: Vec<Record>) -> Result<(), Self::Error> {
        let dir = self.dir();
        fs::create_dir_all(dir).map_err(io_error(dir))?;

        let lock_path = self.lock_path();
        let lock_file = File::create(&lock_path).map_err(io_error(&lock_path))?;
        lock_file
            .lock_exclusive()
            .map_err(io_error(&lock_path))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(io_error(dir))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            write_rows(&mut writer, &records).map_err(io_error(&self.path))?;
            writer.flush().map_err(io_error(&self.path))?;
        }
        temp.persist(&self.path)
            .map_err(|e| io_error(&self.path)(e.error))?;

        tracing::debug!(path = %self.path.display(), rows = records.len(), "wrote timesheet");
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn write_rows<W: Write>(writer: &mut W, records: &[Record]) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER.join(","))?;
    for (timestamp, label) in records {
        writeln!(
            writer,
            "{},{}",
            timestamp.format(TIMESTAMP_FORMAT),
            escape_field(label)
        )?;
    }
    Ok(())
}

/// Quotes a field if it contains a comma, quote, or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn parse_record(line: usize, fields: Vec<String>) -> Result<Record, StoreError> {
    let [timestamp, label]: [String; 2] =
        fields.try_into().map_err(|fields: Vec<String>| StoreError::Parse {
            line,
            message: format!("expected 2 fields, found {}", fields.len()),
        })?;

    let timestamp = NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT).map_err(|e| {
        StoreError::Parse {
            line,
            message: format!("invalid timestamp {timestamp:?}: {e}"),
        }
    })?;
    Ok((timestamp, label))
}

/// Splits CSV content into rows of unquoted fields, tagged with the line each
/// row starts on. Blank lines are skipped.
fn parse_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>, StoreError> {
    let mut rows = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_line = 1;

    let mut finish_row = |row_line: usize, fields: &mut Vec<String>, field: &mut String| {
        fields.push(std::mem::take(field));
        let row = std::mem::take(fields);
        if !(row.len() == 1 && row[0].is_empty()) {
            rows.push((row_line, row));
        }
    };

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                finish_row(row_line, &mut fields, &mut field);
                line += 1;
                row_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(StoreError::Parse {
            line: row_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    finish_row(row_line, &mut fields, &mut field);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use wd_core::Storage;

    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1985, 10, 26)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn temp_store() -> (tempfile::TempDir, CsvStore) {
        let temp = tempfile::tempdir().unwrap();
        let store = CsvStore::new(temp.path().join("timesheet.csv"));
        (temp, store)
    }

    #[test]
    fn missing_file_retrieves_nothing() {
        let (_temp, store) = temp_store();
        assert!(store.retrieve().unwrap().is_empty());
    }

    #[test]
    fn store_writes_header_and_rows() {
        let (_temp, mut store) = temp_store();
        store
            .store(vec![
                (at(1, 21), "Destination Time".to_string()),
                (at(1, 22), "Present Time, roughly".to_string()),
            ])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "timestamp,label\n\
             1985-10-26T01:21:00,Destination Time\n\
             1985-10-26T01:22:00,\"Present Time, roughly\"\n"
        );
    }

    #[test]
    fn store_then_retrieve_preserves_order_and_awkward_labels() {
        let (_temp, mut store) = temp_store();
        let records = vec![
            (at(1, 22), "Present Time".to_string()),
            (at(1, 20), "Say \"Great Scott\"".to_string()),
            (at(1, 21), "two\nlines, with comma".to_string()),
            (
                at(1, 35).with_nanosecond(250_000_000).unwrap(),
                "Escape".to_string(),
            ),
        ];

        store.store(records.clone()).unwrap();

        assert_eq!(store.retrieve().unwrap(), records);
    }

    #[test]
    fn store_replaces_rather_than_appends() {
        let (_temp, mut store) = temp_store();
        store
            .store(vec![(at(1, 20), "Last Time Departed".to_string())])
            .unwrap();
        store
            .store(vec![(at(1, 21), "Destination Time".to_string())])
            .unwrap();

        assert_eq!(
            store.retrieve().unwrap(),
            vec![(at(1, 21), "Destination Time".to_string())]
        );
    }

    #[test]
    fn store_creates_missing_parent_directories() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(temp.path().join("nested/deeper/timesheet.csv"));

        store.store(Vec::new()).unwrap();

        assert!(store.path().exists());
        assert!(store.retrieve().unwrap().is_empty());
    }

    #[test]
    fn retrieve_accepts_crlf_and_blank_lines() {
        let (_temp, store) = temp_store();
        fs::write(
            store.path(),
            "timestamp,label\r\n1985-10-26T01:21:00,Destination Time\r\n\r\n",
        )
        .unwrap();

        assert_eq!(
            store.retrieve().unwrap(),
            vec![(at(1, 21), "Destination Time".to_string())]
        );
    }

    #[test]
    fn retrieve_reports_line_of_bad_timestamp() {
        let (_temp, store) = temp_store();
        fs::write(
            store.path(),
            "timestamp,label\n1985-10-26T01:21:00,ok\nyesterday,not ok\n",
        )
        .unwrap();

        let err = store.retrieve().unwrap_err();
        assert!(matches!(err, StoreError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn retrieve_rejects_wrong_field_count() {
        let (_temp, store) = temp_store();
        fs::write(store.path(), "1985-10-26T01:21:00,a,b\n").unwrap();

        let err = store.retrieve().unwrap_err();
        assert!(matches!(err, StoreError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn retrieve_rejects_unterminated_quote() {
        let (_temp, store) = temp_store();
        fs::write(store.path(), "1985-10-26T01:21:00,\"never closed\n").unwrap();

        assert!(matches!(
            store.retrieve(),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn restore_accepts_row_with_empty_label() {
        let (_temp, store) = temp_store();
        fs::write(
            store.path(),
            "timestamp,label\n1985-10-26T01:21:00,\n1985-10-26T01:22:00,Present Time\n",
        )
        .unwrap();

        let log = Storage::new(store).restore().unwrap();

        let labels: Vec<_> = log.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["", "Present Time"]);
    }

    #[test]
    fn escape_field_only_quotes_when_needed() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
