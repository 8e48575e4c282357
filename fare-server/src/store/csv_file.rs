//! CSV-backed bill store
//!
//! The file is the ledger: a header row followed by one row per bill, editable
//! in any spreadsheet. Every append reads the whole file, adds one row and
//! writes the whole file back through a sibling temp file + rename.
//!
//! Appends from this process are serialized; other writers are not
//! coordinated (full-file rewrite race).

use parking_lot::Mutex;
use shared::models::BILL_COLUMNS;
use shared::BillRecord;
use std::path::{Path, PathBuf};

use super::{BillStore, StoreError, StoreResult};

#[derive(Debug)]
pub struct CsvBillStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvBillStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
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

    /// Open the ledger positioned after a verified header row
    fn open_reader(&self) -> StoreResult<csv::Reader<std::fs::File>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)?;
        check_schema(reader.headers()?)?;
        Ok(reader)
    }

    fn read_records(&self) -> StoreResult<Vec<BillRecord>> {
        let records = self
            .open_reader()?
            .deserialize::<BillRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Existing rows as text, so hand-edited cells pass through untouched
    fn read_rows(&self) -> StoreResult<Vec<csv::StringRecord>> {
        let rows = self
            .open_reader()?
            .into_records()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn write_ledger(
        &self,
        rows: &[csv::StringRecord],
        appended: Option<&BillRecord>,
    ) -> StoreResult<()> {
        let temp = self.temp_path();
        {
            // Header is written by hand so an empty ledger still has one
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&temp)?;
            writer.write_record(BILL_COLUMNS)?;
            for row in rows {
                writer.write_record(row)?;
            }
            if let Some(record) = appended {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

fn check_schema(headers: &csv::StringRecord) -> StoreResult<()> {
    let matches = headers.len() == BILL_COLUMNS.len()
        && headers
            .iter()
            .zip(BILL_COLUMNS)
            .all(|(found, expected)| found.trim() == expected);
    if matches {
        return Ok(());
    }
    Err(StoreError::SchemaMismatch {
        expected: BILL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        found: headers.iter().map(|c| c.to_string()).collect(),
    })
}

impl BillStore for CsvBillStore {
    fn init(&self) -> StoreResult<bool> {
        let _guard = self.write_lock.lock();
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.write_ledger(&[], None)?;
        Ok(true)
    }

    fn append(&self, record: &BillRecord) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        let rows = self.read_rows()?;
        self.write_ledger(&rows, Some(record))
    }

    fn load_all(&self) -> StoreResult<Vec<BillRecord>> {
        self.read_records()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
