use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::record::{PredictionRecord, LOG_HEADER};

/// One write lock per log file, shared by every `PredictionLog` on that path
static WRITE_LOCKS: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = Lazy::new(|| Mutex::new(HashMap::new()));

fn write_lock_for(path: &Path) -> Arc<Mutex<()>> {
    let key = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    WRITE_LOCKS.lock().entry(key).or_default().clone()
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("prediction log I/O: {0}")]
    Io(#[from] io::Error),

    #[error("prediction log CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Append-only CSV prediction log
pub struct PredictionLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl PredictionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            write_lock: write_lock_for(&path),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row. Writes the header first when the file is new or empty.
    pub fn append(&self, record: &PredictionRecord) -> Result<(), LogError> {
        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = self.open_for_append()?;
        let len = file.metadata()?.len();
        let needs_header = len == 0;
        let needs_newline = len > 0 && !ends_with_newline(&mut file)?;

        // Build the full row block in memory so it lands in one write
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
        if needs_header {
            writer.write_record(LOG_HEADER)?;
        }
        writer.serialize(record)?;
        let rows = writer.into_inner().map_err(|e| e.into_error())?;

        let mut bytes = Vec::with_capacity(rows.len() + 1);
        if needs_newline {
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(&rows);

        file.write_all(&bytes)?;
        file.flush()?;

        log::info!(
            "Prediction recorded: {} ({:.2}%) -> {}",
            record.classifier_hazard,
            record.confidence,
            self.path.display()
        );
        Ok(())
    }

    /// Create the file exclusively when absent, so only one writer ever sees it new
    fn open_for_append(&self) -> io::Result<File> {
        match OpenOptions::new().read(true).append(true).create_new(true).open(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                OpenOptions::new().read(true).append(true).open(&self.path)
            }
            other => other,
        }
    }

    /// All rows, oldest first. Missing or empty log = empty history.
    pub fn read_all(&self) -> Result<Vec<PredictionRecord>, LogError> {
        match fs::metadata(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
            Ok(meta) if meta.len() == 0 => return Ok(Vec::new()),
            Ok(_) => {}
        }

        // Rows may be shorter than a header carrying extra columns
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let mut records = Vec::new();

        for (row, result) in reader.deserialize::<PredictionRecord>().enumerate() {
            match result {
                Ok(record) => records.push(record),
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => log::warn!("Skipping malformed prediction log row {}: {}", row + 1, e),
            }
        }

        Ok(records)
    }

    /// Total recorded predictions
    pub fn count(&self) -> Result<usize, LogError> {
        Ok(self.read_all()?.len())
    }
}

/// Whether a non-empty file ends in a line break
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(matches!(last[0], b'\n' | b'\r'))
}
