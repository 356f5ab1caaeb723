use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::model::entry::{LogEntry, LogFile, SobrietyLog};
use crate::repository::traits::LogRepository;
use crate::time::format_date_key;

const DEFAULT_FILE_NAME: &str = "sober_data.json";

#[derive(Clone)]
pub struct FileLogRepository {
    file_path: PathBuf,
}

impl FileLogRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("Failed to create data directory: {}", base_dir.display()))?;
        Ok(FileLogRepository {
            file_path: base_dir.join(DEFAULT_FILE_NAME),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_file(&self) -> Result<LogFile> {
        if !self.file_path.exists() {
            return Ok(LogFile::default());
        }
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open log file: {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let log_file = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse log file: {}", self.file_path.display()))?;
        Ok(log_file)
    }

    fn write_file(&self, log_file: &LogFile) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Failed to write log file: {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, log_file)?;
        writer.flush()?;
        Ok(())
    }
}

impl LogRepository for FileLogRepository {
    fn load(&self) -> Result<SobrietyLog> {
        Ok(self.read_file()?.daily_log)
    }

    // A file that fails to parse is never overwritten.
    fn upsert(&self, date: NaiveDate, entry: LogEntry) -> Result<()> {
        let mut log_file = self.read_file()?;
        if log_file.daily_log.insert(date, entry).is_some() {
            tracing::info!(date = %format_date_key(date), "overwrote existing log entry");
        }
        self.write_file(&log_file)
    }
}
