use crate::model::entry::{LogEntry, SobrietyLog};
use anyhow::Result;
use chrono::NaiveDate;

pub trait LogRepository {
    fn load(&self) -> Result<SobrietyLog>;
    fn upsert(&self, date: NaiveDate, entry: LogEntry) -> Result<()>;
}
