use crate::model::entry::{LogEntry, SobrietyLog};
use crate::repository::LogRepository;
use crate::time::format_date_key;
use anyhow::Result;
use chrono::NaiveDate;

pub struct LogService<R: LogRepository> {
    repo: R,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn log_entry(&self, date: NaiveDate, entry: LogEntry) -> Result<()> {
        tracing::info!(date = %format_date_key(date), sober = entry.sober, "logging entry");
        self.repo.upsert(date, entry)
    }

    pub fn get_entry(&self, date: NaiveDate) -> Result<Option<LogEntry>> {
        Ok(self.repo.load()?.get_date(date).cloned())
    }

    /// Current log, or an empty one when storage cannot be read.
    pub fn snapshot(&self) -> SobrietyLog {
        match self.repo.load() {
            Ok(log) => log,
            Err(err) => {
                tracing::warn!("could not load log ({:#}), continuing with an empty one", err);
                SobrietyLog::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockLogRepo {
        log: RefCell<SobrietyLog>,
    }

    impl LogRepository for MockLogRepo {
        fn load(&self) -> Result<SobrietyLog> { Ok(self.log.borrow().clone()) }
        fn upsert(&self, date: NaiveDate, entry: LogEntry) -> Result<()> {
            self.log.borrow_mut().insert(date, entry);
            Ok(())
        }
    }

    struct BrokenRepo;
    impl LogRepository for BrokenRepo {
        fn load(&self) -> Result<SobrietyLog> { Err(anyhow!("disk on fire")) }
        fn upsert(&self, _date: NaiveDate, _entry: LogEntry) -> Result<()> { Err(anyhow!("disk on fire")) }
    }

    #[test]
    fn test_log_and_get() {
        let service = LogService::new(MockLogRepo::default());
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        assert!(service.get_entry(date).unwrap().is_none());
        service.log_entry(date, LogEntry::sober("good", "walked")).unwrap();

        let entry = service.get_entry(date).unwrap().unwrap();
        assert!(entry.sober);
        assert_eq!(entry.notes, "walked");
        assert_eq!(service.snapshot().len(), 1);
    }

    #[test]
    fn test_snapshot_degrades_to_empty() {
        let service = LogService::new(BrokenRepo);
        assert!(service.snapshot().is_empty());
    }
}
