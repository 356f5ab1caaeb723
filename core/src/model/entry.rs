use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::time::{format_date_key, parse_log_date};

/// Spend value as it was stored. Interpreted only through `SpendPolicy`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    /// Any other JSON shape (object, array, bool).
    Other(Value),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LogEntry {
    #[serde(default)]
    pub sober: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mood: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub alcohol_type: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub alcohol_amount: String,
    #[serde(default)]
    pub amount_spent: RawAmount,
}

impl LogEntry {
    pub fn sober(mood: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            sober: true,
            mood: mood.into(),
            notes: notes.into(),
            alcohol_type: String::new(),
            alcohol_amount: String::new(),
            amount_spent: RawAmount::Number(0.0),
        }
    }

    pub fn drinking(
        mood: impl Into<String>,
        notes: impl Into<String>,
        alcohol_type: impl Into<String>,
        alcohol_amount: impl Into<String>,
        amount_spent: f64,
    ) -> Self {
        Self {
            sober: false,
            mood: mood.into(),
            notes: notes.into(),
            alcohol_type: alcohol_type.into(),
            alcohol_amount: alcohol_amount.into(),
            amount_spent: RawAmount::Number(amount_spent),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.sober { "Sober" } else { "Drinking" }
    }
}

// Free-text fields: null is empty, numbers and other scalars keep their text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Snapshot of the whole log, keyed by the raw date string.
///
/// Keys are kept verbatim so that entries with malformed dates survive a
/// load/save round trip; aggregation skips them. Records that do not
/// decode as a `LogEntry` are held as raw JSON, written back unchanged
/// and left out of every aggregate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SobrietyLog {
    entries: BTreeMap<String, LogEntry>,
    unreadable: BTreeMap<String, Value>,
}

impl Serialize for SobrietyLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + self.unreadable.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        for (key, raw) in &self.unreadable {
            map.serialize_entry(key, raw)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SobrietyLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut log = SobrietyLog::new();
        for (key, value) in raw {
            match LogEntry::deserialize(&value) {
                Ok(entry) => {
                    log.entries.insert(key, entry);
                }
                Err(err) => {
                    tracing::debug!(key = %key, error = %err, "skipping unreadable log record");
                    log.unreadable.insert(key, value);
                }
            }
        }
        Ok(log)
    }
}

impl SobrietyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&LogEntry> {
        self.entries.get(key)
    }

    pub fn get_date(&self, date: NaiveDate) -> Option<&LogEntry> {
        self.entries.get(&format_date_key(date))
    }

    /// Inserts under the raw key, replacing any previous entry.
    pub fn insert_raw(&mut self, key: impl Into<String>, entry: LogEntry) -> Option<LogEntry> {
        let key = key.into();
        self.unreadable.remove(&key);
        self.entries.insert(key, entry)
    }

    /// Keys of records that could not be decoded.
    pub fn unreadable_keys(&self) -> impl Iterator<Item = &str> {
        self.unreadable.keys().map(String::as_str)
    }

    pub fn insert(&mut self, date: NaiveDate, entry: LogEntry) -> Option<LogEntry> {
        self.insert_raw(format_date_key(date), entry)
    }

    /// All entries in key order, including undated ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose key parses as a date, sorted ascending by date.
    pub fn dated_entries(&self) -> Vec<(NaiveDate, &LogEntry)> {
        let mut dated: Vec<(NaiveDate, &LogEntry)> = self
            .entries
            .iter()
            .filter_map(|(key, entry)| match parse_log_date(key) {
                Some(date) => Some((date, entry)),
                None => {
                    tracing::debug!(key = %key, "skipping log entry with malformed date");
                    None
                }
            })
            .collect();
        dated.sort_by_key(|(date, _)| *date);
        dated
    }
}

impl FromIterator<(String, LogEntry)> for SobrietyLog {
    fn from_iter<I: IntoIterator<Item = (String, LogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            unreadable: BTreeMap::new(),
        }
    }
}

/// On-disk document. `daily_drink_cost` is carried along untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LogFile {
    #[serde(default)]
    pub daily_drink_cost: f64,
    #[serde(default)]
    pub daily_log: SobrietyLog,
}
