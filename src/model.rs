use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Task assignments for a single calendar date, keyed by slot label.
///
/// A stored task is never empty: assigning blank text removes the slot.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    tasks: BTreeMap<String, String>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid date (use YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("unknown time slot: {0}")]
    UnknownSlot(String),
}

impl Schedule {
    pub fn task(&self, label: &str) -> Option<&str> {
        self.tasks.get(label).map(String::as_str)
    }

    /// Stores the trimmed text under `label`, or unschedules the slot when
    /// nothing is left after trimming. Returns the value now stored.
    pub fn assign(&mut self, label: &str, text: &str) -> Option<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.tasks.remove(label);
            return None;
        }
        self.tasks.insert(label.to_string(), trimmed.to_string());
        self.task(label)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

pub fn parse_date_key(input: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(input.trim(), DATE_KEY_FORMAT)
        .map_err(|_| ModelError::InvalidDate(input.trim().to_string()))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
