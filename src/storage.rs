use crate::model::{date_key, Schedule};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use log::{debug, warn};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const PROJECT_DIR: &str = ".dayplan";
const KEY_PREFIX: &str = "schedule-";

/// Synchronous string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keeps one `<key>.yml` file per entry inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.yml", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {:?}", path)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| format!("creating {:?}", self.dir))?;
        let path = self.entry_path(key);
        fs::write(&path, value).with_context(|| format!("writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn storage_key(date: NaiveDate) -> String {
    format!("{}{}", KEY_PREFIX, date_key(date))
}

/// Per-date schedules on top of a [`KeyValueStore`].
pub struct ScheduleStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ScheduleStore<S> {
    pub fn new(backend: S) -> Self {
        ScheduleStore { backend }
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Never fails: a missing, unreadable or malformed entry loads as empty.
    pub fn load(&self, date: NaiveDate) -> Schedule {
        let key = storage_key(date);
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Schedule::default(),
            Err(err) => {
                warn!("event=schedule_load status=read_error key={} err={:#}", key, err);
                return Schedule::default();
            }
        };
        match serde_yaml::from_str::<Schedule>(&raw) {
            Ok(schedule) => schedule,
            Err(err) => {
                warn!("event=schedule_load status=malformed key={} err={}", key, err);
                Schedule::default()
            }
        }
    }

    /// Overwrites the whole entry for `date`.
    pub fn save(&mut self, date: NaiveDate, schedule: &Schedule) -> Result<()> {
        let key = storage_key(date);
        let serialized = serde_yaml::to_string(schedule).context("serializing schedule")?;
        self.backend.set(&key, &serialized)?;
        debug!(
            "event=schedule_save status=ok key={} slots={}",
            key,
            schedule.len()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreScope {
    Project,
    Global,
    Explicit,
}

impl StoreScope {
    pub fn label(&self) -> &'static str {
        match self {
            StoreScope::Project => "project",
            StoreScope::Global => "global",
            StoreScope::Explicit => "custom",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreLocation {
    pub dir: PathBuf,
    pub scope: StoreScope,
}

pub fn init_project_store() -> Result<StoreLocation> {
    let dir = env::current_dir()?.join(PROJECT_DIR);
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {:?}", dir))?;
    Ok(StoreLocation {
        dir,
        scope: StoreScope::Project,
    })
}

/// Resolves the store directory: an explicit override, else the nearest
/// `.dayplan/` above `start`, else the per-user data directory.
pub fn locate_store(start: &Path, override_dir: Option<&Path>) -> Result<StoreLocation> {
    if let Some(dir) = override_dir {
        return Ok(StoreLocation {
            dir: dir.to_path_buf(),
            scope: StoreScope::Explicit,
        });
    }
    if let Some(dir) = find_project_store(start) {
        return Ok(StoreLocation {
            dir,
            scope: StoreScope::Project,
        });
    }
    Ok(StoreLocation {
        dir: global_store_dir()?,
        scope: StoreScope::Global,
    })
}

fn find_project_store(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(PROJECT_DIR);
        if candidate.is_dir() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

fn global_store_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "dayplan").context("locating data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
