use crate::cli::DateArg;
use crate::controller::Planner;
use crate::model::{date_key, parse_date_key, ModelError};
use crate::slots::parse_slot_label;
use crate::storage::{init_project_store, locate_store, FileStore, ScheduleStore, StoreLocation};
use crate::ui;
use crate::view::{build_timeline, SlotView};
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::env;
use std::path::PathBuf;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
}

pub fn init() -> Result<()> {
    let location = init_project_store()?;
    println!("Initialized schedule store at {}", location.dir.display());
    Ok(())
}

pub fn show(location: &StoreLocation, date: DateArg) -> Result<()> {
    let date = resolve_date(date)?;
    let store = open_store(location);
    let view = build_timeline(date, &store.load(date), None);
    println!(
        "Schedule for {} ({}: {})",
        date_key(date),
        location.scope.label(),
        location.dir.display()
    );
    for slot in &view.slots {
        print_slot(slot);
    }
    println!("{} of {} slots filled", view.filled_count(), view.slots.len());
    Ok(())
}

pub fn set(location: &StoreLocation, time: String, task: Vec<String>, date: DateArg) -> Result<()> {
    let date = resolve_date(date)?;
    let label = resolve_slot(&time)?;
    let text = task.join(" ");
    if text.trim().is_empty() {
        bail!("task text is empty; use `dayplan clear {}` to unschedule", label);
    }
    let mut planner = Planner::new(open_store(location), date);
    planner.click_slot(&label);
    planner.set_editor(&text);
    planner
        .save()
        .with_context(|| format!("saving {} on {}", label, date_key(date)))?;
    println!("Scheduled {} {}: {}", date_key(date), label, text.trim());
    Ok(())
}

pub fn clear(location: &StoreLocation, time: String, date: DateArg) -> Result<()> {
    let date = resolve_date(date)?;
    let label = resolve_slot(&time)?;
    let mut planner = Planner::new(open_store(location), date);
    planner.click_slot(&label);
    planner
        .clear()
        .with_context(|| format!("clearing {} on {}", label, date_key(date)))?;
    println!("Cleared {} {}", date_key(date), label);
    Ok(())
}

pub fn tui(location: &StoreLocation, date: DateArg) -> Result<()> {
    let date = resolve_date(date)?;
    let planner = Planner::new(open_store(location), date);
    ui::run(planner, location.clone())
}

pub fn current_location(settings: &Settings) -> Result<StoreLocation> {
    let cwd = env::current_dir()?;
    locate_store(&cwd, settings.data_dir.as_deref())
}

fn open_store(location: &StoreLocation) -> ScheduleStore<FileStore> {
    ScheduleStore::new(FileStore::new(&location.dir))
}

fn resolve_date(arg: DateArg) -> Result<NaiveDate> {
    match arg.date {
        Some(raw) => Ok(parse_date_key(&raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn resolve_slot(input: &str) -> Result<String> {
    parse_slot_label(input).ok_or_else(|| ModelError::UnknownSlot(input.trim().to_string()).into())
}

fn print_slot(slot: &SlotView) {
    match &slot.task {
        Some(task) => println!("  {}  {}", slot.label, task),
        None => println!("  {}  -", slot.label),
    }
}
