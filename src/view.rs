//! View model for the day grid, computed from plain data so it can be
//! rendered by any front end (and tested without one).

use crate::model::Schedule;
use crate::slots::day_slots;
use chrono::NaiveDate;

pub const PLACEHOLDER: &str = "Select to add a task";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub label: String,
    pub task: Option<String>,
    pub active: bool,
}

impl SlotView {
    pub fn filled(&self) -> bool {
        self.task.is_some()
    }

    pub fn display_text(&self) -> &str {
        self.task.as_deref().unwrap_or(PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineView {
    pub date: NaiveDate,
    pub slots: Vec<SlotView>,
}

impl TimelineView {
    pub fn find(&self, label: &str) -> Option<&SlotView> {
        self.slots.iter().find(|s| s.label == label)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.label == label)
    }

    pub fn active(&self) -> Option<&SlotView> {
        self.slots.iter().find(|s| s.active)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.filled()).count()
    }

    /// Moves the active mark to `label`. Returns false when no such slot exists.
    pub fn mark_active(&mut self, label: &str) -> bool {
        if self.find(label).is_none() {
            return false;
        }
        for slot in &mut self.slots {
            slot.active = slot.label == label;
        }
        true
    }
}

pub fn build_timeline(date: NaiveDate, schedule: &Schedule, active: Option<&str>) -> TimelineView {
    let slots = day_slots(date)
        .into_iter()
        .map(|label| SlotView {
            task: schedule.task(&label).map(str::to_string),
            active: active == Some(label.as_str()),
            label,
        })
        .collect();
    TimelineView { date, slots }
}
