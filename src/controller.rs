use crate::field::FieldValue;
use crate::slots::time_of_day_slots;
use crate::storage::{KeyValueStore, ScheduleStore};
use crate::view::{build_timeline, TimelineView};
use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Date,
    Time,
    Editor,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Grid => Focus::Date,
            Focus::Date => Focus::Time,
            Focus::Time => Focus::Editor,
            Focus::Editor => Focus::Grid,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Grid => Focus::Editor,
            Focus::Date => Focus::Grid,
            Focus::Time => Focus::Date,
            Focus::Editor => Focus::Time,
        }
    }
}

/// Session state of the editor. Only [`Planner`] mutates it.
#[derive(Debug, Clone)]
pub struct UiState {
    pub date: NaiveDate,
    pub active_slot: Option<String>,
    pub time_options: Vec<String>,
    pub time_select: String,
    pub editor: FieldValue,
    pub focus: Focus,
    pub timeline: TimelineView,
}

/// Selection and edit controller for a single day.
///
/// Every handler runs to completion, including the redraw it causes, so the
/// store is only ever touched in load-then-save pairs from one call stack.
pub struct Planner<S> {
    store: ScheduleStore<S>,
    state: UiState,
}

impl<S: KeyValueStore> Planner<S> {
    /// Renders `date` and selects the time selector's first option, the same
    /// way the first page load does.
    pub fn new(store: ScheduleStore<S>, date: NaiveDate) -> Self {
        let time_options = time_of_day_slots();
        let time_select = time_options.first().cloned().unwrap_or_default();
        let timeline = build_timeline(date, &store.load(date), None);
        let mut planner = Planner {
            store,
            state: UiState {
                date,
                active_slot: None,
                time_options,
                time_select,
                editor: FieldValue::default(),
                focus: Focus::Grid,
                timeline,
            },
        };
        let first = planner.state.time_select.clone();
        planner.change_time(&first);
        planner
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    #[cfg(test)]
    pub fn store(&self) -> &ScheduleStore<S> {
        &self.store
    }

    pub fn editor_mut(&mut self) -> &mut FieldValue {
        &mut self.state.editor
    }

    pub fn set_editor(&mut self, text: &str) {
        self.state.editor = FieldValue::new(text);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
    }

    /// Rebuilds the grid from storage, keeping the active slot selected with
    /// its freshly stored task.
    pub fn render(&mut self) {
        let schedule = self.store.load(self.state.date);
        self.state.timeline = build_timeline(self.state.date, &schedule, None);
        if let Some(label) = self.state.active_slot.clone() {
            let task = schedule.task(&label).unwrap_or_default().to_string();
            self.set_active(&label, &task);
        }
    }

    pub fn set_active(&mut self, label: &str, task: &str) {
        if !self.state.timeline.mark_active(label) {
            debug!("event=set_active status=missing_slot label={}", label);
            return;
        }
        self.state.active_slot = Some(label.to_string());
        self.state.time_select = label.to_string();
        self.state.editor = FieldValue::new(task);
        self.state.focus = Focus::Editor;
    }

    /// Grid selection: uses the task as it was when the grid was drawn.
    pub fn click_slot(&mut self, label: &str) {
        let task = match self.state.timeline.find(label) {
            Some(slot) => slot.task.clone().unwrap_or_default(),
            None => return,
        };
        self.set_active(label, &task);
    }

    /// Time selector change: looks the task up in storage, not in the grid.
    pub fn change_time(&mut self, label: &str) {
        if self.state.timeline.find(label).is_none() {
            debug!("event=change_time status=missing_slot label={}", label);
            return;
        }
        let schedule = self.store.load(self.state.date);
        let task = schedule.task(label).unwrap_or_default().to_string();
        self.set_active(label, &task);
    }

    pub fn change_date(&mut self, date: NaiveDate) {
        self.state.active_slot = None;
        self.state.time_select = self.state.time_options.first().cloned().unwrap_or_default();
        self.state.editor.clear();
        self.state.date = date;
        self.render();
    }

    /// Writes the editor text into the active slot. Returns `false` when no
    /// slot is active and nothing was written.
    pub fn save(&mut self) -> Result<bool> {
        let label = match self.state.active_slot.clone() {
            Some(label) => label,
            None => return Ok(false),
        };
        let date = self.state.date;
        let mut schedule = self.store.load(date);
        let stored = schedule
            .assign(&label, self.state.editor.value())
            .map(str::to_string);
        self.store.save(date, &schedule)?;
        match stored {
            Some(_) => info!("event=slot_saved date={} slot={}", date, label),
            None => info!("event=slot_cleared date={} slot={}", date, label),
        }
        self.render();
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<bool> {
        if self.state.active_slot.is_none() {
            return Ok(false);
        }
        self.state.editor.clear();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use crate::view::PLACEHOLDER;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn planner() -> Planner<MemoryStore> {
        Planner::new(ScheduleStore::new(MemoryStore::default()), june_first())
    }

    fn type_text<S: KeyValueStore>(planner: &mut Planner<S>, text: &str) {
        planner.set_editor(text);
    }

    #[test]
    fn startup_selects_first_slot() {
        let planner = planner();
        let state = planner.state();
        assert_eq!(state.active_slot.as_deref(), Some("09:00"));
        assert_eq!(state.time_select, "09:00");
        assert_eq!(state.editor.value(), "");
        assert_eq!(state.focus, Focus::Editor);
        assert_eq!(state.time_options.len(), 26);
    }

    #[test]
    fn save_without_active_slot_is_noop() {
        let mut planner = planner();
        planner.change_date(june_first());
        type_text(&mut planner, "Orphan");
        assert!(!planner.save().unwrap());
        assert!(!planner.clear().unwrap());
        assert!(planner.store().load(june_first()).is_empty());
        assert_eq!(planner.state().editor.value(), "Orphan");
    }

    #[test]
    fn save_and_clear_scenario() {
        let mut planner = planner();
        planner.click_slot("09:00");
        type_text(&mut planner, "Standup");
        assert!(planner.save().unwrap());

        let slot = planner.state().timeline.find("09:00").unwrap();
        assert_eq!(slot.display_text(), "Standup");
        assert!(slot.filled());
        assert!(slot.active);
        assert_eq!(planner.state().editor.value(), "Standup");

        planner.click_slot("09:00");
        assert!(planner.clear().unwrap());
        let slot = planner.state().timeline.find("09:00").unwrap();
        assert_eq!(slot.display_text(), PLACEHOLDER);
        assert!(!slot.filled());
        assert!(planner.store().load(june_first()).task("09:00").is_none());
    }

    #[test]
    fn saving_whitespace_unschedules_and_is_idempotent() {
        let mut planner = planner();
        planner.click_slot("10:30");
        type_text(&mut planner, "  Focus time  ");
        planner.save().unwrap();
        assert_eq!(
            planner.store().load(june_first()).task("10:30"),
            Some("Focus time")
        );

        type_text(&mut planner, "   ");
        planner.save().unwrap();
        assert!(planner.store().load(june_first()).task("10:30").is_none());
        planner.save().unwrap();
        assert!(planner.store().load(june_first()).is_empty());
    }

    #[test]
    fn changing_date_resets_selection() {
        let mut planner = planner();
        planner.click_slot("14:00");
        type_text(&mut planner, "Draft");
        planner.save().unwrap();

        let next = june_first().succ_opt().unwrap();
        planner.change_date(next);
        let state = planner.state();
        assert_eq!(state.date, next);
        assert!(state.active_slot.is_none());
        assert!(state.timeline.active().is_none());
        assert_eq!(state.time_select, "09:00");
        assert_eq!(state.editor.value(), "");
        assert_eq!(state.timeline.filled_count(), 0);

        planner.change_date(june_first());
        assert_eq!(
            planner.state().timeline.find("14:00").unwrap().display_text(),
            "Draft"
        );
    }

    #[test]
    fn grid_and_time_selector_load_the_same_task() {
        let mut planner = planner();
        planner.click_slot("11:00");
        type_text(&mut planner, "Dentist");
        planner.save().unwrap();

        planner.click_slot("09:00");
        planner.click_slot("11:00");
        let from_grid = planner.state().editor.value().to_string();

        planner.click_slot("09:00");
        planner.change_time("11:00");
        let from_select = planner.state().editor.value().to_string();

        assert_eq!(from_grid, "Dentist");
        assert_eq!(from_grid, from_select);
        assert_eq!(planner.state().active_slot.as_deref(), Some("11:00"));
        assert_eq!(planner.state().time_select, "11:00");
    }

    #[test]
    fn unknown_time_is_ignored() {
        let mut planner = planner();
        planner.click_slot("12:00");
        planner.change_time("03:00");
        planner.click_slot("03:00");
        let state = planner.state();
        assert_eq!(state.active_slot.as_deref(), Some("12:00"));
        assert_eq!(state.time_select, "12:00");
        assert_eq!(state.timeline.active().map(|s| s.label.as_str()), Some("12:00"));
    }

    #[test]
    fn edits_survive_reopening_the_store() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut planner =
                Planner::new(ScheduleStore::new(FileStore::new(tmp.path())), june_first());
            planner.click_slot("09:00");
            type_text(&mut planner, "Standup");
            planner.save().unwrap();
        }
        let reopened = Planner::new(ScheduleStore::new(FileStore::new(tmp.path())), june_first());
        let slot = reopened.state().timeline.find("09:00").unwrap();
        assert_eq!(slot.display_text(), "Standup");
        assert_eq!(reopened.state().editor.value(), "Standup");
    }
}
