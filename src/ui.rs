use crate::controller::{Focus, Planner};
use crate::model::date_key;
use crate::storage::{KeyValueStore, StoreLocation};
use crate::view::SlotView;
use anyhow::Result;
use chrono::{Duration as ChronoDuration, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::error;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Alignment, Color, Modifier, Rect, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

pub fn run<S: KeyValueStore>(planner: Planner<S>, location: StoreLocation) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(planner, location);
    let result = app.event_loop(&mut terminal);
    teardown_terminal(&mut terminal)?;
    result
}

struct App<S> {
    planner: Planner<S>,
    location: StoreLocation,
    grid_cursor: usize,
    grid_offset: usize,
    last_save: Option<Instant>,
    status: String,
}

impl<S: KeyValueStore> App<S> {
    fn new(planner: Planner<S>, location: StoreLocation) -> Self {
        let status = format!("Loaded schedules from {}", location.dir.display());
        let mut app = App {
            planner,
            location,
            grid_cursor: 0,
            grid_offset: 0,
            last_save: None,
            status,
        };
        app.follow_active();
        app
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        if control && key.code == KeyCode::Char('c') {
            return true;
        }
        match key.code {
            KeyCode::Tab => {
                let next = self.planner.state().focus.next();
                self.planner.set_focus(next);
                return false;
            }
            KeyCode::BackTab => {
                let prev = self.planner.state().focus.prev();
                self.planner.set_focus(prev);
                return false;
            }
            _ => {}
        }

        let focus = self.planner.state().focus;
        match focus {
            Focus::Editor => {
                self.handle_editor_key(key);
                false
            }
            _ if key.code == KeyCode::Char('q') => true,
            Focus::Grid => {
                self.handle_grid_key(key);
                false
            }
            Focus::Date => {
                self.handle_date_key(key);
                false
            }
            Focus::Time => {
                self.handle_time_key(key);
                false
            }
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let last = self.slot_count().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.grid_cursor = self.grid_cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.grid_cursor = (self.grid_cursor + 1).min(last),
            KeyCode::Home | KeyCode::Char('g') => self.grid_cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.grid_cursor = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(label) = self.cursor_label() {
                    self.planner.click_slot(&label);
                    self.status = format!("Editing {}", label);
                }
            }
            KeyCode::Char('c') | KeyCode::Delete => {
                // act on the highlighted row, not a selection that may be off screen
                if let Some(label) = self.cursor_label() {
                    self.planner.click_slot(&label);
                    self.clear();
                    self.planner.set_focus(Focus::Grid);
                }
            }
            _ => {}
        }
    }

    fn handle_date_key(&mut self, key: KeyEvent) {
        let current = self.planner.state().date;
        let target = match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                current.checked_sub_signed(ChronoDuration::days(1))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                current.checked_add_signed(ChronoDuration::days(1))
            }
            KeyCode::Char('t') => Some(Local::now().date_naive()),
            _ => None,
        };
        if let Some(date) = target {
            self.planner.change_date(date);
            self.grid_cursor = 0;
            self.status = format!("Showing {}", date_key(date));
        }
    }

    fn handle_time_key(&mut self, key: KeyEvent) {
        let options = &self.planner.state().time_options;
        let current = options
            .iter()
            .position(|o| *o == self.planner.state().time_select)
            .unwrap_or(0);
        let target = match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                current.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                (current + 1).min(options.len().saturating_sub(1))
            }
            KeyCode::Enter => current,
            _ => return,
        };
        let label = options.get(target).cloned();
        if let Some(label) = label {
            self.planner.change_time(&label);
            // keep the selector focused so it can be scrolled further
            self.planner.set_focus(Focus::Time);
            self.follow_active();
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.planner.set_focus(Focus::Grid),
            KeyCode::Enter => self.save(),
            KeyCode::Char('u') if control => self.clear(),
            KeyCode::Left => self.planner.editor_mut().move_left(),
            KeyCode::Right => self.planner.editor_mut().move_right(),
            KeyCode::Home => self.planner.editor_mut().move_home(),
            KeyCode::End => self.planner.editor_mut().move_end(),
            KeyCode::Backspace => self.planner.editor_mut().backspace(),
            KeyCode::Delete => self.planner.editor_mut().delete(),
            KeyCode::Char(c) => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.planner.editor_mut().insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn save(&mut self) {
        let label = self.planner.state().active_slot.clone();
        match self.planner.save() {
            Ok(true) => {
                self.last_save = Some(Instant::now());
                let label = label.unwrap_or_default();
                self.status = if self.planner.state().editor.value().is_empty() {
                    format!("Cleared {}", label)
                } else {
                    format!("Saved {}", label)
                };
            }
            Ok(false) => {}
            Err(err) => {
                error!("event=slot_save status=error err={:#}", err);
                self.status = format!("Save failed: {:#}", err);
            }
        }
    }

    fn clear(&mut self) {
        if self.planner.state().active_slot.is_none() {
            return;
        }
        self.planner.editor_mut().clear();
        self.save();
    }

    fn follow_active(&mut self) {
        let state = self.planner.state();
        if let Some(idx) = state
            .active_slot
            .as_deref()
            .and_then(|label| state.timeline.position(label))
        {
            self.grid_cursor = idx;
        }
    }

    fn slot_count(&self) -> usize {
        self.planner.state().timeline.slots.len()
    }

    fn cursor_label(&self) -> Option<String> {
        self.planner
            .state()
            .timeline
            .slots
            .get(self.grid_cursor)
            .map(|s| s.label.clone())
    }

    fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
            ])
            .split(f.size());

        self.draw_header(f, layout[0]);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[1]);
        self.draw_grid(f, body[0]);
        self.draw_controls(f, body[1]);
        self.draw_footer(f, layout[2]);
    }

    fn draw_header(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let date = self.planner.state().date;
        let saved = self
            .last_save
            .map(|t| format!("saved {}", format_elapsed(t)))
            .unwrap_or_else(|| "no changes yet".to_string());
        let title = Line::from(vec![
            Span::styled(
                "dayplan ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                date.format("%Y-%m-%d %a").to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  •  "),
            Span::styled(self.location.scope.label(), Style::default().fg(Color::Green)),
            Span::raw("  •  "),
            Span::styled(
                format!("{}", self.location.dir.display()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  •  "),
            Span::styled(saved, Style::default().fg(Color::Gray)),
        ]);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }

    fn draw_grid(&mut self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let focused = self.planner.state().focus == Focus::Grid;
        let timeline = &self.planner.state().timeline;
        let width = area.width.saturating_sub(12) as usize;
        let items = timeline
            .slots
            .iter()
            .map(|slot| slot_item(slot, width))
            .collect::<Vec<_>>();

        let viewport = area.height.saturating_sub(2) as usize;
        let offset = adjust_offset(self.grid_cursor, self.grid_offset, viewport, 2, items.len());
        let mut state = ListState::default();
        *state.offset_mut() = offset;
        if focused {
            state.select(Some(self.grid_cursor));
        }

        let block = focus_block(
            format!(
                "Timeline ({}/{} filled)",
                timeline.filled_count(),
                timeline.slots.len()
            ),
            focused,
        );
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::LightCyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(list, area, &mut state);
        self.grid_offset = offset;
    }

    fn draw_controls(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let state = self.planner.state();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        let date = Paragraph::new(format!("◀ {} ▶", state.date.format("%Y-%m-%d %a")))
            .alignment(Alignment::Center)
            .block(focus_block("Date".to_string(), state.focus == Focus::Date));
        f.render_widget(date, rows[0]);

        let position = state
            .time_options
            .iter()
            .position(|o| *o == state.time_select)
            .map(|i| i + 1)
            .unwrap_or(0);
        let time = Paragraph::new(format!(
            "◀ {} ▶  ({}/{})",
            state.time_select,
            position,
            state.time_options.len()
        ))
        .alignment(Alignment::Center)
        .block(focus_block("Time".to_string(), state.focus == Focus::Time));
        f.render_widget(time, rows[1]);

        let editing = state.focus == Focus::Editor;
        let text = if editing {
            state.editor.with_caret()
        } else {
            state.editor.value().to_string()
        };
        let editor = Paragraph::new(Span::styled(
            text,
            Style::default().fg(if editing { Color::Cyan } else { Color::White }),
        ))
        .block(focus_block("Task".to_string(), editing));
        f.render_widget(editor, rows[2]);

        let mut lines = Vec::new();
        match state.timeline.active() {
            Some(slot) => {
                lines.push(Line::from(Span::styled(
                    format!("Selected {}", slot.label),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(slot.display_text().to_string()));
            }
            None => lines.push(Line::from("No slot selected")),
        }
        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(focus_block("Slot".to_string(), false));
        f.render_widget(detail, rows[3]);
    }

    fn draw_footer(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let help_bar = Paragraph::new(self.footer_help_line())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(help_bar, rows[0]);

        let status = Paragraph::new(self.status.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(status, rows[1]);
    }

    fn footer_help_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("Tab", Style::default().fg(Color::LightCyan)),
            Span::raw(" focus  "),
        ];
        match self.planner.state().focus {
            Focus::Grid => spans.extend([
                Span::styled("↑↓ / j k", Style::default().fg(Color::LightCyan)),
                Span::raw(" move  "),
                Span::styled("Enter", Style::default().fg(Color::LightYellow)),
                Span::raw(" select  "),
                Span::styled("c", Style::default().fg(Color::LightRed)),
                Span::raw(" clear  "),
                Span::styled("q", Style::default().fg(Color::LightRed)),
                Span::raw(" quit"),
            ]),
            Focus::Date => spans.extend([
                Span::styled("←→", Style::default().fg(Color::LightCyan)),
                Span::raw(" day  "),
                Span::styled("t", Style::default().fg(Color::LightYellow)),
                Span::raw(" today  "),
                Span::styled("q", Style::default().fg(Color::LightRed)),
                Span::raw(" quit"),
            ]),
            Focus::Time => spans.extend([
                Span::styled("↑↓", Style::default().fg(Color::LightCyan)),
                Span::raw(" pick time  "),
                Span::styled("q", Style::default().fg(Color::LightRed)),
                Span::raw(" quit"),
            ]),
            Focus::Editor => spans.extend([
                Span::styled("Enter", Style::default().fg(Color::LightGreen)),
                Span::raw(" save  "),
                Span::styled("Ctrl+U", Style::default().fg(Color::LightRed)),
                Span::raw(" clear  "),
                Span::styled("Esc", Style::default().fg(Color::LightYellow)),
                Span::raw(" back to grid  "),
                Span::styled("Ctrl+C", Style::default().fg(Color::LightRed)),
                Span::raw(" quit"),
            ]),
        }
        Line::from(spans)
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn focus_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(if focused { Color::Cyan } else { Color::Gray })
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
}

fn slot_item(slot: &SlotView, width: usize) -> ListItem<'static> {
    let marker = if slot.active { "▶ " } else { "  " };
    let task_style = if slot.filled() {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    };
    let spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(
            slot.label.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(truncate_text(slot.display_text(), width), task_style),
    ];
    let mut item = ListItem::new(Line::from(spans));
    if slot.active {
        item = item.style(Style::default().bg(Color::Rgb(60, 52, 20)));
    }
    item
}

fn adjust_offset(
    selected: usize,
    current_offset: usize,
    viewport: usize,
    scrolloff: usize,
    len: usize,
) -> usize {
    if viewport == 0 || len == 0 {
        return 0;
    }
    let max_offset = len.saturating_sub(viewport);
    let margin = scrolloff.min(viewport.saturating_sub(1));
    let mut offset = current_offset.min(max_offset);
    if selected < offset.saturating_add(margin) {
        offset = selected.saturating_sub(margin);
    } else {
        let upper = offset
            .saturating_add(viewport.saturating_sub(1))
            .saturating_sub(margin);
        if selected > upper {
            offset = selected.saturating_add(margin + 1).saturating_sub(viewport);
        }
    }
    offset.min(max_offset)
}

fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

fn format_elapsed(last: Instant) -> String {
    let secs = last.elapsed().as_secs();
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, ScheduleStore, StoreScope};
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    /// Reads nothing back and refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    fn app_with<S: KeyValueStore>(backend: S) -> App<S> {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let planner = Planner::new(ScheduleStore::new(backend), date);
        App::new(
            planner,
            StoreLocation {
                dir: PathBuf::from("/tmp/dayplan-test"),
                scope: StoreScope::Explicit,
            },
        )
    }

    fn app() -> App<MemoryStore> {
        app_with(MemoryStore::default())
    }

    fn press<S: KeyValueStore>(app: &mut App<S>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str<S: KeyValueStore>(app: &mut App<S>, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn screen(app: &mut App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn typing_and_enter_saves_the_active_slot() {
        let mut app = app();
        assert_eq!(app.planner.state().focus, Focus::Editor);
        type_str(&mut app, "Standup");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.status, "Saved 09:00");
        let slot = app.planner.state().timeline.find("09:00").unwrap();
        assert_eq!(slot.display_text(), "Standup");
        assert!(screen(&mut app).contains("Standup"));
    }

    #[test]
    fn grid_navigation_selects_and_clears() {
        let mut app = app();
        type_str(&mut app, "Standup");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.planner.state().active_slot.as_deref(), Some("09:30"));
        assert_eq!(app.planner.state().focus, Focus::Editor);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.status, "Cleared 09:00");
        assert!(app.planner.state().timeline.find("09:00").unwrap().task.is_none());
    }

    #[test]
    fn grid_clear_targets_the_highlighted_row() {
        let mut app = app();
        type_str(&mut app, "Standup");
        press(&mut app, KeyCode::Enter);
        app.planner.click_slot("11:00");
        type_str(&mut app, "Dentist");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.cursor_label().as_deref(), Some("09:00"));
        press(&mut app, KeyCode::Char('c'));

        let state = app.planner.state();
        assert_eq!(app.status, "Cleared 09:00");
        assert!(state.timeline.find("09:00").unwrap().task.is_none());
        assert_eq!(
            state.timeline.find("11:00").unwrap().task.as_deref(),
            Some("Dentist")
        );
        assert_eq!(state.focus, Focus::Grid);
    }

    #[test]
    fn failed_save_reports_and_keeps_edit() {
        let mut app = app_with(ReadOnlyStore);
        type_str(&mut app, "Standup");
        press(&mut app, KeyCode::Enter);

        assert!(app.status.starts_with("Save failed"));
        assert!(app.status.contains("disk full"));
        let state = app.planner.state();
        assert_eq!(state.editor.value(), "Standup");
        assert_eq!(state.active_slot.as_deref(), Some("09:00"));
        assert!(!state.timeline.find("09:00").unwrap().filled());
        assert!(app.last_save.is_none());
    }

    #[test]
    fn time_selector_moves_the_selection() {
        let mut app = app();
        app.planner.set_focus(Focus::Time);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        let state = app.planner.state();
        assert_eq!(state.time_select, "10:00");
        assert_eq!(state.active_slot.as_deref(), Some("10:00"));
        assert_eq!(state.focus, Focus::Time);
        assert_eq!(app.grid_cursor, 2);
    }

    #[test]
    fn date_change_resets_selection_and_q_quits() {
        let mut app = app();
        type_str(&mut app, "unsaved");
        app.planner.set_focus(Focus::Date);
        press(&mut app, KeyCode::Right);
        let state = app.planner.state();
        assert_eq!(state.date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert!(state.active_slot.is_none());
        assert_eq!(state.editor.value(), "");
        assert!(screen(&mut app).contains("No slot selected"));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn offset_keeps_cursor_visible() {
        assert_eq!(adjust_offset(0, 0, 10, 2, 26), 0);
        assert_eq!(adjust_offset(25, 0, 10, 2, 26), 16);
        assert_eq!(adjust_offset(5, 16, 10, 2, 26), 3);
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate_text("Standup", 10), "Standup");
        assert_eq!(truncate_text("Quarterly planning", 10), "Quarter...");
    }
}
