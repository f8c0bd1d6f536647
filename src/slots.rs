use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const SLOT_START_HOUR: i64 = 9;
pub const SLOT_COUNT: usize = 26;
pub const SLOT_MINUTES: i64 = 30;

/// Formats a wall-clock time as a slot label: `HH:MM`, 24-hour, zero padded.
///
/// The output never depends on the host locale or time zone, so labels
/// produced for the grid and for the time selector always compare equal.
pub fn format_slot_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn slot_offset(index: usize) -> Duration {
    Duration::minutes(SLOT_START_HOUR * 60 + index as i64 * SLOT_MINUTES)
}

/// Labels for every slot of the day, anchored at `reference` (normally midnight).
pub fn generate_slots(reference: NaiveDateTime) -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|i| format_slot_label((reference + slot_offset(i)).time()))
        .collect()
}

pub fn day_slots(date: NaiveDate) -> Vec<String> {
    generate_slots(date.and_time(NaiveTime::MIN))
}

/// Slot labels without any calendar date attached; used for the time selector.
pub fn time_of_day_slots() -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|i| {
            let (time, _) = NaiveTime::MIN.overflowing_add_signed(slot_offset(i));
            format_slot_label(time)
        })
        .collect()
}

/// Normalizes loose input (`9:00`, `09:00`, ` 13:30 `) to a canonical slot label.
pub fn parse_slot_label(input: &str) -> Option<String> {
    let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()?;
    let label = format_slot_label(time);
    time_of_day_slots().into_iter().find(|l| *l == label)
}
