//! Weekly schedule grouping for display.
//!
//! Mass times arrive as a flat list; the detail page shows them grouped by
//! day in canonical order (Sunday first) and sorted by time within a day.
//! Days without masses are dropped.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use crate::net::types::MassTime;
use crate::util::translations::{DAY_ORDER, day_name};

/// One day's worth of masses, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySchedule {
    /// Backend day value (`"Sunday"` ..).
    pub day: &'static str,
    /// French display name.
    pub day_fr: &'static str,
    /// Masses for that day, sorted by time of day.
    pub masses: Vec<MassTime>,
}

/// Group a flat mass-time list by day of week.
pub fn group_by_day(mass_times: &[MassTime]) -> Vec<DaySchedule> {
    DAY_ORDER
        .iter()
        .filter_map(|&day| {
            let mut masses: Vec<MassTime> =
                mass_times.iter().filter(|m| m.day_of_week == day).cloned().collect();
            if masses.is_empty() {
                return None;
            }
            // HH:MM:SS strings sort correctly as text.
            masses.sort_by(|a, b| a.time.cmp(&b.time));
            Some(DaySchedule { day, day_fr: day_name(day), masses })
        })
        .collect()
}

/// Trim a backend `HH:MM:SS` time to the displayed `HH:MM`.
pub fn display_time(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}
