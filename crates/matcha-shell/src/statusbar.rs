//! Status bar clock -- cached display strings refreshed by the 1 s tick.
//!
//! The lock screen's large clock and the desktop taskbar pill reuse the
//! same snapshot; nothing here touches the mode state machine.

use crate::platform::WallTime;

/// Month names for date display.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cached formatted clock state.
#[derive(Debug)]
pub struct StatusBar {
    clock_text: String,
    date_text: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            clock_text: "00:00".to_string(),
            date_text: String::new(),
        }
    }

    /// Refresh the cached strings from a wall-clock snapshot.
    pub fn update(&mut self, time: &WallTime) {
        self.clock_text = format!("{:02}:{:02}", time.hour, time.minute);
        let month = if (1..=12).contains(&time.month) {
            MONTHS[(time.month - 1) as usize]
        } else {
            "???"
        };
        self.date_text = format!("{} {} {month}", time.weekday.short(), time.day);
    }

    /// "HH:MM".
    pub fn clock(&self) -> &str {
        &self.clock_text
    }

    /// "Tue 19 August" (empty until the first tick).
    pub fn date(&self) -> &str {
        &self.date_text
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::wall_time_from_unix;

    #[test]
    fn starts_with_placeholder_clock() {
        let bar = StatusBar::new();
        assert_eq!(bar.clock(), "00:00");
        assert_eq!(bar.date(), "");
    }

    #[test]
    fn update_formats_clock_and_date() {
        let mut bar = StatusBar::new();
        // 2000-02-29 12:30:45 UTC, a Tuesday.
        bar.update(&wall_time_from_unix(951_827_445));
        assert_eq!(bar.clock(), "12:30");
        assert_eq!(bar.date(), "Tue 29 February");
    }

    #[test]
    fn update_zero_pads_minutes() {
        let mut bar = StatusBar::new();
        // 1970-01-01 05:07:00 UTC.
        bar.update(&wall_time_from_unix(5 * 3600 + 7 * 60));
        assert_eq!(bar.clock(), "05:07");
    }
}
