//! Wall-clock formatting.

use chrono::{Local, Timelike};

/// Format an hour and minute as `HHhMM`.
pub fn format_hhmm<T: Timelike>(time: &T) -> String {
    format!("{:02}h{:02}", time.hour(), time.minute())
}

/// Current local time as `HHhMM`.
pub fn local_hhmm() -> String {
    format_hhmm(&Local::now())
}
