//! Central Indonesian time (WITA) for display purposes

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::TimeDelta;
use chrono::Utc;

/// Label of the shifted time
pub const TIMEZONE: &str = "WITA";

/// Offset of the shifted time, as shown to the user
pub const OFFSET: &str = "+08:00";

const OFFSET_HOURS: i64 = 8;

/// A wall-clock instant shifted into WITA
#[derive(Debug, PartialEq, Eq)]
pub struct ShiftedTime {
    /// The shifted instant, still typed as UTC
    pub time: DateTime<Utc>,

    pub timezone: &'static str,

    pub offset: &'static str,
}

/// Shift the given instant by the WITA offset
pub fn shift(now: DateTime<Utc>) -> ShiftedTime {
    ShiftedTime {
        time: now + TimeDelta::hours(OFFSET_HOURS),
        timezone: TIMEZONE,
        offset: OFFSET,
    }
}

/// Format a timestamp the way browsers do: `2024-05-01T10:00:00.000Z`
pub fn format_iso_millis(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time in WITA
pub fn current_shifted_time() -> ShiftedTime {
    shift(Utc::now())
}
