use serde::Serialize;

use crate::time::current_shifted_time;
use crate::time::format_iso_millis;

use super::Success;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTimeResponse {
    current_time: String,
    timezone: &'static str,
    offset: &'static str,
}

/// Current time in WITA
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/api/current-time-wita
/// ```
///
/// Response:
/// ```json
/// { "currentTime": "2024-05-01T18:00:00.000Z", "timezone": "WITA", "offset": "+08:00" }
/// ```
pub async fn current_time() -> Success<CurrentTimeResponse> {
    let shifted = current_shifted_time();

    Success::ok(CurrentTimeResponse {
        current_time: format_iso_millis(&shifted.time),
        timezone: shifted.timezone,
        offset: shifted.offset,
    })
}
