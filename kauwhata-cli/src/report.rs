//! Human-readable renderings of file sizes and durations.

use std::time::Duration;

const SIZE_UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Formats a byte count with one decimal place in the largest fitting unit.
///
/// Sizes of 1024 GB and above are reported in TB.
///
/// # Examples
/// ```
/// use kauwhata_cli::report::convert_bytes;
///
/// assert_eq!(convert_bytes(200), "200.0 bytes");
/// assert_eq!(convert_bytes(2_048), "2.0 KB");
/// ```
#[must_use]
pub fn convert_bytes(size: u64) -> String {
    let mut value = size as f64;
    for unit in SIZE_UNITS {
        if value < 1024.0 {
            return format!("{value:3.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:3.1} TB")
}

/// Formats `elapsed` as zero-padded days, hours, minutes and seconds.
///
/// Seconds are rounded to the nearest whole number.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use kauwhata_cli::report::time_convert;
///
/// assert_eq!(
///     time_convert(Duration::from_secs(93_784)),
///     "01 days, 02 hour, 03 minutes, 04 seconds",
/// );
/// ```
#[must_use]
pub fn time_convert(elapsed: Duration) -> String {
    let total = elapsed.as_secs_f64();
    let days = (total / SECONDS_PER_DAY).floor();
    let rest = total.rem_euclid(SECONDS_PER_DAY);
    let hours = (rest / SECONDS_PER_HOUR).floor();
    let rest = rest.rem_euclid(SECONDS_PER_HOUR);
    let minutes = (rest / SECONDS_PER_MINUTE).floor();
    let seconds = rest.rem_euclid(SECONDS_PER_MINUTE);
    format!("{days:02.0} days, {hours:02.0} hour, {minutes:02.0} minutes, {seconds:02.0} seconds")
}
