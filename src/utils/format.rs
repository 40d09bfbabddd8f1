/// Render a number of seconds as `[N day(s), ]H:MM:SS[.ffffff]`.
/// The microsecond part only appears when the value is fractional.
pub(crate) fn format_duration(seconds: f64) -> String {
    let micros = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1_000_000.0).round() as u64
    } else {
        0
    };

    let frac = micros % 1_000_000;
    let whole = micros / 1_000_000;
    let days = whole / 86_400;
    let hours = (whole % 86_400) / 3_600;
    let minutes = (whole % 3_600) / 60;
    let secs = whole % 60;

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{secs:02}"));
    if frac > 0 {
        out.push_str(&format!(".{frac:06}"));
    }
    out
}

/// 12-hour clock label for an hour of day: 0 is "12 AM", 1 through 12
/// carry "AM", 13 through 23 are shifted down with "PM".
pub(crate) fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=12 => format!("{hour} AM"),
        _ => format!("{} PM", hour - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_zero() {
        assert_eq!(format_duration(0.0), "0:00:00");
    }

    #[test]
    fn format_duration_under_a_day() {
        assert_eq!(format_duration(59.0), "0:00:59");
        assert_eq!(format_duration(3_723.0), "1:02:03");
    }

    #[test]
    fn format_duration_days() {
        assert_eq!(format_duration(86_400.0), "1 day, 0:00:00");
        assert_eq!(format_duration(2.0 * 86_400.0 + 3_661.0), "2 days, 1:01:01");
    }

    #[test]
    fn format_duration_fractional_seconds() {
        assert_eq!(format_duration(942.5), "0:15:42.500000");
        assert_eq!(format_duration(1.0 / 3.0), "0:00:00.333333");
    }

    #[test]
    fn format_duration_guards_bad_input() {
        assert_eq!(format_duration(f64::NAN), "0:00:00");
        assert_eq!(format_duration(-5.0), "0:00:00");
    }

    #[test]
    fn format_hour_twelve_hour_clock() {
        assert_eq!(format_hour(0), "12 AM");
        assert_eq!(format_hour(1), "1 AM");
        assert_eq!(format_hour(11), "11 AM");
        assert_eq!(format_hour(12), "12 AM");
        assert_eq!(format_hour(13), "1 PM");
        assert_eq!(format_hour(17), "5 PM");
        assert_eq!(format_hour(23), "11 PM");
    }
}
