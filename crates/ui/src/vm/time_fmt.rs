use chrono::{DateTime, Utc};

/// Calendar date a record was set on.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Countdown as `m:ss`.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::{format_countdown, format_date};
    use memory_core::time::fixed_now;

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(60), "1:00");
        assert_eq!(format_countdown(45), "0:45");
        assert_eq!(format_countdown(7), "0:07");
        assert_eq!(format_countdown(0), "0:00");
    }

    #[test]
    fn date_drops_time_of_day() {
        assert_eq!(format_date(fixed_now()), "2023-11-14");
    }
}
