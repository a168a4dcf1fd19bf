use chrono::{Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strips the time-of-day from a backend timestamp: `2024-03-01T00:00:00`
/// becomes `2024-03-01`. Values without a `T` pass through unchanged.
pub fn date_only(raw: &str) -> String {
    raw.split('T').next().unwrap_or_default().to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&date_only(raw), DATE_FORMAT).ok()
}

/// Human-readable date for tables, e.g. `01 Mar 2024`.
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}

pub fn is_on(raw: &str, day: NaiveDate) -> bool {
    parse_date(raw) == Some(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_strips_time() {
        assert_eq!(date_only("1990-05-17T00:00:00"), "1990-05-17");
        assert_eq!(date_only("1990-05-17T10:30:00+05:30"), "1990-05-17");
        assert_eq!(date_only("1990-05-17"), "1990-05-17");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-01T09:00:00"), "01 Mar 2024");
        assert_eq!(display_date("not a date"), "not a date");
    }

    #[test]
    fn test_is_on() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(is_on("2024-03-01T00:00:00", day));
        assert!(!is_on("2024-03-02", day));
    }
}
