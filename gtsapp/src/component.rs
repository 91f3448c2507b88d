pub mod dialog;
pub mod table;

pub use dialog::DeleteConfirmation;
pub use table::{
    Action,
    Row,
    Table,
};

/// Placeholder for names and dates the server did not resolve.
pub const UNKNOWN: &str = "Unknown";

/// Render a date the way the pages show them, e.g. `May 1, 2024`.
pub fn long_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use super::*;

    #[test]
    fn fallbacks() {
        assert_eq!(long_date(NaiveDate::from_ymd_opt(2024, 5, 1)), "May 1, 2024");
        assert_eq!(long_date(None), "Unknown");
        assert_eq!(or_unknown(Some("Tech U")), "Tech U");
        assert_eq!(or_unknown(Some("")), "Unknown");
        assert_eq!(or_unknown(None), "Unknown");
    }
}
