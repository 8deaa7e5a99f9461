//! Release-date windows

use chrono::{Days, Months, NaiveDate};

/// How far back the release-date window reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    #[default]
    All,
    Year,
    Month,
    Week,
}

impl TimePeriod {
    /// Case-insensitive; unknown tokens mean no window
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("year") => TimePeriod::Year,
            Some(value) if value.eq_ignore_ascii_case("month") => TimePeriod::Month,
            Some(value) if value.eq_ignore_ascii_case("week") => TimePeriod::Week,
            _ => TimePeriod::All,
        }
    }

    /// Earliest release date inside the window ending at `today`
    ///
    /// `None` for `All`, or if the date arithmetic leaves chrono's range.
    pub fn window_start(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimePeriod::All => None,
            TimePeriod::Year => today.checked_sub_months(Months::new(12)),
            TimePeriod::Month => today.checked_sub_months(Months::new(1)),
            TimePeriod::Week => today.checked_sub_days(Days::new(7)),
        }
    }
}
