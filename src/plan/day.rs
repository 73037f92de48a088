use std::fmt;
use thiserror::Error;
use time::{macros::date, Date, Duration};

/// First day of the fixed non-leap year used to turn day numbers back into
/// dates.  Dates shown for a day always carry this year, not the current one.
const REFERENCE_START: Date = date!(2026 - 01 - 01);

/// A position in the reading plan, always within `1..=365`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Day(u16);

impl Day {
    pub(crate) const FIRST: Day = Day(1);
    pub(crate) const LAST: Day = Day(365);

    /// Construct a `Day`, clamping out-of-range values to the nearest end of
    /// the plan
    pub(crate) fn clamped(n: i64) -> Day {
        let n = n.clamp(i64::from(Day::FIRST.0), i64::from(Day::LAST.0));
        Day(u16::try_from(n).unwrap_or(Day::LAST.0))
    }

    /// Construct a `Day` only if `n` is already within the plan
    pub(crate) fn checked(n: i64) -> Option<Day> {
        (i64::from(Day::FIRST.0)..=i64::from(Day::LAST.0))
            .contains(&n)
            .then(|| Day::clamped(n))
    }

    pub(crate) fn get(self) -> u16 {
        self.0
    }

    pub(crate) fn next(self) -> Result<Day, EndOfPlanError> {
        if self == Day::LAST {
            Err(EndOfPlanError)
        } else {
            Ok(Day(self.0 + 1))
        }
    }

    pub(crate) fn previous(self) -> Result<Day, EndOfPlanError> {
        if self == Day::FIRST {
            Err(EndOfPlanError)
        } else {
            Ok(Day(self.0 - 1))
        }
    }

    /// The plan label for this day, e.g. "Day 42"
    pub(crate) fn label(self) -> String {
        format!("Day {}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of the reading plan")]
pub(crate) struct EndOfPlanError;

/// Returns the plan day for a local calendar date: its 1-based ordinal within
/// its year.  December 31 of a leap year is clamped to the last day.
pub(crate) fn day_of_year(date: Date) -> Day {
    Day::clamped(i64::from(date.ordinal()))
}

/// Returns the date in the reference year that falls on `day`
pub(crate) fn reference_date(day: Day) -> Date {
    REFERENCE_START.saturating_add(Duration::days(i64::from(day.get()) - 1))
}

/// Returns the reference-year date for `day` as a long date, e.g.
/// "January 1, 2026"
pub(crate) fn date_for_day(day: Day) -> String {
    long_date(reference_date(day))
}

fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}
