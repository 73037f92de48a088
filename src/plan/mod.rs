mod day;
mod reading;
mod table;
pub(crate) use self::day::{date_for_day, day_of_year, Day, EndOfPlanError};
pub(crate) use self::reading::{Category, Reading};
use std::fmt;

/// The readings assigned to one day of the plan
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DailyPlan {
    pub(crate) day: Day,
    pub(crate) label: String,
    pub(crate) readings: Vec<Reading>,
}

impl DailyPlan {
    /// The reference-year date on which this plan falls, as a long date
    pub(crate) fn date(&self) -> String {
        date_for_day(self.day)
    }
}

// Day 1: January 1, 2026
//   Old Testament: Genesis 1-2
//     https://...
impl fmt::Display for DailyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.label, self.date())?;
        for r in &self.readings {
            writeln!(f, "  {}: {}", r.category, r.reference)?;
            writeln!(f, "    {}", r.link)?;
        }
        Ok(())
    }
}

/// Look up the readings for a day of the plan.  The day is clamped to the
/// plan first, and days without a schedule entry get the placeholder entry.
pub(crate) fn reading_for_day(day: i64) -> DailyPlan {
    let day = Day::clamped(day);
    let readings = table::entry_for(day)
        .split('|')
        .map(Reading::new)
        .collect::<Vec<_>>();
    log::debug!("resolved {} readings for day {day}", readings.len());
    DailyPlan {
        day,
        label: day.label(),
        readings,
    }
}

impl From<Day> for DailyPlan {
    fn from(day: Day) -> DailyPlan {
        reading_for_day(day.get().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references(plan: &DailyPlan) -> Vec<&str> {
        plan.readings.iter().map(|r| r.reference.as_str()).collect()
    }

    fn categories(plan: &DailyPlan) -> Vec<Category> {
        plan.readings.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_day_one() {
        let plan = reading_for_day(1);
        assert_eq!(plan.day, Day::FIRST);
        assert_eq!(plan.label, "Day 1");
        assert_eq!(references(&plan), ["Genesis 1-2", "Psalm 19"]);
        assert_eq!(categories(&plan), [Category::OldTestament, Category::Psalms]);
        assert_eq!(
            plan.readings[1].link,
            "https://www.biblegateway.com/passage/?search=Psalm%2019&version=RSVCE"
        );
    }

    #[test]
    fn test_three_readings() {
        let plan = reading_for_day(6);
        assert_eq!(references(&plan), ["Genesis 12-13", "Job 1-2", "Prov 1:1-7"]);
        assert_eq!(
            categories(&plan),
            [
                Category::OldTestament,
                Category::OldTestament,
                Category::WisdomBooks
            ]
        );
    }

    #[test]
    fn test_clamping() {
        assert_eq!(reading_for_day(0), reading_for_day(1));
        assert_eq!(reading_for_day(-7).day, Day::FIRST);
        assert_eq!(reading_for_day(366), reading_for_day(365));
        assert_eq!(reading_for_day(1000).label, "Day 365");
    }

    #[test]
    fn test_unlisted_day() {
        let plan = reading_for_day(200);
        assert_eq!(plan.label, "Day 200");
        assert_eq!(references(&plan), ["Consult full reading plan", "Psalm 1"]);
        assert_eq!(categories(&plan), [Category::OldTestament, Category::Psalms]);
    }

    #[test]
    fn test_every_day_has_readings() {
        for n in 1..=365 {
            let plan = reading_for_day(n);
            assert_eq!(i64::from(plan.day.get()), n);
            assert!(!plan.readings.is_empty(), "no readings for day {n}");
        }
    }

    #[test]
    fn test_pure() {
        assert_eq!(reading_for_day(44), reading_for_day(44));
        assert_eq!(DailyPlan::from(Day::clamped(44)), reading_for_day(44));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            reading_for_day(1).to_string(),
            concat!(
                "Day 1: January 1, 2026\n",
                "  Old Testament: Genesis 1-2\n",
                "    https://www.biblegateway.com/passage/?search=Genesis%201-2&version=RSVCE\n",
                "  Psalms: Psalm 19\n",
                "    https://www.biblegateway.com/passage/?search=Psalm%2019&version=RSVCE\n",
            )
        );
    }
}
