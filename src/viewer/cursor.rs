use crate::plan::{DailyPlan, Day, EndOfPlanError, Reading};

/// The day currently on screen, along with which of its readings is selected
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PlanCursor {
    today: Day,
    plan: DailyPlan,
    // Invariant: less than `plan.readings.len()` (which is never zero)
    selected: usize,
}

impl PlanCursor {
    pub(crate) fn new(today: Day) -> Self {
        PlanCursor {
            today,
            plan: DailyPlan::from(today),
            selected: 0,
        }
    }

    pub(crate) fn start_day(mut self, day: Day) -> Self {
        self.show(day);
        self
    }

    pub(crate) fn day(&self) -> Day {
        self.plan.day
    }

    pub(crate) fn plan(&self) -> &DailyPlan {
        &self.plan
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn selected_reading(&self) -> Option<&Reading> {
        self.plan.readings.get(self.selected)
    }

    pub(crate) fn next_day(&mut self) -> Result<(), EndOfPlanError> {
        let day = self.day().next()?;
        self.show(day);
        Ok(())
    }

    pub(crate) fn previous_day(&mut self) -> Result<(), EndOfPlanError> {
        let day = self.day().previous()?;
        self.show(day);
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.show(self.today);
    }

    pub(crate) fn jump_to_day(&mut self, day: Day) {
        self.show(day);
    }

    // Returns `false` if the last reading is already selected
    pub(crate) fn select_next(&mut self) -> bool {
        if self.selected + 1 < self.plan.readings.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    // Returns `false` if the first reading is already selected
    pub(crate) fn select_previous(&mut self) -> bool {
        if let Some(i) = self.selected.checked_sub(1) {
            self.selected = i;
            true
        } else {
            false
        }
    }

    fn show(&mut self, day: Day) {
        if day != self.plan.day {
            log::debug!("showing day {day}");
            self.plan = DailyPlan::from(day);
        }
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let cursor = PlanCursor::new(Day::clamped(5));
        assert_eq!(cursor.day(), Day::clamped(5));
        assert_eq!(cursor.plan().label, "Day 5");
        assert_eq!(cursor.selected(), 0);
        assert_eq!(
            cursor.selected_reading().map(|r| r.reference.as_str()),
            Some("Genesis 10-11")
        );
    }

    #[test]
    fn test_start_day() {
        let cursor = PlanCursor::new(Day::clamped(5)).start_day(Day::clamped(40));
        assert_eq!(cursor.day(), Day::clamped(40));
        assert_eq!(cursor.today, Day::clamped(5));
    }

    #[test]
    fn test_step_days() {
        let mut cursor = PlanCursor::new(Day::clamped(2));
        assert_eq!(cursor.next_day(), Ok(()));
        assert_eq!(cursor.day(), Day::clamped(3));
        assert_eq!(cursor.previous_day(), Ok(()));
        assert_eq!(cursor.previous_day(), Ok(()));
        assert_eq!(cursor.day(), Day::FIRST);
        assert_eq!(cursor.previous_day(), Err(EndOfPlanError));
        assert_eq!(cursor.day(), Day::FIRST);
    }

    #[test]
    fn test_end_of_plan() {
        let mut cursor = PlanCursor::new(Day::LAST);
        assert_eq!(cursor.next_day(), Err(EndOfPlanError));
        assert_eq!(cursor.day(), Day::LAST);
    }

    #[test]
    fn test_selection() {
        let mut cursor = PlanCursor::new(Day::clamped(6));
        assert!(!cursor.select_previous());
        assert!(cursor.select_next());
        assert!(cursor.select_next());
        assert!(!cursor.select_next());
        assert_eq!(cursor.selected(), 2);
        assert_eq!(
            cursor.selected_reading().map(|r| r.reference.as_str()),
            Some("Prov 1:1-7")
        );
        assert!(cursor.select_previous());
        assert_eq!(cursor.selected(), 1);
    }

    #[test]
    fn test_day_change_resets_selection() {
        let mut cursor = PlanCursor::new(Day::clamped(6));
        assert!(cursor.select_next());
        assert_eq!(cursor.next_day(), Ok(()));
        assert_eq!(cursor.selected(), 0);
    }

    #[test]
    fn test_jumps() {
        let mut cursor = PlanCursor::new(Day::clamped(10));
        cursor.jump_to_day(Day::clamped(300));
        assert_eq!(cursor.day(), Day::clamped(300));
        assert_eq!(cursor.plan().readings.len(), 2);
        cursor.jump_to_today();
        assert_eq!(cursor.day(), Day::clamped(10));
    }
}
