//! # Time Utilities
//!
//! Hour/day/week conversions and [`TaskDuration`], a day/hour/minute/second
//! duration entered field by field.

use crate::utils::numeric::Numeric;
use crate::utils::terminal::{PromptErrors, Terminal};
use std::{
    fmt::Display,
    io::{BufRead, Write},
};

const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_WEEK: f64 = 7.0;

pub fn hours_to_days<T: Numeric>(hours: T) -> f64 {
    hours.to_f64() / HOURS_PER_DAY
}

pub fn hours_to_weeks<T: Numeric>(hours: T) -> f64 {
    hours.to_f64() / (HOURS_PER_DAY * DAYS_PER_WEEK)
}

pub fn days_to_weeks<T: Numeric>(days: T) -> f64 {
    days.to_f64() / DAYS_PER_WEEK
}

/// A duration made of independent day, hour, minute and second components.
///
/// Components are not normalised: 90 minutes stays 90 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskDuration {
    days: i32,
    hours: i32,
    minutes: i32,
    seconds: i32,
}

impl TaskDuration {
    pub fn new(days: i32, hours: i32, minutes: i32, seconds: i32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    pub fn set_days(&mut self, days: i32) {
        self.days = days;
    }

    pub fn set_hours(&mut self, hours: i32) {
        self.hours = hours;
    }

    pub fn set_minutes(&mut self, minutes: i32) {
        self.minutes = minutes;
    }

    pub fn set_seconds(&mut self, seconds: i32) {
        self.seconds = seconds;
    }

    /// Total length in seconds. Computed in `i64`, so every component combination fits.
    pub fn to_seconds(&self) -> i64 {
        i64::from(self.days) * 86_400
            + i64::from(self.hours) * 3_600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds)
    }
}

impl Display for TaskDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Prompts for each component in turn; every component must be at least 1.
pub fn read_task_duration<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
) -> Result<TaskDuration, PromptErrors> {
    let mut duration = TaskDuration::default();

    duration.set_days(terminal.ask_number("Please Enter Number Of Days? ", 1, i32::MAX)?);
    duration.set_hours(terminal.ask_number("Please Enter Number Of Hours? ", 1, i32::MAX)?);
    duration.set_minutes(terminal.ask_number("Please Enter Number Of Minutes? ", 1, i32::MAX)?);
    duration.set_seconds(terminal.ask_number("Please Enter Number Of Seconds? ", 1, i32::MAX)?);

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_conversions() {
        assert_eq!(hours_to_days(48), 2.0);
        assert_eq!(hours_to_days(6.0), 0.25);
        assert_eq!(hours_to_weeks(336u32), 2.0);
        assert_eq!(days_to_weeks(14), 2.0);
        assert_eq!(days_to_weeks(-3.5), -0.5);
    }

    #[test]
    fn test_to_seconds() {
        assert_eq!(TaskDuration::default().to_seconds(), 0);
        assert_eq!(TaskDuration::new(1, 2, 3, 4).to_seconds(), 93_784);
        assert_eq!(TaskDuration::new(0, 0, 90, 0).to_seconds(), 5_400);
    }

    #[test]
    fn test_to_seconds_does_not_overflow() {
        let duration = TaskDuration::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        let max = i64::from(i32::MAX);
        assert_eq!(duration.to_seconds(), max * 86_400 + max * 3_600 + max * 60 + max);
    }

    #[test]
    fn test_setters_and_display() {
        let mut duration = TaskDuration::default();
        duration.set_days(2);
        duration.set_hours(5);
        duration.set_minutes(30);
        duration.set_seconds(15);

        assert_eq!(duration.days(), 2);
        assert_eq!(duration.hours(), 5);
        assert_eq!(duration.minutes(), 30);
        assert_eq!(duration.seconds(), 15);
        assert_eq!(duration.to_string(), "2d 5h 30m 15s");
    }

    #[test]
    fn test_read_task_duration() {
        let mut terminal = Terminal::new(Cursor::new("0\n1\n2\nx\n3\n4\n"), Vec::new());
        let duration = read_task_duration(&mut terminal).unwrap();

        assert_eq!(duration, TaskDuration::new(1, 2, 3, 4));

        let out = String::from_utf8(terminal.into_parts().1).unwrap();
        assert_eq!(
            out.matches("Please enter a number between 1 and 2147483647.").count(),
            2
        );
    }

    #[test]
    fn test_read_task_duration_closed_input() {
        let mut terminal = Terminal::new(Cursor::new("1\n1\n"), Vec::new());
        assert!(matches!(
            read_task_duration(&mut terminal),
            Err(PromptErrors::InputClosed)
        ));
    }
}
