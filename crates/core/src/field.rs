use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::{CronParseError, CronResult};

/// Number of space separated parts in an expression: five schedule fields plus the command.
pub const EXPRESSION_PARTS: usize = ScheduleField::ALL.len() + 1;

/// Schedule fields, ordered by their position in the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl ScheduleField {
    /// All fields in expression order.
    pub const ALL: [ScheduleField; 5] = [
        ScheduleField::Minute,
        ScheduleField::Hour,
        ScheduleField::DayOfMonth,
        ScheduleField::Month,
        ScheduleField::DayOfWeek,
    ];

    /// Position of the field inside the raw expression.
    pub fn ordinal(&self) -> usize {
        match self {
            ScheduleField::Minute => 0,
            ScheduleField::Hour => 1,
            ScheduleField::DayOfMonth => 2,
            ScheduleField::Month => 3,
            ScheduleField::DayOfWeek => 4,
        }
    }

    pub fn lower_bound(&self) -> u32 {
        match self {
            ScheduleField::Minute | ScheduleField::Hour => 0,
            ScheduleField::DayOfMonth | ScheduleField::Month | ScheduleField::DayOfWeek => 1,
        }
    }

    pub fn upper_bound(&self) -> u32 {
        match self {
            ScheduleField::Minute => 59,
            ScheduleField::Hour => 23,
            ScheduleField::DayOfMonth => 31,
            ScheduleField::Month => 12,
            ScheduleField::DayOfWeek => 7,
        }
    }

    /// Inclusive range of valid values.
    pub fn range(&self) -> RangeInclusive<u32> {
        self.lower_bound()..=self.upper_bound()
    }

    /// Upper snake case name used in error messages, e.g. `DAY_OF_MONTH`.
    pub fn name(&self) -> &'static str {
        match self {
            ScheduleField::Minute => "MINUTE",
            ScheduleField::Hour => "HOUR",
            ScheduleField::DayOfMonth => "DAY_OF_MONTH",
            ScheduleField::Month => "MONTH",
            ScheduleField::DayOfWeek => "DAY_OF_WEEK",
        }
    }

    /// Human readable name, e.g. `day of month`.
    pub fn display_name(&self) -> String {
        self.name().to_lowercase().replace('_', " ")
    }

    pub fn value_in_range(&self, value: u32) -> bool {
        self.range().contains(&value)
    }

    /// Fails with an out of range error quoting `token` when `value` falls outside the field.
    pub fn require_in_range(&self, value: u32, token: &str) -> CronResult<()> {
        if self.value_in_range(value) {
            Ok(())
        } else {
            Err(CronParseError::out_of_range(*self, token))
        }
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
