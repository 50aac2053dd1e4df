//! Start/due date semantics of a task
//!
//! Dates live in plain `key:value` tags. The due tag may carry a leading `=`
//! (`due:=2021-01-10`), meaning the task happens on that very day rather than
//! any time before it; such a task starts the day before.

use crate::domain::date::parse_date_opt;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

/// Marker prefix of an exact-day due value
const ON_MARKER: char = '=';

/// Read-only view of a task needed to derive its dates
pub trait TaskView {
    /// Raw value of tag `name`, if the task has it
    fn tag_value(&self, name: &str) -> Option<&str>;

    fn is_completed(&self) -> bool;

    fn creation_date(&self) -> Option<NaiveDate>;
}

/// Names of the tags holding the start and due dates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateTagNames {
    pub start: String,
    pub due: String,
}

impl Default for DateTagNames {
    fn default() -> Self {
        Self {
            start: "t".to_string(),
            due: "due".to_string(),
        }
    }
}

/// Modifiers attached to a due date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueFlags {
    on: bool,
}

impl DueFlags {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Due exactly on the date instead of at the latest on it
    pub fn on() -> Self {
        Self { on: true }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn is_empty(&self) -> bool {
        !self.on
    }
}

/// Date rules evaluated for one task against a fixed "today"
#[derive(Debug, Clone)]
pub struct TaskDates<'a, T: TaskView + ?Sized> {
    task: &'a T,
    tags: &'a DateTagNames,
    today: NaiveDate,
}

impl<'a, T: TaskView + ?Sized> TaskDates<'a, T> {
    /// Evaluate against the local calendar date
    pub fn new(task: &'a T, tags: &'a DateTagNames) -> Self {
        Self::with_today(task, tags, Local::now().date_naive())
    }

    pub fn with_today(task: &'a T, tags: &'a DateTagNames, today: NaiveDate) -> Self {
        Self { task, tags, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Parsed value of date tag `name`; missing or malformed yields `None`
    pub fn get_date(&self, name: &str) -> Option<NaiveDate> {
        self.task.tag_value(name).and_then(parse_date_opt)
    }

    /// Due date together with its flags
    ///
    /// A malformed value yields no date and no flags, even when it carried the
    /// `=` marker.
    pub fn due_date_with_flags(&self) -> (Option<NaiveDate>, DueFlags) {
        let Some(raw) = self.task.tag_value(&self.tags.due) else {
            return (None, DueFlags::empty());
        };

        let (value, flags) = match raw.strip_prefix(ON_MARKER) {
            Some(rest) => (rest, DueFlags::on()),
            None => (raw, DueFlags::empty()),
        };

        match parse_date_opt(value) {
            Some(due) => (Some(due), flags),
            None => (None, DueFlags::empty()),
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date_with_flags().0
    }

    /// Explicit start date, or the day before an exact-day due date
    ///
    /// An exact-day due date on the first representable day has no start.
    pub fn start_date(&self) -> Option<NaiveDate> {
        if let Some(start) = self.get_date(&self.tags.start) {
            return Some(start);
        }

        match self.due_date_with_flags() {
            (Some(due), flags) if flags.is_on() => due.pred_opt(),
            _ => None,
        }
    }

    /// Not completed and already started (or without a start date)
    pub fn is_active(&self) -> bool {
        !self.task.is_completed()
            && self
                .start_date()
                .map_or(true, |start| start <= self.today)
    }

    pub fn is_overdue(&self) -> bool {
        !self.task.is_completed() && self.days_till_due() < 0
    }

    /// Days from today until the due date, negative when past
    ///
    /// Returns 0 both for tasks due today and for tasks without a due date.
    pub fn days_till_due(&self) -> i64 {
        self.due_date()
            .map(|due| (due - self.today).num_days())
            .unwrap_or(0)
    }

    /// Days between start (or creation) and due date, 0 when undefined
    pub fn length(&self) -> i64 {
        let start = self.start_date().or_else(|| self.task.creation_date());
        match (start, self.due_date()) {
            (Some(start), Some(due)) if start < due => (due - start).num_days(),
            _ => 0,
        }
    }
}
