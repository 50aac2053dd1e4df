//! Task report use case

use crate::domain::dates::{DateTagNames, TaskDates, TaskView};
use crate::domain::implied::{shared_expander, ImplicationExpander};
use crate::domain::todo::Todo;
use crate::error::{Result, TodoTagsError};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::sync::Arc;

/// Derived view of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub text: String,
    pub completed: bool,
    pub implied: Vec<String>,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    /// Due exactly on `due` rather than by it
    pub due_on: bool,
    pub active: bool,
    pub overdue: bool,
    pub days_till_due: i64,
    pub length: i64,
}

/// Which tasks to keep in a report
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFilter {
    pub overdue_only: bool,
    pub active_only: bool,
}

impl ReportFilter {
    fn accepts(&self, report: &TaskReport) -> bool {
        (!self.overdue_only || report.overdue) && (!self.active_only || report.active)
    }
}

/// Service turning todo.txt text into task reports
pub struct ReportService {
    expander: Arc<ImplicationExpander>,
    tags: DateTagNames,
    today: NaiveDate,
}

impl ReportService {
    /// Create a report service with its own expander built from `config`
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Self::with_expander(
            Arc::new(ImplicationExpander::new(config.implication_table())),
            config.date_tags().clone(),
            today,
        )
    }

    /// Create a report service using the process-wide expander
    ///
    /// The implication table of `config` is only read if no expander has been
    /// loaded yet in this process.
    pub fn shared(config: &Config, today: NaiveDate) -> Result<Self> {
        let expander = shared_expander(|| Ok::<_, TodoTagsError>(config.implication_table()))?;
        Ok(Self::with_expander(
            expander,
            config.date_tags().clone(),
            today,
        ))
    }

    pub fn with_expander(
        expander: Arc<ImplicationExpander>,
        tags: DateTagNames,
        today: NaiveDate,
    ) -> Self {
        Self {
            expander,
            tags,
            today,
        }
    }

    /// Tags implied by `items`
    pub fn implied(&self, items: &[String]) -> Vec<String> {
        self.expander.expand(items)
    }

    /// Report on a single todo.txt line
    pub fn report_line(&self, line: &str) -> Result<TaskReport> {
        let todo = Todo::parse(line)?;
        Ok(self.report(&todo))
    }

    /// Report on every non-blank line of a todo.txt document
    pub fn report_all(&self, contents: &str, filter: ReportFilter) -> Result<Vec<TaskReport>> {
        let mut reports = Vec::new();
        for line in contents.lines().filter(|line| !line.trim().is_empty()) {
            let report = self.report_line(line)?;
            if filter.accepts(&report) {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    fn report(&self, todo: &Todo) -> TaskReport {
        let dates = TaskDates::with_today(todo, &self.tags, self.today);
        let (due, flags) = dates.due_date_with_flags();

        TaskReport {
            text: todo.text().to_string(),
            completed: todo.is_completed(),
            implied: self.expander.expand(todo.tag_identifiers()),
            start: dates.start_date(),
            due,
            due_on: flags.is_on(),
            active: dates.is_active(),
            overdue: dates.is_overdue(),
            days_till_due: dates.days_till_due(),
            length: dates.length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> ReportService {
        let config = Config::from_toml_str(
            r#"
[implied]
"+pygolang" = "+work +python +go"
"@jp" = "+work"
"+work" = "@office"
"#,
        )
        .unwrap();
        ReportService::new(&config, ymd(2021, 1, 5))
    }

    #[test]
    fn test_report_line_combines_tags_and_dates() {
        let report = service()
            .report_line("2021-01-01 Release +pygolang due:=2021-01-10")
            .unwrap();

        assert_eq!(report.implied, vec!["+go", "+python", "+work", "@office"]);
        assert_eq!(report.due, Some(ymd(2021, 1, 10)));
        assert!(report.due_on);
        assert_eq!(report.start, Some(ymd(2021, 1, 9)));
        assert!(!report.active);
        assert!(!report.overdue);
        assert_eq!(report.days_till_due, 5);
        assert_eq!(report.length, 1);
    }

    #[test]
    fn test_report_overdue_task() {
        let report = service().report_line("Pay rent @jp due:2021-01-01").unwrap();
        assert!(report.overdue);
        assert!(report.active);
        assert_eq!(report.days_till_due, -4);
        assert_eq!(report.implied, vec!["+work", "@office"]);
    }

    #[test]
    fn test_report_all_skips_blank_lines_and_filters() {
        let contents = "Pay rent due:2021-01-01\n\n\
                        x 2021-01-02 Old chore due:2020-12-01\n\
                        Plan trip t:2021-02-01\n";
        let service = service();

        let all = service.report_all(contents, ReportFilter::default()).unwrap();
        assert_eq!(all.len(), 3);

        let overdue = service
            .report_all(
                contents,
                ReportFilter {
                    overdue_only: true,
                    ..ReportFilter::default()
                },
            )
            .unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].text, "Pay rent due:2021-01-01");

        let active = service
            .report_all(
                contents,
                ReportFilter {
                    active_only: true,
                    ..ReportFilter::default()
                },
            )
            .unwrap();
        assert_eq!(active.len(), 1);
        assert!(active[0].text.starts_with("Pay rent"));
    }

    #[test]
    fn test_report_all_keeps_marker_only_lines() {
        let contents = "Pay rent due:2021-01-01\n(B)\nPlan trip\n";
        let reports = service()
            .report_all(contents, ReportFilter::default())
            .unwrap();

        let texts: Vec<&str> = reports.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Pay rent due:2021-01-01", "(B)", "Plan trip"]);
        assert!(reports[1].active);
        assert!(reports[1].implied.is_empty());
    }

    #[test]
    fn test_report_line_ancient_on_due_date() {
        let report = service()
            .report_line("Ancient due:=-262143-01-01")
            .unwrap();
        assert_eq!(report.due, None);
        assert!(!report.due_on);
        assert_eq!(report.start, None);
        assert!(report.active);
        assert!(!report.overdue);
    }

    #[test]
    fn test_implied_uses_config_table() {
        let implied = service().implied(&["@jp".to_string()]);
        assert_eq!(implied, vec!["+work", "@office"]);
    }
}
