//! Output formatting utilities

use crate::application::TaskReport;
use crate::domain::date::DATE_FORMAT;
use chrono::NaiveDate;

/// Format implied tags, one per line
pub fn format_implied(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No implied tags".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }
    output
}

/// Format the date facts of one task
pub fn format_date_facts(report: &TaskReport) -> String {
    let due = match report.due {
        Some(due) if report.due_on => format!("{} (on)", due),
        due => format_date(due),
    };

    format!(
        "start: {}\n\
         due: {}\n\
         active: {}\n\
         overdue: {}\n\
         days till due: {}\n\
         length: {}\n",
        format_date(report.start),
        due,
        yes_no(report.active),
        yes_no(report.overdue),
        report.days_till_due,
        report.length,
    )
}

/// Format a task report, one task per line followed by its implied tags
pub fn format_report(reports: &[TaskReport]) -> String {
    if reports.is_empty() {
        return "No tasks found".to_string();
    }

    let mut output = String::new();
    for report in reports {
        output.push_str(&format!("{:<8} {}\n", status_label(report), report.text));
        if !report.implied.is_empty() {
            output.push_str(&format!("         implied: {}\n", report.implied.join(" ")));
        }
    }
    output
}

fn status_label(report: &TaskReport) -> &'static str {
    if report.completed {
        "done"
    } else if report.overdue {
        "overdue"
    } else if report.active {
        "active"
    } else {
        "pending"
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
