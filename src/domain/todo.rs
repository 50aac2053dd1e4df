//! todo.txt line model

use crate::domain::date::parse_date_opt;
use crate::domain::dates::TaskView;
use crate::error::{Result, TodoTagsError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Leading markers: `x [completion] ` then `(A) ` then `[creation] `
fn head_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:(?P<done>x)(?: (?P<completed>\d{4}-\d{2}-\d{2}))?(?: |$))?(?:\((?P<priority>[A-Z])\)(?: |$))?(?:(?P<created>\d{4}-\d{2}-\d{2})(?: |$))?",
        )
        .unwrap()
    })
}

/// `key:value` tag words; values starting with `//` are URLs, not tags
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([^\s:]+):([^\s/][^\s]*|/[^\s/][^\s]*|/)$").unwrap())
}

/// One task line of a todo.txt file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    text: String,
    completed: bool,
    completion_date: Option<NaiveDate>,
    priority: Option<char>,
    creation_date: Option<NaiveDate>,
    projects: Vec<String>,
    contexts: Vec<String>,
    tags: Vec<(String, String)>,
}

impl Todo {
    /// Parse a todo.txt line
    ///
    /// Any non-blank line is a task, even one made only of markers like `(B)`.
    pub fn parse(line: &str) -> Result<Self> {
        let text = line.trim();
        if text.is_empty() {
            return Err(TodoTagsError::InvalidTodo(line.to_string()));
        }

        let caps = head_regex()
            .captures(text)
            .ok_or_else(|| TodoTagsError::InvalidTodo(line.to_string()))?;
        let body_start = caps.get(0).map_or(0, |m| m.end());
        let body = &text[body_start..];

        let mut todo = Todo {
            text: text.to_string(),
            completed: caps.name("done").is_some(),
            completion_date: caps
                .name("completed")
                .and_then(|m| parse_date_opt(m.as_str())),
            priority: caps
                .name("priority")
                .and_then(|m| m.as_str().chars().next()),
            creation_date: caps
                .name("created")
                .and_then(|m| parse_date_opt(m.as_str())),
            projects: Vec::new(),
            contexts: Vec::new(),
            tags: Vec::new(),
        };

        for word in body.split_whitespace() {
            if let Some(project) = word.strip_prefix('+').filter(|p| !p.is_empty()) {
                push_unique(&mut todo.projects, project);
            } else if let Some(context) = word.strip_prefix('@').filter(|c| !c.is_empty()) {
                push_unique(&mut todo.contexts, context);
            } else if let Some(caps) = tag_regex().captures(word) {
                todo.tags.push((caps[1].to_string(), caps[2].to_string()));
            }
        }

        Ok(todo)
    }

    /// The full line as given (trimmed)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.completion_date
    }

    pub fn priority(&self) -> Option<char> {
        self.priority
    }

    /// Project names without the leading `+`
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Context names without the leading `@`
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// All `key:value` tags in order of appearance
    pub fn tags(&self) -> &[(String, String)] {
        &self.tags
    }

    /// `+project` and `@context` identifiers, as used by implication tables
    pub fn tag_identifiers(&self) -> Vec<String> {
        self.projects
            .iter()
            .map(|p| format!("+{}", p))
            .chain(self.contexts.iter().map(|c| format!("@{}", c)))
            .collect()
    }
}

impl TaskView for Todo {
    /// First value of tag `name`
    fn tag_value(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn creation_date(&self) -> Option<NaiveDate> {
        self.creation_date
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}
