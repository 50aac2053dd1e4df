//! Tag implication expansion
//!
//! A tag may imply other tags, e.g. `+pygolang` implies `+work +python +go`.
//! [`ImplicationExpander::expand`] computes the transitive closure of a set of
//! tags over such a table.
//!
//! # Examples
//!
//! ```
//! use todotags::domain::implied::{ImplicationExpander, ImplicationTable};
//!
//! let mut table = ImplicationTable::new();
//! table.insert("+pygolang", ["+work", "+python", "+go"]);
//! table.insert("+python", ["+code"]);
//!
//! let expander = ImplicationExpander::new(table);
//! assert_eq!(
//!     expander.expand(["+pygolang"]),
//!     vec!["+code", "+go", "+python", "+work"]
//! );
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

/// Mapping from a tag identifier to the identifiers it directly implies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplicationTable {
    entries: HashMap<String, Vec<String>>,
}

impl ImplicationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direct implications of `key`, replacing any previous entry
    pub fn insert<K, I, S>(&mut self, key: K, implied: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(key.into(), implied.into_iter().map(Into::into).collect());
    }

    /// Direct implications of `key`; unknown keys imply nothing
    pub fn implied_by(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ImplicationTable
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, implied) in iter {
            table.insert(key, implied);
        }
        table
    }
}

/// Computes the transitive closure of tags over an [`ImplicationTable`]
#[derive(Debug, Clone, Default)]
pub struct ImplicationExpander {
    table: ImplicationTable,
}

impl ImplicationExpander {
    pub fn new(table: ImplicationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ImplicationTable {
        &self.table
    }

    /// Return every tag reachable from `items`, sorted, without the seeds
    ///
    /// The closure is computed breadth-first, one round per frontier, so
    /// cycles in the table terminate: a tag already visited is never expanded
    /// again.
    pub fn expand<I, S>(&self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seeds: HashSet<String> = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect();

        let mut visited: HashSet<&str> = seeds.iter().map(String::as_str).collect();
        let mut frontier: Vec<&str> = visited.iter().copied().collect();

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for item in frontier {
                for implied in self.table.implied_by(item) {
                    if visited.insert(implied.as_str()) {
                        next.push(implied.as_str());
                    }
                }
            }
            frontier = next;
        }

        let closure: BTreeSet<&str> = visited
            .into_iter()
            .filter(|item| !seeds.contains(*item))
            .collect();
        let closure: Vec<String> = closure.into_iter().map(str::to_string).collect();

        tracing::debug!(?seeds, ?closure, "expanded implied tags");
        closure
    }
}

/// Process-wide expander, populated at most once
static SHARED: Mutex<Option<Arc<ImplicationExpander>>> = Mutex::new(None);

/// Get the process-wide expander, building it with `load` on first use
///
/// The lock is held while `load` runs so concurrent first callers do not load
/// twice. A failed load leaves the slot empty and the next call retries.
pub fn shared_expander<F, E>(load: F) -> Result<Arc<ImplicationExpander>, E>
where
    F: FnOnce() -> Result<ImplicationTable, E>,
{
    let mut slot = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(expander) = slot.as_ref() {
        return Ok(Arc::clone(expander));
    }

    let expander = Arc::new(ImplicationExpander::new(load()?));
    tracing::debug!(entries = expander.table().len(), "loaded implication table");
    *slot = Some(Arc::clone(&expander));
    Ok(expander)
}

/// Drop the process-wide expander so the next [`shared_expander`] reloads it
///
/// Intended for test harnesses; expanders already handed out keep working.
pub fn reset_shared() {
    SHARED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
}
