//! Food log model
//!
//! Ordered list of food-name references. Entries may repeat; order matters for
//! display only.

use serde::{Deserialize, Serialize};

/// Foods logged in the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodLog {
    entries: Vec<String>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a food name at the end of the log
    pub fn append(&mut self, name: impl Into<String>) {
        self.entries.push(name.into());
    }

    /// Remove the entry at `index`, returning it.
    /// Returns None (log unchanged) when the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FoodLog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
