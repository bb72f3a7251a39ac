//! Bounded log of completed calculations.

use std::collections::VecDeque;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Ordered log of calculation records, oldest first.
///
/// Appending beyond [`HISTORY_CAPACITY`] evicts the oldest record in the same call.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: String) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The newest `count` records, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &str> {
        let skip = self.entries.len().saturating_sub(count);
        self.iter().skip(skip)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eviction_is_fifo() {
        let mut history = History::new();
        for i in 1..=11 {
            history.push(format!("calc {i}"));
            assert!(history.len() <= HISTORY_CAPACITY);
        }

        let entries: Vec<&str> = history.iter().collect();
        let expected: Vec<String> = (2..=11).map(|i| format!("calc {i}")).collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_recent() {
        let mut history = History::new();
        for i in 1..=7 {
            history.push(i.to_string());
        }
        let recent: Vec<&str> = history.recent(5).collect();
        assert_eq!(recent, ["3", "4", "5", "6", "7"]);
        assert_eq!(history.recent(20).count(), 7);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push("1 + 1 = 2".to_string());
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }
}
