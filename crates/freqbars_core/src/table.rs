use std::collections::HashMap;

/// Running tally of token occurrences.
///
/// Entries are kept in first-occurrence order, which is what the renderer
/// falls back to when two tokens have the same count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `token`.
    pub fn increment(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.to_owned(), self.entries.len());
                self.entries.push((token.to_owned(), 1));
            }
        }
        self.total += 1;
    }

    pub fn count(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Read-only view for the renderer. The borrow keeps the table frozen for
    /// as long as the snapshot lives.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        TableSnapshot {
            entries: &self.entries,
            total: self.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSnapshot<'a> {
    entries: &'a [(String, u64)],
    total: u64,
}

impl<'a> TableSnapshot<'a> {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Tokens with their counts, in first-occurrence order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, u64)> + 'a {
        let entries = self.entries;
        entries.iter().map(|(token, count)| (token.as_str(), *count))
    }
}
