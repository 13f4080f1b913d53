use serde::{Deserialize, Serialize};

/// Move log consumed from the end by undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<M> {
    records: Vec<M>,
}

impl<M> Default for History<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> History<M> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: M) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<M> {
        self.records.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&M> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.records.iter()
    }
}

impl<'a, M> IntoIterator for &'a History<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
