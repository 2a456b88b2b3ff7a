use crate::graph::NodeId;

use super::search::RecordId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub record: RecordId,
    pub node: NodeId,
    pub priority: f64,
}

impl Entry {
    pub fn new(record: RecordId, node: NodeId, priority: f64) -> Self {
        Self { record, node, priority }
    }
}

/// Outcome of looking a candidate up in the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No entry shares the candidate's identity.
    Absent,
    /// The entry at this index is strictly more expensive than the candidate.
    Better(usize),
    /// An entry exists and is at least as cheap; it stays authoritative.
    NotBetter,
}

/// What [`Frontier::offer`] did with a candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offer {
    Inserted,
    Replaced { stale: RecordId },
    Discarded,
}

/// Open set kept sorted by ascending priority; equal priorities keep arrival order.
///
/// Holds at most one entry per node identity when fed only through [`Frontier::offer`].
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    entries: Vec<Entry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn peek(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.entries.iter().position(|e| e.node == node)
    }

    pub fn pop_front(&mut self) -> Option<Entry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Inserts before the first entry with a strictly greater priority.
    pub fn insert_ordered(&mut self, entry: Entry) {
        let at = self
            .entries
            .iter()
            .position(|e| e.priority > entry.priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, entry);
    }

    pub fn find_better_or_absent(&self, node: NodeId, priority: f64) -> Verdict {
        match self.position(node) {
            None => Verdict::Absent,
            Some(i) if self.entries[i].priority > priority => Verdict::Better(i),
            Some(_) => Verdict::NotBetter,
        }
    }

    /// Applies the replacement policy: insert when absent, swap out a strictly worse
    /// entry, otherwise drop the candidate.
    pub fn offer(&mut self, entry: Entry) -> Offer {
        match self.find_better_or_absent(entry.node, entry.priority) {
            Verdict::Absent => {
                self.insert_ordered(entry);
                Offer::Inserted
            }
            Verdict::Better(i) => {
                let stale = self.entries.remove(i);
                self.insert_ordered(entry);
                Offer::Replaced { stale: stale.record }
            }
            Verdict::NotBetter => Offer::Discarded,
        }
    }
}
