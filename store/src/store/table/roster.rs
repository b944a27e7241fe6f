use crate::model::{
    headers::HeaderBag,
    person::{Person, RosterEntry},
};

/// In-memory roster of people, seeded at construction. Every visit appends
/// the caller's header bag, so the roster only ever grows within one process
/// lifetime.
pub struct RosterTable {
    pub entries: Vec<RosterEntry>,
}

impl RosterTable {
    pub fn new() -> Self {
        Self {
            entries: Person::seed_roster()
                .into_iter()
                .map(RosterEntry::Person)
                .collect(),
        }
    }

    /// Appends the visitor's header bag and returns the roster as it stood
    /// before the append. The caller's own bag travels back in the response
    /// envelope instead, so it must not be duplicated in the rows.
    pub fn record_visit(&mut self, visitor: HeaderBag) -> Vec<RosterEntry> {
        let snapshot = self.entries.clone();

        self.entries.push(RosterEntry::Visit(visitor));

        snapshot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RosterTable {
    fn default() -> Self {
        Self::new()
    }
}
