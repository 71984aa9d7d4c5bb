//! Request generations.
//!
//! Each data slot counts the fetches issued for it. A response is applied
//! only if it carries the newest generation for its slot, so a request
//! issued later always wins, whatever order the responses arrive in.

use std::fmt;

/// A piece of state written by exactly one kind of fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSlot {
    /// Aggregate counters (global or selected country)
    Summary,
    /// Country list feeding the dropdown, map and table
    Countries,
    /// Worldwide history for the graph
    History,
}

impl DataSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSlot::Summary => "summary",
            DataSlot::Countries => "countries",
            DataSlot::History => "history",
        }
    }
}

impl fmt::Display for DataSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag carried by a fetch and echoed back with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub slot: DataSlot,
    pub generation: u64,
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.slot, self.generation)
    }
}

/// Latest generation issued per slot. Zero means nothing issued yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTracker {
    summary: u64,
    countries: u64,
    history: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter_mut(&mut self, slot: DataSlot) -> &mut u64 {
        match slot {
            DataSlot::Summary => &mut self.summary,
            DataSlot::Countries => &mut self.countries,
            DataSlot::History => &mut self.history,
        }
    }

    /// Issue a new token, superseding every earlier token for the slot.
    pub fn issue(&mut self, slot: DataSlot) -> RequestToken {
        let counter = self.counter_mut(slot);
        *counter += 1;
        RequestToken {
            slot,
            generation: *counter,
        }
    }

    pub fn latest(&self, slot: DataSlot) -> u64 {
        match slot {
            DataSlot::Summary => self.summary,
            DataSlot::Countries => self.countries,
            DataSlot::History => self.history,
        }
    }

    /// True if no newer request has been issued for the token's slot.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.generation != 0 && token.generation == self.latest(token.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_increments_per_slot() {
        let mut tracker = RequestTracker::new();
        let a = tracker.issue(DataSlot::Summary);
        let b = tracker.issue(DataSlot::Summary);
        let c = tracker.issue(DataSlot::Countries);

        assert_eq!(a.generation, 1);
        assert_eq!(b.generation, 2);
        assert_eq!(c.generation, 1);
        assert_eq!(tracker.latest(DataSlot::History), 0);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(DataSlot::Summary);
        assert!(tracker.is_current(first));

        let second = tracker.issue(DataSlot::Summary);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut tracker = RequestTracker::new();
        let countries = tracker.issue(DataSlot::Countries);
        tracker.issue(DataSlot::Summary);
        tracker.issue(DataSlot::Summary);
        assert!(tracker.is_current(countries));
    }

    #[test]
    fn test_unissued_token_is_not_current() {
        let tracker = RequestTracker::new();
        assert!(!tracker.is_current(RequestToken {
            slot: DataSlot::History,
            generation: 0,
        }));
    }

    #[test]
    fn test_token_display() {
        let token = RequestToken {
            slot: DataSlot::Countries,
            generation: 3,
        };
        assert_eq!(token.to_string(), "countries#3");
    }
}
