//! Request ordering.
//!
//! Responses arrive in whatever order the network delivers them. By
//! default every response is applied, so the last one to arrive wins.
//! With stale-response discarding enabled, a response is applied only if
//! it answers a newer request than the last response applied.

/// Monotonically increasing request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    discard_stale: bool,
    last_issued: u64,
    last_applied: u64,
}

impl RequestSequencer {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            discard_stale,
            ..Default::default()
        }
    }

    pub fn discards_stale(&self) -> bool {
        self.discard_stale
    }

    /// Allocate the id for a new request
    pub fn issue(&mut self) -> RequestId {
        self.last_issued += 1;
        RequestId(self.last_issued)
    }

    /// Decide whether the response to `id` should reach the display
    pub fn accept(&mut self, id: RequestId) -> bool {
        if self.discard_stale && id.0 <= self.last_applied {
            return false;
        }
        self.last_applied = self.last_applied.max(id.0);
        true
    }

    /// Mark every request issued so far as outdated (the display was cleared)
    pub fn supersede(&mut self) {
        if self.discard_stale {
            self.last_applied = self.last_issued;
        }
    }
}
