//! Request sequencing: only the most recent submission may update the display.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one submission. Later submissions carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket; it supersedes every earlier one.
    pub fn next(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is still the most recent submission.
    #[must_use]
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// The most recently issued ticket, if any.
    #[must_use]
    pub fn latest(&self) -> Option<RequestTicket> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            n => Some(RequestTicket(n)),
        }
    }
}
