use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic counter that lets data loaders drop stale responses.
///
/// Every fetch takes a ticket from [`RequestSequence::issue`]. When the
/// response arrives, [`RequestSequence::accept`] hands the payload back only
/// if no newer fetch was issued in the meantime. Timelines are rebuilt from
/// accepted payloads only.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Most recently issued ticket, if any.
    #[must_use]
    pub fn latest(&self) -> Option<RequestTicket> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            value => Some(RequestTicket(value)),
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Returns `value` when `ticket` is still the latest, otherwise drops it.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            return Some(value);
        }
        trace!(
            ticket = ticket.0,
            latest = self.latest.load(Ordering::Acquire),
            "stale response discarded"
        );
        None
    }
}
