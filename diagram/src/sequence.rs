//! Render tickets.
//!
//! Every render request takes a ticket from a [`RenderSequencer`]. When the
//! asynchronous render completes, its result is applied only if its ticket is
//! still the newest one issued; anything older is dropped, so a slow render
//! of stale text can never replace the output of a newer edit.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

/// Identifies one render request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket issuer.
#[derive(Debug, Clone, Default)]
pub struct RenderSequencer {
    latest: u64,
}

impl RenderSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` is still the newest request.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Pass `value` through if `ticket` is current, otherwise drop it.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("discarding stale render #{} (latest #{})", ticket.0, self.latest);
            None
        }
    }
}
