// SPDX-License-Identifier: MPL-2.0
//! Last-submitted-wins guard for asynchronous requests.
//!
//! Every request is tagged with a [`RequestTicket`] issued by a
//! [`RequestSequence`]. When a response arrives, it is applied only if its
//! ticket is still the most recent one; anything older is stale.
//!
//! # Example
//!
//! ```
//! use iced_qr::application::request::RequestSequence;
//!
//! let mut sequence = RequestSequence::default();
//! let first = sequence.issue();
//! let second = sequence.issue();
//!
//! assert!(!sequence.is_current(first));
//! assert!(sequence.is_current(second));
//! ```

/// Identifier of one asynchronous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Returns the raw sequence number.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issues a new ticket, making every earlier ticket stale.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Makes every issued ticket stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Returns whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
