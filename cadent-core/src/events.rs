//! Event flag store
//!
//! Bridges falling-edge interrupts into polled application state. The
//! store holds one saturating flag per port: the interrupt side sets it,
//! the polling side consumes it exactly once. There is no queueing and
//! no counting - a second edge before consumption is indistinguishable
//! from one.
//!
//! Per-port flag lifecycle:
//!
//! ```text
//!         handle_edge()
//!   Clear ---------------> Set
//!     ^                     |
//!     +--- poll_and_clear() +
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use crate::port::Port;

/// Per-port edge-event flags shared between interrupt and main context.
///
/// `const`-constructible so a single instance can live in a `static` and
/// be handed by reference to both the interrupt dispatch layer and the
/// application loop. Every operation is lock-free and bounded; the store
/// is safe to touch from interrupt context.
///
/// Each flag is written by exactly one interrupt handler and consumed by
/// exactly one polling context. A set that races a poll is observed as
/// either fully set or fully clear, never torn.
pub struct EventFlags {
    flags: [AtomicBool; Port::COUNT],
}

impl EventFlags {
    /// Create a store with every flag clear.
    pub const fn new() -> Self {
        Self {
            flags: [const { AtomicBool::new(false) }; Port::COUNT],
        }
    }

    /// Record a falling edge on `port`.
    ///
    /// Interrupt-context side of the store. Saturating: if the flag is
    /// already set the call is a no-op and the extra edge is lost by
    /// design. Does not block or allocate.
    pub fn handle_edge(&self, port: Port) {
        self.flags[port.index()].store(true, Ordering::Release);
    }

    /// Consume the pending event for `port`, if any.
    ///
    /// Atomically reads the flag and resets it to clear. Returns whether
    /// an event had been pending. An edge recorded before this call
    /// completes is returned either by this call or by the next one,
    /// never dropped.
    pub fn poll_and_clear(&self, port: Port) -> bool {
        self.flags[port.index()].swap(false, Ordering::AcqRel)
    }

    /// Read the flag for `port` without consuming it.
    ///
    /// Diagnostics only - consumption must go through
    /// [`poll_and_clear`](Self::poll_and_clear).
    pub fn peek(&self, port: Port) -> bool {
        self.flags[port.index()].load(Ordering::Acquire)
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}
