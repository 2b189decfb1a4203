//! Port interrupt vectors and edge-event dispatch
//!
//! Each port has one NVIC vector aggregating the edge interrupts of all
//! its pins. The firmware binds an [`EventFlags`] store to a port at
//! init time; [`service`], called from the port's interrupt handler,
//! determines which pin status bits fired, records the event in the
//! bound store, then clears exactly those bits so the line deasserts.

use core::cell::RefCell;

use cortex_m::interrupt::{InterruptNumber, Mutex};
use cortex_m::peripheral::NVIC;

use cadent_core::events::EventFlags;
use cadent_core::port::Port;

use crate::port as pin_control;

/// Port interrupt vectors of the MK64F12
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Interrupt {
    PortA = 59,
    PortB = 60,
    PortC = 61,
    PortD = 62,
    PortE = 63,
}

// SAFETY: the discriminants are the MK64F12 NVIC numbers for the port
// vectors.
unsafe impl InterruptNumber for Interrupt {
    fn number(self) -> u16 {
        self as u16
    }
}

impl Interrupt {
    /// Vector for `port`, if the chip routes one
    pub const fn for_port(port: Port) -> Option<Self> {
        match port {
            Port::A => Some(Interrupt::PortA),
            Port::B => Some(Interrupt::PortB),
            Port::C => Some(Interrupt::PortC),
            Port::D => Some(Interrupt::PortD),
            Port::E => Some(Interrupt::PortE),
            Port::F => None,
        }
    }

    /// Map a `DefaultHandler` interrupt number back to a port vector
    pub const fn from_irqn(irqn: i16) -> Option<Self> {
        match irqn {
            59 => Some(Interrupt::PortA),
            60 => Some(Interrupt::PortB),
            61 => Some(Interrupt::PortC),
            62 => Some(Interrupt::PortD),
            63 => Some(Interrupt::PortE),
            _ => None,
        }
    }

    /// The port this vector serves
    pub const fn port(self) -> Port {
        match self {
            Interrupt::PortA => Port::A,
            Interrupt::PortB => Port::B,
            Interrupt::PortC => Port::C,
            Interrupt::PortD => Port::D,
            Interrupt::PortE => Port::E,
        }
    }
}

// Flag stores bound per port. Written once at init, read from interrupt
// context.
static EDGE_SINKS: Mutex<RefCell<[Option<&'static EventFlags>; Port::COUNT]>> =
    Mutex::new(RefCell::new([None; Port::COUNT]));

/// Bind `flags` as the event sink for edges on `port`.
///
/// Call after [`crate::configure`] and before [`unmask`]. Edges serviced
/// on an unbound port are discarded (their status bits are still
/// cleared).
pub fn bind_edge_events(port: Port, flags: &'static EventFlags) {
    cortex_m::interrupt::free(|cs| {
        EDGE_SINKS.borrow(cs).borrow_mut()[port.index()] = Some(flags);
    });
}

/// Unmask `port`'s vector in the NVIC.
///
/// No-op for ports without a vector.
///
/// # Safety
///
/// Configuration and event binding for the port must be complete: once
/// unmasked, the handler can preempt at any instruction boundary.
pub unsafe fn unmask(port: Port) {
    if let Some(vector) = Interrupt::for_port(port) {
        NVIC::unmask(vector);
    }
}

/// Mask `port`'s vector in the NVIC.
pub fn mask(port: Port) {
    if let Some(vector) = Interrupt::for_port(port) {
        NVIC::mask(vector);
    }
}

/// Service a pending port interrupt.
///
/// Interrupt-context side: must only be called from the port's handler.
/// Reads the port's interrupt status to determine which pin(s) fired,
/// records the event in the bound store, then write-1-clears exactly the
/// bits that fired. Bounded time, no blocking, no allocation.
pub fn service(port: Port) {
    let fired = pin_control::interrupt_status(port);
    if fired == 0 {
        return;
    }

    cortex_m::interrupt::free(|cs| {
        if let Some(flags) = EDGE_SINKS.borrow(cs).borrow()[port.index()] {
            flags.handle_edge(port);
        }
    });

    // Clear after recording so a racing poll cannot observe a deasserted
    // line with no flag set.
    pin_control::clear_interrupt_status(port, fired);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irqn_round_trip() {
        for vector in [
            Interrupt::PortA,
            Interrupt::PortB,
            Interrupt::PortC,
            Interrupt::PortD,
            Interrupt::PortE,
        ] {
            assert_eq!(Interrupt::from_irqn(vector.number() as i16), Some(vector));
        }
        assert_eq!(Interrupt::from_irqn(58), None);
        assert_eq!(Interrupt::from_irqn(64), None);
    }

    #[test]
    fn test_port_mapping() {
        assert_eq!(Interrupt::for_port(Port::C), Some(Interrupt::PortC));
        assert_eq!(Interrupt::for_port(Port::F), None);
        assert_eq!(Interrupt::PortA.port(), Port::A);
    }
}
