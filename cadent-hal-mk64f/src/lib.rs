//! NXP Kinetis MK64F12 chip support
//!
//! Register-level implementations of the Cadent core abstractions for
//! the MK64F12 (FRDM-K64F board). Split by peripheral the way the chip
//! documents them:
//!
//! - [`sim`] - clock gating for the port control blocks
//! - [`wdog`] - watchdog disable for bare-metal startup
//! - [`port`] - pin control registers (mux, electrical attributes,
//!   interrupt requests, interrupt status)
//! - [`gpio`] - data direction and level registers, runtime pin handles
//! - [`irq`] - NVIC port vectors and edge-event dispatch
//!
//! All register access is one-shot configuration or single-word
//! loads/stores; nothing here blocks.

#![no_std]

pub mod gpio;
pub mod irq;
pub mod port;
pub mod sim;
pub mod wdog;

use cadent_core::config::{self, ConfigError, PinFunction, PinPlan};

/// Bring every pin in `plan` into its configured state.
///
/// Validates the table, enables the clock gate for each referenced port,
/// then programs each pin's control register and GPIO direction. Input
/// entries requesting an edge trigger come out armed with any stale
/// interrupt status cleared; they will not raise an interrupt until
/// their port vector is unmasked via [`irq::unmask`].
///
/// Re-invoking reapplies the same static configuration. Must not run
/// concurrently with the port interrupt handlers; call it before
/// unmasking.
pub fn configure(plan: &[PinPlan]) -> Result<(), ConfigError> {
    config::validate(plan)?;

    // Clock gates first: pin control registers fault when accessed with
    // their port clock gated.
    for entry in plan {
        sim::enable_port_clock(entry.port)?;
    }

    for entry in plan {
        port::apply(entry)?;
        match entry.function {
            PinFunction::Output { initial } => {
                // Level before direction so the pin never drives a
                // stale value.
                gpio::write_level(entry.port, entry.pin, initial)?;
                gpio::set_direction(entry.port, entry.pin, gpio::Direction::Output)?;
            }
            PinFunction::Input(_) => {
                gpio::set_direction(entry.port, entry.pin, gpio::Direction::Input)?;
            }
        }
    }

    Ok(())
}
