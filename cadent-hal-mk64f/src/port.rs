//! Port control registers (PCR)
//!
//! One 32-bit PCR per pin selects the mux function, electrical
//! attributes and interrupt request policy, and carries the pin's
//! write-1-to-clear interrupt status flag. The per-port ISFR aggregates
//! those status flags.

use core::ptr::{read_volatile, write_volatile};

use cadent_core::config::{
    ConfigError, DriveStrength, EdgeTrigger, InputAttrs, PinFunction, PinPlan, Pull, SlewRate,
};
use cadent_core::port::Port;

// PORTA..PORTE control blocks, 0x1000 apart
const PORT_BASES: [u32; 5] = [
    0x4004_9000, // A
    0x4004_A000, // B
    0x4004_B000, // C
    0x4004_C000, // D
    0x4004_D000, // E
];

const ISFR_OFFSET: u32 = 0xA0;

// PCR fields
const PCR_PS: u32 = 1 << 0;
const PCR_PE: u32 = 1 << 1;
const PCR_SRE: u32 = 1 << 2;
const PCR_PFE: u32 = 1 << 4;
const PCR_DSE: u32 = 1 << 6;
const PCR_MUX_GPIO: u32 = 0b001 << 8;
const PCR_IRQC_FALLING: u32 = 0b1010 << 16;
const PCR_ISF: u32 = 1 << 24;

/// Control block base address for `port`
pub(crate) fn register_block(port: Port) -> Result<u32, ConfigError> {
    match port {
        Port::F => Err(ConfigError::UnsupportedPort { port }),
        _ => Ok(PORT_BASES[port.index()]),
    }
}

/// Compose the PCR value for a pin function.
///
/// SRE and DSE are set-means-slow and set-means-high respectively;
/// writing ISF clears any pending status the pin had before
/// configuration.
const fn pcr_value(function: &PinFunction) -> u32 {
    match function {
        PinFunction::Output { .. } => PCR_MUX_GPIO,
        PinFunction::Input(InputAttrs {
            pull,
            slew,
            filter,
            drive,
            trigger,
        }) => {
            let mut pcr = PCR_MUX_GPIO | PCR_ISF;
            pcr |= match pull {
                Pull::Disabled => 0,
                Pull::Up => PCR_PE | PCR_PS,
                Pull::Down => PCR_PE,
            };
            pcr |= match slew {
                SlewRate::Fast => 0,
                SlewRate::Slow => PCR_SRE,
            };
            if *filter {
                pcr |= PCR_PFE;
            }
            pcr |= match drive {
                DriveStrength::Low => 0,
                DriveStrength::High => PCR_DSE,
            };
            pcr |= match trigger {
                EdgeTrigger::Disabled => 0,
                EdgeTrigger::Falling => PCR_IRQC_FALLING,
            };
            pcr
        }
    }
}

/// Program one pin's control register from its plan entry.
///
/// The port clock gate must already be open.
pub(crate) fn apply(entry: &PinPlan) -> Result<(), ConfigError> {
    let base = register_block(entry.port)?;
    let pcr = base + 4 * entry.pin as u32;
    unsafe {
        write_volatile(pcr as *mut u32, pcr_value(&entry.function));
    }
    Ok(())
}

/// Pending interrupt status bits for `port`, one bit per pin.
///
/// Reads zero for ports without a register block.
pub fn interrupt_status(port: Port) -> u32 {
    match register_block(port) {
        Ok(base) => unsafe { read_volatile((base + ISFR_OFFSET) as *const u32) },
        Err(_) => 0,
    }
}

/// Clear the given pending bits for `port`.
///
/// The ISFR is write-1-to-clear, so only the bits in `mask` are
/// affected.
pub fn clear_interrupt_status(port: Port, mask: u32) {
    if let Ok(base) = register_block(port) {
        unsafe {
            write_volatile((base + ISFR_OFFSET) as *mut u32, mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadent_core::config::{Level, PinPlan};

    #[test]
    fn test_button_pcr_value() {
        // Pull-up, fast slew, passive filter, high drive, GPIO mux,
        // falling-edge request, stale status cleared
        let button = PinPlan::button(Port::C, 6);
        assert_eq!(pcr_value(&button.function), 0x010A_0153);
    }

    #[test]
    fn test_plain_input_pcr_value() {
        // Pull-down, slow slew, no filter, low drive, no interrupt
        let input = PinPlan::input(
            Port::D,
            0,
            InputAttrs {
                pull: Pull::Down,
                slew: SlewRate::Slow,
                filter: false,
                drive: DriveStrength::Low,
                trigger: EdgeTrigger::Disabled,
            },
        );
        assert_eq!(pcr_value(&input.function), 0x0100_0106);
    }

    #[test]
    fn test_output_pcr_value_is_mux_only() {
        let led = PinPlan::output(Port::B, 22, Level::High);
        assert_eq!(pcr_value(&led.function), 0x0000_0100);
    }

    #[test]
    fn test_port_f_has_no_register_block() {
        assert_eq!(
            register_block(Port::F),
            Err(ConfigError::UnsupportedPort { port: Port::F })
        );
        assert_eq!(register_block(Port::A), Ok(0x4004_9000));
    }
}
