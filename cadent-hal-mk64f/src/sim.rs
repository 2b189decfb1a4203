//! System integration module (SIM) clock gating
//!
//! Port control register blocks are clock-gated out of reset; the gate
//! must be open before any PCR access.

use core::ptr::{read_volatile, write_volatile};

use cadent_core::config::ConfigError;
use cadent_core::port::Port;

const SIM_SCGC5: *mut u32 = 0x4004_8038 as *mut u32;

/// SCGC5 gate bit for a port clock, if the chip has that port
const fn gate_bit(port: Port) -> Option<u32> {
    match port {
        Port::A => Some(1 << 9),
        Port::B => Some(1 << 10),
        Port::C => Some(1 << 11),
        Port::D => Some(1 << 12),
        Port::E => Some(1 << 13),
        Port::F => None,
    }
}

/// Open the clock gate for `port`'s control block.
///
/// Idempotent. Runs before interrupts are unmasked, so the
/// read-modify-write needs no masking.
pub fn enable_port_clock(port: Port) -> Result<(), ConfigError> {
    let bit = gate_bit(port).ok_or(ConfigError::UnsupportedPort { port })?;
    unsafe {
        write_volatile(SIM_SCGC5, read_volatile(SIM_SCGC5) | bit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_bits_match_scgc5_layout() {
        assert_eq!(gate_bit(Port::A), Some(0x0000_0200));
        assert_eq!(gate_bit(Port::E), Some(0x0000_2000));
        assert_eq!(gate_bit(Port::F), None);
    }
}
