//! Watchdog disable
//!
//! The MK64F12 boots with the watchdog running. Firmware that does not
//! service it must disable it early, before the first timeout.

use core::ptr::write_volatile;

use cortex_m::asm;

// WDOG registers are 16-bit
const WDOG_STCTRLH: *mut u16 = 0x4005_2000 as *mut u16;
const WDOG_UNLOCK: *mut u16 = 0x4005_200E as *mut u16;

const UNLOCK_KEY1: u16 = 0xC520;
const UNLOCK_KEY2: u16 = 0xD928;

// Reset value of STCTRLH with WDOGEN cleared
const STCTRLH_DISABLED: u16 = 0x01D2;

/// Unlock and disable the watchdog.
///
/// The control register only accepts updates within a short window after
/// the unlock sequence, so the whole sequence runs with interrupts
/// masked.
pub fn disable() {
    cortex_m::interrupt::free(|_| unsafe {
        write_volatile(WDOG_UNLOCK, UNLOCK_KEY1);
        write_volatile(WDOG_UNLOCK, UNLOCK_KEY2);
        // One bus cycle must pass before the update write
        asm::nop();
        asm::nop();
        write_volatile(WDOG_STCTRLH, STCTRLH_DISABLED);
    });
}
