//! Indicator LED driver
//!
//! The FRDM-K64F user LEDs sink current: the pin drives low to light
//! them. This wrapper keeps the logical lit/unlit state separate from
//! the electrical level so application code never reasons about
//! inversion.

use crate::traits::OutputPin;

/// An LED behind a digital output pin
pub struct Led<P> {
    pin: P,
    /// If true, lit = pin LOW
    active_low: bool,
    /// Current logical state (true = lit)
    lit: bool,
}

impl<P: OutputPin> Led<P> {
    /// Wrap a pin, starting with the LED off.
    ///
    /// `active_low` selects the electrical polarity: true for LEDs that
    /// light when the pin drives low.
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut led = Self {
            pin,
            active_low,
            lit: false,
        };
        led.set_lit(false);
        led
    }

    /// Wrap an active-low LED (lit when the pin drives low)
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Wrap an active-high LED
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Light or extinguish the LED
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
        self.pin.set_state(lit != self.active_low);
    }

    /// Invert the logical state
    pub fn toggle(&mut self) {
        self.set_lit(!self.lit);
    }

    /// Current logical state
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
