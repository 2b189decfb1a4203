//! Cadent - button-event firmware for the NXP FRDM-K64F
//!
//! Watches the board's two user buttons for falling edges from interrupt
//! context and consumes the events from a polling loop, toggling one
//! LED per button.
//!
//! Named after the Latin "cadere" ("to fall") - the falling edges on the
//! user buttons are the only events this firmware watches for.

#![no_std]
#![no_main]

use cortex_m::asm;
use cortex_m_rt::{entry, exception};
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use cadent_core::config::{Level, PinPlan};
use cadent_core::led::Led;
use cadent_core::traits::InputPin;
use cadent_core::{EventFlags, Port};
use cadent_hal_mk64f::{configure, gpio, irq, wdog};

/// Flash configuration field. FSEC = 0xFE leaves the part unsecured;
/// everything else stays at the erased default.
#[link_section = ".flash_config"]
#[used]
static FLASH_CONFIG: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
    0xFF,
];

// FRDM-K64F wiring
const SW2: PinPlan = PinPlan::button(Port::C, 6);
const SW3: PinPlan = PinPlan::button(Port::A, 4);
// The RGB LED sinks current; high = off
const LED_RED: PinPlan = PinPlan::output(Port::B, 22, Level::High);
const LED_BLUE: PinPlan = PinPlan::output(Port::B, 21, Level::High);

/// Everything this firmware configures, in one table
const BOARD_PINS: [PinPlan; 4] = [SW2, SW3, LED_RED, LED_BLUE];

/// Button events, shared by reference between the port interrupt
/// handlers and the polling loop.
static BUTTON_EVENTS: EventFlags = EventFlags::new();

#[entry]
fn main() -> ! {
    info!("Cadent firmware starting...");

    wdog::disable();

    if let Err(e) = configure(&BOARD_PINS) {
        error!("Pin table rejected: {}", e);
        // Nothing sensible to run on half-configured hardware
        loop {
            asm::wfi();
        }
    }
    info!("Pins configured");

    // Pull-ups make idle buttons read high; low here usually means a
    // stuck button.
    let sw2 = gpio::Input::new(SW2.port, SW2.pin).unwrap();
    let sw3 = gpio::Input::new(SW3.port, SW3.pin).unwrap();
    if sw2.is_low() {
        warn!("SW2 reads low at boot");
    }
    if sw3.is_low() {
        warn!("SW3 reads low at boot");
    }

    let mut red = Led::active_low(gpio::Output::new(LED_RED.port, LED_RED.pin).unwrap());
    let mut blue = Led::active_low(gpio::Output::new(LED_BLUE.port, LED_BLUE.pin).unwrap());

    for pin in BOARD_PINS.iter().filter(|p| p.is_edge_source()) {
        irq::bind_edge_events(pin.port, &BUTTON_EVENTS);
    }

    // Configuration is complete; edges may fire from here on.
    for pin in BOARD_PINS.iter().filter(|p| p.is_edge_source()) {
        unsafe { irq::unmask(pin.port) };
    }
    info!("Button interrupts armed");

    loop {
        if BUTTON_EVENTS.poll_and_clear(SW2.port) {
            red.toggle();
            info!("SW2 pressed, red LED {}", if red.is_lit() { "on" } else { "off" });
        }
        if BUTTON_EVENTS.poll_and_clear(SW3.port) {
            blue.toggle();
            info!("SW3 pressed, blue LED {}", if blue.is_lit() { "on" } else { "off" });
        }

        // An interrupt taken since the last wfe leaves the event
        // register set, so this falls straight through instead of
        // stranding a freshly recorded edge.
        asm::wfe();
    }
}

/// All device interrupts funnel through here; only the port vectors are
/// expected.
#[exception]
fn DefaultHandler(irqn: i16) {
    match irq::Interrupt::from_irqn(irqn) {
        Some(vector) => irq::service(vector.port()),
        None => warn!("Unexpected interrupt {}", irqn),
    }
}
