//! Static pin-plan types
//!
//! The configuration surface is a compile-time table: each used pin is
//! described once, validated, and programmed exactly once at startup by
//! the chip support crate. Nothing here is mutated after initialization.
//!
//! Edge interrupts can only be requested through [`InputAttrs`], so an
//! interrupt-enabled output is unrepresentable rather than a runtime
//! error.

use crate::port::Port;

/// Highest pin number addressable within one port register set
pub const MAX_PIN: u8 = 31;

/// Internal pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    #[default]
    Disabled,
    Up,
    Down,
}

/// Output slew rate selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlewRate {
    #[default]
    Fast,
    Slow,
}

/// Output drive strength selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveStrength {
    #[default]
    Low,
    High,
}

/// Interrupt request policy for an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeTrigger {
    /// No interrupt generation
    #[default]
    Disabled,
    /// Interrupt on a high-to-low transition
    Falling,
}

/// Driven logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// Electrical and interrupt attributes for an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputAttrs {
    pub pull: Pull,
    pub slew: SlewRate,
    /// Enable the passive input filter
    pub filter: bool,
    pub drive: DriveStrength,
    pub trigger: EdgeTrigger,
}

/// What a pin is configured as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinFunction {
    Input(InputAttrs),
    Output {
        /// Level driven immediately after the pin becomes an output
        initial: Level,
    },
}

/// One entry of the static pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinPlan {
    pub port: Port,
    pub pin: u8,
    pub function: PinFunction,
}

impl PinPlan {
    /// A push-button input: pull-up, fast slew, passive filter, high
    /// drive strength, falling-edge interrupt.
    pub const fn button(port: Port, pin: u8) -> Self {
        Self {
            port,
            pin,
            function: PinFunction::Input(InputAttrs {
                pull: Pull::Up,
                slew: SlewRate::Fast,
                filter: true,
                drive: DriveStrength::High,
                trigger: EdgeTrigger::Falling,
            }),
        }
    }

    /// A plain input with explicit attributes
    pub const fn input(port: Port, pin: u8, attrs: InputAttrs) -> Self {
        Self {
            port,
            pin,
            function: PinFunction::Input(attrs),
        }
    }

    /// An output driven to `initial` as soon as it is configured
    pub const fn output(port: Port, pin: u8, initial: Level) -> Self {
        Self {
            port,
            pin,
            function: PinFunction::Output { initial },
        }
    }

    /// Whether this entry arms an edge interrupt
    pub const fn is_edge_source(&self) -> bool {
        matches!(
            self.function,
            PinFunction::Input(InputAttrs {
                trigger: EdgeTrigger::Falling,
                ..
            })
        )
    }
}

/// Errors detected while validating or applying a pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number exceeds [`MAX_PIN`]
    PinOutOfRange { port: Port, pin: u8 },
    /// The same (port, pin) appears more than once in the table
    DuplicatePin { port: Port, pin: u8 },
    /// The port has no register block on the target chip
    UnsupportedPort { port: Port },
}

/// Validate a pin table before it is applied to hardware.
///
/// Chip support crates call this first so an invalid table is reported
/// instead of producing undefined hardware state.
pub fn validate(plan: &[PinPlan]) -> Result<(), ConfigError> {
    for (i, entry) in plan.iter().enumerate() {
        if entry.pin > MAX_PIN {
            return Err(ConfigError::PinOutOfRange {
                port: entry.port,
                pin: entry.pin,
            });
        }
        for earlier in &plan[..i] {
            if earlier.port == entry.port && earlier.pin == entry.pin {
                return Err(ConfigError::DuplicatePin {
                    port: entry.port,
                    pin: entry.pin,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_like_plan() -> [PinPlan; 4] {
        [
            PinPlan::button(Port::C, 6),
            PinPlan::button(Port::A, 4),
            PinPlan::output(Port::B, 22, Level::High),
            PinPlan::output(Port::B, 21, Level::High),
        ]
    }

    #[test]
    fn test_board_like_plan_is_valid() {
        assert_eq!(validate(&board_like_plan()), Ok(()));
    }

    #[test]
    fn test_button_preset_arms_falling_edge() {
        let button = PinPlan::button(Port::C, 6);
        assert!(button.is_edge_source());
        match button.function {
            PinFunction::Input(attrs) => {
                assert_eq!(attrs.pull, Pull::Up);
                assert_eq!(attrs.drive, DriveStrength::High);
                assert!(attrs.filter);
            }
            PinFunction::Output { .. } => panic!("button must be an input"),
        }
    }

    #[test]
    fn test_outputs_are_never_edge_sources() {
        assert!(!PinPlan::output(Port::B, 21, Level::High).is_edge_source());
    }

    #[test]
    fn test_pin_out_of_range_rejected() {
        let plan = [PinPlan::button(Port::C, 32)];
        assert_eq!(
            validate(&plan),
            Err(ConfigError::PinOutOfRange {
                port: Port::C,
                pin: 32
            })
        );
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let plan = [
            PinPlan::button(Port::C, 6),
            PinPlan::output(Port::C, 6, Level::Low),
        ];
        assert_eq!(
            validate(&plan),
            Err(ConfigError::DuplicatePin {
                port: Port::C,
                pin: 6
            })
        );
    }
}
