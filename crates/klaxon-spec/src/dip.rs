//! Sounder DIP switch codes.
//!
//! A configuration is five positions written left to right as `O` (off) or
//! `I` (on), separated by `-`, e.g. `O-I-O-I-O`. Read as a binary number with
//! the leftmost position most significant, the value plus one is the tone id.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CatalogError;

/// Number of switch positions on the sounder.
pub const DIP_POSITIONS: usize = 5;

/// A decoded DIP switch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct DipSwitches {
    bits: u8,
}

impl DipSwitches {
    /// Builds the configuration that selects `tone_id` (1-32).
    pub fn from_tone_id(tone_id: u8) -> Option<Self> {
        if (1..=(1 << DIP_POSITIONS)).contains(&(tone_id as u16)) {
            Some(Self { bits: tone_id - 1 })
        } else {
            None
        }
    }

    /// The tone id this configuration selects.
    pub fn tone_id(&self) -> u8 {
        self.bits + 1
    }

    /// Returns whether the switch at `position` (0 = leftmost) is on.
    pub fn is_on(&self, position: usize) -> bool {
        position < DIP_POSITIONS && self.bits & (1 << (DIP_POSITIONS - 1 - position)) != 0
    }
}

impl FromStr for DipSwitches {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let positions: Vec<&str> = s.trim().split('-').map(str::trim).collect();
        if positions.len() != DIP_POSITIONS {
            return Err(CatalogError::invalid_dip(
                s,
                format!("expected {} positions, found {}", DIP_POSITIONS, positions.len()),
            ));
        }

        let mut bits = 0u8;
        for (index, position) in positions.iter().enumerate() {
            let on = match position.to_ascii_uppercase().as_str() {
                "I" | "1" => true,
                "O" | "0" => false,
                other => {
                    return Err(CatalogError::invalid_dip(
                        s,
                        format!("position {} is '{}', expected O or I", index + 1, other),
                    ))
                }
            };
            bits = (bits << 1) | u8::from(on);
        }

        Ok(Self { bits })
    }
}

impl fmt::Display for DipSwitches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..DIP_POSITIONS {
            if position > 0 {
                f.write_str("-")?;
            }
            f.write_str(if self.is_on(position) { "I" } else { "O" })?;
        }
        Ok(())
    }
}

impl From<DipSwitches> for String {
    fn from(dip: DipSwitches) -> Self {
        dip.to_string()
    }
}
