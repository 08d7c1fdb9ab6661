// src/noyau/mode_angle.rs

use std::fmt;
use std::str::FromStr;

/// Interprétation des arguments de sin/cos/tan.
///
/// Passé explicitement à l'évaluation : aucun état global.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Degrees => write!(f, "deg"),
            AngleMode::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    /// Accepte "deg"/"degrees"/"degres" et "rad"/"radians" (casse ignorée).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deg" | "degrees" | "degres" | "degrés" => Ok(AngleMode::Degrees),
            "rad" | "radians" => Ok(AngleMode::Radians),
            autre => Err(format!("mode d'angle inconnu: '{autre}'")),
        }
    }
}
