use crate::constants::{BOHR_RADIUS, C, PROTON_MASS};
use std::{f64::consts::PI, fmt, str::FromStr};
use strum_macros::EnumIter;

#[derive(Debug, thiserror::Error)]
pub enum SpeciesError {
    #[error(r#"species {0} is not recognized, expected "sodium" or "rubidium87""#)]
    Unknown(String),
}

/// Atomic species trapped in the experiment
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Species {
    #[default]
    Sodium23,
    Rubidium87,
}
impl Species {
    /// Returns the species constants
    pub fn constants(&self) -> SpeciesConstants {
        match self {
            Species::Sodium23 => SpeciesConstants {
                saturation_intensity: 6.26 * 10.,
                linewidth: 2. * PI * 9.7946e6,
                transition_frequency: 508.8487162e12,
                mass: 22.989769 * PROTON_MASS,
                g_f: 0.5,
                scattering_length: 2.75e-9,
            },
            Species::Rubidium87 => SpeciesConstants {
                saturation_intensity: 1.669 * 10.,
                linewidth: 2. * PI * 6.066e6,
                transition_frequency: 384.230484468e12,
                mass: 86.909 * PROTON_MASS,
                g_f: 0.5,
                scattering_length: 98. * BOHR_RADIUS,
            },
        }
    }
    pub fn to_pretty_string(&self) -> String {
        match self {
            Species::Sodium23 => "²³Na".to_string(),
            Species::Rubidium87 => "⁸⁷Rb".to_string(),
        }
    }
}
impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Sodium23 => write!(f, "sodium"),
            Species::Rubidium87 => write!(f, "rubidium87"),
        }
    }
}
impl FromStr for Species {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sodium" | "na" | "na23" => Ok(Species::Sodium23),
            "rubidium87" | "rb" | "rb87" => Ok(Species::Rubidium87),
            _ => Err(SpeciesError::Unknown(s.to_string())),
        }
    }
}

/// Species specific constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesConstants {
    /// D2 line saturation intensity [W/m²]
    pub saturation_intensity: f64,
    /// D2 line natural linewidth [rad/s]
    pub linewidth: f64,
    /// D2 line frequency [Hz]
    pub transition_frequency: f64,
    /// Atomic mass [kg]
    pub mass: f64,
    /// Landé g-factor of the trapped hyperfine state
    pub g_f: f64,
    /// s-wave scattering length [m]
    pub scattering_length: f64,
}
impl SpeciesConstants {
    /// D2 line wavevector [1/m]
    pub fn wavevector(&self) -> f64 {
        2. * PI * self.transition_frequency / C
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn species_names() {
        for species in Species::iter() {
            let name = species.to_string();
            assert_eq!(name.parse::<Species>().unwrap(), species);
        }
        assert!("potassium".parse::<Species>().is_err());
    }

    #[test]
    fn sodium_wavevector() {
        let na = Species::Sodium23.constants();
        // D2 line at 589 nm
        assert_relative_eq!(2. * PI / na.wavevector(), 589.158e-9, max_relative = 1e-5);
    }

    #[test]
    fn rubidium_is_heavier() {
        let na = Species::Sodium23.constants();
        let rb = Species::Rubidium87.constants();
        assert!(rb.mass > na.mass);
        assert!(rb.scattering_length > na.scattering_length);
    }
}
