//! Thermodynamics of a thermal cloud in a linear quadrupole magnetic trap
//!
//! All the quantities are peak values of the classical (Maxwell-Boltzmann)
//! distribution in the potential U = g_F m_F μ_B B′ r.

use crate::{
    constants::{HBAR, K_B, MU_B},
    sample::{Sample, Samples, Uncertainty},
    species::{Species, SpeciesConstants},
};
use std::f64::consts::PI;

/// Quadrupole trap loaded with a given atomic species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrupoleTrap {
    species: Species,
    constants: SpeciesConstants,
}
impl Default for QuadrupoleTrap {
    fn default() -> Self {
        Self::new(Species::default())
    }
}
impl QuadrupoleTrap {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            constants: species.constants(),
        }
    }
    pub fn species(&self) -> Species {
        self.species
    }
    pub fn constants(&self) -> &SpeciesConstants {
        &self.constants
    }
    /// Mean thermal velocity √(2k_BT/m) [m/s]
    ///
    /// The temperature must be positive, otherwise the result is NaN.
    pub fn thermal_velocity(&self, t: f64) -> f64 {
        (2. * K_B * t / self.constants.mass).sqrt()
    }
    /// Cube of the thermal de Broglie wavelength [m³]
    fn de_broglie_volume(&self, t: f64) -> f64 {
        (2. * PI * HBAR / (2. * PI * self.constants.mass * K_B * t).sqrt()).powi(3)
    }
    /// Peak density [1/m³]
    pub fn density(&self, sample: &Sample) -> f64 {
        let Sample { n, t, b_prime, m_f } = *sample;
        n * (self.constants.g_f * m_f as f64 * MU_B * b_prime).powi(3) / (32. * PI)
            * (K_B * t).powi(-3)
    }
    /// Elastic collision rate [1/s]
    pub fn collision_rate(&self, sample: &Sample) -> f64 {
        self.density(sample)
            * self.thermal_velocity(sample.t)
            * 4.
            * PI
            * self.constants.scattering_length.powi(2)
    }
    /// Peak phase-space density
    pub fn psd(&self, sample: &Sample) -> f64 {
        self.density(sample) * self.de_broglie_volume(sample.t)
    }
    /// Uncertainty on the phase-space density
    ///
    /// The PSD scales as N B′³ T^-9/2; the errors on N, T and B′ are assumed
    /// independent and added in quadrature.
    pub fn psd_uncertainty(&self, sample: &Sample, delta: &Uncertainty) -> f64 {
        let Sample { n, t, b_prime, m_f } = *sample;
        let prefactor = (self.constants.g_f * m_f as f64 * MU_B).powi(3) / (32. * PI)
            * K_B.powi(-3)
            * (2. * PI * HBAR / (2. * PI * self.constants.mass * K_B).sqrt()).powi(3);
        let d_rho_d_n = prefactor * b_prime.powi(3) * t.powf(-4.5);
        let d_rho_d_t = prefactor * n * b_prime.powi(3) * t.powf(-5.5) * 4.5;
        let d_rho_d_b_prime = prefactor * n * b_prime.powi(2) * t.powf(-4.5) * 3.;
        ((d_rho_d_n * delta.n).powi(2)
            + (d_rho_d_t * delta.t).powi(2)
            + (d_rho_d_b_prime * delta.b_prime).powi(2))
        .sqrt()
    }
}
/// Elementwise evaluation over a batch of samples
impl QuadrupoleTrap {
    fn map<F: Fn(&Sample) -> f64>(samples: &Samples, f: F) -> Vec<f64> {
        samples.iter().map(f).collect()
    }
    pub fn densities(&self, samples: &Samples) -> Vec<f64> {
        Self::map(samples, |s| self.density(s))
    }
    pub fn collision_rates(&self, samples: &Samples) -> Vec<f64> {
        Self::map(samples, |s| self.collision_rate(s))
    }
    pub fn psds(&self, samples: &Samples) -> Vec<f64> {
        Self::map(samples, |s| self.psd(s))
    }
    pub fn thermal_velocities(&self, samples: &Samples) -> Vec<f64> {
        Self::map(samples, |s| self.thermal_velocity(s.t))
    }
}
