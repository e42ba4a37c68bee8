//! Fundamental constants in SI units

use std::f64::consts::PI;

/// Vacuum permeability [N/A²]
pub const MU_0: f64 = 4. * PI * 1e-7;
/// Reduced Planck constant [J.s]
pub const HBAR: f64 = 1.0545718e-34;
/// Speed of light [m/s]
pub const C: f64 = 299792458.;
/// Bohr magneton [J/G], from μ_B/h = 1.39962460 MHz/G
pub const MU_B: f64 = HBAR * 2. * PI * 1.39962460e6;
/// Boltzmann constant [J/K]
pub const K_B: f64 = 1.38e-23;
/// Proton mass [kg], used as the atomic mass unit
pub const PROTON_MASS: f64 = 1.672623e-27;
/// Bohr radius [m]
pub const BOHR_RADIUS: f64 = 5.29e-11;
