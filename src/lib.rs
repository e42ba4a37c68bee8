//! Phase-space density of magnetically trapped ultracold atoms
//!
//! The peak density, elastic collision rate and phase-space density (PSD) of a
//! thermal cloud in a linear quadrupole trap are computed from the atom number,
//! the temperature and the magnetic field gradient.
//! The evaporation efficiency of a cooling sequence is the exponent of the
//! power law relating the PSD to the atom number.
//!
//! ```
//! use psd_evaporation::{QuadrupoleTrap, Sample};
//!
//! let trap = QuadrupoleTrap::default();
//! let sample = Sample::new(400e6, 350e-6, 260.7e2).unwrap();
//! assert!(trap.psd(&sample) < 1e-6);
//! ```

pub mod constants;
pub mod dataset;
mod error;
pub mod fit;
#[cfg(feature = "plot")]
pub mod plot;
pub mod report;
pub mod sample;
pub mod species;
pub mod trap;

pub use dataset::{Campaign, Dataset};
pub use error::Error;
pub use fit::{fit_efficiency, PowerLaw};
pub use report::CampaignReport;
pub use sample::{Sample, Samples, Uncertainty};
pub use species::Species;
pub use trap::QuadrupoleTrap;

pub type Result<T> = std::result::Result<T, Error>;
