//! Campaign reports: phase-space density, density, collision rate and evaporation efficiency

use crate::{
    dataset::{Campaign, Data, Dataset},
    fit::{fit_efficiency, FitError, PowerLaw},
    sample::SampleError,
    trap::QuadrupoleTrap,
};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid campaign data")]
    Sample(#[from] SampleError),
    #[error("evaporation efficiency fit failed")]
    Fit(#[from] FitError),
}
type Result<T> = std::result::Result<T, ReportError>;

/// Formats a float with the shortest round-trip digits and a two-digit signed
/// exponent below 1e-4 and from 1e16
fn fmt_float(x: f64) -> String {
    if x == 0. || !x.is_finite() {
        return format!("{:?}", x);
    }
    let exponent = x.abs().log10().floor();
    if (-4. ..16.).contains(&exponent) {
        return format!("{:?}", x);
    }
    let sci = format!("{:e}", x);
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => sci,
    }
}

/// Derived quantities and power law fit of a campaign
#[derive(Debug, Clone)]
pub struct CampaignReport {
    pub campaign: Campaign,
    /// Atom numbers
    pub n: Vec<f64>,
    /// Temperatures [K], if measured
    pub t: Option<Vec<f64>>,
    /// Phase-space densities
    pub psd: Vec<f64>,
    /// Peak densities [1/m³]
    pub density: Option<Vec<f64>>,
    /// Elastic collision rates [1/s]
    pub collision_rate: Option<Vec<f64>>,
    /// PSD versus N power law
    pub fit: PowerLaw,
}
impl CampaignReport {
    /// Computes the report of a campaign dataset
    pub fn new(trap: &QuadrupoleTrap, dataset: &Dataset) -> Result<Self> {
        let campaign = dataset.campaign;
        log::info!("Processing {} ({} samples)...", campaign.label(), dataset.len());
        let (t, psd, density, collision_rate) = match &dataset.data {
            Data::Measured(samples) => {
                let psd = trap.psds(samples);
                let (density, collision_rate) = if campaign.reports_collisions() {
                    (
                        Some(trap.densities(samples)),
                        Some(trap.collision_rates(samples)),
                    )
                } else {
                    (None, None)
                };
                (Some(samples.temperatures()), psd, density, collision_rate)
            }
            Data::Published { psd, .. } => (None, psd.clone(), None, None),
        };
        let n = dataset.atom_numbers();
        for (n, psd) in n.iter().zip(&psd) {
            log::debug!("N={:.3e}: PSD={:.3e}", n, psd);
        }
        if n.len() < 2 {
            log::warn!(
                "{} has {} sample(s), at least 2 are needed to fit the efficiency",
                campaign.label(),
                n.len()
            );
        }
        let fit = fit_efficiency(&n, &psd)?;
        log::info!("... evaporation efficiency: {:.4}", fit.slope);
        Ok(Self {
            campaign,
            n,
            t,
            psd,
            density,
            collision_rate,
            fit,
        })
    }
    /// Computes the report of every campaign
    pub fn all(trap: &QuadrupoleTrap) -> Result<Vec<Self>> {
        use strum::IntoEnumIterator;
        Campaign::iter()
            .map(|campaign| {
                let dataset = campaign.dataset()?;
                Self::new(trap, &dataset)
            })
            .collect()
    }
    /// Peak densities in units of 10¹¹ cm⁻³
    pub fn density_1e11_per_cc(&self) -> Option<Vec<f64>> {
        self.density
            .as_ref()
            .map(|density| density.iter().map(|n| n * 1e-6 * 1e-11).collect())
    }
    /// Table rows of PSD, density [10¹¹ cm⁻³] and collision rate [1/s]
    pub fn table(&self) -> Vec<String> {
        let density = self.density_1e11_per_cc();
        self.psd
            .iter()
            .enumerate()
            .map(|(k, &psd)| match (&density, &self.collision_rate) {
                (Some(density), Some(collision_rate)) => format!(
                    "{} {} {}",
                    fmt_float(psd),
                    fmt_float(density[k]),
                    fmt_float(collision_rate[k])
                ),
                _ => fmt_float(psd),
            })
            .collect()
    }
    /// Prints the efficiency and the table of PSD, density and collision rate
    pub fn summary(&self) {
        println!("The efficiency is {}", fmt_float(self.fit.slope));
        println!("PSD \t n_0 (10^11) \t Gamma_el");
        for row in self.table() {
            println!("{}", row);
        }
    }
}
