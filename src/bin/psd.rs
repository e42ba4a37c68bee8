//! Phase-space density of a single measurement
//!
//! Prints the peak density, the thermal velocity, the elastic collision rate
//! and the phase-space density with its uncertainty.
//!
//! Example: `psd 400e6 350e-6 260.7e2 --dn 40e6 --dt 20e-6`

use psd_evaporation::{QuadrupoleTrap, Sample, Species, Uncertainty};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "psd", about = "Phase-space density of a trapped atomic cloud")]
struct Opt {
    /// Atom number
    n: f64,
    /// Temperature [K]
    t: f64,
    /// Magnetic field gradient [G/m]
    b_prime: f64,
    /// Spin projection factor
    #[structopt(long, default_value = "1")]
    m_f: u8,
    /// Atom number uncertainty
    #[structopt(long, default_value = "0")]
    dn: f64,
    /// Temperature uncertainty [K]
    #[structopt(long, default_value = "0")]
    dt: f64,
    /// Field gradient uncertainty [G/m]
    #[structopt(long, default_value = "0")]
    db: f64,
    /// Atomic species: sodium or rubidium87
    #[structopt(long, default_value = "sodium")]
    species: Species,
}
impl Opt {
    fn sample(&self) -> psd_evaporation::Result<(Sample, Uncertainty)> {
        let sample = Sample::new(self.n, self.t, self.b_prime)?.m_f(self.m_f)?;
        let delta = Uncertainty {
            n: self.dn,
            t: self.dt,
            b_prime: self.db,
        };
        Ok((sample, delta))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let (sample, delta) = opt.sample()?;
    let species = opt.species;
    log::debug!("{:?} ± {:?}", sample, delta);

    let trap = QuadrupoleTrap::new(species);
    println!("SPECIES: {}", species.to_pretty_string());
    println!(" - peak density     : {:.4e} cm^-3", trap.density(&sample) * 1e-6);
    println!(" - thermal velocity : {:.4} m/s", trap.thermal_velocity(sample.t));
    println!(" - collision rate   : {:.4} s^-1", trap.collision_rate(&sample));
    println!(
        " - PSD              : {:.4e} ± {:.4e}",
        trap.psd(&sample),
        trap.psd_uncertainty(&sample, &delta)
    );
    Ok(())
}
