use anyhow::Context;
use psd_evaporation::{Campaign, CampaignReport, QuadrupoleTrap, Species};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "psd-evaporation",
    about = "Phase-space density versus atom number of evaporative cooling campaigns"
)]
struct Opt {
    /// Atomic species: sodium or rubidium87
    #[structopt(long, default_value = "sodium")]
    species: Species,
    /// Campaign whose PSD, density and collision rate table is printed
    #[structopt(long, default_value = "sep25-mot")]
    current: Campaign,
    /// Figure file name (.svg or .png)
    #[structopt(short, long, parse(from_os_str), default_value = "psd_v_n.svg")]
    output: PathBuf,
    /// Overlay the fitted power laws
    #[structopt(long)]
    fit_lines: bool,
    /// Skip the figure
    #[structopt(long)]
    no_plot: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let trap = QuadrupoleTrap::new(opt.species);
    log::info!("Trapped species: {}", opt.species.to_pretty_string());

    let reports = CampaignReport::all(&trap).context("Failed to process the campaigns")?;
    let current = reports
        .iter()
        .find(|report| report.campaign == opt.current)
        .with_context(|| format!("Missing campaign {}", opt.current))?;
    current.summary();

    #[cfg(feature = "plot")]
    if !opt.no_plot {
        psd_evaporation::plot::PsdPlot::new(&reports)
            .fit_lines(opt.fit_lines)
            .save(&opt.output)
            .with_context(|| format!("Failed to save the figure to {:?}", opt.output))?;
    }
    #[cfg(not(feature = "plot"))]
    if !opt.no_plot {
        log::warn!("plotting is disabled, rebuild with the `plot` feature");
    }

    Ok(())
}
