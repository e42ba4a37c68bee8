use crate::{
    dataset::CampaignError, fit::FitError, report::ReportError, sample::SampleError,
    species::SpeciesError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `species` module")]
    Species(#[from] SpeciesError),
    #[error("Error in the `dataset` module")]
    Campaign(#[from] CampaignError),
    #[error("Error in the `sample` module")]
    Sample(#[from] SampleError),
    #[error("Error in the `fit` module")]
    Fit(#[from] FitError),
    #[error("Error in the `report` module")]
    Report(#[from] ReportError),
    #[cfg(feature = "plot")]
    #[error("Error in the `plot` module")]
    Plot(#[from] crate::plot::PlotError),
}
