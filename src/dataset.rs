//! Evaporative cooling campaigns
//!
//! Our own sodium measurements together with published sodium evaporation
//! sequences used as benchmarks.

use crate::sample::{SampleError, Samples};
use colorous::Color;
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error(
        "campaign {0} is not recognized, expected one of: \
         jul19-f2, sep19-plug, sep25-mot, mit, brazil, gatech"
    )]
    Unknown(String),
}

type Result<T> = std::result::Result<T, SampleError>;

/// Measurement campaign
#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Campaign {
    /// F=2 evaporation, July 2019
    July19F2,
    /// F=1 evaporation with a stabilized plug beam, September 2019
    Sept19Plug,
    /// F=1 evaporation after MOT optimization, September 25 2019
    #[default]
    Sept25MotOpt,
    /// F=2 evaporation at MIT
    Mit,
    /// F=1 evaporation in Brazil
    Brazil,
    /// F=1 evaporation at Georgia Tech
    GaTech,
}
impl Campaign {
    /// Legend label
    pub fn label(&self) -> &'static str {
        use Campaign::*;
        match self {
            July19F2 => "Na F = 2, 7-19",
            Sept19Plug => "Na F = 1, plug stabilized 9/19",
            Sept25MotOpt => "9/25 after MOT opt",
            Mit => "Na F = 2,  MIT",
            Brazil => "Na F = 1, Brazil",
            GaTech => "Na F = 1, GaTech",
        }
    }
    /// Marker color
    pub fn color(&self) -> Color {
        use Campaign::*;
        let (r, g, b) = match self {
            July19F2 => (0, 0, 255),
            Sept19Plug => (0, 255, 255),
            Sept25MotOpt => (0, 0, 0),
            Mit => (255, 165, 0),
            Brazil => (255, 0, 0),
            GaTech => (0, 128, 0),
        };
        Color { r, g, b }
    }
    /// Whether the density and the collision rate are reported
    pub fn reports_collisions(&self) -> bool {
        matches!(self, Campaign::Sept19Plug | Campaign::Sept25MotOpt)
    }
    /// Returns the campaign data
    pub fn dataset(&self) -> Result<Dataset> {
        use Campaign::*;
        let scale = |values: &[f64], unit: f64| values.iter().map(|x| x * unit).collect::<Vec<_>>();
        let (mega, micro) = (1e6, 1e-6);
        // gradients are given in G/cm
        let measured = |n: &[f64], t: &[f64], b_prime: f64, m_f: u8| {
            Samples::from_columns(&scale(n, mega), &scale(t, micro), b_prime * 1e2, m_f)
                .map(Data::Measured)
        };
        let data = match self {
            July19F2 => Samples::from_columns(
                &scale(&[400., 300., 151., 27., 3.], mega),
                &scale(&[1500., 423., 271., 91., 34.], micro),
                scale(&[239., 239., 239., 239., 239.], 1e2),
                2,
            )
            .map(Data::Measured)?,
            Sept19Plug => measured(&[400., 19.8, 4., 0.75], &[350., 43.7, 20.1, 8.], 260.7, 1)?,
            Sept25MotOpt => measured(
                &[1014., 660., 608., 527., 215., 178., 167., 152., 113.],
                &[634., 362., 332., 286., 178., 173., 166., 158., 154.],
                260.7,
                1,
            )?,
            Mit => Data::Published {
                n: scale(&[750., 475., 200., 25., 19., 11.], mega),
                psd: vec![3.3e-7, 1e-6, 1.8e-5, 7e-3, 1e-2, 2e-2],
            },
            Brazil => measured(
                &[1300., 600., 400., 200., 110., 80., 50., 17., 9., 0.57],
                &[500., 135., 110., 65., 42., 27., 17., 7., 2.7, 0.8],
                302.,
                1,
            )?,
            GaTech => measured(
                &[3550., 3210., 2050., 1680., 967., 738., 401., 322., 125.],
                &[476., 402., 241., 177., 126., 88.7, 49.7, 34.7, 12.2],
                320.,
                1,
            )?,
        };
        Ok(Dataset {
            campaign: *self,
            data,
        })
    }
}
impl fmt::Display for Campaign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Campaign::*;
        match self {
            July19F2 => write!(f, "jul19-f2"),
            Sept19Plug => write!(f, "sep19-plug"),
            Sept25MotOpt => write!(f, "sep25-mot"),
            Mit => write!(f, "mit"),
            Brazil => write!(f, "brazil"),
            GaTech => write!(f, "gatech"),
        }
    }
}
impl FromStr for Campaign {
    type Err = CampaignError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use strum::IntoEnumIterator;
        let name = s.to_lowercase();
        Campaign::iter()
            .find(|campaign| campaign.to_string() == name)
            .ok_or_else(|| CampaignError::Unknown(s.into()))
    }
}

/// Campaign data
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Atom numbers, temperatures and gradients
    Measured(Samples),
    /// Atom numbers and phase-space densities as published
    Published { n: Vec<f64>, psd: Vec<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub campaign: Campaign,
    pub data: Data,
}
impl Dataset {
    pub fn len(&self) -> usize {
        match &self.data {
            Data::Measured(samples) => samples.len(),
            Data::Published { n, .. } => n.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the atom numbers
    pub fn atom_numbers(&self) -> Vec<f64> {
        match &self.data {
            Data::Measured(samples) => samples.atom_numbers(),
            Data::Published { n, .. } => n.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn all_campaigns() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let lens: Vec<_> = Campaign::iter()
            .map(|c| c.dataset().map(|d| d.len()))
            .collect::<Result<_>>()?;
        assert_eq!(lens, vec![5, 4, 9, 6, 10, 9]);
        Ok(())
    }

    #[test]
    fn gradient_in_gauss_per_meter() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dataset = Campaign::Sept19Plug.dataset()?;
        match dataset.data {
            Data::Measured(samples) => {
                assert!(samples.iter().all(|s| (s.b_prime - 26070.).abs() < 1e-9));
                assert_eq!(samples[0].n, 400e6);
            }
            _ => panic!("expected measured data"),
        }
        Ok(())
    }

    #[test]
    fn campaign_names() {
        for campaign in Campaign::iter() {
            assert_eq!(campaign.to_string().parse::<Campaign>().unwrap(), campaign);
        }
        assert_eq!("MIT".parse::<Campaign>().unwrap(), Campaign::Mit);
        assert!(matches!(
            "lab".parse::<Campaign>(),
            Err(CampaignError::Unknown(name)) if name == "lab"
        ));
        assert_eq!(Campaign::default(), Campaign::Sept25MotOpt);
    }
}
