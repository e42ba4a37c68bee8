//! Power law fit of the phase-space density versus the atom number

use nalgebra as na;

#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("{quantity} #{index} must be strictly positive for a log-log fit, found {value}")]
    NonPositive {
        quantity: &'static str,
        index: usize,
        value: f64,
    },
    #[error("{quantity} #{index} must be finite, found {value}")]
    NonFinite {
        quantity: &'static str,
        index: usize,
        value: f64,
    },
    #[error("at least 2 points are required for the fit, found {0}")]
    Underdetermined(usize),
    #[error("atom number and PSD lengths differ: {n} vs {rho}")]
    ShapeMismatch { n: usize, rho: usize },
    #[error("all atom numbers are identical, the slope is undefined")]
    Degenerate,
    #[error("least squares solver failed: {0}")]
    Solver(&'static str),
}
type Result<T> = std::result::Result<T, FitError>;

/// Power law ρ = exp(b) N^m
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    /// Exponent m, the evaporation efficiency
    pub slope: f64,
    /// Log of the prefactor b
    pub intercept: f64,
}
impl PowerLaw {
    /// Evaluates the power law at `n`
    pub fn eval(&self, n: f64) -> f64 {
        (self.slope * n.ln() + self.intercept).exp()
    }
}

/// Fits ln(ρ) = m ln(N) + b to the atom numbers `n` and the phase-space densities `rho`
pub fn fit_efficiency(n: &[f64], rho: &[f64]) -> Result<PowerLaw> {
    if n.len() != rho.len() {
        return Err(FitError::ShapeMismatch {
            n: n.len(),
            rho: rho.len(),
        });
    }
    if n.len() < 2 {
        return Err(FitError::Underdetermined(n.len()));
    }
    let ln = |quantity: &'static str, values: &[f64]| {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                if !value.is_finite() {
                    Err(FitError::NonFinite {
                        quantity,
                        index,
                        value,
                    })
                } else if value > 0. {
                    Ok(value.ln())
                } else {
                    Err(FitError::NonPositive {
                        quantity,
                        index,
                        value,
                    })
                }
            })
            .collect::<Result<Vec<f64>>>()
    };
    let x = ln("atom number", n)?;
    let y = ln("PSD", rho)?;
    if x.iter().all(|&xi| xi == x[0]) {
        return Err(FitError::Degenerate);
    }

    let a = na::DMatrix::<f64>::from_fn(x.len(), 2, |i, j| if j == 0 { x[i] } else { 1. });
    let b = na::DVector::from_column_slice(&y);
    let svd = a.svd(true, true);
    let p = svd.solve(&b, 1e-12).map_err(FitError::Solver)?;
    Ok(PowerLaw {
        slope: p[0],
        intercept: p[1],
    })
}

/// `num` points evenly spaced on a log scale from 10^`start` to 10^`stop`
pub fn logspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![10f64.powf(start)],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| 10f64.powf(start + step * i as f64))
                .collect()
        }
    }
}
