//! Measurement samples of a trapped atomic cloud

use itertools::izip;

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("{quantity} #{index} must be positive, found {value}")]
    NonPositive {
        quantity: &'static str,
        index: usize,
        value: f64,
    },
    #[error("spin projection factor m_F must be non-zero")]
    SpinProjection(u8),
    #[error("expected {expected} values of {quantity}, found {found}")]
    ShapeMismatch {
        quantity: &'static str,
        expected: usize,
        found: usize,
    },
}
type Result<T> = std::result::Result<T, SampleError>;

/// A single measurement of the trapped cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Atom number
    pub n: f64,
    /// Temperature [K]
    pub t: f64,
    /// Magnetic field gradient [G/m]
    pub b_prime: f64,
    /// Spin projection factor
    pub m_f: u8,
}
impl Sample {
    /// Creates a new sample with m_F=1
    ///
    /// The atom number and the field gradient must be non-negative and the
    /// temperature strictly positive.
    pub fn new(n: f64, t: f64, b_prime: f64) -> Result<Self> {
        Self::checked(0, n, t, b_prime, 1)
    }
    /// Sets the spin projection factor
    pub fn m_f(self, m_f: u8) -> Result<Self> {
        if m_f == 0 {
            return Err(SampleError::SpinProjection(m_f));
        }
        Ok(Self { m_f, ..self })
    }
    fn checked(index: usize, n: f64, t: f64, b_prime: f64, m_f: u8) -> Result<Self> {
        let non_negative = |quantity, value: f64| {
            if value.is_finite() && value >= 0. {
                Ok(value)
            } else {
                Err(SampleError::NonPositive {
                    quantity,
                    index,
                    value,
                })
            }
        };
        let t = if t.is_finite() && t > 0. {
            t
        } else {
            return Err(SampleError::NonPositive {
                quantity: "temperature",
                index,
                value: t,
            });
        };
        Self {
            n: non_negative("atom number", n)?,
            t,
            b_prime: non_negative("field gradient", b_prime)?,
            m_f: 1,
        }
        .m_f(m_f)
    }
}

/// Measurement uncertainties of a [Sample]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uncertainty {
    pub n: f64,
    pub t: f64,
    pub b_prime: f64,
}

/// Magnetic field gradient [G/m] of a measurement campaign
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    /// Same gradient for every sample
    Shared(f64),
    /// One gradient per sample
    PerSample(Vec<f64>),
}
impl From<f64> for Gradient {
    fn from(value: f64) -> Self {
        Gradient::Shared(value)
    }
}
impl From<Vec<f64>> for Gradient {
    fn from(values: Vec<f64>) -> Self {
        Gradient::PerSample(values)
    }
}

/// An ordered batch of samples
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples(Vec<Sample>);
impl std::ops::Deref for Samples {
    type Target = Vec<Sample>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl Samples {
    /// Builds the batch from columns of atom numbers and temperatures [K]
    ///
    /// The columns and a per-sample gradient must have the same length.
    pub fn from_columns<G: Into<Gradient>>(
        n: &[f64],
        t: &[f64],
        b_prime: G,
        m_f: u8,
    ) -> Result<Self> {
        let len = n.len();
        let check = |quantity, found| {
            if found == len {
                Ok(())
            } else {
                Err(SampleError::ShapeMismatch {
                    quantity,
                    expected: len,
                    found,
                })
            }
        };
        check("temperature", t.len())?;
        let b_prime = match b_prime.into() {
            Gradient::Shared(value) => vec![value; len],
            Gradient::PerSample(values) => {
                check("field gradient", values.len())?;
                values
            }
        };
        izip!(n, t, &b_prime)
            .enumerate()
            .map(|(i, (&n, &t, &b))| Sample::checked(i, n, t, b, m_f))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
    /// Returns the atom numbers
    pub fn atom_numbers(&self) -> Vec<f64> {
        self.iter().map(|s| s.n).collect()
    }
    /// Returns the temperatures [K]
    pub fn temperatures(&self) -> Vec<f64> {
        self.iter().map(|s| s.t).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_gradient() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let samples = Samples::from_columns(&[1e6, 2e6], &[1e-6, 2e-6], 260.7e2, 2)?;
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.b_prime == 260.7e2 && s.m_f == 2));
        assert_eq!(samples.atom_numbers(), vec![1e6, 2e6]);
        Ok(())
    }

    #[test]
    fn shape_mismatch() {
        let err = Samples::from_columns(&[1e6, 2e6], &[1e-6], 1e4, 1).unwrap_err();
        assert!(matches!(
            err,
            SampleError::ShapeMismatch {
                quantity: "temperature",
                expected: 2,
                found: 1
            }
        ));
        let err = Samples::from_columns(&[1e6], &[1e-6], vec![1e4, 2e4], 1).unwrap_err();
        assert!(matches!(err, SampleError::ShapeMismatch { .. }));
    }

    #[test]
    fn invalid_values() {
        assert!(Sample::new(1e6, 0., 1e4).is_err());
        assert!(Sample::new(1e6, -1e-6, 1e4).is_err());
        assert!(Sample::new(-1., 1e-6, 1e4).is_err());
        assert!(Sample::new(f64::NAN, 1e-6, 1e4).is_err());
        assert!(Sample::new(1e6, 1e-6, 1e4).unwrap().m_f(0).is_err());
        let err = Samples::from_columns(&[1e6, 1e6], &[1e-6, 0.], 1e4, 1).unwrap_err();
        assert!(matches!(err, SampleError::NonPositive { index: 1, .. }));
    }
}
