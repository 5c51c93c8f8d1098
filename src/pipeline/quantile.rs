// file: src/pipeline/quantile.rs
// description: linear-interpolation quantiles and quartile bucket assignment

use crate::error::{AnalyticsError, Result};

/// Quantile by linear interpolation between order statistics
/// (`h = (n - 1) * q`), inclusive of both ends. Matches the pandas default
/// the original dashboards relied on through `qcut`.
pub fn quantile(sorted: &[f64], q: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(AnalyticsError::insufficient_data(
            "quantile",
            "cannot take a quantile of an empty value set",
        ));
    }

    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Quartile boundaries over a value set. Duplicate boundaries are collapsed,
/// so fewer than four distinct input values degrade to fewer (possibly
/// empty) buckets instead of failing.
#[derive(Debug, Clone)]
pub struct Quartiles {
    boundaries: Vec<f64>,
}

impl Quartiles {
    pub fn new(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(AnalyticsError::insufficient_data(
                "quartile bucketing",
                "no values to bucket",
            ));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("quartile values must not be NaN"));

        let mut boundaries = vec![
            quantile(&sorted, 0.25)?,
            quantile(&sorted, 0.50)?,
            quantile(&sorted, 0.75)?,
        ];
        boundaries.dedup_by(|a, b| a == b);

        Ok(Self { boundaries })
    }

    /// Bucket index for a value: the number of boundaries strictly below it.
    /// Index 0 is the bottom quartile.
    pub fn bucket(&self, value: f64) -> usize {
        self.boundaries.iter().filter(|&&b| value > b).count()
    }

    pub fn bucket_count(&self) -> usize {
        self.boundaries.len() + 1
    }
}
