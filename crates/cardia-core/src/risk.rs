//! Risk score representation
//!
//! A `RiskScore` is the externally visible result: a percentage in
//! [0, 100] rounded to 2 decimal places. The synthetic constructor is
//! the development/demo fallback for when no model is loaded; callers
//! must flag it as such so it is never mistaken for a real prediction.

use rand::Rng;

/// Baseline percentage for synthetic estimates
const SYNTHETIC_BASELINE: f64 = 50.0;

/// Jitter applied around the synthetic baseline
const SYNTHETIC_JITTER: f64 = 10.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated probability of the positive class, as a percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Convert a model probability in [0, 1] to a percentage
    pub fn from_probability(probability: f64) -> Self {
        RiskScore(round2(probability.clamp(0.0, 1.0) * 100.0))
    }

    /// Randomized estimate centered near the fixed baseline
    ///
    /// Not a prediction. Repeated calls legitimately differ; the value
    /// is always within [0, 100].
    pub fn synthetic() -> Self {
        let jitter = rand::thread_rng().gen_range(-SYNTHETIC_JITTER..=SYNTHETIC_JITTER);
        RiskScore(round2((SYNTHETIC_BASELINE + jitter).clamp(0.0, 100.0)))
    }

    /// Percentage value, rounded to 2 decimals
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_probability_rounds_to_two_decimals() {
        assert_eq!(RiskScore::from_probability(0.123456).value(), 12.35);
        assert_eq!(RiskScore::from_probability(0.5).value(), 50.0);
    }

    #[test]
    fn test_from_probability_clamps() {
        assert_eq!(RiskScore::from_probability(-0.2).value(), 0.0);
        assert_eq!(RiskScore::from_probability(1.7).value(), 100.0);
    }

    #[test]
    fn test_synthetic_stays_in_range() {
        for _ in 0..1000 {
            let score = RiskScore::synthetic().value();
            assert!((0.0..=100.0).contains(&score));
            // centered near the baseline, never outside the jitter band
            assert!((SYNTHETIC_BASELINE - score).abs() <= SYNTHETIC_JITTER + 1e-9);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskScore::from_probability(0.421).to_string(), "42.10%");
    }
}
