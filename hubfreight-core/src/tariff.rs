//! Stepped weight tariff.
//!
//! A shipment pays a base rate per unit distance while its total weight stays
//! within a free allowance. Every started step of excess weight adds a fixed
//! surcharge to that rate.

use thiserror::Error;

/// Reference base rate per unit distance.
pub const REFERENCE_BASE_RATE: f64 = 10.0;
/// Reference surcharge added for each started step above the allowance.
pub const REFERENCE_STEP_SURCHARGE: f64 = 8.0;
/// Reference weight carried at the base rate.
pub const REFERENCE_FREE_ALLOWANCE: f64 = 5.0;
/// Reference width of one surcharge step.
pub const REFERENCE_STEP_WEIGHT: f64 = 5.0;

/// Errors returned by [`TariffSchedule::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TariffError {
    /// The base rate was zero, negative or not finite.
    #[error("base rate must be positive and finite, got {0}")]
    InvalidBaseRate(f64),
    /// The step surcharge was negative or not finite.
    #[error("step surcharge must be non-negative and finite, got {0}")]
    InvalidSurcharge(f64),
    /// The free allowance was negative or not finite.
    #[error("free allowance must be non-negative and finite, got {0}")]
    InvalidAllowance(f64),
    /// The step width was zero, negative or not finite.
    #[error("step weight must be positive and finite, got {0}")]
    InvalidStepWeight(f64),
}

/// Maps a total shipment weight to a cost per unit distance.
///
/// # Examples
/// ```
/// use hubfreight_core::TariffSchedule;
///
/// let tariff = TariffSchedule::default();
/// assert_eq!(tariff.rate(3.5), 10.0);
/// assert_eq!(tariff.rate(13.0), 26.0);
/// assert_eq!(tariff.rate(25.0), 42.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TariffSchedule {
    /// Rate charged while the weight stays within the allowance.
    pub base_rate: f64,
    /// Weight carried at the base rate.
    #[cfg_attr(feature = "serde", serde(default = "default_allowance"))]
    pub free_allowance: f64,
    /// Width of one surcharge step.
    #[cfg_attr(feature = "serde", serde(default = "default_step_weight"))]
    pub step_weight: f64,
    /// Amount added to the rate per started step.
    pub step_surcharge: f64,
}

#[cfg(feature = "serde")]
const fn default_allowance() -> f64 {
    REFERENCE_FREE_ALLOWANCE
}

#[cfg(feature = "serde")]
const fn default_step_weight() -> f64 {
    REFERENCE_STEP_WEIGHT
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self::new(REFERENCE_BASE_RATE, REFERENCE_STEP_SURCHARGE)
    }
}

impl TariffSchedule {
    /// Build a schedule with the reference allowance and step width.
    pub const fn new(base_rate: f64, step_surcharge: f64) -> Self {
        Self::with_steps(
            base_rate,
            step_surcharge,
            REFERENCE_FREE_ALLOWANCE,
            REFERENCE_STEP_WEIGHT,
        )
    }

    /// Build a schedule with an explicit allowance and step width.
    ///
    /// # Examples
    /// ```
    /// use hubfreight_core::TariffSchedule;
    ///
    /// let tariff = TariffSchedule::with_steps(4.0, 1.0, 10.0, 2.0);
    /// assert_eq!(tariff.rate(10.0), 4.0);
    /// assert_eq!(tariff.rate(13.0), 6.0);
    /// ```
    pub const fn with_steps(
        base_rate: f64,
        step_surcharge: f64,
        free_allowance: f64,
        step_weight: f64,
    ) -> Self {
        Self {
            base_rate,
            free_allowance,
            step_weight,
            step_surcharge,
        }
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), TariffError> {
        if !(self.base_rate.is_finite() && self.base_rate > 0.0) {
            return Err(TariffError::InvalidBaseRate(self.base_rate));
        }
        if !(self.step_surcharge.is_finite() && self.step_surcharge >= 0.0) {
            return Err(TariffError::InvalidSurcharge(self.step_surcharge));
        }
        if !(self.free_allowance.is_finite() && self.free_allowance >= 0.0) {
            return Err(TariffError::InvalidAllowance(self.free_allowance));
        }
        if !(self.step_weight.is_finite() && self.step_weight > 0.0) {
            return Err(TariffError::InvalidStepWeight(self.step_weight));
        }
        Ok(())
    }

    /// Number of started surcharge steps for `total_weight`.
    ///
    /// The excess over the allowance is rounded up, so any excess at all
    /// counts as one step. The result is always a whole number.
    ///
    /// # Examples
    /// ```
    /// use hubfreight_core::TariffSchedule;
    ///
    /// let tariff = TariffSchedule::default();
    /// assert_eq!(tariff.steps(5.0), 0.0);
    /// assert_eq!(tariff.steps(5.0001), 1.0);
    /// assert_eq!(tariff.steps(13.0), 2.0);
    /// ```
    pub fn steps(&self, total_weight: f64) -> f64 {
        let excess = (total_weight - self.free_allowance).max(0.0);
        (excess / self.step_weight).ceil()
    }

    /// Cost per unit distance for a shipment of `total_weight`.
    pub fn rate(&self, total_weight: f64) -> f64 {
        if total_weight <= self.free_allowance {
            return self.base_rate;
        }
        self.base_rate + self.steps(total_weight) * self.step_surcharge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 10.0)]
    #[case(5.0, 10.0)]
    #[case(5.0001, 18.0)]
    #[case(10.0, 18.0)]
    #[case(10.5, 26.0)]
    #[case(13.0, 26.0)]
    #[case(25.0, 42.0)]
    fn reference_rates(#[case] weight: f64, #[case] expected: f64) {
        assert_eq!(TariffSchedule::default().rate(weight), expected);
    }

    #[rstest]
    fn custom_constants_are_honoured() {
        let tariff = TariffSchedule::new(3.0, 0.5);
        assert_eq!(tariff.rate(1.0), 3.0);
        assert_eq!(tariff.rate(11.0), 4.0);
    }

    #[rstest]
    fn zero_surcharge_is_flat() {
        let tariff = TariffSchedule::new(7.0, 0.0);
        assert!(tariff.validate().is_ok());
        assert_eq!(tariff.rate(1000.0), 7.0);
    }

    #[rstest]
    #[case(TariffSchedule::new(0.0, 8.0), TariffError::InvalidBaseRate(0.0))]
    #[case(TariffSchedule::new(10.0, -1.0), TariffError::InvalidSurcharge(-1.0))]
    #[case(
        TariffSchedule::with_steps(10.0, 8.0, -5.0, 5.0),
        TariffError::InvalidAllowance(-5.0)
    )]
    #[case(
        TariffSchedule::with_steps(10.0, 8.0, 5.0, 0.0),
        TariffError::InvalidStepWeight(0.0)
    )]
    fn validate_rejects_unusable_parameters(
        #[case] tariff: TariffSchedule,
        #[case] expected: TariffError,
    ) {
        assert_eq!(tariff.validate(), Err(expected));
    }

    #[rstest]
    fn validate_rejects_nan_base_rate() {
        let tariff = TariffSchedule::new(f64::NAN, 8.0);
        assert!(matches!(
            tariff.validate(),
            Err(TariffError::InvalidBaseRate(_))
        ));
    }
}
