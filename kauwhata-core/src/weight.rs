//! Edge weight synthesis.
//!
//! Weights are drawn uniformly from a [`WeightRange`]. Whole-number bounds
//! yield [`Weight::Integer`]; otherwise the draw is real-valued and rounded to
//! the precision of the more precise bound.

use std::fmt;

use rand::Rng;

use crate::config::WeightSign;

/// Number of digits after the decimal point in `value`'s shortest decimal
/// form, or `0` when it has none.
///
/// # Examples
/// ```
/// use kauwhata_core::decimal_places;
///
/// assert_eq!(decimal_places(3.0), 0);
/// assert_eq!(decimal_places(1.25), 2);
/// assert_eq!(decimal_places(-0.1), 1);
/// ```
#[must_use]
pub fn decimal_places(value: f64) -> usize {
    let rendered = value.to_string();
    rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Inclusive bounds for synthesised weights.
///
/// Construction orders the bounds so that `min() <= max()` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange {
    min: f64,
    max: f64,
}

impl WeightRange {
    /// Creates a range from two bounds in either order.
    #[must_use]
    pub const fn new(first: f64, second: f64) -> Self {
        if first > second {
            Self {
                min: second,
                max: first,
            }
        } else {
            Self {
                min: first,
                max: second,
            }
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` when both bounds are whole numbers.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.min.fract() == 0.0 && self.max.fract() == 0.0
    }

    /// Rounding precision applied to real-valued draws.
    #[must_use]
    pub fn precision(&self) -> usize {
        decimal_places(self.min).max(decimal_places(self.max))
    }

    /// Returns `true` when `weight` or its negation lies within the range.
    #[must_use]
    pub fn admits(&self, weight: Weight) -> bool {
        let value = weight.as_f64();
        let within = |candidate: f64| candidate >= self.min && candidate <= self.max;
        within(value) || within(-value)
    }
}

/// A synthesised edge weight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Weight {
    /// Drawn from whole-number bounds.
    Integer(i64),
    /// Drawn from fractional bounds and rounded.
    Real(f64),
}

impl Weight {
    /// Returns the weight as a float.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// Returns `true` for integer weights.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum SampleMode {
    Integer { low: i64, high: i64 },
    Real { precision: usize },
}

/// Draws weights for one generation run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WeightSampler {
    range: WeightRange,
    sign: WeightSign,
    mode: SampleMode,
}

impl WeightSampler {
    // Whole-number bounds outside the i64 range fall back to real draws.
    pub(crate) fn new(range: WeightRange, sign: WeightSign) -> Self {
        let integer_bounds = range
            .is_integral()
            .then(|| whole_to_i64(range.min()).zip(whole_to_i64(range.max())))
            .flatten();
        let mode = match integer_bounds {
            Some((low, high)) => SampleMode::Integer { low, high },
            None => SampleMode::Real {
                precision: range.precision(),
            },
        };
        Self { range, sign, mode }
    }

    /// Draws one weight. The sign is drawn before the magnitude.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        let negate = match self.sign {
            WeightSign::Signed => rng.gen_bool(0.5),
            WeightSign::Unsigned => false,
        };
        match self.mode {
            SampleMode::Integer { low, high } => {
                let value = rng.gen_range(low..=high);
                Weight::Integer(if negate { value.saturating_neg() } else { value })
            }
            SampleMode::Real { precision } => {
                let value = round_to(self.draw_real(rng), precision);
                Weight::Real(if negate { -value } else { value })
            }
        }
    }

    fn draw_real<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let (min, max) = (self.range.min(), self.range.max());
        if min == max {
            return min;
        }
        // Interpolate so spans wider than f64::MAX stay finite.
        let t: f64 = rng.gen_range(0.0..=1.0);
        min.mul_add(1.0 - t, max * t).clamp(min, max)
    }
}

/// Converts a whole-number float to `i64` when it is representable exactly.
fn whole_to_i64(value: f64) -> Option<i64> {
    // 2^63, the first float past `i64::MAX`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value >= -LIMIT && value < LIMIT).then(|| value as i64)
}

fn round_to(value: f64, precision: usize) -> f64 {
    format!("{value:.precision$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng, rngs::mock::StepRng};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, 0)]
    #[case(0.5, 1)]
    #[case(2.125, 3)]
    #[case(-7.75, 2)]
    #[case(100.0, 0)]
    fn decimal_places_counts_fraction_digits(#[case] value: f64, #[case] expected: usize) {
        assert_eq!(decimal_places(value), expected);
    }

    #[rstest]
    fn range_orders_bounds() {
        let range = WeightRange::new(4.0, -1.0);
        assert_eq!((range.min(), range.max()), (-1.0, 4.0));
    }

    #[rstest]
    #[case(1.0, 5.0, true, 0)]
    #[case(1.0, 5.5, false, 1)]
    #[case(0.25, 1.5, false, 2)]
    fn range_reports_mode(
        #[case] min: f64,
        #[case] max: f64,
        #[case] integral: bool,
        #[case] precision: usize,
    ) {
        let range = WeightRange::new(min, max);
        assert_eq!(range.is_integral(), integral);
        assert_eq!(range.precision(), precision);
    }

    #[rstest]
    fn degenerate_real_range_is_exact() {
        let sampler = WeightSampler::new(WeightRange::new(1.5, 1.5), WeightSign::Unsigned);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..64 {
            assert_eq!(sampler.sample(&mut rng), Weight::Real(1.5));
        }
    }

    #[rstest]
    fn integer_bounds_yield_integers() {
        let sampler = WeightSampler::new(WeightRange::new(2.0, 9.0), WeightSign::Unsigned);
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..256 {
            match sampler.sample(&mut rng) {
                Weight::Integer(value) => assert!((2..=9).contains(&value)),
                Weight::Real(value) => panic!("expected integer weight, got {value}"),
            }
        }
    }

    #[rstest]
    fn real_draws_respect_precision() {
        let range = WeightRange::new(0.25, 3.5);
        let sampler = WeightSampler::new(range, WeightSign::Unsigned);
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..256 {
            let weight = sampler.sample(&mut rng);
            assert!(range.admits(weight));
            assert!(decimal_places(weight.as_f64()) <= 2);
        }
    }

    #[rstest]
    fn signed_draws_cover_both_signs() {
        let range = WeightRange::new(1.0, 4.0);
        let sampler = WeightSampler::new(range, WeightSign::Signed);
        let mut rng = SmallRng::seed_from_u64(17);
        let weights: Vec<Weight> = (0..256).map(|_| sampler.sample(&mut rng)).collect();
        assert!(weights.iter().all(|weight| range.admits(*weight)));
        assert!(weights.iter().any(|weight| weight.as_f64() < 0.0));
        assert!(weights.iter().any(|weight| weight.as_f64() > 0.0));
    }

    #[rstest]
    fn step_rng_picks_lower_bound() {
        let sampler = WeightSampler::new(WeightRange::new(3.0, 8.0), WeightSign::Unsigned);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(sampler.sample(&mut rng), Weight::Integer(3));
    }

    #[rstest]
    #[case(1e19, 2e19)]
    #[case(-3e19, -1e19)]
    #[case(-1e300, 1e300)]
    fn whole_bounds_beyond_i64_stay_in_range(#[case] min: f64, #[case] max: f64) {
        let range = WeightRange::new(min, max);
        let sampler = WeightSampler::new(range, WeightSign::Unsigned);
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..64 {
            let weight = sampler.sample(&mut rng);
            assert!(!weight.is_integer(), "{weight} cannot be an i64");
            assert!(range.admits(weight), "{weight} outside [{min}, {max}]");
            assert_eq!(weight.as_f64().fract(), 0.0);
        }
    }

    #[rstest]
    fn i64_minimum_bound_stays_integral() {
        let range = WeightRange::new(-9_223_372_036_854_775_808.0, 0.0);
        let sampler = WeightSampler::new(range, WeightSign::Unsigned);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(sampler.sample(&mut rng), Weight::Integer(i64::MIN));
    }

    #[rstest]
    fn extreme_real_span_stays_finite() {
        let range = WeightRange::new(-f64::MAX, 0.5);
        let sampler = WeightSampler::new(range, WeightSign::Unsigned);
        let mut rng = SmallRng::seed_from_u64(23);
        for _ in 0..32 {
            assert!(sampler.sample(&mut rng).as_f64().is_finite());
        }
    }
}
