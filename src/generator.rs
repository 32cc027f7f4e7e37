//! Random construction of `a*(b*x ± c) = d*(e*x ± f)` equations.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GeneratorConfig, choice_count};
use crate::error::{EquationError, Result};

/// Uniform draws from an inclusive range with some values removed.
///
/// Only the excluded values inside the range are stored, so wide ranges cost
/// nothing extra.
#[derive(Debug, Clone)]
pub struct CoefficientSampler {
    lo: i64,
    excluded: Vec<i64>,
    count: u128,
}

impl CoefficientSampler {
    /// Fails with [`EquationError::Config`] when `exclude` covers the whole
    /// range. Callers must supply a configuration that leaves a choice.
    pub fn new(range: RangeInclusive<i64>, exclude: &BTreeSet<i64>) -> Result<Self> {
        let count = choice_count(&range, exclude);
        if count == 0 {
            return Err(EquationError::Config(format!(
                "no coefficients left in {}..={} after excluding {exclude:?}",
                range.start(),
                range.end(),
            )));
        }
        Ok(Self {
            lo: *range.start(),
            excluded: exclude.range(range).copied().collect(),
            count,
        })
    }

    /// Number of distinct values [`sample`](Self::sample) can return.
    pub fn choice_count(&self) -> u128 {
        self.count
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        self.nth_choice(rng.random_range(0..self.count))
    }

    /// The `index`-th allowed value in ascending order.
    fn nth_choice(&self, index: u128) -> i64 {
        let mut value = i128::from(self.lo) + index as i128;
        // `excluded` is sorted, so each skip can only reach later exclusions.
        for &skipped in &self.excluded {
            if i128::from(skipped) > value {
                break;
            }
            value += 1;
        }
        value as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => f.write_str("+"),
            Sign::Minus => f.write_str("-"),
        }
    }
}

/// Negative numbers are parenthesized so they can follow a sign.
pub fn format_number(number: i64) -> String {
    if number >= 0 {
        number.to_string()
    } else {
        format!("({number})")
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    sampler: CoefficientSampler,
    rng: StdRng,
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sampler = CoefficientSampler::new(config.range.clone(), &config.exclude)?;
        Ok(Self::with_rng(sampler, rng))
    }

    pub fn with_rng(sampler: CoefficientSampler, rng: StdRng) -> Self {
        Self { sampler, rng }
    }

    pub fn number(&mut self) -> i64 {
        self.sampler.sample(&mut self.rng)
    }

    /// `coeff*(coeff*x <sign> const)`
    fn part(&mut self) -> String {
        let outer = self.number();
        let inner = self.number();
        let sign = Sign::random(&mut self.rng);
        let constant = format_number(self.number());
        format!("{outer}*({inner}*x {sign} {constant})")
    }

    pub fn equation(&mut self) -> String {
        let lhs = self.part();
        let rhs = self.part();
        format!("{lhs} = {rhs}")
    }

    pub fn equations(&mut self, amount: usize) -> Vec<String> {
        (0..amount).map(|_| self.equation()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_numbers_are_parenthesized() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(-2), "(-2)");
    }

    #[test]
    fn choices_skip_excluded_values_in_order() {
        let sampler = CoefficientSampler::new(-2..=3, &BTreeSet::from([-1, 0, 1, 7])).unwrap();
        assert_eq!(sampler.choice_count(), 3);
        let values: Vec<i64> = (0..3).map(|i| sampler.nth_choice(i)).collect();
        assert_eq!(values, vec![-2, 2, 3]);
    }

    #[test]
    fn wide_range_samples_without_enumerating() {
        let exclude = BTreeSet::from([0, 1]);
        let sampler = CoefficientSampler::new(i64::MIN / 2..=i64::MAX / 2, &exclude).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1000 {
            let n = sampler.sample(&mut rng);
            assert!((i64::MIN / 2..=i64::MAX / 2).contains(&n));
            assert!(!exclude.contains(&n));
        }
    }

    #[test]
    fn full_integer_range_reaches_both_ends() {
        let sampler = CoefficientSampler::new(i64::MIN..=i64::MAX, &BTreeSet::from([0])).unwrap();
        assert_eq!(sampler.nth_choice(0), i64::MIN);
        assert_eq!(sampler.nth_choice(sampler.choice_count() - 1), i64::MAX);
    }

    #[test]
    fn fully_excluded_range_has_no_sampler() {
        let config = GeneratorConfig::default()
            .with_range(0..=1)
            .with_exclude([0, 1]);
        assert!(matches!(Generator::new(&config), Err(EquationError::Config(_))));
    }

    #[test]
    fn same_seed_same_equations() {
        let config = GeneratorConfig::default().with_seed(7);
        let mut a = Generator::new(&config).unwrap();
        let mut b = Generator::new(&config).unwrap();
        assert_eq!(a.equations(20), b.equations(20));
    }

    #[test]
    fn equation_has_two_template_parts() {
        let config = GeneratorConfig::default().with_seed(3);
        let mut generator = Generator::new(&config).unwrap();
        let equation = generator.equation();
        let sides: Vec<&str> = equation.split(" = ").collect();
        assert_eq!(sides.len(), 2);
        for side in sides {
            assert!(side.contains("*("));
            assert!(side.contains("*x "));
            assert!(side.ends_with(')'));
        }
    }

    #[test]
    fn both_signs_appear() {
        let mut rng = StdRng::seed_from_u64(11);
        let signs: Vec<Sign> = (0..64).map(|_| Sign::random(&mut rng)).collect();
        assert!(signs.contains(&Sign::Plus));
        assert!(signs.contains(&Sign::Minus));
    }
}
