//! Construction-time options for an equation generation run.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::error::{EquationError, Result};

pub const DEFAULT_AMOUNT: usize = 10;
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of nice equations a run returns.
    pub amount: usize,
    /// Inclusive bounds for every coefficient and constant.
    pub range: RangeInclusive<i64>,
    /// Values never used as a coefficient or constant.
    pub exclude: BTreeSet<i64>,
    /// Upper bound on generate/solve/filter rounds per run.
    pub max_rounds: usize,
    /// Seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            range: -10..=10,
            exclude: BTreeSet::from([0, 1]),
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_amount(mut self, amount: usize) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.range = range;
        self
    }

    pub fn with_exclude(mut self, exclude: impl IntoIterator<Item = i64>) -> Self {
        self.exclude = exclude.into_iter().collect();
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// How many integers a coefficient may take: `range` minus `exclude`.
    pub fn choice_count(&self) -> u128 {
        choice_count(&self.range, &self.exclude)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(EquationError::Config("amount must be positive".to_string()));
        }
        if self.max_rounds == 0 {
            return Err(EquationError::Config("max_rounds must be positive".to_string()));
        }
        if self.range.is_empty() {
            return Err(EquationError::Config(format!(
                "range {}..={} is empty",
                self.range.start(),
                self.range.end()
            )));
        }
        if self.choice_count() == 0 {
            return Err(EquationError::Config(format!(
                "every value in {}..={} is excluded",
                self.range.start(),
                self.range.end()
            )));
        }
        Ok(())
    }
}

/// Size of `range \ exclude`, without enumerating the range.
pub fn choice_count(range: &RangeInclusive<i64>, exclude: &BTreeSet<i64>) -> u128 {
    if range.is_empty() {
        return 0;
    }
    let width = (i128::from(*range.end()) - i128::from(*range.start()) + 1) as u128;
    width - exclude.range(range.clone()).count() as u128
}
