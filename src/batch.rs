//! Round-based driver that collects nice equations until a target count.

use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::error::{EquationError, Result};
use crate::filter::sort_equations;
use crate::generator::Generator;
use crate::solver::{EquationMap, solve_equations};

pub struct EquationGenerator {
    config: GeneratorConfig,
    generator: Generator,
}

impl EquationGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let generator = Generator::new(&config)?;
        Ok(Self { config, generator })
    }

    /// Generate raw equations, solve them and keep the nice ones, round after
    /// round, until `amount` distinct cleaned equations are collected.
    ///
    /// Later duplicates overwrite the solution of an earlier entry without
    /// moving it. The result holds exactly `amount` entries in discovery
    /// order, or the run fails with [`EquationError::Exhausted`] once
    /// `max_rounds` rounds have passed.
    pub fn generate_easy_linear_equations(&mut self) -> Result<EquationMap> {
        let amount = self.config.amount;
        let mut good = EquationMap::with_capacity(amount);

        for round in 1..=self.config.max_rounds {
            let raw = self.generator.equations(amount);
            let solved = solve_equations(&raw)?;
            let sorted = sort_equations(&solved);
            debug!(
                round,
                generated = raw.len(),
                solved = solved.len(),
                retained = sorted.len(),
                "finished round"
            );
            good.extend(sorted);

            if good.len() >= amount {
                good.truncate(amount);
                info!(rounds = round, equations = good.len(), "collected nice equations");
                return Ok(good);
            }
        }

        warn!(
            rounds = self.config.max_rounds,
            found = good.len(),
            target = amount,
            "round limit reached"
        );
        Err(EquationError::Exhausted {
            rounds: self.config.max_rounds,
            found: good.len(),
            target: amount,
        })
    }
}

/// One-shot convenience over [`EquationGenerator`].
pub fn generate_easy_linear_equations(config: GeneratorConfig) -> Result<EquationMap> {
    EquationGenerator::new(config)?.generate_easy_linear_equations()
}
