//! Generator of randomized linear equations whose solutions are small
//! integers or short proper fractions, for practice sheets.

pub mod batch;
pub mod config;
pub mod error;
pub mod expr;
pub mod filter;
pub mod format;
pub mod generator;
pub mod parser;
pub mod solver;

pub use batch::{EquationGenerator, generate_easy_linear_equations};
pub use config::GeneratorConfig;
pub use error::{EquationError, Result};
pub use expr::{Expr, Rational, rational};
pub use filter::{clean_equation, is_good_solution, sort_equations};
pub use format::{pretty, pretty_equations, pretty_solutions, show_rational};
pub use generator::{CoefficientSampler, Generator, Sign, format_number};
pub use parser::{parse_equation, parse_expr};
pub use solver::{
    EquationMap, LinearForm, SolutionSet, UNKNOWN, solve_equation, solve_equations, solve_linear,
};
