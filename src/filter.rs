//! Niceness policy for solved equations and their display form.

use num_traits::Signed;

use crate::expr::Rational;
use crate::format::show_rational;
use crate::solver::EquationMap;

/// Longest textual form a non-whole solution may have, e.g. `3/4`.
pub const MAX_FRACTION_LEN: usize = 3;

/// Whether a solution set is suitable for a practice problem.
///
/// Only the first solution is judged. Whole numbers always pass. Other
/// rationals pass when they print in at most [`MAX_FRACTION_LEN`] characters
/// and are proper fractions (`|p| < q`). An empty set never passes.
pub fn is_good_solution(solutions: &[Rational]) -> bool {
    let Some(first) = solutions.first() else {
        return false;
    };
    if first.is_integer() {
        return true;
    }
    show_rational(first).len() <= MAX_FRACTION_LEN && first.numer().abs() < *first.denom()
}

/// Strip the explicit multiplication markers: `2*(3*x + 4)` becomes `2(3x + 4)`.
pub fn clean_equation(equation: &str) -> String {
    equation.replace('*', "")
}

/// Keep the nice entries, keyed by their cleaned text, in input order.
pub fn sort_equations(equations: &EquationMap) -> EquationMap {
    equations
        .iter()
        .filter(|(_, solutions)| is_good_solution(solutions))
        .map(|(equation, solutions)| (clean_equation(equation), solutions.clone()))
        .collect()
}
