//! Exact solver for equations that are linear in a single unknown.

use indexmap::IndexMap;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{EquationError, Result};
use crate::expr::{Expr, Rational};
use crate::parser::parse_equation;

/// The unknown every generated equation is solved for.
pub const UNKNOWN: &str = "x";

/// Solutions for the unknown, in order. Empty when there is no unique solution.
pub type SolutionSet = Vec<Rational>;

/// Equation text mapped to its solution set, in insertion order.
pub type EquationMap = IndexMap<String, SolutionSet>;

/// `coeff * var + constant`, collected from one side of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearForm {
    pub coeff: Rational,
    pub constant: Rational,
}

impl LinearForm {
    pub fn from_expr(expr: &Expr, var: &str) -> Result<Self> {
        let mut form = LinearForm {
            coeff: Rational::zero(),
            constant: Rational::zero(),
        };
        collect_linear_terms(expr, Rational::one(), var, &mut form)?;
        Ok(form)
    }
}

/// Solve `lhs = rhs` for `var`.
///
/// Both sides are reduced to `m*var + k`. A non-zero `m` gives the single
/// solution `-k/m`; otherwise the equation is either a contradiction or an
/// identity and the solution set is empty.
pub fn solve_linear(lhs: &Expr, rhs: &Expr, var: &str) -> Result<SolutionSet> {
    let difference = Expr::Sub(lhs.clone().boxed(), rhs.clone().boxed());
    let LinearForm { coeff, constant } = LinearForm::from_expr(&difference, var)?;
    if coeff.is_zero() {
        trace!(%difference, "no unique solution");
        return Ok(Vec::new());
    }
    Ok(vec![-constant / coeff])
}

pub fn solve_equation(equation: &str) -> Result<SolutionSet> {
    let (lhs, rhs) = parse_equation(equation)?;
    solve_linear(&lhs, &rhs, UNKNOWN)
}

/// Solve every equation; repeated text collapses onto its first position.
pub fn solve_equations(equations: &[String]) -> Result<EquationMap> {
    let mut solved = EquationMap::with_capacity(equations.len());
    for equation in equations {
        let solutions = solve_equation(equation)?;
        solved.insert(equation.clone(), solutions);
    }
    Ok(solved)
}

fn collect_linear_terms(
    expr: &Expr,
    scale: Rational,
    var: &str,
    form: &mut LinearForm,
) -> Result<()> {
    match expr {
        Expr::Constant(c) => {
            form.constant += scale * c;
        }
        Expr::Variable(name) if name == var => {
            form.coeff += scale;
        }
        Expr::Variable(name) => {
            return Err(EquationError::Unsupported(format!(
                "unexpected unknown `{name}`, expected `{var}`"
            )));
        }
        Expr::Add(a, b) => {
            collect_linear_terms(a, scale.clone(), var, form)?;
            collect_linear_terms(b, scale, var, form)?;
        }
        Expr::Sub(a, b) => {
            collect_linear_terms(a, scale.clone(), var, form)?;
            collect_linear_terms(b, -scale, var, form)?;
        }
        Expr::Neg(a) => collect_linear_terms(a, -scale, var, form)?,
        Expr::Mul(a, b) => {
            if let Some(c) = constant_of(a) {
                collect_linear_terms(b, scale * c, var, form)?;
            } else if let Some(c) = constant_of(b) {
                collect_linear_terms(a, scale * c, var, form)?;
            } else {
                return Err(non_linear(expr));
            }
        }
        Expr::Div(a, b) => match constant_of(b) {
            Some(c) if c.is_zero() => {
                return Err(EquationError::Unsupported(format!("division by zero in {expr}")));
            }
            Some(c) => collect_linear_terms(a, scale / c, var, form)?,
            None => return Err(non_linear(expr)),
        },
    }
    Ok(())
}

/// Fold a variable-free subtree to its value.
fn constant_of(expr: &Expr) -> Option<Rational> {
    match expr {
        Expr::Constant(c) => Some(c.clone()),
        Expr::Variable(_) => None,
        Expr::Neg(inner) => constant_of(inner).map(|c| -c),
        Expr::Add(a, b) => Some(constant_of(a)? + constant_of(b)?),
        Expr::Sub(a, b) => Some(constant_of(a)? - constant_of(b)?),
        Expr::Mul(a, b) => Some(constant_of(a)? * constant_of(b)?),
        Expr::Div(a, b) => {
            let divisor = constant_of(b)?;
            if divisor.is_zero() {
                None
            } else {
                Some(constant_of(a)? / divisor)
            }
        }
    }
}

fn non_linear(expr: &Expr) -> EquationError {
    EquationError::Unsupported(format!("term {expr} is not linear"))
}
