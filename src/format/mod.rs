//! Formatting helpers for rendering expressions and solution sets.

pub mod expr;
pub mod solution;

pub use expr::{pretty, show_rational};
pub use solution::{pretty_equations, pretty_solutions};
