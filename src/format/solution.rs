use crate::expr::Rational;
use crate::format::show_rational;
use crate::solver::EquationMap;

/// Render a solution set as a bracketed list, e.g. `[4]` or `[-9/5]`.
pub fn pretty_solutions(solutions: &[Rational]) -> String {
    let values: Vec<String> = solutions.iter().map(show_rational).collect();
    format!("[{}]", values.join(", "))
}

/// One `"<equation> => <solutions>"` line per entry, in map order.
pub fn pretty_equations(equations: &EquationMap) -> Vec<String> {
    equations
        .iter()
        .map(|(equation, solutions)| format!("{equation} => {}", pretty_solutions(solutions)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::rational;

    #[test]
    fn empty_and_single_solution_sets() {
        assert_eq!(pretty_solutions(&[]), "[]");
        assert_eq!(pretty_solutions(&[rational(-9, 5)]), "[-9/5]");
    }

    #[test]
    fn lines_follow_insertion_order() {
        let mut map = EquationMap::new();
        map.insert("3(2x + 1) = 2(2x + 5)".to_string(), vec![rational(7, 2)]);
        map.insert("2(1x + 0) = 1(1x + 4)".to_string(), vec![rational(4, 1)]);
        assert_eq!(
            pretty_equations(&map),
            vec![
                "3(2x + 1) = 2(2x + 5) => [7/2]".to_string(),
                "2(1x + 0) = 1(1x + 4) => [4]".to_string(),
            ]
        );
    }
}
