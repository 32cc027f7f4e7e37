use lineqgen::{
    EquationMap, clean_equation, is_good_solution, rational, solve_equation, solve_equations,
    sort_equations,
};

fn solved(equation: &str) -> Vec<lineqgen::Rational> {
    solve_equation(equation).unwrap_or_else(|e| panic!("failed to solve {equation}: {e}"))
}

#[test]
fn fractional_solution_is_exact_and_rejected() {
    let solutions = solved("2*(3*x + 4) = 1*(1*x + (-1))");
    assert_eq!(solutions, vec![rational(-9, 5)]);
    assert!(!is_good_solution(&solutions));
}

#[test]
fn whole_solution_is_kept_and_cleaned() {
    let equation = "2*(1*x + 0) = 1*(1*x + 4)";
    let solutions = solved(equation);
    assert_eq!(solutions, vec![rational(4, 1)]);
    assert!(is_good_solution(&solutions));
    assert_eq!(clean_equation(equation), "2(1x + 0) = 1(1x + 4)");
}

#[test]
fn subtracted_negative_constant() {
    // 3*(2*x - (-4)) = 6*x + 12
    assert_eq!(solved("3*(2*x - (-4)) = 2*(2*x - 2)"), vec![rational(-8, 1)]);
}

#[test]
fn short_proper_fraction() {
    // 4x + 2 = 2x + 3
    assert_eq!(solved("2*(2*x + 1) = 1*(2*x + 3)"), vec![rational(1, 2)]);
}

#[test]
fn parallel_sides_have_no_solution() {
    assert!(solved("2*(3*x + 1) = 3*(2*x + 5)").is_empty());
}

#[test]
fn identical_sides_have_no_unique_solution() {
    assert!(solved("2*(3*x + 1) = 3*(2*x + (-2)) + 8").is_empty());
    assert!(solved("2*(3*x + 1) = 2*(3*x + 1)").is_empty());
}

#[test]
fn malformed_text_reports_input() {
    let err = solve_equation("2*(3*x + ) = 4").unwrap_err();
    assert!(err.to_string().contains("2*(3*x + )"), "{err}");
}

#[test]
fn batch_collapses_duplicates() {
    let equations = vec![
        "2*(1*x + 0) = 1*(1*x + 4)".to_string(),
        "2*(3*x + 4) = 1*(1*x + (-1))".to_string(),
        "2*(1*x + 0) = 1*(1*x + 4)".to_string(),
    ];
    let map = solve_equations(&equations).expect("solve batch");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["2*(1*x + 0) = 1*(1*x + 4)", "2*(3*x + 4) = 1*(1*x + (-1))"]
    );
}

#[test]
fn sorting_keeps_nice_entries_in_order() {
    let mut map = EquationMap::new();
    map.insert("2*(2*x + 1) = 1*(2*x + 3)".to_string(), vec![rational(1, 2)]);
    map.insert("2*(3*x + 4) = 1*(1*x + (-1))".to_string(), vec![rational(-9, 5)]);
    map.insert("2*(3*x + 1) = 3*(2*x + 5)".to_string(), vec![]);
    map.insert("2*(1*x + 0) = 1*(1*x + 4)".to_string(), vec![rational(4, 1)]);

    let sorted = sort_equations(&map);
    let entries: Vec<(&str, &Vec<lineqgen::Rational>)> =
        sorted.iter().map(|(k, v)| (k.as_str(), v)).collect();
    assert_eq!(
        entries,
        vec![
            ("2(2x + 1) = 1(2x + 3)", &vec![rational(1, 2)]),
            ("2(1x + 0) = 1(1x + 4)", &vec![rational(4, 1)]),
        ]
    );
}
