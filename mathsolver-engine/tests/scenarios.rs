use assert_float_eq::assert_float_absolute_eq;
use mathsolver_cas::{symbolic::expr::ROOT_OF, Symbolic};
use mathsolver_engine::{EngineConfig, Outcome, Problem};
use mathsolver_error::Error;
use pretty_assertions::assert_eq;

/// Parses and runs the problem with the default options.
fn run(input: &str) -> Result<Outcome, Error> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    Problem::parse(input)?.run(&Symbolic, &EngineConfig::default())
}

/// Runs an equation, returning the formatted steps and solutions.
fn solved(input: &str) -> (Vec<String>, Vec<String>) {
    let Outcome::Solved { steps, solutions, .. } = run(input).unwrap() else {
        panic!("`{}` is not an equation", input);
    };
    (
        steps.iter().map(ToString::to_string).collect(),
        solutions.iter().map(ToString::to_string).collect(),
    )
}

/// Runs an expression, returning the formatted steps and result.
fn simplified(input: &str) -> (Vec<String>, String) {
    let Outcome::Simplified { steps, result } = run(input).unwrap() else {
        panic!("`{}` is not an expression", input);
    };
    (steps.iter().map(ToString::to_string).collect(), result.to_string())
}

#[test]
fn linear_equation() {
    let (steps, solutions) = solved("2x + 3 = 7");
    assert_eq!(steps[0], "Simplified equation: 2*x - 4 = 0");
    assert!(steps[1].starts_with("Linear equation"));
    assert_eq!(solutions, vec!["2"]);
}

#[test]
fn quadratic_with_two_roots() {
    let (steps, solutions) = solved("x^2 - 5x + 6 = 0");
    assert!(steps.iter().any(|step| step.ends_with("= 1") && step.starts_with("Discriminant")));
    assert_eq!(solutions, vec!["3", "2"]);
}

#[test]
fn quadratic_with_complex_roots() {
    let (steps, solutions) = solved("x^2 + 1 = 0");
    assert!(steps.iter().any(|step| step == "Discriminant D = 0² - 4*1*1 = -4"));
    assert_eq!(solutions, vec!["i", "-i"]);
}

#[test]
fn quadratic_roots_sum_and_product() {
    // 2x^2 - 3x - 5 = (2x - 5)(x + 1)
    let (_, solutions) = solved("2x^2 - 3x = 5");
    assert_eq!(solutions, vec!["5/2", "-1"]);
}

#[test]
fn expand_product() {
    let (steps, result) = simplified("(x+1)(x-1)");
    assert_eq!(steps.len(), 1);
    assert!(steps[0].starts_with("Expand: "));
    assert_eq!(result, "x^2 - 1");
}

#[test]
fn simplification_is_idempotent() {
    let (_, once) = simplified("(x + 1)^3 - x^3");
    let (steps, twice) = simplified(&once);
    assert!(steps.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn parse_error() {
    let err = run("2x +").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input");
}

#[test]
fn cubic_with_rational_roots() {
    let (steps, solutions) = solved("x^3 - 6x^2 + 11x - 6 = 0");
    assert_eq!(steps.last().unwrap(), "Equation of degree 3. Solutions: [1, 2, 3]");
    assert_eq!(solutions, vec!["1", "2", "3"]);
}

#[test]
fn quintic_roots_are_approximated() {
    let Outcome::Solved { solutions, .. } = run("x^5 - x + 1 = 0").unwrap() else {
        panic!("not an equation");
    };
    assert_eq!(solutions.len(), 5);
    assert!(solutions.iter().all(|solution| !solution.contains_call(ROOT_OF)));

    let real = solutions[0].as_number().unwrap().to_f64();
    assert_float_absolute_eq!(real, -1.1673039782614187);
}

#[test]
fn pythagorean_identity() {
    let (steps, result) = simplified("sin(x)^2 + cos(x)^2");
    assert_eq!(steps.len(), 1);
    assert!(steps[0].starts_with("Simplify: "));
    assert_eq!(result, "1");
}

#[test]
fn collect_and_expand_do_not_converge() {
    let err = run("x*y + x*z").unwrap_err();
    assert!(err.to_string().starts_with("simplification did not converge after"));
}

#[test]
fn non_polynomial_equation() {
    let err = run("sin(x) = 1").unwrap_err();
    assert_eq!(err.to_string(), "expression is not a polynomial in x");
}

#[test]
fn huge_degree_is_rejected() {
    let err = run("x^100000000 = 1").unwrap_err();
    assert_eq!(err.to_string(), "polynomial degree 100000000 is too large");
}

#[test]
fn repeated_irrational_roots_are_reported_once() {
    let (_, solutions) = solved("x^4 - 4x^2 + 4 = 0");
    assert_eq!(solutions, vec!["sqrt(2)", "-sqrt(2)"]);
}
