use mathsolver_cas::symbolic::SymExpr;
use mathsolver_engine::Outcome;
use mathsolver_parser::parser::fmt::Latex;
use std::fmt::Write;

/// Formats an expression as plain text, or as LaTeX.
fn expr(expr: &SymExpr, latex: bool) -> String {
    if latex {
        expr.as_display().to_string()
    } else {
        expr.to_string()
    }
}

/// Renders the outcome of a problem: a numbered list of the steps taken, followed by the result.
pub fn render(outcome: &Outcome, latex: bool) -> String {
    let mut out = String::new();
    let steps = outcome.steps();
    if !steps.is_empty() {
        out.push_str("Steps:\n");
        for (i, step) in steps.iter().enumerate() {
            // writing to a `String` cannot fail
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
        out.push('\n');
    }

    match outcome {
        Outcome::Simplified { result, .. } => {
            let _ = writeln!(out, "Result: {}", expr(result, latex));
        },
        Outcome::Solved { variable, solutions, .. } if solutions.is_empty() => {
            let _ = writeln!(out, "Result: no solutions for {}", variable);
        },
        Outcome::Solved { variable, solutions, .. } => {
            out.push_str("Result:\n");
            for solution in solutions {
                let _ = writeln!(out, "{} = {}", variable, expr(solution, latex));
            }
        },
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_cas::Symbolic;
    use mathsolver_engine::{EngineConfig, Problem};
    use pretty_assertions::assert_eq;

    fn rendered(input: &str, latex: bool) -> String {
        let outcome = Problem::parse(input).unwrap()
            .run(&Symbolic, &EngineConfig::default())
            .unwrap();
        render(&outcome, latex)
    }

    #[test]
    fn simplified_expression() {
        assert_eq!(
            rendered("(x+1)(x-1)", false),
            "Steps:\n1. Expand: (x - 1)*(x + 1) → x^2 - 1\n\nResult: x^2 - 1\n",
        );
    }

    #[test]
    fn solved_equation() {
        let output = rendered("2x + 3 = 7", false);
        assert!(output.starts_with("Steps:\n1. Simplified equation: 2*x - 4 = 0\n"));
        assert!(output.ends_with("Result:\nx = 2\n"));
    }

    #[test]
    fn latex_result() {
        let output = rendered("x/2", true);
        assert_eq!(output, "Result: \\frac{x}{2}\n");
    }
}
