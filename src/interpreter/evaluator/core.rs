use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    ast::{Expr, PrintArgument, Program, Statement},
    error::RuntimeError,
    interpreter::evaluator::bindings::Bindings,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a successful run of a program produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Execution {
    /// Printed lines, in order.
    pub output:   Vec<String>,
    /// Final value of every variable.
    pub bindings: Bindings,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable store and the lines
/// printed so far. A fresh context is created for every evaluation, so no
/// state carries over between runs.
#[derive(Debug, Default)]
pub struct Context {
    /// Variable values.
    pub variables: Bindings,
    /// Lines printed so far.
    pub output:    Vec<String>,
}

impl Context {
    /// Creates a new evaluation context with no variables and no output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every statement of `program` in order.
    ///
    /// Stops at the first error; whatever was printed before it stays in the
    /// context but is never returned by [`evaluate`].
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// - A declaration sets the variable to 0, overwriting any value.
    /// - An assignment stores the value of its expression.
    /// - A print appends the decimal value of its expression, or its string
    ///   literal verbatim, to the output.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line_number(), %statement, "evaluating");
        match statement {
            Statement::Declaration { name, .. } => self.variables.set(name, 0),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.set(name, value);
            },
            Statement::Print { value, .. } => {
                let line = match value {
                    PrintArgument::Expression(expr) => self.eval(expr)?.to_string(),
                    PrintArgument::Text(text) => text.clone(),
                };
                self.output.push(line);
            },
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Errors
    /// - `UnknownVariable` if a variable has no value in the store.
    /// - `DivisionByZero` or `Overflow` from the arithmetic.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Identifier { name, line } => {
                self.variables
                    .get(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Consumes the context and returns what the run produced.
    #[must_use]
    pub fn into_execution(self) -> Execution {
        Execution { output:   self.output,
                    bindings: self.variables, }
    }
}

/// Evaluates a program against a fresh context.
///
/// On success returns the printed lines and the final variable values. On
/// failure only the error is returned; lines printed before the failure are
/// discarded.
///
/// # Errors
/// Returns the first `RuntimeError` raised.
///
/// # Example
/// ```
/// use scoobylang::{interpreter::evaluator::core::evaluate, parse};
///
/// let analysis = parse("int x; x = 5; print x;").unwrap();
/// let execution = evaluate(&analysis.program).unwrap();
///
/// assert_eq!(execution.output, ["5"]);
/// assert_eq!(execution.bindings.get("x"), Some(5));
/// ```
pub fn evaluate(program: &Program) -> EvalResult<Execution> {
    let mut context = Context::new();
    context.eval_program(program)?;
    debug!(lines = context.output.len(),
           variables = context.variables.len(),
           "evaluation finished");
    Ok(context.into_execution())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn number(value: i64) -> Expr {
        Expr::Number { value, line: 1 }
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier { name: name.to_string(),
                           line: 1, }
    }

    fn print(expr: Expr) -> Statement {
        Statement::Print { value: PrintArgument::Expression(expr),
                           line:  1, }
    }

    #[test]
    fn declaration_resets_to_zero() {
        let program = Program { statements: vec![Statement::Assignment { name:  "x".to_string(),
                                                                         value: number(4),
                                                                         line:  1, },
                                                 Statement::Declaration { name: "x".to_string(),
                                                                          line: 2, },
                                                 print(ident("x"))], };
        let execution = evaluate(&program).unwrap();
        assert_eq!(execution.output, ["0"]);
        assert_eq!(execution.bindings.get("x"), Some(0));
    }

    #[test]
    fn unknown_variable_is_a_runtime_error() {
        let program = Program { statements: vec![print(ident("ghost"))] };
        assert_eq!(evaluate(&program),
                   Err(RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                                       line: 1, }));
    }

    #[test]
    fn failure_discards_earlier_output() {
        let division = Expr::BinaryOp { left:  Box::new(number(1)),
                                        op:    BinaryOperator::Div,
                                        right: Box::new(number(0)),
                                        line:  2, };
        let program = Program { statements: vec![print(number(1)), print(division)] };
        assert_eq!(evaluate(&program),
                   Err(RuntimeError::DivisionByZero { line: 2 }));
    }

    #[test]
    fn text_is_printed_verbatim() {
        let program =
            Program { statements: vec![Statement::Print { value: PrintArgument::Text("  a  b ".to_string()),
                                                          line:  1, }], };
        assert_eq!(evaluate(&program).unwrap().output, ["  a  b "]);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let program = Program { statements: vec![Statement::Declaration { name: "n".to_string(),
                                                                          line: 1, },
                                                 print(ident("n"))], };
        assert_eq!(evaluate(&program), evaluate(&program));
    }
}
