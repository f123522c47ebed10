use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::checked_floor_div,
};

impl Context {
    /// Evaluates a binary operation between two integers.
    ///
    /// Addition, subtraction and multiplication are checked for overflow.
    /// Division rounds toward negative infinity and fails on a zero divisor.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use scoobylang::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, 2, 1), Ok(3));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2, 1), Ok(-4));
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        match op {
            BinaryOperator::Add => left.checked_add(right).ok_or(RuntimeError::Overflow { line }),
            BinaryOperator::Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow { line }),
            BinaryOperator::Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow { line }),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                checked_floor_div(left, right).ok_or(RuntimeError::Overflow { line })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(Context::eval_binary(BinaryOperator::Add, 2, 3, 1), Ok(5));
        assert_eq!(Context::eval_binary(BinaryOperator::Sub, 2, 3, 1), Ok(-1));
        assert_eq!(Context::eval_binary(BinaryOperator::Mul, -4, 3, 1), Ok(-12));
    }

    #[test]
    fn division_floors() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, 2, 1), Ok(3));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2, 1), Ok(-4));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, -2, 1), Ok(-4));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, -2, 1), Ok(3));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -8, 2, 1), Ok(-4));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 5, 0, 4),
                   Err(RuntimeError::DivisionByZero { line: 4 }));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(Context::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 2),
                   Err(RuntimeError::Overflow { line: 2 }));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, i64::MIN, -1, 3),
                   Err(RuntimeError::Overflow { line: 3 }));
    }
}
