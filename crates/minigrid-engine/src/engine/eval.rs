//! Expression evaluation.
//!
//! Expressions are folded strictly left to right with no operator
//! precedence: `4-2+6/2` is `((4-2)+6)/2 = 4`. The fold is written as a
//! right-to-left descent over the token list (last operand, then the
//! operator before it, then the prefix).
//!
//! Cell references are resolved on demand. A referenced expression cell is
//! evaluated the first time it is needed and its result stored in the
//! computed map, which doubles as the memo for the rest of the pass.

use log::{debug, trace};

use super::cycle::EvalStack;
use super::token::{Token, normalize, tokenize};
use super::{Cell, CellKind, CellRef, EvalError, Grid};

/// Borrows a table's raw and computed maps for the duration of one pass.
pub(crate) struct Evaluator<'a> {
    raw: &'a Grid,
    computed: &'a mut Grid,
    stack: EvalStack,
    pub(crate) evaluations: usize,
    pub(crate) failures: usize,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(raw: &'a Grid, computed: &'a mut Grid) -> Self {
        Evaluator {
            raw,
            computed,
            stack: EvalStack::new(),
            evaluations: 0,
            failures: 0,
        }
    }

    pub(crate) fn is_computed(&self, cell_ref: &CellRef) -> bool {
        self.computed.contains_key(cell_ref)
    }

    /// Evaluate `expression` for the cell at `address` and store the outcome
    /// there: a number cell on success, an error cell carrying the failure
    /// message otherwise. The failure is still returned to the caller.
    pub(crate) fn evaluate_and_store(
        &mut self,
        address: CellRef,
        expression: &str,
    ) -> Result<i64, EvalError> {
        self.evaluations += 1;
        let entered = self.stack.enter(address);
        debug_assert!(entered, "{} evaluated while already on the stack", address);
        let result = self.eval_tokens(&tokenize(expression));
        self.stack.leave(&address);

        match result {
            Ok(value) => {
                trace!("{} = {} -> {}", address, expression, value);
                self.computed.insert(address, Cell::number(address, value));
                Ok(value)
            }
            Err(err) => {
                debug!("{} = {} failed: {}", address, expression, err);
                self.failures += 1;
                self.computed
                    .insert(address, Cell::error(address, err.to_string()));
                Err(err)
            }
        }
    }

    fn eval_tokens(&mut self, tokens: &[&str]) -> Result<i64, EvalError> {
        let Some((last, rest)) = tokens.split_last() else {
            return Err(EvalError::UnfinishedExpression);
        };
        let rhs = self.operand(last)?;

        let Some((op, rest)) = rest.split_last() else {
            return Ok(rhs);
        };
        let op = match Token::classify(op)? {
            Token::Operator(op) => op,
            _ => return Err(EvalError::UnknownToken(op.to_string())),
        };
        let lhs = self.eval_tokens(rest)?;

        trace!("{} {} {}", lhs, op, rhs);
        op.apply(lhs, rhs)
    }

    fn operand(&mut self, lexeme: &str) -> Result<i64, EvalError> {
        match Token::classify(lexeme)? {
            Token::Number(n) => Ok(n),
            Token::Reference(cell_ref) => self.resolve_cell(cell_ref),
            Token::Operator(_) => Err(EvalError::NotEnoughOperands),
        }
    }

    fn resolve_cell(&mut self, cell_ref: CellRef) -> Result<i64, EvalError> {
        let raw = self.raw;
        let Some(raw_cell) = raw.get(&cell_ref) else {
            return Err(EvalError::UndefinedCell(cell_ref.to_string()));
        };

        let cell = match self.computed.get(&cell_ref) {
            Some(computed) => {
                trace!("memo hit for {}", cell_ref);
                computed
            }
            None => raw_cell,
        };

        let expression = match cell.kind() {
            CellKind::Number(n) => return Ok(*n),
            CellKind::Text(_) => return Err(EvalError::TextInExpression(cell_ref)),
            CellKind::Error(_) => return Err(EvalError::Propagated(cell_ref)),
            CellKind::Expression(source) => normalize(source),
        };

        if self.stack.contains(&cell_ref) {
            debug!(
                "circular reference to {} via {:?}",
                cell_ref,
                self.stack.path()
            );
            return Err(EvalError::CircularReference(cell_ref));
        }

        match self.evaluate_and_store(cell_ref, &expression) {
            Ok(value) => Ok(value),
            // Still inside the cycle: let every cell on it report the cycle.
            Err(EvalError::CircularReference(origin)) if origin != cell_ref => {
                Err(EvalError::CircularReference(origin))
            }
            Err(_) => Err(EvalError::Propagated(cell_ref)),
        }
    }
}
