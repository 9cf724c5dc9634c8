// Evaluation engine for the RPN calculator

use crate::calculator::constants::{BATCH_END_BANNER, BATCH_SEPARATOR, BATCH_START_BANNER};
use crate::calculator::errors::EvalError;
use crate::calculator::format::format_number;
use crate::calculator::registry::{Operator, Registry};
use crate::history::{History, Transcript};
use crate::memory::stack::OperandStack;
use crate::parser::{classify, tokenize, Token};
use tracing::{debug, info, trace, warn};

/// A calculator session
///
/// Owns the operand stack, the expression history and the output transcript.
/// All three live as long as the session and are never shared, so callers
/// evaluating from several threads must serialize access themselves.
pub struct Calculator {
    /// Operand stack shared by every expression in the session
    stack: OperandStack,

    /// Every expression ever submitted, successful or not
    history: History,

    /// Display output from stack commands and batch runs
    transcript: Transcript,

    /// Token spelling -> operator
    registry: Registry,
}

impl Calculator {
    /// Create a session with an empty stack and history
    pub fn new() -> Self {
        Calculator {
            stack: OperandStack::new(),
            history: History::new(),
            transcript: Transcript::new(),
            registry: Registry::new(),
        }
    }

    /// Evaluate one expression and return the value left on top of the stack
    ///
    /// The expression is recorded in the history before any token runs. The
    /// first failing token aborts the rest of the line; whatever earlier tokens
    /// did to the stack stays done.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        self.history.record(expression);
        debug!(expression, depth = self.stack.len(), "evaluating");

        let result = self.run_tokens(expression);
        match &result {
            Ok(value) => debug!(value, depth = self.stack.len(), "evaluated"),
            Err(e) => warn!(expression, kind = e.kind(), error = %e, "evaluation failed"),
        }
        result
    }

    fn run_tokens(&mut self, expression: &str) -> Result<f64, EvalError> {
        for text in tokenize(expression) {
            trace!(token = text, depth = self.stack.len(), "dispatch");

            match classify(text, &self.registry) {
                Token::Number(value) => self.stack.push(value),
                Token::Operator(Operator::Binary(op)) => self.apply_binary(op)?,
                Token::Operator(Operator::Unary(op)) => self.apply_unary(op)?,
                Token::Operator(Operator::Command(cmd)) => self.run_command(cmd),
                Token::Invalid(token) => {
                    return Err(EvalError::InvalidToken {
                        token: token.to_string(),
                    })
                }
            }
        }

        if self.stack.is_empty() {
            return Err(EvalError::EmptyResult);
        }
        self.stack.peek_top()
    }

    /// Evaluate each expression independently, continuing past failures
    ///
    /// The stack carries over from one entry to the next. Progress and each
    /// outcome are written to the transcript; the returned results are in
    /// input order.
    pub fn process_batch<S: AsRef<str>>(
        &mut self,
        expressions: &[S],
    ) -> Vec<Result<f64, EvalError>> {
        info!(count = expressions.len(), "batch started");
        self.transcript.info(BATCH_START_BANNER);

        let mut results = Vec::with_capacity(expressions.len());
        for (i, expression) in expressions.iter().enumerate() {
            let expression = expression.as_ref();
            self.transcript
                .info(format!("Expression {}: {}", i + 1, expression));

            let result = self.evaluate(expression);
            match &result {
                Ok(value) => self
                    .transcript
                    .result(format!("Result: {}", format_number(*value))),
                Err(e) => self.transcript.error(format!("Error: {}", e)),
            }
            self.transcript.info(BATCH_SEPARATOR);
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(count = results.len(), failed, "batch complete");
        self.transcript.info(BATCH_END_BANNER);
        results
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// Stack contents, top first
    pub fn stack_snapshot(&self) -> Vec<f64> {
        self.stack.snapshot_top_to_bottom()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Mutable transcript access for shells that echo their own messages
    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub(crate) fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
