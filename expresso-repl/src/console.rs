//! Line-by-line command handling for the interactive console.
//!
//! The console remembers one expression at a time. A line that is not a command replaces it; a
//! command works on it:
//!
//! - `!simplify` prints the canonical form of the current expression.
//! - `!d/d<variable>` prints the derivative of the current expression with respect to
//!   `<variable>`, and makes the derivative the current expression.

use crate::error::{
    Error,
    InvalidDerivativeVariable,
    MissingDerivativeVariable,
    NoCurrentExpression,
    UnknownCommand,
};
use expresso_compute::{
    differentiate_with,
    parse,
    simplify_with,
    symbolic::expr::is_variable_name,
    Options,
};
use expresso_error::{Error as ExprError, ErrorKind};
use log::{debug, info};
use std::ops::Range;

/// The interactive console state.
#[derive(Debug, Clone, Default)]
pub struct Console {
    /// The current expression, or an empty string if none has been entered yet.
    current: String,

    /// Limits applied to every computation.
    options: Options,
}

impl Console {
    /// Creates a new console with no current expression.
    pub fn new(options: Options) -> Self {
        Self {
            current: String::new(),
            options,
        }
    }

    /// Returns the current expression, or an empty string if there is none.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Handles one line of input, returning the text to print, if any.
    ///
    /// Blank lines are ignored. If the line is an expression that fails to parse, the current
    /// expression is kept.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, Error> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let start = line.len() - line.trim_start().len();
        if let Some(command) = trimmed.strip_prefix('!') {
            let span = start..start + trimmed.len();
            return self.run_command(line, command, span).map(Some);
        }

        if let Err(err) = parse(line, &self.options) {
            return Err(Error::Parse { line: line.to_owned(), err });
        }

        self.current = line.to_owned();
        info!("current expression: {}", self.current);
        Ok(Some(line.chars().filter(|c| !c.is_whitespace()).collect()))
    }

    /// Runs a command on the current expression. `span` is the region of `line` holding the
    /// command, including the `!`.
    fn run_command(
        &mut self,
        line: &str,
        command: &str,
        span: Range<usize>,
    ) -> Result<String, Error> {
        if self.current.is_empty() {
            return Err(command_error(line, span, NoCurrentExpression));
        }

        debug!("running command `{}`", command);
        if command == "simplify" {
            return simplify_with(&self.current, &self.options)
                .map_err(|err| self.compute_error(err));
        }

        let Some(variable) = command.strip_prefix("d/d") else {
            return Err(command_error(line, span, UnknownCommand { command: command.to_owned() }));
        };

        if variable.is_empty() {
            return Err(command_error(line, span, MissingDerivativeVariable));
        }

        if !is_variable_name(variable) {
            let variable_span = span.end - variable.len()..span.end;
            return Err(command_error(line, variable_span, InvalidDerivativeVariable {
                name: variable.to_owned(),
            }));
        }

        let derivative = differentiate_with(&self.current, variable, &self.options)
            .map_err(|err| self.compute_error(err))?;
        self.current = derivative.clone();
        info!("current expression: {}", self.current);
        Ok(derivative)
    }

    /// Wraps an error raised while computing with the current expression.
    fn compute_error(&self, err: ExprError) -> Error {
        Error::Compute { expression: self.current.clone(), err }
    }
}

/// Creates an error for a malformed command, pointing at `span` in `line`.
fn command_error(line: &str, span: Range<usize>, kind: impl ErrorKind + 'static) -> Error {
    Error::Command {
        line: line.to_owned(),
        err: ExprError::new(vec![span], kind),
    }
}
