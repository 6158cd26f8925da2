use ariadne::Fmt;
use expresso_attrs::ErrorKind;
use expresso_error::{Error as ExprError, EXPR};
use std::io;

/// A command was entered before any expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "there is no expression to work on",
    labels = ["this command needs an expression"],
    help = format!("enter an expression first, such as {}", "4*(x*y + y*x)".fg(EXPR)),
)]
pub struct NoCurrentExpression;

/// The derivative command was entered without a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing variable to differentiate with respect to",
    labels = ["add a variable name after `d/d`"],
    help = format!("for example: {}", "!d/dx".fg(EXPR)),
)]
pub struct MissingDerivativeVariable;

/// The derivative command was entered with an invalid variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid variable name", self.name),
    labels = ["this variable"],
    help = format!("variable names consist of {} only", "letters".fg(EXPR)),
)]
pub struct InvalidDerivativeVariable {
    /// The rejected variable name.
    pub name: String,
}

/// The command is not recognized.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", self.command),
    labels = ["this command"],
    help = format!("the available commands are {} and {}", "!simplify".fg(EXPR), "!d/d<variable>".fg(EXPR)),
)]
pub struct UnknownCommand {
    /// The command, without the leading `!`.
    pub command: String,
}

/// Utility enum to package errors that can occur while handling a line of input, together with
/// the source text their spans refer to.
#[derive(Debug)]
pub enum Error {
    /// The line could not be parsed as an expression.
    Parse {
        /// The line that was entered.
        line: String,
        err: ExprError,
    },

    /// The line was a command that could not be run.
    Command {
        /// The line that was entered.
        line: String,
        err: ExprError,
    },

    /// The current expression could not be simplified or differentiated.
    Compute {
        /// The current expression.
        expression: String,
        err: ExprError,
    },
}

impl Error {
    /// Returns the source id and source text that the spans of the error refer to.
    fn source(&self) -> (&'static str, &str) {
        match self {
            Self::Parse { line, .. } | Self::Command { line, .. } => ("input", line),
            Self::Compute { expression, .. } => ("expression", expression),
        }
    }

    /// Returns the inner error.
    pub fn inner(&self) -> &ExprError {
        match self {
            Self::Parse { err, .. } | Self::Command { err, .. } | Self::Compute { err, .. } => err,
        }
    }

    /// Writes the report of this error to the given writer.
    pub fn write_report(&self, w: impl io::Write) -> io::Result<()> {
        let (src_id, source) = self.source();
        self.inner().write_report(src_id, source, w)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self) -> io::Result<()> {
        let (src_id, source) = self.source();
        self.inner().report_to_stderr(src_id, source)
    }
}
