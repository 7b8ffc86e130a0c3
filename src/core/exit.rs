//! Process termination.
//!
//! An [`Exit`] is the final outcome of a command: a code and an optional
//! message. Business logic returns errors; only `main` turns the outcome into
//! an actual process exit via [`Exit::terminate`].

use std::io::{self, Write};

use tracing::debug;

use crate::core::exit_codes::{is_reserved, ExitCode};
use crate::error::Error;

/// Prefix for messages written with a non-zero exit code.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Final process outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Exit {
    code: u8,
    message: Option<String>,
}

impl Exit {
    /// Successful exit without a message.
    pub fn success() -> Self {
        Self::default()
    }

    /// Exit with `code` (success if `None`) and an optional message.
    pub fn new(code: Option<u8>, message: Option<&str>) -> Self {
        Self {
            code: code.unwrap_or(ExitCode::Success.code()),
            message: message.map(str::to_string),
        }
    }

    /// Exit with an arbitrary status code.
    pub fn with_code(code: impl Into<u8>) -> Self {
        Self {
            code: code.into(),
            message: None,
        }
    }

    /// Attach a message shown on exit.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    /// Write the warning and message for this exit. An empty message is
    /// treated as no message.
    ///
    /// Returns `true` if a reserved-code warning was written.
    pub fn report<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<bool> {
        let reserved = is_reserved(self.code);
        if reserved {
            writeln!(err, "WARNING: Use of reserved exit code: {}", self.code)?;
        }

        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            if self.code == ExitCode::Success.code() {
                writeln!(out, "{}", message)?;
            } else {
                writeln!(err, "{}{}", ERROR_PREFIX, message)?;
            }
        }

        out.flush()?;
        err.flush()?;
        Ok(reserved)
    }

    /// Report and terminate the process. Never returns.
    pub fn terminate(self) -> ! {
        debug!(code = self.code, "exiting");
        let stdout = io::stdout();
        let stderr = io::stderr();
        // Nothing sensible remains to be done if the terminal is gone.
        let _ = self.report(&mut stdout.lock(), &mut stderr.lock());
        std::process::exit(i32::from(self.code))
    }
}

impl From<ExitCode> for Exit {
    fn from(code: ExitCode) -> Self {
        Self::with_code(code)
    }
}

impl From<&Error> for Exit {
    fn from(error: &Error) -> Self {
        Self::with_code(error.exit_code()).message(error.to_string())
    }
}

/// Terminate with `code` (success if `None`) and an optional message.
pub fn terminate(code: Option<u8>, message: Option<&str>) -> ! {
    Exit::new(code, message).terminate()
}
