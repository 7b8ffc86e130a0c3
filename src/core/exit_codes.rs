//! Process exit codes.
//!
//! Application codes live in [`ExitCode`]. Codes whose meaning is fixed by
//! shell or signal conventions are listed by [`reserved_reason`] and must
//! never be assigned to an application condition.
//!
//! See: <https://tldp.org/LDP/abs/html/exitcodes.html>

use std::fmt;

/// Known application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Generic = 1,
    DependencyNotFound = 3,
    InvalidArgument = 4,
    FileSystem = 5,
    TokenRequired = 64,
}

impl ExitCode {
    /// Every known exit code.
    pub const ALL: [ExitCode; 6] = [
        ExitCode::Success,
        ExitCode::Generic,
        ExitCode::DependencyNotFound,
        ExitCode::InvalidArgument,
        ExitCode::FileSystem,
        ExitCode::TokenRequired,
    ];

    /// Numeric process exit status.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Symbolic name of the code.
    pub const fn name(self) -> &'static str {
        match self {
            ExitCode::Success => "SUCCESS",
            ExitCode::Generic => "ERROR_GENERIC",
            ExitCode::DependencyNotFound => "ERROR_DEPENDENCY_NOT_FOUND",
            ExitCode::InvalidArgument => "ERROR_INVALID_ARGUMENT",
            ExitCode::FileSystem => "ERROR_FILESYSTEM",
            ExitCode::TokenRequired => "ERROR_GITHUB_TOKEN_REQUIRED",
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code.code()
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Reason a code is reserved, or `None` if the application may use it.
pub const fn reserved_reason(code: u8) -> Option<&'static str> {
    match code {
        2 => Some("Misuse of shell built-ins"),
        126 => Some("Command invoked cannot execute"),
        127 => Some("Command not found"),
        128 => Some("Invalid argument to exit"),
        129..=165 => Some("Signal exit code"),
        255 => Some("Exit status out of range"),
        _ => None,
    }
}

/// Whether `code` is reserved.
pub const fn is_reserved(code: u8) -> bool {
    reserved_reason(code).is_some()
}

/// All reserved codes with their reasons, in ascending order.
pub fn reserved_codes() -> impl Iterator<Item = (u8, &'static str)> {
    (0..=u8::MAX).filter_map(|code| reserved_reason(code).map(|reason| (code, reason)))
}

// Known codes must be unique and must not collide with reserved ones.
const _: () = {
    let all = ExitCode::ALL;
    let mut i = 0;
    while i < all.len() {
        assert!(
            !is_reserved(all[i] as u8),
            "known exit code collides with a reserved code"
        );
        let mut j = i + 1;
        while j < all.len() {
            assert!(all[i] as u8 != all[j] as u8, "duplicate exit code");
            j += 1;
        }
        i += 1;
    }
};
