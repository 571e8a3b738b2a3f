// src/exit.rs
//! Standardized process exit codes for `mutuals`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::MutualsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MutualsExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, malformed snapshot, bad config).
    Error = 1,
    /// A user id was rejected before any recommendation ran.
    InvalidInput = 2,
}

impl MutualsExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for MutualsExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&MutualsError> for MutualsExit {
    fn from(err: &MutualsError) -> Self {
        match err {
            MutualsError::InvalidUserId(_) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}
