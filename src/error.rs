//! Error type for TOON decoding.
//!
//! All parse failures surface as a single [`DecodeError`] carrying a message
//! and the 1-based source line on which the problem was detected (0 when no
//! position applies, e.g. UTF-8 validation of a byte slice). The encoder
//! never fails for in-domain input: non-finite floats normalise to `null`.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, DecodeError};
//!
//! let result = decode("items[3]: 1,2");
//! let err = result.unwrap_err();
//! assert!(err.to_string().contains("length mismatch"));
//! assert_eq!(err.line(), 1);
//! ```

use thiserror::Error;

/// A TOON decode failure: what went wrong, and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line})")]
pub struct DecodeError {
    message: String,
    line: usize,
}

impl DecodeError {
    /// Creates an error at a 1-based source line.
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        DecodeError {
            message: message.into(),
            line,
        }
    }

    /// Creates an error with no usable source position (line 0).
    pub fn unpositioned(message: impl Into<String>) -> Self {
        Self::new(message, 0)
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The 1-based source line, or 0 when no position is available.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Attaches a line number to an error that was built without one.
    ///
    /// Leaves an already-positioned error untouched, so the innermost
    /// position wins.
    #[must_use]
    pub(crate) fn at_line(mut self, line: usize) -> Self {
        if self.line == 0 {
            self.line = line;
        }
        self
    }
}

/// Alias for `std::result::Result<T, DecodeError>`.
pub type Result<T> = std::result::Result<T, DecodeError>;
