//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Why a code could not be used against the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeFault {
    #[error("'{symbol}' at position {position} is not a valid morse symbol, only use '.' and '-'")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("no code continues past depth {depth}")]
    DeadPath { depth: usize },

    #[error("no character is bound to this code")]
    Unassigned,
}

/// Domain errors are reported per call; the tree never aborts a batch itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("code {code} is already bound to '{existing}', cannot bind '{rejected}'")]
    DuplicateBinding {
        code: String,
        existing: char,
        rejected: char,
    },

    #[error("empty code")]
    EmptyCode,

    #[error("invalid code \"{code}\": {reason}")]
    InvalidCode { code: String, reason: CodeFault },
}

impl DomainError {
    pub(crate) fn invalid(code: &str, reason: CodeFault) -> Self {
        Self::InvalidCode {
            code: code.to_string(),
            reason,
        }
    }
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
