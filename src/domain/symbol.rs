//! Morse symbols and validated codes.

use std::fmt;

use crate::domain::error::{CodeFault, DomainError, DomainResult};

/// One Morse mark. Each symbol routes to exactly one branch of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `-`, routed to branch A
    Dash,
    /// `.`, routed to branch B
    Dot,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Symbol::Dash),
            '.' => Some(Symbol::Dot),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Dash => '-',
            Symbol::Dot => '.',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A non-empty sequence of symbols identifying one path from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Symbol>);

impl Code {
    /// Parse dash/dot text into a code.
    ///
    /// Rejects the empty string and any character outside `{'-', '.'}`.
    pub fn parse(text: &str) -> DomainResult<Self> {
        if text.is_empty() {
            return Err(DomainError::EmptyCode);
        }
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                Symbol::from_char(c).ok_or_else(|| {
                    DomainError::invalid(
                        text,
                        CodeFault::InvalidSymbol {
                            symbol: c,
                            position,
                        },
                    )
                })
            })
            .collect::<DomainResult<Vec<_>>>()
            .map(Code)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of symbols, always at least one.
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Code(symbols)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
