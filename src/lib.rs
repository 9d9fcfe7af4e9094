//! morsetree: decode morse code through a binary dash/dot lookup tree.
//!
//! Layers, innermost first:
//! - `domain`: the tree, symbols and codes (no I/O)
//! - `application`: definition loading, message decoding, session state
//! - `infrastructure`: filesystem seam
//! - `cli`: clap front end and interactive loop

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{decode_message, ApplicationError, DefinitionLoader, Session};
pub use domain::{Code, CodeFault, DomainError, MorseTree, Symbol};
