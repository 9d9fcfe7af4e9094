//! Domain layer: the morse tree and its symbols
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod render;
pub mod symbol;
pub mod tree;

pub use error::{CodeFault, DomainError, DomainResult};
pub use render::TreeNodeConvert;
pub use symbol::{Code, Symbol};
pub use tree::{Bindings, MorseNode, MorseTree};
