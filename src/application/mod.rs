//! Application layer: loading definitions, decoding messages, session state
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod loader;
pub mod message;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{
    build_tree, load_definitions, parse_definitions, standard_definitions_text, standard_tree,
    Definition, DefinitionLoader, STANDARD_DEFINITIONS,
};
pub use message::decode_message;
pub use session::Session;
