//! Infrastructure layer: I/O implementations
//!
//! This layer implements I/O boundary traits.

pub mod error;
pub mod traits;

pub use error::InfraError;
pub use traits::{FileSystem, RealFileSystem};
